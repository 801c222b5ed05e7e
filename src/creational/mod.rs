//! # Creational Patterns
//!
//! Factory method, abstract factory, prototype, builder and singleton.

pub mod abstract_factory;
pub mod builder;
pub mod factory_method;
pub mod prototype;
pub mod singleton;
