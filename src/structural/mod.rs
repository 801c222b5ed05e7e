//! # Structural Patterns
//!
//! Adapter, bridge, composite, decorator, facade, proxy and flyweight.

pub mod adapter;
pub mod bridge;
pub mod composite;
pub mod decorator;
pub mod facade;
pub mod flyweight;
pub mod proxy;
