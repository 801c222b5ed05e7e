//! # Behavioral Patterns
//!
//! How objects communicate and split responsibilities:
//! command, strategy, mediator, template method, memento, observer,
//! iterator, state, chain of responsibility and visitor.

pub mod chain;
pub mod command;
pub mod iterator;
pub mod mediator;
pub mod memento;
pub mod observer;
pub mod state;
pub mod strategy;
pub mod template_method;
pub mod visitor;
