// Gang-of-Four Design Patterns Catalog
// Every pattern is a small scenario that writes into a Transcript.

//! # Gang-of-Four Patterns
//!
//! This crate provides runnable scenarios for:
//!
//! ## Creational Patterns
//! - Factory Method (selector enum, exhaustive match)
//! - Abstract Factory (brand families, enum of factories)
//! - Prototype (Clone, prototype registry)
//! - Builder (consuming builder, typed incomplete result)
//! - Singleton (guarded lazy cell with reset hook)
//!
//! ## Structural Patterns
//! - Adapter, Bridge, Composite, Decorator
//! - Facade, Proxy (access + virtual), Flyweight (shared pool)
//!
//! ## Behavioral Patterns
//! - Command (undo), Strategy, Mediator, Template Method
//! - Memento, Observer (handles), Iterator, State (transition table)
//! - Chain of Responsibility, Visitor
//!
//! Run the scenarios with:
//! ```bash
//! cargo run --bin catalog -- --list
//! cargo run --bin catalog -- observer template-method
//! ```

pub mod behavioral;
pub mod catalog;
pub mod config;
pub mod creational;
pub mod error;
pub mod harness;
pub mod structural;
pub mod transcript;

pub use catalog::{Family, Pattern};
pub use config::Cli;
pub use error::{CatalogError, Result};
pub use harness::{Harness, Outcome, RunReport, ScenarioReport};
pub use transcript::Transcript;
