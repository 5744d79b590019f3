//! Error handling for the Briscola engine.

pub mod domain;

pub use domain::{DomainError, ValidationKind};
