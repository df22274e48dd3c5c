//! Field validation engine.
//!
//! Constraints live in per-entity schema tables ([`schema`]) rather than on
//! the entity types. The evaluator applies a table to any serializable
//! record before it reaches storage.

pub mod evaluator;
pub mod rules;
pub mod schema;

pub use evaluator::{evaluate_rules, validate};
pub use rules::{Constraint, FieldRule, FieldViolation, ValidationResult};
