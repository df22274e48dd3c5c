//! Domain types for the campaign plugin.
//!
//! Everything here is pure logic with no database access: identifier
//! aliases, the error taxonomy, reference lists, and the declarative
//! field validation engine.

pub mod error;
pub mod reference;
pub mod types;
pub mod validation;
