//! Validation rule and result types.

use serde::{Deserialize, Serialize};

/// A single field-level constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Constraint {
    /// Value must be present, non-null, and (for strings) non-empty.
    Required,
    /// String length in characters must not exceed the bound. Null passes.
    MaxLength(usize),
    /// Value must be present and non-null. Empty strings pass.
    NotNull,
}

/// One row of a validation schema: a field, its constraint, and the
/// i18n message key reported when the constraint fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub field: &'static str,
    pub constraint: Constraint,
    pub message: &'static str,
}

impl FieldRule {
    pub const fn required(field: &'static str, message: &'static str) -> Self {
        Self {
            field,
            constraint: Constraint::Required,
            message,
        }
    }

    pub const fn max_length(field: &'static str, max: usize, message: &'static str) -> Self {
        Self {
            field,
            constraint: Constraint::MaxLength(max),
            message,
        }
    }

    pub const fn not_null(field: &'static str, message: &'static str) -> Self {
        Self {
            field,
            constraint: Constraint::NotNull,
            message,
        }
    }
}

/// Aggregated result of evaluating all rules against one record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<FieldViolation>,
}

impl ValidationResult {
    /// Names of the fields that failed, in rule order. A field appears once
    /// per failing rule.
    pub fn failed_fields(&self) -> Vec<&str> {
        self.errors.iter().map(|v| v.field.as_str()).collect()
    }
}

/// A single field-level rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    pub field: String,
    pub constraint: Constraint,
    pub message: String,
}
