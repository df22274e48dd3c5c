//! Rule evaluator. Pure logic, no database access.

use serde::Serialize;
use serde_json::Value;

use super::rules::{Constraint, FieldRule, FieldViolation, ValidationResult};
use crate::error::CoreError;

/// Evaluate all rules against a single data record.
pub fn evaluate_rules(rules: &[FieldRule], data: &serde_json::Map<String, Value>) -> ValidationResult {
    let errors: Vec<FieldViolation> = rules
        .iter()
        .filter_map(|rule| evaluate_single_rule(rule, data.get(rule.field)))
        .collect();

    ValidationResult {
        is_valid: errors.is_empty(),
        errors,
    }
}

/// Serialize `record` and evaluate `rules` against its fields.
///
/// Fails with `CoreError::Internal` only if the record does not serialize
/// to a JSON object.
pub fn validate<T: Serialize>(record: &T, rules: &[FieldRule]) -> Result<ValidationResult, CoreError> {
    match serde_json::to_value(record) {
        Ok(Value::Object(map)) => Ok(evaluate_rules(rules, &map)),
        Ok(other) => Err(CoreError::Internal(format!(
            "expected a record object for validation, got {other}"
        ))),
        Err(e) => Err(CoreError::Internal(format!(
            "failed to serialize record for validation: {e}"
        ))),
    }
}

fn evaluate_single_rule(rule: &FieldRule, value: Option<&Value>) -> Option<FieldViolation> {
    let failed = match rule.constraint {
        Constraint::Required => is_missing(value) || is_empty_string(value),
        Constraint::NotNull => is_missing(value),
        Constraint::MaxLength(max) => value
            .and_then(Value::as_str)
            .is_some_and(|s| s.chars().count() > max),
    };

    failed.then(|| FieldViolation {
        field: rule.field.to_string(),
        constraint: rule.constraint,
        message: rule.message.to_string(),
    })
}

fn is_missing(value: Option<&Value>) -> bool {
    matches!(value, None | Some(Value::Null))
}

fn is_empty_string(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::String(s)) if s.is_empty())
}
