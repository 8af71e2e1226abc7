use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// The kind of constraint a field violated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Constraint {
    NotNull,
    Length,
    Choice,
    Language,
    Rsin,
    Url,
    WriteOnce,
}

impl Constraint {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotNull => "not_null",
            Self::Length => "length",
            Self::Choice => "choice",
            Self::Language => "language",
            Self::Rsin => "rsin",
            Self::Url => "url",
            Self::WriteOnce => "write_once",
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub constraint: Constraint,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: &str, constraint: Constraint, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            constraint,
            message: message.into(),
        }
    }
}

/// Every violation found while validating one input
#[derive(Error, Debug, Clone, Default, PartialEq, Eq)]
#[error("Validation failed: {} violation(s)", .violations.len())]
pub struct ValidationErrors {
    violations: Vec<FieldViolation>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(violation: FieldViolation) -> Self {
        Self {
            violations: vec![violation],
        }
    }

    pub fn push(&mut self, field: &str, constraint: Constraint, message: impl Into<String>) {
        self.violations
            .push(FieldViolation::new(field, constraint, message));
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    pub fn into_violations(self) -> Vec<FieldViolation> {
        self.violations
    }

    /// Whether any violation was recorded for `field`
    pub fn has_field(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }
}
