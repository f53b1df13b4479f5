//! # Error Types
//!
//! Registration has exactly one user-facing failure kind: a field
//! validation failure, parameterized by the field and the reason.
//! Failures accumulate into [`ValidationErrors`] in reporting order and
//! are always recoverable by correcting the field and resubmitting.
//!
//! [`SregError`] covers programmatic parse failures of the core
//! vocabulary and never reaches an end user.

use serde::Serialize;
use thiserror::Error;

use crate::field::Field;

/// Error parsing core vocabulary from strings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SregError {
    /// Not one of the six validated form field names.
    #[error("unknown form field: {0:?}")]
    UnknownField(String),

    /// Not one of the accepted gender radio values.
    #[error("unknown gender option: {0:?}")]
    UnknownGender(String),
}

/// Why a field failed its rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureReason {
    /// Fewer characters than required.
    TooShort,
    /// Does not have the required shape.
    Malformed,
    /// Wrong number of digits.
    WrongLength,
    /// No option, or no accepted option, was selected.
    MissingSelection,
    /// Required checkbox was not checked.
    Unchecked,
}

/// A single field validation failure.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("{message}")]
pub struct FieldError {
    /// The failing field.
    pub field: Field,
    /// Failure category.
    pub reason: FailureReason,
    /// User-facing message from the rule table.
    pub message: &'static str,
}

/// Every failure of one validation pass, in field reporting order.
#[derive(Error, Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[error("{} field(s) failed validation", .errors.len())]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    /// Wrap an ordered list of failures.
    pub fn new(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Iterate failures in reporting order.
    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.errors.iter()
    }

    /// User-facing messages in reporting order.
    pub fn messages(&self) -> Vec<&'static str> {
        self.errors.iter().map(|e| e.message).collect()
    }

    /// Fields that failed, in reporting order.
    pub fn fields(&self) -> Vec<Field> {
        self.errors.iter().map(|e| e.field).collect()
    }
}

impl From<FieldError> for ValidationErrors {
    fn from(err: FieldError) -> Self {
        Self { errors: vec![err] }
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}
