//! Error types for forms.

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

use crate::field::{Field, TextField};
use crate::validation::FieldError;

/// Errors raised when untyped input cannot be mapped onto the form.
///
/// Validation failures are never reported through this type; they live in
/// [`ErrorMap`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    /// No field with this name exists.
    #[error("unknown field: {0}")]
    UnknownField(String),

    /// The value for the subscribe switch is not a recognised flag.
    #[error("invalid switch value: {0} (expected yes or no)")]
    InvalidFlag(String),

    /// The value kind does not match the field.
    #[error("field {field} expects a {expected} value, got {actual}")]
    KindMismatch {
        field: Field,
        expected: &'static str,
        actual: &'static str,
    },

    /// No message catalog exists for this locale.
    #[error("unknown locale: {0}")]
    UnknownLocale(String),
}

/// Validation errors by field, at most one per field.
///
/// Iteration follows the field priority order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorMap {
    errors: BTreeMap<TextField, FieldError>,
}

impl ErrorMap {
    /// Creates a new empty `ErrorMap`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the error for a field, replacing any earlier one.
    pub fn insert(&mut self, field: TextField, error: FieldError) {
        self.errors.insert(field, error);
    }

    /// Returns whether there are any errors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of fields with errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns the error for a specific field.
    #[must_use]
    pub fn get(&self, field: TextField) -> Option<FieldError> {
        self.errors.get(&field).copied()
    }

    /// Returns whether a field has an error.
    #[must_use]
    pub fn contains(&self, field: TextField) -> bool {
        self.errors.contains_key(&field)
    }

    /// Returns the English message for a field, if it has an error.
    #[must_use]
    pub fn message(&self, field: TextField) -> Option<String> {
        self.get(field).map(|error| error.to_string())
    }

    /// Returns the highest-priority field with an error.
    #[must_use]
    pub fn first_invalid(&self) -> Option<TextField> {
        self.errors.keys().next().copied()
    }

    /// Iterates over errors in priority order.
    pub fn iter(&self) -> impl Iterator<Item = (TextField, FieldError)> + '_ {
        self.errors.iter().map(|(field, error)| (*field, *error))
    }

    pub(crate) fn clear(&mut self) {
        self.errors.clear();
    }
}

impl FromIterator<(TextField, FieldError)> for ErrorMap {
    fn from_iter<I: IntoIterator<Item = (TextField, FieldError)>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl std::fmt::Display for ErrorMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (field, error) in self.iter() {
            writeln!(f, "{field}: {error}")?;
        }
        Ok(())
    }
}

/// Result type alias for form operations.
pub type Result<T> = std::result::Result<T, FormError>;
