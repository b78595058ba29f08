//! Field validators.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Unanchored: any `x@y.z` run of non-whitespace inside the value is accepted.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid"));

/// The kind of rule a field value violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldError {
    /// The value is empty.
    Required,
    /// The value has fewer than `min` characters.
    TooShort { min: usize },
    /// The value does not look like an email address.
    InvalidFormat,
    /// The value has more than `max` characters.
    TooLong { max: usize },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Required => "required",
            Self::TooShort { .. } => "too short",
            Self::InvalidFormat => "invalid format",
            Self::TooLong { .. } => "too long",
        })
    }
}

/// Trait for field validators.
pub trait Validator: Send + Sync {
    /// Validates a value and returns the violated rule if invalid.
    fn validate(&self, value: &str) -> Result<(), FieldError>;

    /// Returns the error this validator reports.
    fn error(&self) -> FieldError;
}

/// Length of a value in UTF-16 code units.
///
/// Matches how mobile text inputs count: one unit per BMP character, two for
/// characters such as emoji.
#[must_use]
pub fn text_len(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Validator that requires a non-empty value.
///
/// Trimming is the field's concern; this checks the value as given.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequiredValidator;

impl RequiredValidator {
    /// Creates a new `RequiredValidator`.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Validator for RequiredValidator {
    fn validate(&self, value: &str) -> Result<(), FieldError> {
        if value.is_empty() {
            Err(self.error())
        } else {
            Ok(())
        }
    }

    fn error(&self) -> FieldError {
        FieldError::Required
    }
}

/// Validator that enforces a maximum length.
#[derive(Debug, Clone, Copy)]
pub struct MaxLengthValidator {
    max_length: usize,
}

impl MaxLengthValidator {
    /// Creates a new `MaxLengthValidator`.
    #[must_use]
    pub const fn new(max_length: usize) -> Self {
        Self { max_length }
    }
}

impl Validator for MaxLengthValidator {
    fn validate(&self, value: &str) -> Result<(), FieldError> {
        if text_len(value) > self.max_length {
            Err(self.error())
        } else {
            Ok(())
        }
    }

    fn error(&self) -> FieldError {
        FieldError::TooLong {
            max: self.max_length,
        }
    }
}

/// Validator that enforces a minimum length on non-empty values.
#[derive(Debug, Clone, Copy)]
pub struct MinLengthValidator {
    min_length: usize,
}

impl MinLengthValidator {
    /// Creates a new `MinLengthValidator`.
    #[must_use]
    pub const fn new(min_length: usize) -> Self {
        Self { min_length }
    }
}

impl Validator for MinLengthValidator {
    fn validate(&self, value: &str) -> Result<(), FieldError> {
        if !value.is_empty() && text_len(value) < self.min_length {
            Err(self.error())
        } else {
            Ok(())
        }
    }

    fn error(&self) -> FieldError {
        FieldError::TooShort {
            min: self.min_length,
        }
    }
}

/// Validator for email addresses. Empty values are left to `RequiredValidator`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailValidator;

impl EmailValidator {
    /// Creates a new `EmailValidator`.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Validator for EmailValidator {
    fn validate(&self, value: &str) -> Result<(), FieldError> {
        if value.is_empty() || EMAIL_PATTERN.is_match(value) {
            Ok(())
        } else {
            Err(self.error())
        }
    }

    fn error(&self) -> FieldError {
        FieldError::InvalidFormat
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_validator() {
        let v = RequiredValidator::new();
        assert!(v.validate("hello").is_ok());
        assert!(v.validate(" ").is_ok());
        assert_eq!(v.validate(""), Err(FieldError::Required));
    }

    #[test]
    fn test_max_length_validator() {
        let v = MaxLengthValidator::new(5);
        assert!(v.validate("hello").is_ok());
        assert!(v.validate("").is_ok());
        assert_eq!(
            v.validate("hello world"),
            Err(FieldError::TooLong { max: 5 })
        );
    }

    #[test]
    fn test_min_length_validator() {
        let v = MinLengthValidator::new(5);
        assert!(v.validate("hello").is_ok());
        assert!(v.validate("").is_ok());
        assert_eq!(v.validate("hi"), Err(FieldError::TooShort { min: 5 }));
    }

    #[test]
    fn test_length_counts_characters() {
        // 2 Cyrillic letters are 4 bytes
        assert!(MinLengthValidator::new(2).validate("Ян").is_ok());
        assert!(MaxLengthValidator::new(2).validate("Ян").is_ok());
    }

    #[test]
    fn test_length_counts_utf16_units() {
        assert_eq!(text_len("Anna"), 4);
        assert_eq!(text_len("Ян"), 2);
        assert_eq!(text_len("😀😀😀"), 6);

        assert!(MinLengthValidator::new(6).validate("😀😀😀").is_ok());
        assert_eq!(
            MinLengthValidator::new(6).validate("😀😀"),
            Err(FieldError::TooShort { min: 6 })
        );
        assert_eq!(
            MaxLengthValidator::new(5).validate("😀😀😀"),
            Err(FieldError::TooLong { max: 5 })
        );
    }

    #[test]
    fn test_email_validator() {
        let v = EmailValidator::new();
        assert!(v.validate("user@example.com").is_ok());
        assert!(v.validate("a@b.co").is_ok());
        assert!(v.validate("say a@b.c please").is_ok());
        assert_eq!(v.validate("bad"), Err(FieldError::InvalidFormat));
        assert_eq!(v.validate("user@example"), Err(FieldError::InvalidFormat));
        assert_eq!(v.validate("@example.com"), Err(FieldError::InvalidFormat));
        assert_eq!(v.validate("a @b.c"), Err(FieldError::InvalidFormat));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(FieldError::Required.to_string(), "required");
        assert_eq!(FieldError::TooShort { min: 2 }.to_string(), "too short");
        assert_eq!(FieldError::InvalidFormat.to_string(), "invalid format");
        assert_eq!(FieldError::TooLong { max: 200 }.to_string(), "too long");
    }
}
