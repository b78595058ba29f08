//! Field identifiers and values.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FormError;

/// A validated text field of the registration form.
///
/// The declaration order is the focus priority order: when several fields
/// are invalid, the earliest one wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextField {
    /// Display name of the user.
    Name,
    /// Contact email.
    Email,
    /// Account password.
    Password,
    /// Free-form comment.
    Comment,
}

impl TextField {
    /// All text fields in priority order.
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Password, Self::Comment];

    /// Returns the field key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Password => "password",
            Self::Comment => "comment",
        }
    }
}

impl fmt::Display for TextField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Any field of the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Password,
    Comment,
    /// Newsletter subscription switch. Never validated.
    Subscribe,
}

impl Field {
    /// All fields in form order.
    pub const ALL: [Self; 5] = [
        Self::Name,
        Self::Email,
        Self::Password,
        Self::Subscribe,
        Self::Comment,
    ];

    /// Returns the field key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Subscribe => "subscribe",
            Self::Name => TextField::Name.as_str(),
            Self::Email => TextField::Email.as_str(),
            Self::Password => TextField::Password.as_str(),
            Self::Comment => TextField::Comment.as_str(),
        }
    }

    /// Returns the text field this refers to, or `None` for `subscribe`.
    #[must_use]
    pub const fn as_text(self) -> Option<TextField> {
        match self {
            Self::Name => Some(TextField::Name),
            Self::Email => Some(TextField::Email),
            Self::Password => Some(TextField::Password),
            Self::Comment => Some(TextField::Comment),
            Self::Subscribe => None,
        }
    }
}

impl From<TextField> for Field {
    fn from(field: TextField) -> Self {
        match field {
            TextField::Name => Self::Name,
            TextField::Email => Self::Email,
            TextField::Password => Self::Password,
            TextField::Comment => Self::Comment,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Self::ALL
            .into_iter()
            .find(|field| field.as_str().eq_ignore_ascii_case(key))
            .ok_or_else(|| FormError::UnknownField(key.to_string()))
    }
}

/// A value for a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

impl FieldValue {
    /// Parses a switch value such as `yes`, `off` or `true`.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::InvalidFlag`] for any other input.
    pub fn parse_flag(raw: &str) -> crate::Result<bool> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "yes" | "y" | "on" | "true" | "1" => Ok(true),
            "no" | "n" | "off" | "false" | "0" => Ok(false),
            _ => Err(FormError::InvalidFlag(raw.trim().to_string())),
        }
    }

    /// Returns a short name of the value kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Flag(_) => "flag",
        }
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}
