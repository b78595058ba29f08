//! Form values and the accepted registration snapshot.

use serde::{Deserialize, Serialize};

use crate::field::TextField;

/// Current values of all form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub password: String,
    pub comment: String,
    pub subscribe: bool,
}

impl FormState {
    /// Creates an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the raw value of a text field.
    #[must_use]
    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::Name => &self.name,
            TextField::Email => &self.email,
            TextField::Password => &self.password,
            TextField::Comment => &self.comment,
        }
    }

    pub(crate) fn text_mut(&mut self, field: TextField) -> &mut String {
        match field {
            TextField::Name => &mut self.name,
            TextField::Email => &mut self.email,
            TextField::Password => &mut self.password,
            TextField::Comment => &mut self.comment,
        }
    }

    /// Returns whether every field holds its initial value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Snapshot of a form that passed validation.
///
/// Name and email are trimmed; password and comment are kept as typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub subscribe: bool,
    pub comment: String,
}
