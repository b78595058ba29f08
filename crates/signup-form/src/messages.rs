//! Human-readable text for errors and submission notices.

use std::fmt;
use std::str::FromStr;

use crate::error::FormError;
use crate::field::TextField;
use crate::state::Registration;
use crate::validation::FieldError;

/// Language of user-facing messages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    En,
    Ru,
}

impl FromStr for Locale {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Self::En),
            "ru" => Ok(Self::Ru),
            other => Err(FormError::UnknownLocale(other.to_string())),
        }
    }
}

/// A titled message shown to the user after a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub body: String,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.title, self.body)
    }
}

impl Locale {
    /// Display label of a field.
    #[must_use]
    pub const fn label(self, field: TextField) -> &'static str {
        match (self, field) {
            (Self::En, TextField::Name) => "Name",
            (Self::En, TextField::Email) | (Self::Ru, TextField::Email) => "Email",
            (Self::En, TextField::Password) => "Password",
            (Self::En, TextField::Comment) => "Comment",
            (Self::Ru, TextField::Name) => "Имя",
            (Self::Ru, TextField::Password) => "Пароль",
            (Self::Ru, TextField::Comment) => "Комментарий",
        }
    }

    /// Inline error text for a field.
    #[must_use]
    pub fn field_error(self, field: TextField, error: FieldError) -> String {
        match self {
            Self::En => english_error(field, error),
            Self::Ru => russian_error(field, error),
        }
    }

    /// Confirmation shown after an accepted registration.
    #[must_use]
    pub fn confirmation(self, registration: &Registration) -> Notice {
        let (title, subscription, yes, no) = match self {
            Self::En => ("Registration successful", "Subscription", "Yes", "No"),
            Self::Ru => ("Регистрация успешна", "Подписка", "Да", "Нет"),
        };
        let lines = [
            format!("{}: {}", self.label(TextField::Name), registration.name),
            format!("{}: {}", self.label(TextField::Email), registration.email),
            format!("{}: {}", self.label(TextField::Password), registration.password),
            format!(
                "{subscription}: {}",
                if registration.subscribe { yes } else { no }
            ),
            format!("{}: {}", self.label(TextField::Comment), registration.comment),
        ];
        Notice {
            title: title.to_string(),
            body: lines.join("\n"),
        }
    }

    /// Generic notice shown after a rejected submit.
    #[must_use]
    pub fn rejection(self) -> Notice {
        let (title, body) = match self {
            Self::En => ("Error", "Please check the form fields"),
            Self::Ru => ("Ошибка", "Проверьте правильность заполнения полей"),
        };
        Notice {
            title: title.to_string(),
            body: body.to_string(),
        }
    }
}

fn english_error(field: TextField, error: FieldError) -> String {
    let label = Locale::En.label(field);
    match error {
        FieldError::Required => format!("{label} is required"),
        FieldError::TooShort { min } => format!("{label} must be at least {min} characters"),
        FieldError::InvalidFormat => "Enter a valid email".to_string(),
        FieldError::TooLong { max } => format!("{label} cannot be longer than {max} characters"),
    }
}

fn russian_error(field: TextField, error: FieldError) -> String {
    match (field, error) {
        (TextField::Name, FieldError::Required) => "Введите имя".to_string(),
        (TextField::Name, FieldError::TooShort { min }) => {
            format!("Имя должно быть не короче {min} символов")
        }
        (TextField::Email, FieldError::Required) => "Email не может быть пустым".to_string(),
        (_, FieldError::InvalidFormat) => "Введите корректный email".to_string(),
        (TextField::Password, FieldError::Required) => "Пароль не может быть пустым".to_string(),
        (TextField::Password, FieldError::TooShort { min }) => {
            format!("Пароль должен быть минимум {min} символов")
        }
        (TextField::Comment, FieldError::TooLong { max }) => {
            format!("Комментарий не может быть длиннее {max} символов")
        }
        (field, FieldError::Required) => format!("{}: обязательное поле", Locale::Ru.label(field)),
        (field, FieldError::TooShort { min }) => {
            format!("{}: минимум {min} символов", Locale::Ru.label(field))
        }
        (field, FieldError::TooLong { max }) => {
            format!("{}: максимум {max} символов", Locale::Ru.label(field))
        }
    }
}

/// Character counter for a length-limited field, e.g. `12/200`.
///
/// The displayed count never exceeds the limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentCounter {
    used: usize,
    limit: usize,
}

impl CommentCounter {
    /// Creates a counter, capping `used` at `limit`.
    #[must_use]
    pub fn new(used: usize, limit: usize) -> Self {
        Self {
            used: used.min(limit),
            limit,
        }
    }

    /// Characters still available.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.limit.saturating_sub(self.used)
    }

    /// Displayed count, at most the limit.
    #[must_use]
    pub const fn used(&self) -> usize {
        self.used
    }

    /// The length limit.
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }
}

impl fmt::Display for CommentCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.used, self.limit)
    }
}
