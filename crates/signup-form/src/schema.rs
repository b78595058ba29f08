//! Field definitions and the registration schema.

use crate::field::TextField;
use crate::validation::{
    EmailValidator, FieldError, MaxLengthValidator, MinLengthValidator, RequiredValidator,
    Validator,
};

/// Minimum length of a trimmed name.
pub const NAME_MIN_LENGTH: usize = 2;
/// Minimum length of a password.
pub const PASSWORD_MIN_LENGTH: usize = 6;
/// Maximum length of a comment.
pub const COMMENT_MAX_LENGTH: usize = 200;

/// Definition of a validated form field.
pub struct FieldDef {
    /// Field this definition applies to.
    pub field: TextField,
    /// Whether surrounding whitespace is stripped before validation.
    pub trim: bool,
    /// Validators, in precedence order. The first failure wins.
    pub validators: Vec<Box<dyn Validator>>,
}

impl std::fmt::Debug for FieldDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldDef")
            .field("field", &self.field)
            .field("trim", &self.trim)
            .field("validators", &self.validators.len())
            .finish()
    }
}

impl FieldDef {
    /// Creates a new field definition with no validators.
    #[must_use]
    pub fn new(field: TextField) -> Self {
        Self {
            field,
            trim: false,
            validators: Vec::new(),
        }
    }

    /// Strips surrounding whitespace before validation.
    #[must_use]
    pub const fn trimmed(mut self) -> Self {
        self.trim = true;
        self
    }

    /// Adds a validator.
    #[must_use]
    pub fn validator(mut self, validator: impl Validator + 'static) -> Self {
        self.validators.push(Box::new(validator));
        self
    }

    /// Returns the value as validation and submission see it.
    #[must_use]
    pub fn clean<'a>(&self, raw: &'a str) -> &'a str {
        if self.trim {
            raw.trim()
        } else {
            raw
        }
    }

    /// Runs the validators in order and returns the first failure.
    pub fn validate(&self, raw: &str) -> Result<(), FieldError> {
        let value = self.clean(raw);
        self.validators
            .iter()
            .try_for_each(|validator| validator.validate(value))
    }
}

/// Creates a required, trimmed text field with a minimum length.
#[must_use]
pub fn char_field(field: TextField, min_length: usize) -> FieldDef {
    FieldDef::new(field)
        .trimmed()
        .validator(RequiredValidator::new())
        .validator(MinLengthValidator::new(min_length))
}

/// Creates a required, trimmed email field.
#[must_use]
pub fn email_field(field: TextField) -> FieldDef {
    FieldDef::new(field)
        .trimmed()
        .validator(RequiredValidator::new())
        .validator(EmailValidator::new())
}

/// Creates a required password field. Passwords are never trimmed.
#[must_use]
pub fn password_field(field: TextField, min_length: usize) -> FieldDef {
    FieldDef::new(field)
        .validator(RequiredValidator::new())
        .validator(MinLengthValidator::new(min_length))
}

/// Creates an optional free-text field with a maximum length.
#[must_use]
pub fn text_field(field: TextField, max_length: usize) -> FieldDef {
    FieldDef::new(field).validator(MaxLengthValidator::new(max_length))
}

/// The set of validated fields of a form.
#[derive(Debug)]
pub struct FormSchema {
    fields: Vec<FieldDef>,
}

impl FormSchema {
    /// The registration form: name, email, password and comment.
    #[must_use]
    pub fn registration() -> Self {
        Self::builder()
            .field(char_field(TextField::Name, NAME_MIN_LENGTH))
            .field(email_field(TextField::Email))
            .field(password_field(TextField::Password, PASSWORD_MIN_LENGTH))
            .field(text_field(TextField::Comment, COMMENT_MAX_LENGTH))
            .build()
    }

    /// Starts building a schema.
    #[must_use]
    pub fn builder() -> FormSchemaBuilder {
        FormSchemaBuilder::default()
    }

    /// Returns the definition of a field.
    #[must_use]
    pub fn get(&self, field: TextField) -> Option<&FieldDef> {
        self.fields.iter().find(|def| def.field == field)
    }

    /// Returns the field definitions.
    #[must_use]
    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }
}

impl Default for FormSchema {
    fn default() -> Self {
        Self::registration()
    }
}

/// A simple builder for [`FormSchema`].
#[derive(Debug, Default)]
pub struct FormSchemaBuilder {
    fields: Vec<FieldDef>,
}

impl FormSchemaBuilder {
    /// Adds a field, replacing an earlier definition of the same field.
    #[must_use]
    pub fn field(mut self, def: FieldDef) -> Self {
        self.fields.retain(|existing| existing.field != def.field);
        self.fields.push(def);
        self
    }

    /// Returns the schema.
    #[must_use]
    pub fn build(self) -> FormSchema {
        FormSchema {
            fields: self.fields,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_schema_covers_text_fields() {
        let schema = FormSchema::registration();
        assert_eq!(schema.fields().len(), 4);
        for field in TextField::ALL {
            assert!(schema.get(field).is_some(), "missing {field}");
        }
        assert!(schema.get(TextField::Name).unwrap().trim);
        assert!(!schema.get(TextField::Password).unwrap().trim);
        assert!(!schema.get(TextField::Comment).unwrap().trim);
    }

    #[test]
    fn test_char_field_required_wins_over_length() {
        let def = char_field(TextField::Name, 2);
        assert_eq!(def.validators.len(), 2);
        assert_eq!(def.validate("   "), Err(FieldError::Required));
        assert_eq!(def.validate(" A "), Err(FieldError::TooShort { min: 2 }));
        assert_eq!(def.validate(" Al "), Ok(()));
    }

    #[test]
    fn test_password_field_is_not_trimmed() {
        let def = password_field(TextField::Password, 6);
        assert_eq!(def.validate("   "), Err(FieldError::TooShort { min: 6 }));
        assert_eq!(def.validate("      "), Ok(()));
        assert_eq!(def.clean("  pw  "), "  pw  ");
    }

    #[test]
    fn test_builder_replaces_duplicate_fields() {
        let schema = FormSchema::builder()
            .field(text_field(TextField::Comment, 10))
            .field(text_field(TextField::Comment, 20))
            .build();
        assert_eq!(schema.fields().len(), 1);
        assert_eq!(
            schema.get(TextField::Comment).unwrap().validate(&"x".repeat(15)),
            Ok(())
        );
    }
}
