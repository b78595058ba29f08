//! The form validator: field updates, live validation and submission.

use tracing::{debug, info};

use crate::error::{ErrorMap, FormError, Result};
use crate::field::{Field, FieldValue, TextField};
use crate::messages::CommentCounter;
use crate::schema::{FormSchema, COMMENT_MAX_LENGTH};
use crate::state::{FormState, Registration};
use crate::validation::{text_len, FieldError};

/// Outcome of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
    /// The form was valid. Holds the cleaned snapshot; the form has been reset.
    Accepted(Registration),
    /// The form was invalid and left unchanged.
    Rejected {
        errors: ErrorMap,
        /// Where the presentation layer should move input focus.
        first_invalid: TextField,
    },
}

impl SubmissionResult {
    /// Returns whether the submission was accepted.
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }
}

/// Owns the form values and keeps the error map in sync with them.
///
/// Every update recomputes the whole [`ErrorMap`]. Calls must be serialized
/// by the caller; all mutation goes through `&mut self`.
#[derive(Debug)]
pub struct FormValidator {
    schema: FormSchema,
    state: FormState,
    errors: ErrorMap,
}

impl FormValidator {
    /// Creates a validator for the registration form with empty values.
    ///
    /// No errors are reported until the first update or submit.
    #[must_use]
    pub fn new() -> Self {
        Self::with_schema(FormSchema::registration())
    }

    /// Creates a validator over a custom schema.
    #[must_use]
    pub fn with_schema(schema: FormSchema) -> Self {
        Self {
            schema,
            state: FormState::new(),
            errors: ErrorMap::new(),
        }
    }

    /// Current field values.
    #[must_use]
    pub const fn state(&self) -> &FormState {
        &self.state
    }

    /// Errors from the latest validation.
    #[must_use]
    pub const fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    /// Error for a single field from the latest validation.
    #[must_use]
    pub fn error(&self, field: TextField) -> Option<FieldError> {
        self.errors.get(field)
    }

    /// Returns whether the current values pass validation.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// The schema in use.
    #[must_use]
    pub const fn schema(&self) -> &FormSchema {
        &self.schema
    }

    /// Live character counter for the comment field.
    #[must_use]
    pub fn comment_counter(&self) -> CommentCounter {
        CommentCounter::new(text_len(&self.state.comment), COMMENT_MAX_LENGTH)
    }

    /// Sets a text field and revalidates the whole form.
    pub fn set_text(&mut self, field: TextField, value: impl Into<String>) -> &ErrorMap {
        *self.state.text_mut(field) = value.into();
        self.revalidate(Field::from(field))
    }

    /// Sets the subscription switch and revalidates the whole form.
    pub fn set_subscribe(&mut self, subscribe: bool) -> &ErrorMap {
        self.state.subscribe = subscribe;
        self.revalidate(Field::Subscribe)
    }

    /// Sets any field.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::KindMismatch`] when the value kind does not fit
    /// the field. The state is then left untouched.
    pub fn set_field(&mut self, field: Field, value: FieldValue) -> Result<&ErrorMap> {
        match (field.as_text(), value) {
            (Some(text), FieldValue::Text(value)) => Ok(self.set_text(text, value)),
            (None, FieldValue::Flag(flag)) => Ok(self.set_subscribe(flag)),
            (Some(_), value) => Err(FormError::KindMismatch {
                field,
                expected: "text",
                actual: value.kind(),
            }),
            (None, value) => Err(FormError::KindMismatch {
                field,
                expected: "flag",
                actual: value.kind(),
            }),
        }
    }

    /// Sets a field from untyped input, e.g. a command line.
    ///
    /// The subscribe switch accepts `yes`/`no`, `on`/`off`, `true`/`false`.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::UnknownField`] or [`FormError::InvalidFlag`] when
    /// the input cannot be mapped onto a field.
    pub fn update(&mut self, name: &str, raw: &str) -> Result<&ErrorMap> {
        let field: Field = name.parse()?;
        let value = match field {
            Field::Subscribe => FieldValue::Flag(FieldValue::parse_flag(raw)?),
            _ => FieldValue::Text(raw.to_string()),
        };
        self.set_field(field, value)
    }

    /// Validates the current values without storing the result.
    #[must_use]
    pub fn validate(&self) -> ErrorMap {
        self.schema
            .fields()
            .iter()
            .filter_map(|def| {
                def.validate(self.state.text(def.field))
                    .err()
                    .map(|error| (def.field, error))
            })
            .collect()
    }

    /// Attempts to submit the form.
    ///
    /// On success the snapshot is returned and the form is reset. On failure
    /// the form is left as is.
    pub fn submit(&mut self) -> SubmissionResult {
        self.errors = self.validate();

        if let Some(first_invalid) = self.errors.first_invalid() {
            debug!(
                %first_invalid,
                errors = self.errors.len(),
                "registration rejected"
            );
            return SubmissionResult::Rejected {
                errors: self.errors.clone(),
                first_invalid,
            };
        }

        let registration = self.snapshot();
        self.reset();
        info!(subscribe = registration.subscribe, "registration accepted");
        SubmissionResult::Accepted(registration)
    }

    /// Clears all values and errors.
    pub fn reset(&mut self) {
        self.state = FormState::new();
        self.errors.clear();
    }

    fn revalidate(&mut self, changed: Field) -> &ErrorMap {
        self.errors = self.validate();
        debug!(field = %changed, errors = self.errors.len(), "form revalidated");
        &self.errors
    }

    fn cleaned(&self, field: TextField) -> String {
        let raw = self.state.text(field);
        self.schema
            .get(field)
            .map_or(raw, |def| def.clean(raw))
            .to_string()
    }

    fn snapshot(&self) -> Registration {
        Registration {
            name: self.cleaned(TextField::Name),
            email: self.cleaned(TextField::Email),
            password: self.cleaned(TextField::Password),
            subscribe: self.state.subscribe,
            comment: self.cleaned(TextField::Comment),
        }
    }
}

impl Default for FormValidator {
    fn default() -> Self {
        Self::new()
    }
}
