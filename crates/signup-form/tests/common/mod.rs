#![allow(dead_code)]

use signup_form::{ErrorMap, FormValidator, Registration, SubmissionResult, TextField};

/// A form holding valid values for every required field.
pub fn valid_form() -> FormValidator {
    let mut form = FormValidator::new();
    form.set_text(TextField::Name, "Anna");
    form.set_text(TextField::Email, "a@b.co");
    form.set_text(TextField::Password, "secret1");
    form
}

pub fn accepted(form: &mut FormValidator) -> Registration {
    match form.submit() {
        SubmissionResult::Accepted(registration) => registration,
        other => panic!("Expected accepted submission, got {other:?}"),
    }
}

pub fn rejected(form: &mut FormValidator) -> (ErrorMap, TextField) {
    match form.submit() {
        SubmissionResult::Rejected {
            errors,
            first_invalid,
        } => (errors, first_invalid),
        other => panic!("Expected rejected submission, got {other:?}"),
    }
}
