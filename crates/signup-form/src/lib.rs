//! # signup-form
//!
//! Validation and submission logic for a registration form.
//!
//! This crate provides:
//! - A [`FormValidator`] owning the form values and their live errors
//! - Field validators (required, length, email)
//! - The [`SubmissionResult`] of a submit attempt
//! - Localized messages for inline errors and submit notices
//!
//! Rendering, focus handling and dialogs belong to the presentation layer.
//! It feeds updates in and reads values, errors and submit results out.
//!
//! ## Quick Start
//!
//! ```rust
//! use signup_form::{FormValidator, SubmissionResult, TextField};
//! use signup_form::validation::FieldError;
//!
//! let mut form = FormValidator::new();
//!
//! // Every update revalidates the whole form
//! let errors = form.set_text(TextField::Name, "A");
//! assert_eq!(errors.get(TextField::Name), Some(FieldError::TooShort { min: 2 }));
//!
//! form.set_text(TextField::Name, "Anna");
//! form.set_text(TextField::Email, "a@b.co");
//! form.set_text(TextField::Password, "secret1");
//! form.set_subscribe(true);
//!
//! match form.submit() {
//!     SubmissionResult::Accepted(registration) => {
//!         assert_eq!(registration.name, "Anna");
//!         assert!(registration.subscribe);
//!     }
//!     SubmissionResult::Rejected { first_invalid, .. } => {
//!         panic!("focus {first_invalid}");
//!     }
//! }
//!
//! // An accepted submission resets the form
//! assert!(form.state().is_empty());
//! ```
//!
//! ## Rejections
//!
//! A rejected submit leaves the values alone and names the first invalid
//! field in the order name, email, password, comment:
//!
//! ```rust
//! use signup_form::{FormValidator, Locale, SubmissionResult, TextField};
//!
//! let mut form = FormValidator::new();
//! form.set_text(TextField::Email, "bad");
//!
//! let SubmissionResult::Rejected { errors, first_invalid } = form.submit() else {
//!     unreachable!();
//! };
//! assert_eq!(first_invalid, TextField::Name);
//! assert_eq!(errors.message(TextField::Email).as_deref(), Some("invalid format"));
//! assert_eq!(
//!     Locale::En.field_error(TextField::Email, errors.get(TextField::Email).unwrap()),
//!     "Enter a valid email",
//! );
//! ```

mod error;
pub mod field;
pub mod messages;
pub mod schema;
mod state;
pub mod validation;
mod validator;

pub use error::{ErrorMap, FormError, Result};
pub use field::{Field, FieldValue, TextField};
pub use messages::{CommentCounter, Locale, Notice};
pub use state::{FormState, Registration};
pub use validator::{FormValidator, SubmissionResult};
