//! # Forms
//!
//! Typed form schemas for registration, login, profile and contact forms.
//!
//! Each schema is a `validator`-derived struct deserialized from the form's
//! JSON payload (camelCase keys). Validation reports at most one message per
//! field, the first rule that failed, which is what a form renders next to the
//! input.
//!
//! ```
//! use composable_state_forms::{FormError, LoginForm, parse_and_validate};
//!
//! let result = parse_and_validate::<LoginForm>(r#"{"email": "", "password": ""}"#);
//!
//! let Err(FormError::Invalid(errors)) = result else {
//!     unreachable!("empty login form must be rejected");
//! };
//! assert_eq!(errors.get("email"), Some("Email is required"));
//! assert_eq!(errors.get("password"), Some("Password is required"));
//! ```

mod rules;
pub mod schemas;

pub use schemas::{
    ContactCategory, ContactForm, LoginForm, NotificationPreferences, ProfileForm,
    RegistrationForm,
};

use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

/// One message per failing field, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    /// No errors.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Message for `field`, if it failed.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Record a message for `field` unless one is already present.
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_insert_with(|| message.into());
    }

    /// Whether every field passed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of failing fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Failing fields and their messages, ordered by field name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(field, message)| (field.as_str(), message.as_str()))
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields = Self::new();
        for (field, failures) in errors.field_errors() {
            if let Some(first) = failures.first() {
                let message = first
                    .message
                    .as_ref()
                    .map_or_else(|| first.code.to_string(), ToString::to_string);
                fields.insert(field.to_string(), message);
            }
        }
        fields
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

/// Why a form submission was rejected.
#[derive(Error, Debug)]
pub enum FormError {
    /// The payload is not valid JSON or has the wrong shape.
    #[error("Malformed form data: {0}")]
    Malformed(#[from] serde_json::Error),

    /// One or more fields failed validation.
    #[error("Invalid form: {0}")]
    Invalid(FieldErrors),
}

/// A form that can be parsed and validated.
///
/// Field rules come from the `Validate` derive. Cross-field rules go in
/// [`FormSchema::refine`], which only runs once every field rule passes.
pub trait FormSchema: Validate + DeserializeOwned {
    /// Cross-field checks. Add a message per failing field to `errors`.
    fn refine(&self, _errors: &mut FieldErrors) {}

    /// Run field rules, then cross-field rules.
    ///
    /// # Errors
    ///
    /// Returns the failing fields with their first message each.
    fn check(&self) -> Result<(), FieldErrors> {
        let mut errors = match self.validate() {
            Ok(()) => FieldErrors::new(),
            Err(errors) => FieldErrors::from(errors),
        };

        if errors.is_empty() {
            self.refine(&mut errors);
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// Deserialize a form from JSON and validate it.
///
/// # Errors
///
/// Returns [`FormError::Malformed`] if the JSON does not fit the schema's
/// shape, or [`FormError::Invalid`] with per-field messages.
pub fn parse_and_validate<T: FormSchema>(json: &str) -> Result<T, FormError> {
    let form: T = serde_json::from_str(json)?;
    form.check().map_err(|errors| {
        tracing::debug!(fields = errors.len(), %errors, "Form rejected");
        FormError::Invalid(errors)
    })?;
    Ok(form)
}
