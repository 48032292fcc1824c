//! The form schemas.

use crate::{FieldErrors, FormSchema, rules};
use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

/// New account sign-up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationForm {
    /// 3 to 20 characters of letters, digits and underscores
    #[validate(custom(function = "rules::username"))]
    pub username: String,
    /// Contact address
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,
    /// At least 8 characters with mixed case and a digit
    #[validate(custom(function = "rules::password_strength"))]
    pub password: String,
    /// Must repeat `password`
    pub confirm_password: String,
    /// Age in years, 13 to 120
    #[serde(default)]
    #[validate(
        required(message = "Age is required"),
        custom(function = "rules::age")
    )]
    pub age: Option<f64>,
    /// Must be ticked
    #[serde(default)]
    #[validate(custom(function = "rules::agreed"))]
    pub agreed_to_terms: bool,
}

impl FormSchema for RegistrationForm {
    fn refine(&self, errors: &mut FieldErrors) {
        if self.password != self.confirm_password {
            errors.insert("confirm_password", "Passwords don't match");
        }
    }
}

/// Sign-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginForm {
    /// Account address
    #[validate(custom(function = "rules::required_email"))]
    pub email: String,
    /// Any non-empty password
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    /// Keep the session after the browser closes
    #[serde(default)]
    pub remember_me: Option<bool>,
}

impl FormSchema for LoginForm {}

/// Per-channel notification opt-ins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationPreferences {
    /// Email notifications
    pub email: bool,
    /// Push notifications
    pub push: bool,
    /// SMS notifications
    pub sms: bool,
}

/// Public profile settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProfileForm {
    /// 2 to 50 characters
    #[validate(custom(function = "rules::display_name"))]
    pub display_name: String,
    /// Up to 200 characters
    #[serde(default)]
    #[validate(length(max = 200, message = "Bio must be less than 200 characters"))]
    pub bio: Option<String>,
    /// Empty or a valid URL
    #[serde(default)]
    #[validate(custom(function = "rules::optional_url"))]
    pub website: Option<String>,
    /// Notification channels
    pub notifications: NotificationPreferences,
}

impl FormSchema for ProfileForm {}

/// Topic of a contact request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactCategory {
    /// General enquiry
    General,
    /// Help with the product
    Support,
    /// Suggestions
    Feedback,
    /// Defect report
    Bug,
}

impl ContactCategory {
    fn parse(value: &str) -> Option<Self> {
        match value {
            "general" => Some(Self::General),
            "support" => Some(Self::Support),
            "feedback" => Some(Self::Feedback),
            "bug" => Some(Self::Bug),
            _ => None,
        }
    }
}

/// Unknown or missing categories become `None` so they surface as a
/// validation message rather than a parse failure.
fn lenient_category<'de, D>(deserializer: D) -> Result<Option<ContactCategory>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(ContactCategory::parse))
}

/// Message to the support team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
    /// At least 2 characters
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: String,
    /// Reply address
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,
    /// 5 to 100 characters
    #[validate(custom(function = "rules::subject"))]
    pub subject: String,
    /// 10 to 500 characters
    #[validate(custom(function = "rules::message"))]
    pub message: String,
    /// One of the known categories
    #[serde(default, deserialize_with = "lenient_category")]
    #[validate(required(message = "Please select a category"))]
    pub category: Option<ContactCategory>,
}

impl FormSchema for ContactForm {}

#[cfg(test)]
mod tests {
    use super::*;

    fn registration() -> RegistrationForm {
        RegistrationForm {
            username: "john_doe".into(),
            email: "john@example.com".into(),
            password: "Password123".into(),
            confirm_password: "Password123".into(),
            age: Some(25.0),
            agreed_to_terms: true,
        }
    }

    #[test]
    fn valid_registration_passes() {
        assert_eq!(registration().check(), Ok(()));
    }

    #[test]
    fn password_mismatch_is_reported_on_confirmation() {
        let form = RegistrationForm {
            confirm_password: "Password124".into(),
            ..registration()
        };

        let errors = form.check().err().unwrap_or_default();
        assert_eq!(errors.get("confirm_password"), Some("Passwords don't match"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn mismatch_is_not_checked_while_fields_fail() {
        let form = RegistrationForm {
            username: "jo".into(),
            confirm_password: "other".into(),
            ..registration()
        };

        let errors = form.check().err().unwrap_or_default();
        assert_eq!(errors.get("username"), Some("Username must be at least 3 characters"));
        assert_eq!(errors.get("confirm_password"), None);
    }

    #[test]
    fn missing_age_is_required() {
        let form = RegistrationForm {
            age: None,
            ..registration()
        };

        let errors = form.check().err().unwrap_or_default();
        assert_eq!(errors.get("age"), Some("Age is required"));
    }

    #[test]
    fn fractional_age_uses_the_same_bounds() {
        let adult = RegistrationForm {
            age: Some(25.5),
            ..registration()
        };
        assert_eq!(adult.check(), Ok(()));

        let child = RegistrationForm {
            age: Some(12.5),
            ..registration()
        };
        let errors = child.check().err().unwrap_or_default();
        assert_eq!(errors.get("age"), Some("You must be at least 13 years old"));

        let too_old = RegistrationForm {
            age: Some(120.5),
            ..registration()
        };
        let errors = too_old.check().err().unwrap_or_default();
        assert_eq!(errors.get("age"), Some("Please enter a valid age"));
    }

    #[test]
    fn terms_must_be_accepted() {
        let form = RegistrationForm {
            agreed_to_terms: false,
            ..registration()
        };

        let errors = form.check().err().unwrap_or_default();
        assert_eq!(
            errors.get("agreed_to_terms"),
            Some("You must agree to the terms and conditions")
        );
    }

    #[test]
    fn unknown_category_becomes_none() -> serde_json::Result<()> {
        let form: ContactForm = serde_json::from_str(
            r#"{
                "name": "Al",
                "email": "al@example.com",
                "subject": "Hello",
                "message": "Hello there!",
                "category": "sales"
            }"#,
        )?;
        assert_eq!(form.category, None);
        Ok(())
    }
}
