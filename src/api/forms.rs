//! Account form models.
//!
//! Request-scoped DTOs with declarative, purely structural validation:
//! required fields, email shape, minimum password length, and the
//! new-password/confirmation match. Provider policy (full password
//! complexity, code validity) is enforced by the provider itself and
//! surfaced separately.
//!
//! Passwords deserialize from the form body but never serialize back into
//! a view state.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Signup form: email + initial password
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct SignupForm {
    /// Email address, used as the account identifier
    #[validate(email(message = "Enter a valid email address"))]
    #[schema(example = "user@example.com")]
    pub email: String,
    /// Initial password (minimum 6 characters)
    #[validate(length(min = 6, message = "Password must be at least 6 characters long!"))]
    #[serde(skip_serializing)]
    pub password: String,
}

/// Email confirmation form: the code dispatched by the provider
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct ConfirmForm {
    #[validate(email(message = "Enter a valid email address"))]
    #[schema(example = "user@example.com")]
    pub email: String,
    /// Confirmation code received by email
    #[validate(length(min = 1, message = "Code is required"))]
    pub code: String,
}

impl ConfirmForm {
    /// Confirmation form carrying an email from a previous step
    pub fn with_email(email: String) -> Self {
        Self {
            email,
            code: String::new(),
        }
    }
}

/// Login form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct LoginForm {
    #[validate(length(min = 1, message = "Email is required"))]
    #[schema(example = "user@example.com")]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    #[serde(skip_serializing)]
    pub password: String,
    /// Keep the session across browser restarts
    #[serde(default)]
    pub remember: bool,
}

impl LoginForm {
    /// Login form pre-filled with an email from another flow
    pub fn with_email(email: String) -> Self {
        Self {
            email,
            ..Self::default()
        }
    }
}

/// Forgot-password form: the email to dispatch a reset code to
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct ForgotPasswordForm {
    #[validate(email(message = "Enter a valid email address"))]
    #[schema(example = "user@example.com")]
    pub email: String,
}

/// Reset finalization form: code plus the new password, entered twice
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct ConfirmForgotPasswordForm {
    // No structural rule: an unknown or empty email falls through to the
    // neutral login view without revealing account existence
    #[schema(example = "user@example.com")]
    pub email: String,
    /// Reset code received by email
    #[validate(length(min = 1, message = "Code is required"))]
    pub code: String,
    /// New password (minimum 6 characters)
    #[validate(length(min = 6, message = "Password must be at least 6 characters long!"))]
    #[serde(skip_serializing)]
    pub password: String,
    /// Must match the new password
    #[validate(must_match(
        other = "password",
        message = "Password and its confirmation do not match"
    ))]
    #[serde(skip_serializing)]
    pub confirm_password: String,
}

impl ConfirmForgotPasswordForm {
    /// Reset form carrying an email from the forgot-password step
    pub fn with_email(email: String) -> Self {
        Self {
            email,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signup_accepts_well_formed_input() {
        let form = SignupForm {
            email: "a@b.com".into(),
            password: "Secret1".into(),
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn signup_rejects_malformed_email_and_short_password() {
        let form = SignupForm {
            email: "not-an-email".into(),
            password: "abc".into(),
        };
        let errors = form.validate().unwrap_err();
        let fields = errors.field_errors();

        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("password"));
    }

    #[test]
    fn signup_never_serializes_the_password() {
        let form = SignupForm {
            email: "a@b.com".into(),
            password: "Secret1".into(),
        };
        let body = serde_json::to_value(&form).unwrap();
        assert!(body.get("password").is_none());
    }

    #[test]
    fn confirm_requires_a_code() {
        let form = ConfirmForm {
            email: "a@b.com".into(),
            code: String::new(),
        };
        assert!(form.validate().is_err());
    }

    #[test]
    fn login_requires_presence_only() {
        let form = LoginForm {
            email: "whatever".into(),
            password: "pw".into(),
            remember: false,
        };
        // Login does not check email shape; absence is the only failure
        assert!(form.validate().is_ok());

        let empty = LoginForm::default();
        let errors = empty.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
        assert!(errors.field_errors().contains_key("password"));
    }

    #[test]
    fn login_remember_defaults_to_false_when_absent() {
        let form: LoginForm = serde_json::from_value(serde_json::json!({
            "email": "x@y.com",
            "password": "pw"
        }))
        .unwrap();
        assert!(!form.remember);

        let form: LoginForm = serde_json::from_value(serde_json::json!({
            "email": "x@y.com",
            "password": "pw",
            "remember": true
        }))
        .unwrap();
        assert!(form.remember);
    }

    #[test]
    fn reset_form_rejects_mismatched_confirmation() {
        let form = ConfirmForgotPasswordForm {
            email: "a@b.com".into(),
            code: "123456".into(),
            password: "Secret1".into(),
            confirm_password: "Secret2".into(),
        };
        let errors = form.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("confirm_password"));
    }

    #[test]
    fn reset_form_accepts_matching_passwords() {
        let form = ConfirmForgotPasswordForm {
            email: "a@b.com".into(),
            code: "123456".into(),
            password: "Secret1".into(),
            confirm_password: "Secret1".into(),
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn reset_form_leaves_email_unchecked() {
        let form = ConfirmForgotPasswordForm {
            email: String::new(),
            code: "123456".into(),
            password: "Secret1".into(),
            confirm_password: "Secret1".into(),
        };
        // Empty email is structurally fine; the flow handles it as unknown
        assert!(form.validate().is_ok());
    }

    #[test]
    fn prefill_constructors_carry_the_email() {
        assert_eq!(LoginForm::with_email("a@b.com".into()).email, "a@b.com");
        assert_eq!(ConfirmForm::with_email("a@b.com".into()).email, "a@b.com");
        assert_eq!(
            ConfirmForgotPasswordForm::with_email("a@b.com".into()).email,
            "a@b.com"
        );
    }
}
