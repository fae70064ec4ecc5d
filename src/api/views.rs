//! View-state envelopes rendered back to the browser.
//!
//! The portal renders no templates; a "view" is a JSON view state the
//! frontend displays. A clean form renders with 200, a re-display with
//! field errors renders with 422, and step transitions are redirects.

use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;
use validator::ValidationErrors;

use crate::domain::ProviderError;

/// Field-level error messages keyed by field name or error code.
///
/// Structural validation failures land under their field name; flow and
/// provider failures under their error code (`UserExists`, `LoginError`,
/// provider codes verbatim).
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Single-entry error set
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    /// Append a message under the given field/code
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Messages recorded under a field/code, if any
    pub fn messages(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }
}

impl From<&ValidationErrors> for FieldErrors {
    fn from(errors: &ValidationErrors) -> Self {
        let mut out = Self::new();
        for (field, field_errors) in errors.field_errors() {
            for error in field_errors {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{field} is invalid"));
                out.add(field.to_string(), message);
            }
        }
        out
    }
}

impl From<Vec<ProviderError>> for FieldErrors {
    fn from(errors: Vec<ProviderError>) -> Self {
        let mut out = Self::new();
        for error in errors {
            out.add(error.code, error.description);
        }
        out
    }
}

/// A form view state: which view to display, the form contents to echo
/// back, and any field errors.
#[derive(Debug, Serialize)]
pub struct FormView<T: Serialize> {
    pub view: &'static str,
    pub form: T,
    #[serde(skip_serializing_if = "FieldErrors::is_empty")]
    pub errors: FieldErrors,
}

impl<T: Serialize> FormView<T> {
    /// Render a view with no errors
    pub fn render(view: &'static str, form: T) -> Self {
        Self {
            view,
            form,
            errors: FieldErrors::new(),
        }
    }

    /// Re-display a view with the submitted form and its errors
    pub fn rejected(view: &'static str, form: T, errors: FieldErrors) -> Self {
        Self { view, form, errors }
    }
}

impl<T: Serialize> IntoResponse for FormView<T> {
    fn into_response(self) -> Response {
        let status = if self.errors.is_empty() {
            StatusCode::OK
        } else {
            StatusCode::UNPROCESSABLE_ENTITY
        };

        (status, Json(self)).into_response()
    }
}

/// A terminal view carrying only a message.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageView {
    pub view: &'static str,
    pub message: &'static str,
}

impl MessageView {
    pub fn render(view: &'static str, message: &'static str) -> Self {
        Self { view, message }
    }
}

impl IntoResponse for MessageView {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Debug, Serialize, Validate)]
    struct Probe {
        #[validate(email(message = "Enter a valid email address"))]
        email: String,
    }

    #[test]
    fn clean_view_omits_errors_and_renders_ok() {
        let view = FormView::render("probe", Probe { email: "a@b.com".into() });
        let body = serde_json::to_value(&view).unwrap();

        assert_eq!(body["view"], "probe");
        assert_eq!(body["form"]["email"], "a@b.com");
        assert!(body.get("errors").is_none());

        assert_eq!(view.into_response().status(), StatusCode::OK);
    }

    #[test]
    fn rejected_view_carries_errors_and_renders_422() {
        let errors = FieldErrors::single("LoginError", "Email and password do not match");
        let view = FormView::rejected("probe", Probe { email: "a@b.com".into() }, errors);
        let body = serde_json::to_value(&view).unwrap();

        assert_eq!(
            body["errors"]["LoginError"][0],
            "Email and password do not match"
        );

        assert_eq!(
            view.into_response().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn validation_errors_keep_their_field_and_message() {
        let probe = Probe {
            email: "not-an-email".into(),
        };
        let errors = FieldErrors::from(&probe.validate().unwrap_err());

        assert_eq!(
            errors.messages("email"),
            Some(&["Enter a valid email address".to_string()][..])
        );
    }

    #[test]
    fn provider_errors_map_code_to_key() {
        let errors = FieldErrors::from(vec![
            ProviderError::new("InvalidPasswordException", "Password not long enough"),
            ProviderError::new("InvalidPasswordException", "Password needs a digit"),
        ]);

        assert_eq!(
            errors.messages("InvalidPasswordException").map(<[String]>::len),
            Some(2)
        );
    }
}
