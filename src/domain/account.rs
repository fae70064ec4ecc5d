//! Provider-side account records and call outcomes.
//!
//! The identity provider is the single source of truth for accounts; this
//! layer never persists or mutates them. Everything here is a read-only
//! snapshot or the result of one provider call.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Account record as reported by the identity provider.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProviderUser {
    pub id: Uuid,
    pub email: String,
    /// Profile attributes (e.g. `name`), provider-defined
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
    /// Whether the email has been confirmed with a code
    #[serde(default)]
    pub confirmed: bool,
    pub created_at: DateTime<Utc>,
}

impl ProviderUser {
    /// Look up a profile attribute by name
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

/// One provider-reported failure, passed through verbatim to the view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProviderError {
    /// Provider error code (e.g. "InvalidPasswordException")
    pub code: String,
    /// Human-readable description supplied by the provider
    pub description: String,
}

impl ProviderError {
    pub fn new(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
        }
    }
}

/// Result of a mutating provider operation.
///
/// `Rejected` is an expected, recoverable outcome — the caller re-renders the
/// originating form with the errors attached. Transport failures are a
/// separate concern (`AppError`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderOutcome {
    Succeeded,
    Rejected(Vec<ProviderError>),
}

impl ProviderOutcome {
    pub fn succeeded(&self) -> bool {
        matches!(self, ProviderOutcome::Succeeded)
    }
}

/// Result of a password sign-in attempt.
///
/// Deliberately coarse: an unknown account and a wrong password are the same
/// `Failed`, so the login view cannot leak account existence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignInOutcome {
    Succeeded,
    Failed,
}

impl SignInOutcome {
    pub fn succeeded(&self) -> bool {
        matches!(self, SignInOutcome::Succeeded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> ProviderUser {
        let mut attributes = BTreeMap::new();
        attributes.insert("name".to_string(), "a@b.com".to_string());
        ProviderUser {
            id: Uuid::new_v4(),
            email: "a@b.com".to_string(),
            attributes,
            confirmed: false,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn attribute_lookup() {
        let user = sample_user();
        assert_eq!(user.attribute("name"), Some("a@b.com"));
        assert_eq!(user.attribute("locale"), None);
    }

    #[test]
    fn deserializes_with_missing_optional_fields() {
        let user: ProviderUser = serde_json::from_str(
            r#"{"id":"550e8400-e29b-41d4-a716-446655440000",
                "email":"a@b.com",
                "created_at":"2024-01-01T00:00:00Z"}"#,
        )
        .expect("minimal user document should parse");

        assert!(!user.confirmed);
        assert!(user.attributes.is_empty());
    }

    #[test]
    fn outcome_helpers() {
        assert!(ProviderOutcome::Succeeded.succeeded());
        assert!(!ProviderOutcome::Rejected(vec![]).succeeded());
        assert!(SignInOutcome::Succeeded.succeeded());
        assert!(!SignInOutcome::Failed.succeeded());
    }
}
