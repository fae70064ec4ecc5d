//! HTTP client for the managed identity provider.
//!
//! Speaks the provider's JSON REST surface and maps statuses to outcome
//! types: 404 on lookup is `None`, 401/403 on sign-in is `Failed`, any
//! client error on a mutating call is `Rejected` with the provider's
//! `(code, description)` pairs passed through verbatim. Everything else is
//! a contract violation surfaced as an `AppError`.

use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{Deserialize, Serialize};

use crate::config::{Config, PROVIDER_CLIENT_ID_HEADER};
use crate::domain::{ProviderError, ProviderOutcome, ProviderUser, SignInOutcome};
use crate::errors::{AppError, AppResult};
use crate::services::IdentityProvider;

/// Concrete [`IdentityProvider`] backed by the provider's REST API.
pub struct IdentityApi {
    base_url: String,
    client_id: String,
    service_token: String,
    http: Client,
}

#[derive(Debug, Serialize)]
struct CreateUserBody<'a> {
    email: &'a str,
    password: &'a str,
    attributes: BTreeMap<&'a str, &'a str>,
}

#[derive(Debug, Serialize)]
struct ConfirmSignupBody<'a> {
    code: &'a str,
    forced: bool,
}

#[derive(Debug, Serialize)]
struct SessionBody<'a> {
    email: &'a str,
    password: &'a str,
    remember: bool,
    lockout_on_failure: bool,
}

#[derive(Debug, Serialize)]
struct ConfirmResetBody<'a> {
    code: &'a str,
    new_password: &'a str,
}

/// Error envelope the provider attaches to rejected operations.
#[derive(Debug, Deserialize)]
struct RejectionBody {
    #[serde(default)]
    errors: Vec<ProviderError>,
}

impl IdentityApi {
    /// Build a client against the given provider endpoint.
    pub fn new(
        base_url: impl Into<String>,
        client_id: impl Into<String>,
        service_token: impl Into<String>,
        timeout: Duration,
    ) -> AppResult<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::internal(format!("Failed to build provider client: {e}")))?;

        let base_url = base_url.into();
        tracing::info!(base_url = %base_url, "Identity provider client initialized");

        Ok(Self {
            base_url,
            client_id: client_id.into(),
            service_token: service_token.into(),
            http,
        })
    }

    /// Build a client from application configuration.
    pub fn from_config(config: &Config) -> AppResult<Self> {
        Self::new(
            config.provider_base_url.clone(),
            config.provider_client_id.clone(),
            config.provider_service_token().to_string(),
            Duration::from_secs(config.provider_timeout_secs),
        )
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/v1{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Attach the service credential and client identifier.
    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .bearer_auth(&self.service_token)
            .header(PROVIDER_CLIENT_ID_HEADER, &self.client_id)
    }

    /// Read the `(code, description)` pairs off a rejected response, falling
    /// back to a synthetic status-derived error when the body is unusable.
    async fn rejection(response: Response) -> AppResult<Vec<ProviderError>> {
        let status = response.status();
        let body = response.bytes().await?;
        Ok(Self::parse_rejection(status, &body))
    }

    fn parse_rejection(status: StatusCode, body: &[u8]) -> Vec<ProviderError> {
        match serde_json::from_slice::<RejectionBody>(body) {
            Ok(parsed) if !parsed.errors.is_empty() => parsed.errors,
            _ => vec![ProviderError::new(
                format!("Http{}", status.as_u16()),
                format!("The identity provider rejected the request ({status})"),
            )],
        }
    }
}

#[async_trait]
impl IdentityProvider for IdentityApi {
    async fn find_user_by_email(&self, email: &str) -> AppResult<Option<ProviderUser>> {
        let response = self
            .authorize(self.http.get(self.endpoint("/users/by-email")))
            .query(&[("email", email)])
            .send()
            .await?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => Ok(Some(response.json::<ProviderUser>().await?)),
            status => Err(AppError::provider_contract(format!(
                "user lookup returned {status}"
            ))),
        }
    }

    async fn create_user(
        &self,
        email: &str,
        password: &str,
        attributes: &[(String, String)],
    ) -> AppResult<ProviderOutcome> {
        let body = CreateUserBody {
            email,
            password,
            attributes: attributes
                .iter()
                .map(|(k, v)| (k.as_str(), v.as_str()))
                .collect(),
        };

        tracing::debug!(email = %email, "Creating user at identity provider");

        let response = self
            .authorize(self.http.post(self.endpoint("/users")))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(ProviderOutcome::Succeeded)
        } else if status.is_client_error() {
            let errors = Self::rejection(response).await?;
            tracing::warn!(email = %email, ?errors, "Provider rejected user creation");
            Ok(ProviderOutcome::Rejected(errors))
        } else {
            Err(AppError::provider_contract(format!(
                "user creation returned {status}"
            )))
        }
    }

    async fn confirm_signup(
        &self,
        user: &ProviderUser,
        code: &str,
        forced: bool,
    ) -> AppResult<ProviderOutcome> {
        let response = self
            .authorize(
                self.http
                    .post(self.endpoint(&format!("/users/{}/confirm", user.id))),
            )
            .json(&ConfirmSignupBody { code, forced })
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            tracing::info!(email = %user.email, "Signup confirmed");
            Ok(ProviderOutcome::Succeeded)
        } else if status.is_client_error() {
            let errors = Self::rejection(response).await?;
            tracing::warn!(email = %user.email, ?errors, "Provider rejected signup confirmation");
            Ok(ProviderOutcome::Rejected(errors))
        } else {
            Err(AppError::provider_contract(format!(
                "signup confirmation returned {status}"
            )))
        }
    }

    async fn password_sign_in(
        &self,
        email: &str,
        password: &str,
        remember: bool,
        lockout_on_failure: bool,
    ) -> AppResult<SignInOutcome> {
        let body = SessionBody {
            email,
            password,
            remember,
            lockout_on_failure,
        };

        let response = self
            .authorize(self.http.post(self.endpoint("/sessions")))
            .json(&body)
            .send()
            .await?;

        match response.status() {
            status if status.is_success() => Ok(SignInOutcome::Succeeded),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                tracing::debug!(email = %email, "Provider declined password sign-in");
                Ok(SignInOutcome::Failed)
            }
            status => Err(AppError::provider_contract(format!(
                "password sign-in returned {status}"
            ))),
        }
    }

    async fn initiate_forgot_password(&self, user: &ProviderUser) -> AppResult<()> {
        let response = self
            .authorize(
                self.http
                    .post(self.endpoint(&format!("/users/{}/password-reset", user.id))),
            )
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            tracing::info!(email = %user.email, "Password-reset code dispatch requested");
            Ok(())
        } else {
            Err(AppError::provider_contract(format!(
                "password-reset dispatch returned {status}"
            )))
        }
    }

    async fn confirm_forgot_password(
        &self,
        user: &ProviderUser,
        code: &str,
        new_password: &str,
    ) -> AppResult<ProviderOutcome> {
        let response = self
            .authorize(self.http.post(
                self.endpoint(&format!("/users/{}/password-reset/confirm", user.id)),
            ))
            .json(&ConfirmResetBody { code, new_password })
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            tracing::info!(email = %user.email, "Password reset confirmed");
            Ok(ProviderOutcome::Succeeded)
        } else if status.is_client_error() {
            let errors = Self::rejection(response).await?;
            tracing::warn!(email = %user.email, ?errors, "Provider rejected password reset");
            Ok(ProviderOutcome::Rejected(errors))
        } else {
            Err(AppError::provider_contract(format!(
                "password-reset confirmation returned {status}"
            )))
        }
    }
}
