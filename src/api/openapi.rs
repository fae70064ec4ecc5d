//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::forms::{
    ConfirmForgotPasswordForm, ConfirmForm, ForgotPasswordForm, LoginForm, SignupForm,
};
use crate::api::handlers::accounts;
use crate::api::views::{FieldErrors, MessageView};
use crate::domain::{ProviderError, ProviderUser};

/// OpenAPI documentation for the account portal
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Account Portal",
        version = "0.1.0",
        description = "Account lifecycle web frontend backed by a managed identity provider",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT"),
        contact(name = "API Support", email = "support@example.com")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        accounts::begin_signup,
        accounts::submit_signup,
        accounts::begin_confirm,
        accounts::submit_confirm,
        accounts::begin_login,
        accounts::submit_login,
        accounts::begin_forgot_password,
        accounts::submit_forgot_password,
        accounts::begin_confirm_forgot_password,
        accounts::submit_confirm_forgot_password,
        accounts::show_forgot_password_confirmed,
    ),
    components(
        schemas(
            // Form models
            SignupForm,
            ConfirmForm,
            LoginForm,
            ForgotPasswordForm,
            ConfirmForgotPasswordForm,
            // View state pieces
            FieldErrors,
            MessageView,
            // Provider-facing types
            ProviderUser,
            ProviderError,
        )
    ),
    tags(
        (name = "Accounts", description = "Signup, confirmation, login, and password reset flows")
    )
)]
pub struct ApiDoc;
