//! Account lifecycle handlers.
//!
//! Each operation is one request/response exchange: validate the form
//! structurally, call the identity provider, pick the next view state.
//! Provider failures come back as field errors on the originating form;
//! step transitions are redirects. No session state is held here.

use axum::{
    extract::{Form, Query, State},
    response::{IntoResponse, Redirect, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

use crate::api::forms::{
    ConfirmForgotPasswordForm, ConfirmForm, ForgotPasswordForm, LoginForm, SignupForm,
};
use crate::api::views::{FieldErrors, FormView, MessageView};
use crate::api::AppState;
use crate::config::{
    ATTR_NAME, ERROR_KEY_LOGIN, ERROR_KEY_NOT_FOUND, ERROR_KEY_USER_EXISTS, ERROR_MSG_LOGIN,
    ERROR_MSG_NOT_FOUND, ERROR_MSG_USER_EXISTS,
};
use crate::domain::ProviderOutcome;
use crate::errors::AppResult;

const VIEW_SIGNUP: &str = "signup";
const VIEW_CONFIRM: &str = "confirm";
const VIEW_LOGIN: &str = "login";
const VIEW_FORGOT_PASSWORD: &str = "forgot-password";
const VIEW_CONFIRM_FORGOT_PASSWORD: &str = "confirm-forgot-password";
const VIEW_FORGOT_PASSWORD_CONFIRMED: &str = "forgot-password-confirmed";

const LANDING: &str = "/";
const CONFIRM_PATH: &str = "/accounts/confirm";
const FORGOT_PASSWORD_CONFIRMED_PATH: &str = "/accounts/forgotpasswordconfirmed";

/// Email carried between steps via the query string
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct StepPrefill {
    pub email: Option<String>,
}

/// Create account lifecycle routes
pub fn accounts_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", get(begin_signup).post(submit_signup))
        .route("/confirm", get(begin_confirm).post(submit_confirm))
        .route("/login", get(begin_login).post(submit_login))
        .route(
            "/forgotpassword",
            get(begin_forgot_password).post(submit_forgot_password),
        )
        .route(
            "/confirmforgotpassword",
            get(begin_confirm_forgot_password).post(submit_confirm_forgot_password),
        )
        .route(
            "/forgotpasswordconfirmed",
            get(show_forgot_password_confirmed),
        )
}

/// Display an empty signup form
#[utoipa::path(
    get,
    path = "/accounts/signup",
    tag = "Accounts",
    responses((status = 200, description = "Signup view state"))
)]
pub async fn begin_signup() -> FormView<SignupForm> {
    FormView::render(VIEW_SIGNUP, SignupForm::default())
}

/// Submit a signup form
#[utoipa::path(
    post,
    path = "/accounts/signup",
    tag = "Accounts",
    request_body(content = SignupForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Account created, continue to confirmation"),
        (status = 422, description = "Validation failed, account exists, or provider rejected the signup"),
        (status = 502, description = "Identity provider unreachable")
    )
)]
pub async fn submit_signup(
    State(state): State<AppState>,
    Form(form): Form<SignupForm>,
) -> AppResult<Response> {
    if let Err(errors) = form.validate() {
        let errors = FieldErrors::from(&errors);
        return Ok(FormView::rejected(VIEW_SIGNUP, form, errors).into_response());
    }

    if state
        .provider
        .find_user_by_email(&form.email)
        .await?
        .is_some()
    {
        let errors = FieldErrors::single(ERROR_KEY_USER_EXISTS, ERROR_MSG_USER_EXISTS);
        return Ok(FormView::rejected(VIEW_SIGNUP, form, errors).into_response());
    }

    // The email doubles as the profile name attribute
    let attributes = [(ATTR_NAME.to_string(), form.email.clone())];
    match state
        .provider
        .create_user(&form.email, &form.password, &attributes)
        .await?
    {
        ProviderOutcome::Succeeded => {
            tracing::info!(email = %form.email, "Signup accepted, awaiting confirmation");
            Ok(Redirect::to(CONFIRM_PATH).into_response())
        }
        ProviderOutcome::Rejected(provider_errors) => {
            let errors = FieldErrors::from(provider_errors);
            Ok(FormView::rejected(VIEW_SIGNUP, form, errors).into_response())
        }
    }
}

/// Display the confirmation form, optionally pre-filled from a prior step
#[utoipa::path(
    get,
    path = "/accounts/confirm",
    tag = "Accounts",
    params(StepPrefill),
    responses((status = 200, description = "Confirmation view state"))
)]
pub async fn begin_confirm(Query(prefill): Query<StepPrefill>) -> FormView<ConfirmForm> {
    FormView::render(
        VIEW_CONFIRM,
        ConfirmForm::with_email(prefill.email.unwrap_or_default()),
    )
}

/// Submit a confirmation code
#[utoipa::path(
    post,
    path = "/accounts/confirm",
    tag = "Accounts",
    request_body(content = ConfirmForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Account confirmed, continue to the landing page"),
        (status = 422, description = "Validation failed, unknown email, or provider rejected the code"),
        (status = 502, description = "Identity provider unreachable")
    )
)]
pub async fn submit_confirm(
    State(state): State<AppState>,
    Form(form): Form<ConfirmForm>,
) -> AppResult<Response> {
    if let Err(errors) = form.validate() {
        let errors = FieldErrors::from(&errors);
        return Ok(FormView::rejected(VIEW_CONFIRM, form, errors).into_response());
    }

    let Some(user) = state.provider.find_user_by_email(&form.email).await? else {
        let errors = FieldErrors::single(ERROR_KEY_NOT_FOUND, ERROR_MSG_NOT_FOUND);
        return Ok(FormView::rejected(VIEW_CONFIRM, form, errors).into_response());
    };

    match state
        .provider
        .confirm_signup(&user, &form.code, true)
        .await?
    {
        ProviderOutcome::Succeeded => Ok(Redirect::to(LANDING).into_response()),
        ProviderOutcome::Rejected(provider_errors) => {
            let errors = FieldErrors::from(provider_errors);
            Ok(FormView::rejected(VIEW_CONFIRM, form, errors).into_response())
        }
    }
}

/// Display an empty login form
#[utoipa::path(
    get,
    path = "/accounts/login",
    tag = "Accounts",
    responses((status = 200, description = "Login view state"))
)]
pub async fn begin_login() -> FormView<LoginForm> {
    FormView::render(VIEW_LOGIN, LoginForm::default())
}

/// Submit a login form
#[utoipa::path(
    post,
    path = "/accounts/login",
    tag = "Accounts",
    request_body(content = LoginForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Signed in, continue to the landing page"),
        (status = 422, description = "Validation failed or credentials do not match"),
        (status = 502, description = "Identity provider unreachable")
    )
)]
pub async fn submit_login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> AppResult<Response> {
    if let Err(errors) = form.validate() {
        let errors = FieldErrors::from(&errors);
        return Ok(FormView::rejected(VIEW_LOGIN, form, errors).into_response());
    }

    // No lockout at this layer; attempt throttling stays provider-side
    let outcome = state
        .provider
        .password_sign_in(&form.email, &form.password, form.remember, false)
        .await?;

    if outcome.succeeded() {
        tracing::info!(email = %form.email, "Password sign-in succeeded");
        Ok(Redirect::to(LANDING).into_response())
    } else {
        // One generic message; never reveals whether the account exists
        let errors = FieldErrors::single(ERROR_KEY_LOGIN, ERROR_MSG_LOGIN);
        Ok(FormView::rejected(VIEW_LOGIN, form, errors).into_response())
    }
}

/// Display an empty forgot-password form
#[utoipa::path(
    get,
    path = "/accounts/forgotpassword",
    tag = "Accounts",
    responses((status = 200, description = "Forgot-password view state"))
)]
pub async fn begin_forgot_password() -> FormView<ForgotPasswordForm> {
    FormView::render(VIEW_FORGOT_PASSWORD, ForgotPasswordForm::default())
}

/// Request a password-reset code
#[utoipa::path(
    post,
    path = "/accounts/forgotpassword",
    tag = "Accounts",
    request_body(content = ForgotPasswordForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Next view state: reset-code entry, or login when the account is unknown"),
        (status = 422, description = "Validation failed"),
        (status = 502, description = "Identity provider unreachable")
    )
)]
pub async fn submit_forgot_password(
    State(state): State<AppState>,
    Form(form): Form<ForgotPasswordForm>,
) -> AppResult<Response> {
    if let Err(errors) = form.validate() {
        let errors = FieldErrors::from(&errors);
        return Ok(FormView::rejected(VIEW_FORGOT_PASSWORD, form, errors).into_response());
    }

    match state.provider.find_user_by_email(&form.email).await? {
        // Unknown account: fall through to login without revealing anything
        None => Ok(FormView::render(VIEW_LOGIN, LoginForm::with_email(form.email)).into_response()),
        Some(user) => {
            state.provider.initiate_forgot_password(&user).await?;
            Ok(FormView::render(
                VIEW_CONFIRM_FORGOT_PASSWORD,
                ConfirmForgotPasswordForm::with_email(form.email),
            )
            .into_response())
        }
    }
}

/// Display the reset-code entry form
#[utoipa::path(
    get,
    path = "/accounts/confirmforgotpassword",
    tag = "Accounts",
    params(StepPrefill),
    responses((status = 200, description = "Reset-code entry view state"))
)]
pub async fn begin_confirm_forgot_password(
    Query(prefill): Query<StepPrefill>,
) -> FormView<ConfirmForgotPasswordForm> {
    FormView::render(
        VIEW_CONFIRM_FORGOT_PASSWORD,
        ConfirmForgotPasswordForm::with_email(prefill.email.unwrap_or_default()),
    )
}

/// Finalize a password reset with the dispatched code
#[utoipa::path(
    post,
    path = "/accounts/confirmforgotpassword",
    tag = "Accounts",
    request_body(content = ConfirmForgotPasswordForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Password reset, continue to the confirmation view"),
        (status = 200, description = "Unknown account: login view state"),
        (status = 422, description = "Validation failed or provider rejected the reset"),
        (status = 502, description = "Identity provider unreachable")
    )
)]
pub async fn submit_confirm_forgot_password(
    State(state): State<AppState>,
    Form(form): Form<ConfirmForgotPasswordForm>,
) -> AppResult<Response> {
    if let Err(errors) = form.validate() {
        let errors = FieldErrors::from(&errors);
        return Ok(
            FormView::rejected(VIEW_CONFIRM_FORGOT_PASSWORD, form, errors).into_response(),
        );
    }

    let Some(user) = state.provider.find_user_by_email(&form.email).await? else {
        return Ok(
            FormView::render(VIEW_LOGIN, LoginForm::with_email(form.email)).into_response(),
        );
    };

    match state
        .provider
        .confirm_forgot_password(&user, &form.code, &form.password)
        .await?
    {
        ProviderOutcome::Succeeded => {
            tracing::info!(email = %form.email, "Password reset finalized");
            Ok(Redirect::to(FORGOT_PASSWORD_CONFIRMED_PATH).into_response())
        }
        ProviderOutcome::Rejected(provider_errors) => {
            let errors = FieldErrors::from(provider_errors);
            Ok(FormView::rejected(VIEW_CONFIRM_FORGOT_PASSWORD, form, errors).into_response())
        }
    }
}

/// Terminal view shown after a completed password reset
#[utoipa::path(
    get,
    path = "/accounts/forgotpasswordconfirmed",
    tag = "Accounts",
    responses((status = 200, description = "Password reset confirmed"))
)]
pub async fn show_forgot_password_confirmed() -> MessageView {
    MessageView::render(
        VIEW_FORGOT_PASSWORD_CONFIRMED,
        "Your password has been reset",
    )
}
