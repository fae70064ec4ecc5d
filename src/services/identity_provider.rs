//! Identity provider capability trait.
//!
//! The six operations the account flows consume. Any managed identity
//! service (or a self-hosted auth server) can sit behind this trait; the
//! HTTP-speaking implementation lives in `infra::IdentityApi`.

use async_trait::async_trait;

use crate::domain::{ProviderOutcome, ProviderUser, SignInOutcome};
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Capability interface over the external identity provider.
///
/// Every call may cross the network; implementations must not block the
/// runtime. Provider-rejected operations resolve to `Ok(Rejected(..))` or
/// `Ok(Failed)` — an `Err` means the call itself could not be completed.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Look up an account by email. `None` when the provider has no record.
    async fn find_user_by_email(&self, email: &str) -> AppResult<Option<ProviderUser>>;

    /// Create an account with the given credentials and profile attributes.
    async fn create_user(
        &self,
        email: &str,
        password: &str,
        attributes: &[(String, String)],
    ) -> AppResult<ProviderOutcome>;

    /// Submit a confirmation code for a pending account. With `forced` the
    /// account lands in a confirmed state regardless of prior status.
    async fn confirm_signup(
        &self,
        user: &ProviderUser,
        code: &str,
        forced: bool,
    ) -> AppResult<ProviderOutcome>;

    /// Attempt a password sign-in. This layer always passes
    /// `lockout_on_failure = false`; lockout policy stays provider-side.
    async fn password_sign_in(
        &self,
        email: &str,
        password: &str,
        remember: bool,
        lockout_on_failure: bool,
    ) -> AppResult<SignInOutcome>;

    /// Ask the provider to dispatch a password-reset code out-of-band.
    async fn initiate_forgot_password(&self, user: &ProviderUser) -> AppResult<()>;

    /// Finalize a password reset with the dispatched code.
    async fn confirm_forgot_password(
        &self,
        user: &ProviderUser,
        code: &str,
        new_password: &str,
    ) -> AppResult<ProviderOutcome>;
}
