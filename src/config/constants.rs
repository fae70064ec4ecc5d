//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 3000;

// =============================================================================
// Identity Provider
// =============================================================================

/// Default provider API base URL (for development)
pub const DEFAULT_PROVIDER_BASE_URL: &str = "http://127.0.0.1:9090";

/// Default client identifier presented to the provider
pub const DEFAULT_PROVIDER_CLIENT_ID: &str = "account-portal-dev";

/// Default per-request timeout for provider calls, in seconds
pub const DEFAULT_PROVIDER_TIMEOUT_SECS: u64 = 10;

/// Header carrying the client identifier on every provider request
pub const PROVIDER_CLIENT_ID_HEADER: &str = "X-Client-Id";

/// Profile attribute populated with the email at signup
pub const ATTR_NAME: &str = "name";

// =============================================================================
// Flow error keys & messages
// =============================================================================

/// Field-error key reported when signup hits an existing account
pub const ERROR_KEY_USER_EXISTS: &str = "UserExists";

/// Message paired with [`ERROR_KEY_USER_EXISTS`]
pub const ERROR_MSG_USER_EXISTS: &str = "User already exists";

/// Field-error key reported when confirmation targets an unknown email
pub const ERROR_KEY_NOT_FOUND: &str = "NotFound";

/// Message paired with [`ERROR_KEY_NOT_FOUND`]
pub const ERROR_MSG_NOT_FOUND: &str = "A user was not found with this email address";

/// Field-error key for a failed password sign-in
pub const ERROR_KEY_LOGIN: &str = "LoginError";

/// Generic sign-in failure message; never distinguishes an unknown account
/// from a wrong password
pub const ERROR_MSG_LOGIN: &str = "Email and password do not match";
