//! Account Portal - account lifecycle frontend for a managed identity provider
//!
//! A thin web layer over an external identity service: signup, email
//! confirmation, login, and password reset. All credential handling,
//! confirmation-code issuance, and session token creation stay with the
//! provider; this crate marshals form submissions into provider calls and
//! maps the outcomes to view states.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Provider-facing account records and call outcomes
//! - **services**: Identity provider capability trait
//! - **infra**: HTTP client for the managed identity provider
//! - **api**: Form models, view states, handlers, and routes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{ProviderError, ProviderOutcome, ProviderUser, SignInOutcome};
pub use errors::{AppError, AppResult};
pub use services::IdentityProvider;
