//! Domain layer - Provider-facing account types
//!
//! Contains the account record shape reported by the identity provider and
//! the outcome types its operations resolve to. No business logic lives
//! here; credential handling and code verification are provider internals.

pub mod account;

pub use account::{ProviderError, ProviderOutcome, ProviderUser, SignInOutcome};
