//! Infrastructure layer - External systems integration
//!
//! The only external system this layer talks to is the managed identity
//! provider; `IdentityApi` is its HTTP client.

pub mod identity_api;

pub use identity_api::IdentityApi;
