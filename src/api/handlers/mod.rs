//! HTTP request handlers.

pub mod accounts;

pub use accounts::accounts_routes;
