//! API layer - HTTP handlers and views
//!
//! This module contains all HTTP-related concerns:
//! - Form models and view-state envelopes
//! - Request handlers
//! - Route definitions

pub mod forms;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;
pub mod views;

pub use openapi::ApiDoc;
pub use routes::create_router;
pub use state::AppState;
