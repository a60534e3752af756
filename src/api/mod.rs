//! HTTP API module for the sitter charge engine.
//!
//! This module provides the REST endpoint for charging a babysitting shift.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::ChargeRequest;
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
