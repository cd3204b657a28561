//! HTTP API module for the unit converter.
//!
//! This module provides the REST endpoints that serve conversions and the
//! category/unit catalog.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::ConversionRequest;
pub use response::ApiError;
pub use state::AppState;
