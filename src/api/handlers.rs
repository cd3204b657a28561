//! HTTP request handlers for the unit converter API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::{ConversionResult, catalog};

use super::request::ConversionRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/convert", post(convert_handler))
        .route("/units", get(units_handler))
        .with_state(state)
}

/// Handler for POST /convert endpoint.
///
/// Accepts a conversion request, fills default units where the caller did
/// not select any, and returns the converted value or an error payload.
async fn convert_handler(
    State(state): State<AppState>,
    payload: Result<Json<ConversionRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing conversion request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // Get the body text which contains the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    // Check if it's a missing field error
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    // Fill default units where the caller made no selection
    let Some((from, to)) = request.resolved_units() else {
        warn!(
            correlation_id = %correlation_id,
            category = %request.category,
            "No default units for unknown category"
        );
        let error = ApiError::validation_error(format!(
            "unknown category '{}': select explicit from/to units",
            request.category
        ));
        return (
            StatusCode::BAD_REQUEST,
            [(header::CONTENT_TYPE, "application/json")],
            Json(error),
        )
            .into_response();
    };

    match state.table().convert_tokens(&request.category, &from, &to, request.value) {
        Ok(converted) => {
            let result = ConversionResult::new(
                request.category.as_str(),
                from.as_str(),
                to.as_str(),
                request.value,
                converted,
            );
            info!(
                correlation_id = %correlation_id,
                category = %result.category,
                from = %result.from,
                to = %result.to,
                value = result.value,
                result = result.result,
                "Conversion completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(result),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Conversion failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Handler for GET /units endpoint.
///
/// Returns the categories, their units, and the default from/to selection
/// for each category.
async fn units_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(catalog()),
    )
}
