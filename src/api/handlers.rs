//! HTTP request handlers for the charge service API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{calculate_charge_breakdown, to_fixed_offset};
use crate::error::EngineResult;
use crate::models::{AuditTrace, ChargeResult, cents_to_dollars};

use super::request::ChargeRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/charge", post(charge_handler))
        .with_state(state)
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Handler for POST /charge endpoint.
///
/// Accepts a shift and returns its charge with an itemised breakdown.
async fn charge_handler(
    State(state): State<AppState>,
    payload: Result<Json<ChargeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing charge request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
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
            return json_response(StatusCode::BAD_REQUEST, error);
        }
    };

    let start_time = Instant::now();
    match perform_charge(&request, &state) {
        Ok(mut result) => {
            let duration_us = start_time.elapsed().as_micros() as u64;
            result.audit_trace.duration_us = duration_us;
            info!(
                correlation_id = %correlation_id,
                timezone = %result.timezone,
                total_cents = result.total_cents,
                duration_us,
                "Charge calculated successfully"
            );
            json_response(StatusCode::OK, result)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Charge calculation rejected"
            );
            let api_error: ApiErrorResponse = err.into();
            api_error.into_response()
        }
    }
}

/// Resolves the request into a shift and charges it.
fn perform_charge(request: &ChargeRequest, state: &AppState) -> EngineResult<ChargeResult> {
    let config = state.config();
    let tz = request.resolve_timezone(config.timezone())?;
    let interval = request.to_interval(tz)?;
    let breakdown = calculate_charge_breakdown(Some(&interval))?;

    Ok(ChargeResult {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        timezone: tz.name().to_string(),
        start_time: to_fixed_offset(interval.start()),
        end_time: to_fixed_offset(interval.end()),
        total_cents: breakdown.total_cents,
        total_dollars: cents_to_dollars(breakdown.total_cents),
        lines: breakdown.lines,
        audit_trace: AuditTrace {
            steps: breakdown.audit_steps,
            duration_us: 0,
        },
    })
}
