//! HTTP request handlers for the timesheet engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::{Duration, Instant};

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{build_rate_table, calculate_fortnight};
use crate::config::BaseRates;
use crate::error::EngineError;
use crate::models::AuditTrace;

use super::request::CalculationRequest;
use super::response::{ApiError, ApiErrorResponse, FortnightResult};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/rates", get(get_rates_handler).post(derive_rates_handler))
        .route("/calculate", post(calculate_handler))
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

fn engine_error_response(correlation_id: Uuid, err: EngineError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Request rejected"
    );
    let api_error: ApiErrorResponse = err.into();
    json_response(api_error.status, api_error.error)
}

/// Maps a JSON extraction failure to a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
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

    json_response(StatusCode::BAD_REQUEST, error)
}

/// Whole microseconds in the duration, saturating at `u64::MAX`.
fn duration_micros(duration: Duration) -> u64 {
    u64::try_from(duration.as_micros()).unwrap_or(u64::MAX)
}

/// Handler for GET /rates.
///
/// Returns the rate table for the configured base rates.
async fn get_rates_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        entries = state.rate_table().len(),
        "Serving configured rate table"
    );
    json_response(StatusCode::OK, state.rate_table())
}

/// Handler for POST /rates.
///
/// Derives a rate table from the supplied base rates without storing it.
async fn derive_rates_handler(payload: Result<Json<BaseRates>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing rate table request");

    let base_rates = match payload {
        Ok(Json(base_rates)) => base_rates,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    if let Err(err) = base_rates.validate() {
        return engine_error_response(correlation_id, err);
    }

    json_response(StatusCode::OK, build_rate_table(&base_rates))
}

/// Handler for POST /calculate.
///
/// Accepts up to fourteen day entries and returns each day's breakdown with
/// the period totals.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    match perform_calculation(&state, &request) {
        Ok(mut result) => {
            let duration = start_time.elapsed();
            result.audit_trace.duration_us = duration_micros(duration);
            info!(
                correlation_id = %correlation_id,
                days_count = result.days.len(),
                total = %result.totals.total,
                warnings = result.audit_trace.warnings.len(),
                duration_us = duration.as_micros(),
                "Calculation completed successfully"
            );
            json_response(StatusCode::OK, result)
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Prices the request's days against its own base rates, or the configured ones.
fn perform_calculation(
    state: &AppState,
    request: &CalculationRequest,
) -> Result<FortnightResult, EngineError> {
    let rate_table = match &request.base_rates {
        Some(base_rates) => {
            base_rates.validate()?;
            build_rate_table(base_rates)
        }
        None => state.rate_table().clone(),
    };

    let calendar = request
        .holiday_calendar()
        .unwrap_or_else(|| state.config().public_holidays().clone());

    let shifts = request.shift_inputs();
    let fortnight = calculate_fortnight(&shifts, &rate_table, &calendar)?;

    Ok(FortnightResult {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        rate_table,
        days: fortnight.days,
        totals: fortnight.totals,
        audit_trace: AuditTrace {
            warnings: fortnight.warnings,
            duration_us: 0,
        },
    })
}
