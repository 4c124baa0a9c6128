//! HTTP request handlers for the Paytimer API.
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
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::WorkdayCalendar;
use crate::engine::Engine;

use super::request::{RecomputeRequest, WorkdayRequest};
use super::response::{ApiError, ApiErrorResponse, RecomputeResponse, WorkdayResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/recompute", post(recompute_handler))
        .route("/workday", post(workday_handler))
        .with_state(state)
}

/// Handler for POST /recompute endpoint.
///
/// Returns the countdown and earnings snapshot at the requested instant.
async fn recompute_handler(
    State(state): State<AppState>,
    payload: Result<Json<RecomputeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing recompute request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let settings = request.settings.as_ref().unwrap_or(state.settings());
    let mut engine = match Engine::from_settings(settings) {
        Ok(engine) => engine,
        Err(err) => return engine_error_response(correlation_id, err),
    };

    let start_time = Instant::now();
    match engine.recompute(request.now) {
        Ok((countdown, earnings)) => {
            info!(
                correlation_id = %correlation_id,
                now = %request.now,
                state = %countdown.state,
                month = %earnings.month,
                duration_us = start_time.elapsed().as_micros(),
                "Recompute completed successfully"
            );
            json_response(StatusCode::OK, RecomputeResponse { countdown, earnings })
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for POST /workday endpoint.
///
/// Classifies a single date and finds the next workday on or after it.
async fn workday_handler(
    State(state): State<AppState>,
    payload: Result<Json<WorkdayRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing workday request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let settings = request.settings.as_ref().unwrap_or(state.settings());
    let engine = match Engine::from_settings(settings) {
        Ok(engine) => engine,
        Err(err) => return engine_error_response(correlation_id, err),
    };

    let policy = engine.policy();
    let date = request.date;
    let response = WorkdayResponse {
        date,
        is_workday: policy.is_workday(date),
        is_legal_holiday: policy.is_legal_holiday(date),
        holiday_name: policy.holiday_name(date).map(str::to_string),
        next_workday: policy.next_workday(date),
    };

    info!(
        correlation_id = %correlation_id,
        date = %date,
        is_workday = response.is_workday,
        "Workday request completed"
    );
    json_response(StatusCode::OK, response)
}

/// Maps a JSON extraction failure to a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message
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

/// Maps an engine error to its HTTP response, logging it.
fn engine_error_response(correlation_id: Uuid, err: crate::error::EngineError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        configuration = err.is_configuration_error(),
        "Request rejected"
    );
    ApiErrorResponse::from(err).into_response()
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}
