//! Response types for the Paytimer HTTP API.
//!
//! This module defines the success bodies, the error response structure and
//! the mapping from [`EngineError`] to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{CountdownState, EarningsSnapshot};

/// Response body for the `/recompute` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecomputeResponse {
    /// The countdown to the next schedule boundary.
    pub countdown: CountdownState,
    /// Earnings so far today, this month and this year.
    pub earnings: EarningsSnapshot,
}

/// Response body for the `/workday` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkdayResponse {
    /// The date that was classified.
    pub date: NaiveDate,
    /// Whether the date is a scheduled workday.
    pub is_workday: bool,
    /// Whether the date is a legal holiday.
    pub is_legal_holiday: bool,
    /// The holiday's display name, if it has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holiday_name: Option<String>,
    /// The first workday on or after `date`, if one exists within a year.
    pub next_workday: Option<NaiveDate>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates an invalid configuration error response.
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Self::with_details(
            "INVALID_CONFIGURATION",
            message,
            "The supplied settings violate a configuration constraint",
        )
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidShiftWindow { .. }
            | EngineError::InvalidWeeklyMask { .. }
            | EngineError::InvalidSalary { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::invalid_configuration(error.to_string()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_configuration_error_is_bad_request() {
        let engine_error = EngineError::InvalidShiftWindow {
            start: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
            end: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "INVALID_CONFIGURATION");
        assert!(api_error.error.message.contains("18:00:00"));
    }

    #[test]
    fn test_config_not_found_is_server_error() {
        let api_error: ApiErrorResponse = EngineError::ConfigNotFound {
            path: "settings.yaml".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "CONFIG_ERROR");
    }

    #[tokio::test]
    async fn test_error_response_renders_json_body() {
        let response =
            ApiErrorResponse::from(EngineError::InvalidWeeklyMask { len: 3 }).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "application/json"
        );
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "INVALID_CONFIGURATION");
        assert!(error.message.contains("got 3"));
    }

    #[test]
    fn test_workday_response_omits_missing_name() {
        let response = WorkdayResponse {
            date: NaiveDate::from_ymd_opt(2026, 1, 17).unwrap(),
            is_workday: false,
            is_legal_holiday: false,
            holiday_name: None,
            next_workday: NaiveDate::from_ymd_opt(2026, 1, 19),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("holiday_name"));
        assert!(json.contains("\"next_workday\":\"2026-01-19\""));
    }
}
