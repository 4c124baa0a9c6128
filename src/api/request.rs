//! Request types for the Paytimer HTTP API.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::config::SettingsSnapshot;

/// Request body for the `/recompute` endpoint.
///
/// `now` is the caller's local wall-clock time; the server never reads its
/// own clock. When `settings` is omitted the server's default settings apply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecomputeRequest {
    /// The instant to evaluate.
    pub now: NaiveDateTime,
    /// Settings overriding the server defaults for this request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<SettingsSnapshot>,
}

/// Request body for the `/workday` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkdayRequest {
    /// The date to classify.
    pub date: NaiveDate,
    /// Settings overriding the server defaults for this request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<SettingsSnapshot>,
}
