//! HTTP API module for the Paytimer engine.
//!
//! This module exposes the engine over JSON: `POST /recompute` returns the
//! countdown and earnings at a caller-supplied instant, and `POST /workday`
//! classifies a single date.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{RecomputeRequest, WorkdayRequest};
pub use response::{ApiError, RecomputeResponse, WorkdayResponse};
pub use state::AppState;
