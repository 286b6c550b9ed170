//! Log endpoint handler

use axum::{extract::State, Json};

use crate::models::LogRecord;
use crate::{AppResult, AppState};

/// Return the current window of log events from the configured stream.
///
/// No query parameters, pagination, or server-side filtering; the result
/// set is whatever the adapter's single call returns.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<LogRecord>>> {
    let records = state.logs.fetch_logs().await?;
    Ok(Json(records))
}
