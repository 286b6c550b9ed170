//! Threat endpoint handler

use axum::{extract::State, Json};

use crate::models::ThreatRecord;
use crate::{AppResult, AppState};

/// Return the active findings from the region's detector.
///
/// An account with no detector (or no findings) answers 200 with an empty
/// array; only a failed upstream call is an error.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ThreatRecord>>> {
    let records = state.threats.fetch_threats().await?;
    Ok(Json(records))
}
