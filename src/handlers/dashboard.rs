//! Dashboard page handler

use axum::response::Html;

/// Serve the embedded single-page dashboard.
///
/// The page fetches `/api/logs` and `/api/threats` itself; filtering
/// happens entirely in the browser.
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../assets/dashboard.html"))
}
