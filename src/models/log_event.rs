//! Log event model

use serde::Serialize;

/// One normalized CloudWatch log event, as returned by `/api/logs`.
///
/// Read-only projection of provider data; constructed per fetch and
/// discarded after the response is sent.
#[derive(Debug, Clone, Serialize)]
pub struct LogRecord {
    /// Event timestamp in epoch milliseconds.
    pub timestamp: i64,
    /// Raw event payload, possibly multi-line.
    pub message: String,
}
