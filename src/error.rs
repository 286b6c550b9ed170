//! Error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::aws::UpstreamError;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug)]
pub enum AppError {
    // Any failed outbound call to the log or threat service. The client
    // gets a generic body; the detail stays in the server log.
    UpstreamUnavailable(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::UpstreamUnavailable(msg) => {
                tracing::error!("Upstream service error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Upstream service unavailable")
            }
        };

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}

impl From<UpstreamError> for AppError {
    fn from(err: UpstreamError) -> Self {
        AppError::UpstreamUnavailable(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn upstream_failure_renders_generic_500() {
        let err = AppError::UpstreamUnavailable("security token invalid".to_string());
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert!(body.get("error").is_some());
        assert_eq!(body["status"], 500);
        // the upstream detail must not leak to the caller
        assert!(!body["error"].as_str().unwrap().contains("token"));
    }

    #[tokio::test]
    async fn adapter_errors_convert_at_the_boundary() {
        let upstream = UpstreamError::CloudWatchLogs("throttled".to_string());
        let response = AppError::from(upstream).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
