//! AWS adapters
//!
//! Read-only clients for the two managed services the dashboard draws
//! from: CloudWatch Logs (log events) and GuardDuty (threat findings).
//! Each adapter issues the vendor calls and flattens the responses into
//! the normalized record shapes under `models`.

pub mod logs;
pub mod threats;

pub use logs::LogsAdapter;
pub use threats::ThreatsAdapter;

use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_credential_types::Credentials;
use thiserror::Error;

use crate::config::Config;

/// A failed outbound call to the log or threat service.
///
/// Carries the SDK's error context for the server log; the HTTP boundary
/// surfaces a generic failure instead. Auth failures, missing resources,
/// throttling, and network errors all land here — the caller is not told
/// which one it was.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("CloudWatch Logs request failed: {0}")]
    CloudWatchLogs(String),

    #[error("GuardDuty request failed: {0}")]
    GuardDuty(String),
}

/// Resolve the shared SDK configuration from the explicit credentials in
/// `Config`. Nothing is read from the ambient AWS environment or instance
/// metadata; the dashboard talks to exactly the account it was configured
/// with.
pub async fn sdk_config(config: &Config) -> SdkConfig {
    let credentials = Credentials::new(
        config.aws_access_key_id.clone(),
        config.aws_secret_access_key.clone(),
        None,
        None,
        "environment",
    );

    aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(config.aws_region.clone()))
        .credentials_provider(credentials)
        .load()
        .await
}
