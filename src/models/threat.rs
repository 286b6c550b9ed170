//! Threat finding model

use serde::Serialize;

/// One normalized GuardDuty finding, as returned by `/api/threats`.
#[derive(Debug, Clone, Serialize)]
pub struct ThreatRecord {
    /// Provider-assigned finding id, unique within a detector's finding set.
    pub id: String,
    /// Finding classification, e.g. `Recon:EC2/PortProbe`.
    #[serde(rename = "type")]
    pub finding_type: String,
    /// Numeric severity score as reported by GuardDuty (0-10).
    pub severity: f64,
    /// Human-readable explanation of the finding.
    pub description: String,
}
