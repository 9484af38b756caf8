use serde::{Deserialize, Serialize};
use crate::models::domain::ScoredCandidate;

/// Response for the rank endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankMatchesResponse {
    pub request_id: uuid::Uuid,
    pub matches: Vec<ScoredCandidate>,
    /// Candidates received before exclusions
    pub total_candidates: usize,
    /// Candidates that were scored after exclusions
    pub total_ranked: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
