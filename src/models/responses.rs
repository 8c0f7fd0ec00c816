use serde::{Deserialize, Serialize};

use crate::models::domain::{LenderRecord, PrequalAnswer};

/// Response for the filter endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterLendersResponse {
    pub matches: Vec<LenderRecord>,
    pub total_matches: usize,
    pub total_candidates: usize,
}

/// Response for the ask endpoint (free-text mode)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskLenderResponse {
    pub lender: String,
    pub answer: String,
}

/// Response for the prequalify endpoint (structured mode)
///
/// When the model's reply cannot be parsed even after span recovery,
/// `parsed` is false and `raw` carries the verbatim reply for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrequalifyResponse {
    pub parsed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<PrequalAnswer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
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
