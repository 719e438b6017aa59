use serde::{Deserialize, Serialize};
use crate::models::domain::{Buyer, RankedSeller, ScoredRfq};

/// Response for the seller matching endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchSellersResponse {
    pub buyer: Buyer,
    pub matches: Vec<RankedSeller>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
}

/// Response for the RFQ scoring endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreRfqsResponse {
    pub rfqs: Vec<ScoredRfq>,
    #[serde(rename = "scoredCount")]
    pub scored_count: usize,
}

/// Option lists backing the UI value pickers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogOptionsResponse {
    pub industries: Vec<String>,
    pub regions: Vec<String>,
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
