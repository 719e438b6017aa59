use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to rank sellers against a buyer
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MatchSellersRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "buyer_id", rename = "buyerId")]
    pub buyer_id: String,
    #[serde(default)]
    #[serde(alias = "requireCertification", rename = "requireCertification")]
    pub require_certification: bool,
}

/// Request to score the RFQ table against a seller profile
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ScoreRfqsRequest {
    #[validate(length(min = 1))]
    pub industry: String,
    #[validate(length(min = 1))]
    pub region: String,
}
