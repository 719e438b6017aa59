use serde::{Deserialize, Serialize};

/// Buyer account from the static catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Buyer {
    pub id: String,
    pub name: String,
    pub industry: String,
    pub region: String,
}

/// Seller profile from the static catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Seller {
    pub name: String,
    pub industry: String,
    pub region: String,
    #[serde(rename = "isCertified")]
    pub is_certified: bool,
    /// Available capacity as a 0..1 fraction
    pub capacity: f64,
}

/// Request-for-quote record from the static catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rfq {
    pub id: String,
    #[serde(rename = "buyerName")]
    pub buyer_name: String,
    pub industry: String,
    pub region: String,
    pub budget: f64,
}

/// Seller profile selected in the UI for RFQ scoring
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SellerProfile {
    pub industry: String,
    pub region: String,
}

/// Ranked seller produced by the rule-based matcher
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedSeller {
    pub name: String,
    pub industry: String,
    pub region: String,
    #[serde(rename = "isCertified")]
    pub is_certified: bool,
    /// Capacity as a whole percentage (fraction * 100, truncated toward zero)
    #[serde(rename = "capacityPct")]
    pub capacity_pct: u32,
    #[serde(rename = "matchScore")]
    pub match_score: u32,
    /// True iff the seller's region equals the buyer's region
    #[serde(rename = "geographicMatch")]
    pub geographic_match: bool,
}

/// Coarse severity classification of a model score, for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    High,
    Medium,
    Low,
}

/// Outcome of scoring one RFQ against a seller profile
///
/// A row that cannot be scored is kept distinguishable from a row that
/// scored genuinely low: unknown categories surface as `NotScorable`
/// instead of being coerced to a numeric sentinel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum ScoreOutcome {
    Scored { score: f64, band: ScoreBand },
    NotScorable { reason: String },
}

/// RFQ annotated with its scoring outcome
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredRfq {
    pub id: String,
    #[serde(rename = "buyerName")]
    pub buyer_name: String,
    pub industry: String,
    pub region: String,
    pub budget: f64,
    #[serde(flatten)]
    pub outcome: ScoreOutcome,
}

/// Rule-based scoring weights
#[derive(Debug, Clone, Copy)]
pub struct RuleWeights {
    pub base: u32,
    pub region_bonus: u32,
    pub certified_bonus: u32,
}

impl Default for RuleWeights {
    fn default() -> Self {
        Self {
            base: 70,
            region_bonus: 20,
            certified_bonus: 10,
        }
    }
}
