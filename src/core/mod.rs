// Core algorithm exports
pub mod features;
pub mod matcher;
pub mod scoring;

pub use features::{encode_features, RFQ_FEATURE_COUNT, RFQ_FEATURE_NAMES};
pub use matcher::{MatchResult, Matcher};
pub use scoring::{calculate_match_score, capacity_percent, score_band};
