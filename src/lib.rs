//! B2B Algo - Matching and RFQ scoring service for a B2B marketplace
//!
//! This library provides two independent flows over a static catalog:
//! a rule-based seller matcher (filter, score, rank against a buyer) and a
//! model-based RFQ scorer backed by serialized artifacts loaded at startup.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{Matcher, features::{encode_features, RFQ_FEATURE_NAMES}};
pub use crate::models::{Buyer, Seller, Rfq, SellerProfile, RankedSeller, RuleWeights, ScoreBand, ScoreOutcome, ScoredRfq};
pub use crate::services::{ArtifactError, Catalog, CategoricalEncoder, GradientBoostedModel, ScoringService, UnknownCategory};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let catalog = Catalog::seed();
        assert!(catalog.buyer_by_id("BUYER_01").is_some());
    }
}
