use std::path::Path;

use crate::core::features::{encode_features, RFQ_FEATURE_NAMES};
use crate::core::scoring::score_band;
use crate::models::{Rfq, ScoreOutcome, ScoredRfq, SellerProfile};
use crate::services::artifacts::{
    ArtifactError, CategoricalEncoder, GradientBoostedModel, UnknownCategory,
};

/// Model-backed RFQ scoring service
///
/// Owns the pre-trained model and both categorical encoders. Constructed
/// once at startup from the serialized artifacts (validating the feature
/// schema) and passed by handle into request handlers; every request
/// reuses the in-memory artifacts rather than re-reading from disk.
#[derive(Debug, Clone)]
pub struct ScoringService {
    model: GradientBoostedModel,
    industry_encoder: CategoricalEncoder,
    region_encoder: CategoricalEncoder,
}

impl ScoringService {
    pub fn new(
        model: GradientBoostedModel,
        industry_encoder: CategoricalEncoder,
        region_encoder: CategoricalEncoder,
    ) -> Self {
        Self {
            model,
            industry_encoder,
            region_encoder,
        }
    }

    /// Load the model and encoder artifacts from disk.
    ///
    /// The model is validated against the RFQ feature schema here; any
    /// artifact problem is an error at construction, before the service
    /// scores anything.
    pub fn load<P: AsRef<Path>>(
        model_path: P,
        industry_encoder_path: P,
        region_encoder_path: P,
    ) -> Result<Self, ArtifactError> {
        let model = GradientBoostedModel::load(model_path, &RFQ_FEATURE_NAMES)?;
        let industry_encoder = CategoricalEncoder::load(industry_encoder_path)?;
        let region_encoder = CategoricalEncoder::load(region_encoder_path)?;

        Ok(Self::new(model, industry_encoder, region_encoder))
    }

    /// Industry labels the UI picker can offer (the fitted vocabulary)
    pub fn industry_options(&self) -> &[String] {
        self.industry_encoder.classes()
    }

    /// Region labels the UI picker can offer (the fitted vocabulary)
    pub fn region_options(&self) -> &[String] {
        self.region_encoder.classes()
    }

    /// Score one RFQ against a seller profile.
    ///
    /// Returns the model prediction rounded to 2 decimal places, or an
    /// `UnknownCategory` error when a label is outside the fitted
    /// vocabulary. The error is never coerced to a numeric score.
    pub fn score_rfq(&self, rfq: &Rfq, seller: &SellerProfile) -> Result<f64, UnknownCategory> {
        let features = encode_features(rfq, seller, &self.industry_encoder, &self.region_encoder)?;
        let raw = self.model.predict(&features);

        Ok((raw * 100.0).round() / 100.0)
    }

    /// Score the whole RFQ table against a seller profile.
    ///
    /// Successful scores are banded for display; rows with an unknown
    /// category come back as `NotScorable` with the reason, so a row that
    /// cannot be scored stays distinguishable from one that scored low.
    pub fn score_all(&self, rfqs: &[Rfq], seller: &SellerProfile) -> Vec<ScoredRfq> {
        rfqs.iter()
            .map(|rfq| {
                let outcome = match self.score_rfq(rfq, seller) {
                    Ok(score) => ScoreOutcome::Scored {
                        score,
                        band: score_band(score),
                    },
                    Err(e) => {
                        tracing::warn!("RFQ {} not scorable: {}", rfq.id, e);
                        ScoreOutcome::NotScorable {
                            reason: e.to_string(),
                        }
                    }
                };

                ScoredRfq {
                    id: rfq.id.clone(),
                    buyer_name: rfq.buyer_name.clone(),
                    industry: rfq.industry.clone(),
                    region: rfq.region.clone(),
                    budget: rfq.budget,
                    outcome,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ScoreBand;
    use crate::services::artifacts::{CategoricalEncoder, GradientBoostedModel};
    use std::io::Write;

    fn test_service() -> ScoringService {
        // Splits on is_industry_match (column 2): +1.25 on match, -1.25 off.
        let model_json = r#"{
            "feature_names": [
                "buyer_industry_code",
                "seller_industry_code",
                "is_industry_match",
                "region_code",
                "order_value"
            ],
            "init_score": 3.0,
            "trees": [
                { "nodes": [
                    { "kind": "split", "feature": 2, "threshold": 0.5, "left": 1, "right": 2 },
                    { "kind": "leaf", "value": -1.25 },
                    { "kind": "leaf", "value": 1.25 }
                ] }
            ]
        }"#;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(model_json.as_bytes()).unwrap();
        let model = GradientBoostedModel::load(file.path(), &RFQ_FEATURE_NAMES).unwrap();

        let industry_encoder = CategoricalEncoder::from_classes(
            "industry",
            vec!["Automotive".to_string(), "Healthcare".to_string()],
        );
        let region_encoder = CategoricalEncoder::from_classes(
            "region",
            vec!["North America".to_string(), "Europe".to_string()],
        );

        ScoringService::new(model, industry_encoder, region_encoder)
    }

    fn rfq(id: &str, industry: &str, region: &str, budget: f64) -> Rfq {
        Rfq {
            id: id.to_string(),
            buyer_name: "AutoParts Corp".to_string(),
            industry: industry.to_string(),
            region: region.to_string(),
            budget,
        }
    }

    fn automotive_profile() -> SellerProfile {
        SellerProfile {
            industry: "Automotive".to_string(),
            region: "North America".to_string(),
        }
    }

    #[test]
    fn test_score_rfq_industry_match() {
        let service = test_service();

        let score = service
            .score_rfq(&rfq("RFQ-1", "Automotive", "Europe", 50000.0), &automotive_profile())
            .unwrap();

        assert_eq!(score, 4.25);
    }

    #[test]
    fn test_score_rfq_industry_mismatch() {
        let service = test_service();

        let score = service
            .score_rfq(&rfq("RFQ-2", "Healthcare", "Europe", 50000.0), &automotive_profile())
            .unwrap();

        assert_eq!(score, 1.75);
    }

    #[test]
    fn test_unknown_category_propagates() {
        let service = test_service();

        let err = service
            .score_rfq(&rfq("RFQ-3", "Aerospace", "Europe", 50000.0), &automotive_profile())
            .unwrap_err();

        assert_eq!(err.encoder, "industry");
        assert_eq!(err.label, "Aerospace");
    }

    #[test]
    fn test_score_all_mixes_scored_and_not_scorable() {
        let service = test_service();

        let rfqs = vec![
            rfq("RFQ-1", "Automotive", "Europe", 50000.0),
            rfq("RFQ-2", "Aerospace", "Europe", 50000.0),
        ];

        let scored = service.score_all(&rfqs, &automotive_profile());

        assert_eq!(scored.len(), 2);
        assert_eq!(
            scored[0].outcome,
            ScoreOutcome::Scored {
                score: 4.25,
                band: ScoreBand::High
            }
        );
        assert!(matches!(scored[1].outcome, ScoreOutcome::NotScorable { .. }));
    }

    #[test]
    fn test_vocabulary_options() {
        let service = test_service();

        assert_eq!(service.industry_options(), &["Automotive", "Healthcare"][..]);
        assert_eq!(service.region_options(), &["North America", "Europe"][..]);
    }
}
