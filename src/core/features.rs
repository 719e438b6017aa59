use crate::models::{Rfq, SellerProfile};
use crate::services::artifacts::{CategoricalEncoder, UnknownCategory};

/// Ordered feature schema the RFQ scoring model was fit against.
///
/// Column order and count are load-bearing: the model artifact declares the
/// schema it was trained on, and it is validated against this list at load
/// time. A reordered or missing column is a startup failure, never a silent
/// mis-prediction.
pub const RFQ_FEATURE_NAMES: [&str; 5] = [
    "buyer_industry_code",
    "seller_industry_code",
    "is_industry_match",
    "region_code",
    "order_value",
];

/// Number of columns in the RFQ feature schema
pub const RFQ_FEATURE_COUNT: usize = RFQ_FEATURE_NAMES.len();

/// Build the model input vector for one RFQ / seller-profile pairing.
///
/// Columns, in schema order:
/// 1. `buyer_industry_code` - encoded RFQ industry
/// 2. `seller_industry_code` - encoded seller industry
/// 3. `is_industry_match` - 1.0 iff the industry strings are equal (exact
///    equality, computed independently of the encoded codes)
/// 4. `region_code` - encoded RFQ region; the seller's region is not a
///    feature in this schema
/// 5. `order_value` - the RFQ budget, passed through unchanged
///
/// Fails with `UnknownCategory` when a label was not in the encoder's
/// fitted vocabulary. The error propagates to the caller; no sentinel
/// score is substituted.
pub fn encode_features(
    rfq: &Rfq,
    seller: &SellerProfile,
    industry_encoder: &CategoricalEncoder,
    region_encoder: &CategoricalEncoder,
) -> Result<[f64; RFQ_FEATURE_COUNT], UnknownCategory> {
    let buyer_industry_code = industry_encoder.encode(&rfq.industry)? as f64;
    let seller_industry_code = industry_encoder.encode(&seller.industry)? as f64;
    let is_industry_match = if rfq.industry == seller.industry { 1.0 } else { 0.0 };
    let region_code = region_encoder.encode(&rfq.region)? as f64;
    let order_value = rfq.budget;

    Ok([
        buyer_industry_code,
        seller_industry_code,
        is_industry_match,
        region_code,
        order_value,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn industry_encoder() -> CategoricalEncoder {
        CategoricalEncoder::from_classes(
            "industry",
            vec![
                "Automotive".to_string(),
                "Healthcare".to_string(),
                "Industrial".to_string(),
            ],
        )
    }

    fn region_encoder() -> CategoricalEncoder {
        CategoricalEncoder::from_classes(
            "region",
            vec![
                "North America".to_string(),
                "Europe".to_string(),
                "APAC".to_string(),
            ],
        )
    }

    fn rfq(industry: &str, region: &str, budget: f64) -> Rfq {
        Rfq {
            id: "RFQ-99".to_string(),
            buyer_name: "AutoParts Corp".to_string(),
            industry: industry.to_string(),
            region: region.to_string(),
            budget,
        }
    }

    fn profile(industry: &str, region: &str) -> SellerProfile {
        SellerProfile {
            industry: industry.to_string(),
            region: region.to_string(),
        }
    }

    #[test]
    fn test_feature_vector_layout() {
        let features = encode_features(
            &rfq("Automotive", "North America", 50000.0),
            &profile("Automotive", "Europe"),
            &industry_encoder(),
            &region_encoder(),
        )
        .unwrap();

        assert_eq!(features.len(), 5);
        assert_eq!(features[0], 0.0); // Automotive
        assert_eq!(features[1], 0.0); // Automotive
        assert_eq!(features[2], 1.0); // industry match
        assert_eq!(features[3], 0.0); // North America
        assert_eq!(features[4], 50000.0); // budget, unchanged
    }

    #[test]
    fn test_industry_mismatch_flag() {
        let features = encode_features(
            &rfq("Healthcare", "Europe", 80000.0),
            &profile("Automotive", "Europe"),
            &industry_encoder(),
            &region_encoder(),
        )
        .unwrap();

        assert_eq!(features[0], 1.0); // Healthcare
        assert_eq!(features[1], 0.0); // Automotive
        assert_eq!(features[2], 0.0); // no match
    }

    #[test]
    fn test_seller_region_is_not_a_feature() {
        let enc_i = industry_encoder();
        let enc_r = region_encoder();
        let base = rfq("Automotive", "APAC", 30000.0);

        let a = encode_features(&base, &profile("Automotive", "Europe"), &enc_i, &enc_r).unwrap();
        let b = encode_features(&base, &profile("Automotive", "APAC"), &enc_i, &enc_r).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn test_unknown_industry_fails() {
        let err = encode_features(
            &rfq("Aerospace", "Europe", 10000.0),
            &profile("Automotive", "Europe"),
            &industry_encoder(),
            &region_encoder(),
        )
        .unwrap_err();

        assert_eq!(err.encoder, "industry");
        assert_eq!(err.label, "Aerospace");
    }

    #[test]
    fn test_unknown_region_fails() {
        let err = encode_features(
            &rfq("Automotive", "Antarctica", 10000.0),
            &profile("Automotive", "Europe"),
            &industry_encoder(),
            &region_encoder(),
        )
        .unwrap_err();

        assert_eq!(err.encoder, "region");
        assert_eq!(err.label, "Antarctica");
    }
}
