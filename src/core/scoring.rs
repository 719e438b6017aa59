use crate::models::{Buyer, RuleWeights, ScoreBand, Seller};

/// Calculate the rule-based match score for a seller that has already
/// passed the industry filter.
///
/// Scoring formula (default weights):
/// score = 70 (base, for the industry match)
///       + 20 if the seller is in the buyer's region
///       + 10 if the seller is certified
///
/// The bonuses are independent and additive, so the reachable scores with
/// the default weights are exactly {70, 80, 90, 100}.
pub fn calculate_match_score(seller: &Seller, buyer: &Buyer, weights: &RuleWeights) -> u32 {
    let mut score = weights.base;

    if seller.region == buyer.region {
        score += weights.region_bonus;
    }

    if seller.is_certified {
        score += weights.certified_bonus;
    }

    score
}

/// Render a 0..1 capacity fraction as a whole percentage.
///
/// Truncates toward zero rather than rounding, so 0.289 renders as 28%.
#[inline]
pub fn capacity_percent(capacity: f64) -> u32 {
    (capacity * 100.0).trunc() as u32
}

/// Band a model score for display.
///
/// The boundary at exactly 4.0 is Medium, not High (strict greater-than).
#[inline]
pub fn score_band(score: f64) -> ScoreBand {
    if score > 4.0 {
        ScoreBand::High
    } else if score > 3.0 {
        ScoreBand::Medium
    } else {
        ScoreBand::Low
    }
}
