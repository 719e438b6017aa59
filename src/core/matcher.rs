use crate::core::scoring::{calculate_match_score, capacity_percent};
use crate::models::{Buyer, RankedSeller, RuleWeights, Seller};

/// Result of the seller ranking process
#[derive(Debug)]
pub struct MatchResult {
    pub matches: Vec<RankedSeller>,
    pub total_candidates: usize,
}

/// Rule-based matching pipeline
///
/// # Pipeline Stages
/// 1. Exact industry filter against the buyer
/// 2. Optional certification filter
/// 3. Scoring
/// 4. Ranking (stable sort, descending by score)
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: RuleWeights,
}

impl Matcher {
    pub fn new(weights: RuleWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: RuleWeights::default(),
        }
    }

    /// Rank sellers for a buyer.
    ///
    /// Pure and total over in-memory data: there are no error paths, and an
    /// empty result set is valid.
    ///
    /// # Arguments
    /// * `buyer` - The buyer to match against
    /// * `sellers` - All candidate sellers from the catalog
    /// * `require_certification` - If set, uncertified sellers are excluded
    pub fn rank_sellers(
        &self,
        buyer: &Buyer,
        sellers: &[Seller],
        require_certification: bool,
    ) -> MatchResult {
        let total_candidates = sellers.len();

        let mut matches: Vec<RankedSeller> = sellers
            .iter()
            // Stage 1: exact industry equality, no fuzzy matching
            .filter(|seller| seller.industry == buyer.industry)
            // Stage 2: certification gate
            .filter(|seller| !require_certification || seller.is_certified)
            // Stage 3: score and project
            .map(|seller| RankedSeller {
                name: seller.name.clone(),
                industry: seller.industry.clone(),
                region: seller.region.clone(),
                is_certified: seller.is_certified,
                capacity_pct: capacity_percent(seller.capacity),
                match_score: calculate_match_score(seller, buyer, &self.weights),
                geographic_match: seller.region == buyer.region,
            })
            .collect();

        // Stage 4: rank. sort_by is stable, so ties keep the filtered order.
        matches.sort_by(|a, b| b.match_score.cmp(&a.match_score));

        MatchResult {
            matches,
            total_candidates,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
