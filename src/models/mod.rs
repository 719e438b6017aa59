// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Buyer, Seller, Rfq, SellerProfile, RankedSeller, ScoreBand, ScoreOutcome, ScoredRfq, RuleWeights};
pub use requests::{MatchSellersRequest, ScoreRfqsRequest};
pub use responses::{MatchSellersResponse, ScoreRfqsResponse, CatalogOptionsResponse, HealthResponse, ErrorResponse};
