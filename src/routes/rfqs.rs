use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use super::AppState;
use crate::models::{
    CatalogOptionsResponse, ErrorResponse, ScoreOutcome, ScoreRfqsRequest, ScoreRfqsResponse,
    SellerProfile,
};

/// Configure RFQ scoring routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/catalog/options", web::get().to(catalog_options))
        .route("/rfqs/score", web::post().to(score_rfqs));
}

/// Industry and region options for the seller-profile pickers
///
/// GET /api/v1/catalog/options
///
/// The option lists are the encoders' fitted vocabularies, so anything the
/// UI offers is guaranteed scorable.
async fn catalog_options(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(CatalogOptionsResponse {
        industries: state.scorer.industry_options().to_vec(),
        regions: state.scorer.region_options().to_vec(),
    })
}

/// Score RFQs endpoint
///
/// POST /api/v1/rfqs/score
///
/// Request body (the seller's own profile):
/// ```json
/// {
///   "industry": "Automotive",
///   "region": "North America"
/// }
/// ```
///
/// Every RFQ in the catalog comes back annotated with a score and band, or
/// a not-scorable marker when a label falls outside the fitted vocabulary.
async fn score_rfqs(
    state: web::Data<AppState>,
    req: web::Json<ScoreRfqsRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for score_rfqs request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let profile = SellerProfile {
        industry: req.industry.clone(),
        region: req.region.clone(),
    };

    tracing::info!(
        "Scoring {} RFQs against seller profile {}/{}",
        state.catalog.rfqs().len(),
        profile.industry,
        profile.region
    );

    let rfqs = state.scorer.score_all(state.catalog.rfqs(), &profile);
    let scored_count = rfqs
        .iter()
        .filter(|r| matches!(r.outcome, ScoreOutcome::Scored { .. }))
        .count();

    tracing::info!(
        "Scored {} of {} RFQs for profile {}/{}",
        scored_count,
        rfqs.len(),
        profile.industry,
        profile.region
    );

    HttpResponse::Ok().json(ScoreRfqsResponse { rfqs, scored_count })
}
