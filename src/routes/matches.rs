use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use super::AppState;
use crate::models::{ErrorResponse, HealthResponse, MatchSellersRequest, MatchSellersResponse};

/// Configure health, catalog, and buyer-side matching routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/catalog/buyers", web::get().to(list_buyers))
        .route("/matches/find", web::post().to(find_matches));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Buyer options for the UI selection control
///
/// GET /api/v1/catalog/buyers
async fn list_buyers(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.catalog.buyers())
}

/// Rank sellers endpoint
///
/// POST /api/v1/matches/find
///
/// Request body:
/// ```json
/// {
///   "buyerId": "BUYER_01",
///   "requireCertification": false
/// }
/// ```
async fn find_matches(
    state: web::Data<AppState>,
    req: web::Json<MatchSellersRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for find_matches request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let buyer = match state.catalog.buyer_by_id(&req.buyer_id) {
        Some(buyer) => buyer.clone(),
        None => {
            tracing::info!("Unknown buyer id: {}", req.buyer_id);
            return HttpResponse::NotFound().json(ErrorResponse {
                error: "Unknown buyer".to_string(),
                message: format!("No buyer with id {:?}", req.buyer_id),
                status_code: 404,
            });
        }
    };

    tracing::info!(
        "Ranking sellers for buyer {} ({}/{}), require_certification: {}",
        buyer.id,
        buyer.industry,
        buyer.region,
        req.require_certification
    );

    let result = state
        .matcher
        .rank_sellers(&buyer, state.catalog.sellers(), req.require_certification);

    tracing::info!(
        "Returning {} ranked sellers for buyer {} (from {} candidates)",
        result.matches.len(),
        buyer.id,
        result.total_candidates
    );

    HttpResponse::Ok().json(MatchSellersResponse {
        buyer,
        matches: result.matches,
        total_candidates: result.total_candidates,
    })
}
