// Route exports
pub mod matches;
pub mod rfqs;

use actix_web::web;
use std::sync::Arc;

use crate::core::Matcher;
use crate::services::{Catalog, ScoringService};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub matcher: Matcher,
    pub scorer: Arc<ScoringService>,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(matches::configure)
            .configure(rfqs::configure),
    );
}
