use actix_web::{get, web, HttpResponse};
use std::sync::Arc;

use crate::state::AppState;
use crate::types::StatsResponse;

/// Liveness probe; the only endpoint reachable without an API key
#[get("/healthz")]
pub async fn health() -> actix_web::Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(serde_json::json!({ "status": "ok" })))
}

/// Current index statistics
#[get("/stats")]
pub async fn stats(state: web::Data<Arc<AppState>>) -> actix_web::Result<HttpResponse> {
    let (clusters, dimension) = state.engine.stats().await;

    Ok(HttpResponse::Ok().json(StatsResponse {
        clusters,
        dimension,
        built: clusters > 0,
    }))
}
