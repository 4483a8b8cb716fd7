use actix_web::{post, web, HttpResponse};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

use crate::state::AppState;
use crate::types::BuildResponse;

/// Rebuild the centroid index from scratch.
///
/// The body is a JSON object mapping cluster names to centroid vectors and
/// is forwarded verbatim to the engine; previous contents are discarded.
/// An empty object yields an empty index, which is a successful build.
#[post("/build")]
pub async fn build(
    body: web::Json<HashMap<String, Vec<f32>>>,
    state: web::Data<Arc<AppState>>,
) -> actix_web::Result<HttpResponse> {
    let centroids = body.into_inner();
    let count = centroids.len();

    info!("Build requested with {} centroids", count);

    state.engine.replace_index(centroids).await;

    Ok(HttpResponse::Ok().json(BuildResponse {
        success: true,
        indexed: count,
        message: format!("Index built with {} clusters", count),
    }))
}
