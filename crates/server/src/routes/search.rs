use actix_web::{post, web, HttpResponse};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::state::AppState;
use crate::types::{error_response, SearchRequest, SearchResponse};

/// Find the cluster whose centroid is nearest to the supplied vector.
///
/// Fails with 409 when the index is empty and 400 when the query
/// dimensionality does not match the stored centroids.
#[post("/search")]
pub async fn search(
    body: web::Json<SearchRequest>,
    state: web::Data<Arc<AppState>>,
) -> actix_web::Result<HttpResponse> {
    debug!(
        "Search requested with a {}-dimensional vector",
        body.image_vector.len()
    );

    match state.engine.find_nearest(&body.image_vector).await {
        Ok(closest_cluster) => Ok(HttpResponse::Ok().json(SearchResponse { closest_cluster })),
        Err(e) => {
            warn!("Search failed: {}", e);
            Ok(error_response(&e))
        }
    }
}
