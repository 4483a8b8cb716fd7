use serde::{Deserialize, Serialize};

use clusterfind_common::ClusterFindError;

/// Search request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    /// Query vector to compare against the stored centroids
    pub image_vector: Vec<f32>,
}

/// Search response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    /// Identifier of the nearest cluster
    pub closest_cluster: String,
}

/// Build response
#[derive(Debug, Serialize)]
pub struct BuildResponse {
    pub success: bool,

    /// Number of centroids installed by this build
    pub indexed: usize,

    pub message: String,
}

/// Index statistics response
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    /// Number of stored centroids
    pub clusters: usize,

    /// Dimensionality of the stored centroids, null when empty
    pub dimension: Option<usize>,

    /// Whether the index currently holds any entries
    pub built: bool,
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Build an HTTP response from a core error, using its status mapping
pub fn error_response(err: &ClusterFindError) -> actix_web::HttpResponse {
    let status = actix_web::http::StatusCode::from_u16(err.status_code())
        .unwrap_or(actix_web::http::StatusCode::INTERNAL_SERVER_ERROR);

    actix_web::HttpResponse::build(status).json(ErrorResponse::new(err.to_string()))
}
