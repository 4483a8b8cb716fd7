/// Cluster search error types
#[derive(Debug, thiserror::Error)]
pub enum ClusterFindError {
    /// Search attempted before any centroids were indexed
    #[error("centroid index is empty; call /build before searching")]
    IndexNotBuilt,

    /// Query and stored centroid have different dimensionality
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// General error (anyhow integration)
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ClusterFindError {
    /// Create dimension mismatch error
    pub fn dimension_mismatch(expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch { expected, actual }
    }

    /// Create config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Create internal error
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        Self::Internal(msg.into())
    }
}

// HTTP response conversion (used by the server crate)
impl ClusterFindError {
    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            Self::IndexNotBuilt => 409,
            Self::DimensionMismatch { .. } => 400,
            Self::Config(_) => 500,
            Self::Internal(_) => 500,
            Self::Io(_) => 500,
            Self::Json(_) => 400,
            Self::Other(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ClusterFindError::IndexNotBuilt.status_code(), 409);
        assert_eq!(ClusterFindError::dimension_mismatch(3, 2).status_code(), 400);
        assert_eq!(ClusterFindError::internal("boom").status_code(), 500);
    }

    #[test]
    fn test_dimension_mismatch_message() {
        let err = ClusterFindError::dimension_mismatch(3, 2);
        assert_eq!(err.to_string(), "dimension mismatch: expected 3, got 2");
    }
}
