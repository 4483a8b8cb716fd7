use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

use clusterfind_common::{ClusterFindError, Result};

use crate::distance::euclidean_distance;
use crate::store::CentroidIndex;

/// Nearest-centroid search engine.
///
/// Owns the shared index behind a read-write lock: builds take the write
/// lock and replace the index wholesale, searches take the read lock and
/// scan a consistent snapshot. Clones share the same underlying index.
#[derive(Debug, Clone, Default)]
pub struct SearchEngine {
    index: Arc<RwLock<CentroidIndex>>,
}

impl SearchEngine {
    /// Create a new engine with an empty index
    pub fn new() -> Self {
        Self {
            index: Arc::new(RwLock::new(CentroidIndex::new())),
        }
    }

    /// Replace the index with the supplied centroids, discarding all
    /// previous entries.
    pub async fn replace_index(&self, centroids: HashMap<String, Vec<f32>>) {
        let mut index = self.index.write().await;
        index.replace(centroids);

        info!("Centroid index rebuilt - {} entries", index.len());
    }

    /// Find the identifier of the centroid closest to `query` under
    /// Euclidean distance.
    ///
    /// Scans every entry once. Ties resolve to the lexicographically
    /// smallest identifier, so results do not depend on map iteration
    /// order. Fails with `IndexNotBuilt` on an empty index and with
    /// `DimensionMismatch` on the first stored vector whose length differs
    /// from the query.
    pub async fn find_nearest(&self, query: &[f32]) -> Result<String> {
        let index = self.index.read().await;

        if index.is_empty() {
            return Err(ClusterFindError::IndexNotBuilt);
        }

        debug!("Scanning {} centroids for nearest match", index.len());

        let mut best: Option<(&str, f32)> = None;

        for (id, centroid) in index.entries() {
            let dist = euclidean_distance(query, centroid)?;

            // A NaN distance compares false here and is skipped.
            let closer = match best {
                None => dist < f32::INFINITY,
                Some((best_id, best_dist)) => {
                    dist < best_dist || (dist == best_dist && id.as_str() < best_id)
                }
            };

            if closer {
                best = Some((id.as_str(), dist));
            }
        }

        match best {
            Some((id, dist)) => {
                debug!("Nearest centroid: {} (distance {})", id, dist);
                Ok(id.to_string())
            }
            None => Err(ClusterFindError::internal(
                "no comparable centroid for query",
            )),
        }
    }

    /// Entry count and dimensionality of the current index
    pub async fn stats(&self) -> (usize, Option<usize>) {
        let index = self.index.read().await;
        (index.len(), index.dimension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn centroids(pairs: &[(&str, &[f32])]) -> HashMap<String, Vec<f32>> {
        pairs
            .iter()
            .map(|(id, v)| (id.to_string(), v.to_vec()))
            .collect()
    }

    #[tokio::test]
    async fn test_search_on_fresh_engine_fails() {
        let engine = SearchEngine::new();
        let result = engine.find_nearest(&[1.0, 1.0]).await;
        assert!(matches!(result, Err(ClusterFindError::IndexNotBuilt)));
    }

    #[tokio::test]
    async fn test_search_after_empty_build_fails() {
        let engine = SearchEngine::new();
        engine.replace_index(HashMap::new()).await;

        let result = engine.find_nearest(&[1.0, 1.0]).await;
        assert!(matches!(result, Err(ClusterFindError::IndexNotBuilt)));
    }

    #[tokio::test]
    async fn test_two_cluster_query() {
        // d([1,1], A) = sqrt(2), d([1,1], B) = sqrt(162)
        let engine = SearchEngine::new();
        engine
            .replace_index(centroids(&[("A", &[0.0, 0.0]), ("B", &[10.0, 10.0])]))
            .await;

        let nearest = engine.find_nearest(&[1.0, 1.0]).await.unwrap();
        assert_eq!(nearest, "A");
    }

    #[tokio::test]
    async fn test_single_cluster_exact_match() {
        let engine = SearchEngine::new();
        engine.replace_index(centroids(&[("X", &[5.0])])).await;

        let nearest = engine.find_nearest(&[5.0]).await.unwrap();
        assert_eq!(nearest, "X");
    }

    #[tokio::test]
    async fn test_three_cluster_query() {
        let engine = SearchEngine::new();
        engine
            .replace_index(centroids(&[
                ("A", &[0.0, 0.0, 0.0]),
                ("B", &[1.0, 1.0, 1.0]),
                ("C", &[2.0, 2.0, 2.0]),
            ]))
            .await;

        let nearest = engine.find_nearest(&[1.4, 1.4, 1.4]).await.unwrap();
        assert_eq!(nearest, "B");
    }

    #[tokio::test]
    async fn test_exact_match_beats_other_entries() {
        let engine = SearchEngine::new();
        let stored = vec![0.3_f32, -1.2, 4.5];
        engine
            .replace_index(centroids(&[
                ("near", &[0.0, -1.0, 4.0]),
                ("hit", &stored),
                ("far", &[10.0, 10.0, 10.0]),
            ]))
            .await;

        let nearest = engine.find_nearest(&stored).await.unwrap();
        assert_eq!(nearest, "hit");
    }

    #[tokio::test]
    async fn test_replace_is_total_across_queries() {
        let engine = SearchEngine::new();
        engine.replace_index(centroids(&[("old", &[0.0, 0.0])])).await;
        engine.replace_index(centroids(&[("new", &[9.0, 9.0])])).await;

        // "old" would win this query if any of it survived the rebuild.
        let nearest = engine.find_nearest(&[0.0, 0.0]).await.unwrap();
        assert_eq!(nearest, "new");
    }

    #[tokio::test]
    async fn test_tie_breaks_to_smallest_identifier() {
        // Both centroids sit at distance 1 from the query.
        let engine = SearchEngine::new();
        engine
            .replace_index(centroids(&[("b", &[1.0, 0.0]), ("a", &[-1.0, 0.0])]))
            .await;

        let nearest = engine.find_nearest(&[0.0, 0.0]).await.unwrap();
        assert_eq!(nearest, "a");
    }

    #[tokio::test]
    async fn test_nan_centroid_is_skipped() {
        let engine = SearchEngine::new();
        engine
            .replace_index(centroids(&[
                ("poisoned", &[f32::NAN, 0.0]),
                ("sane", &[100.0, 100.0]),
            ]))
            .await;

        let nearest = engine.find_nearest(&[0.0, 0.0]).await.unwrap();
        assert_eq!(nearest, "sane");
    }

    #[tokio::test]
    async fn test_all_nan_distances_fail() {
        let engine = SearchEngine::new();
        engine
            .replace_index(centroids(&[("poisoned", &[f32::NAN, 0.0])]))
            .await;

        let result = engine.find_nearest(&[0.0, 0.0]).await;
        assert!(matches!(result, Err(ClusterFindError::Internal(_))));
    }

    #[tokio::test]
    async fn test_dimension_mismatch_fails_fast() {
        let engine = SearchEngine::new();
        engine.replace_index(centroids(&[("A", &[0.0, 0.0])])).await;

        let result = engine.find_nearest(&[1.0, 2.0, 3.0]).await;
        assert!(matches!(
            result,
            Err(ClusterFindError::DimensionMismatch {
                expected: 3,
                actual: 2
            })
        ));
    }

    #[tokio::test]
    async fn test_stats_reflect_last_build() {
        let engine = SearchEngine::new();
        assert_eq!(engine.stats().await, (0, None));

        engine
            .replace_index(centroids(&[("A", &[0.0, 0.0, 0.0]), ("B", &[1.0, 1.0, 1.0])]))
            .await;
        assert_eq!(engine.stats().await, (2, Some(3)));

        engine.replace_index(HashMap::new()).await;
        assert_eq!(engine.stats().await, (0, None));
    }

    #[tokio::test]
    async fn test_search_does_not_mutate_index() {
        let engine = SearchEngine::new();
        engine
            .replace_index(centroids(&[("A", &[0.0, 0.0]), ("B", &[3.0, 4.0])]))
            .await;

        let first = engine.find_nearest(&[3.0, 3.9]).await.unwrap();
        let second = engine.find_nearest(&[3.0, 3.9]).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(engine.stats().await.0, 2);
    }
}
