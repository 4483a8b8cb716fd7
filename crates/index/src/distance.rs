//! Euclidean distance between equal-length vectors.

use clusterfind_common::{ClusterFindError, Result};

/// Euclidean Distance
/// d(a, b) = sqrt(sum((a[i] - b[i])^2)) for i = 0..a.len()
/// Can only compare vectors with the same dimensions
pub fn euclidean_distance(a: &[f32], b: &[f32]) -> Result<f32> {
    if a.len() != b.len() {
        return Err(ClusterFindError::dimension_mismatch(a.len(), b.len()));
    }

    let sum: f32 = a
        .iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum();

    Ok(sum.sqrt())
}
