use std::collections::HashMap;

/// In-memory mapping from cluster identifier to centroid vector.
///
/// The only mutation is a wholesale replace; between builds the contents are
/// read-only. Iteration order is unspecified.
#[derive(Debug, Default)]
pub struct CentroidIndex {
    entries: HashMap<String, Vec<f32>>,
}

impl CentroidIndex {
    /// Create new empty index
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Discard all current entries and install the supplied map.
    ///
    /// An empty map yields an empty index, not an error. Duplicate keys in
    /// the source data collapse before this point (last write wins).
    pub fn replace(&mut self, entries: HashMap<String, Vec<f32>>) {
        self.entries = entries;
    }

    /// True when the index holds zero entries, including the never-built
    /// initial state.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of stored centroids
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Scan access for the search engine; iteration order is unspecified.
    pub fn entries(&self) -> impl Iterator<Item = (&String, &Vec<f32>)> {
        self.entries.iter()
    }

    /// Dimensionality of an arbitrary stored centroid, None when empty.
    pub fn dimension(&self) -> Option<usize> {
        self.entries.values().next().map(|v| v.len())
    }
}
