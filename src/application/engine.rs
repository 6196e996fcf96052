//! The vector engine: one identifier-to-vector map behind a single
//! reader/writer lock.
//!
//! `insert` and `load` take the write lock; `search`, `save` and `stats` take
//! the read lock and hold it for the whole scan or write.

use crate::domain::entities::entries::Entries;
use crate::domain::entities::load_outcome::LoadOutcome;
use crate::domain::entities::search_result::SearchResult;
use crate::domain::entities::stats::StoreStats;
use crate::domain::error::DomainError;
use crate::domain::ports::snapshot_store::SnapshotStore;
use crate::domain::values::similarity::cosine_similarity;
use crate::domain::values::vector::Vector;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

pub struct VectorEngine {
    entries: RwLock<Entries>,
    snapshots: Arc<dyn SnapshotStore>,
}

impl VectorEngine {
    pub fn new(snapshots: Arc<dyn SnapshotStore>) -> Self {
        Self {
            entries: RwLock::new(Entries::new()),
            snapshots,
        }
    }

    /// Stores `vector` under `id`, replacing any previous value.
    pub fn insert(&self, id: impl Into<String>, vector: Vector) {
        self.entries.write().insert(id.into(), vector);
    }

    /// Ranks every stored vector against `query` and returns the best `limit`.
    ///
    /// Entries that cannot be compared (different length, zero magnitude) are
    /// skipped. Equal scores keep the map's iteration order for this call.
    pub fn search(&self, query: &[f64], limit: usize) -> Result<Vec<SearchResult>, DomainError> {
        if query.is_empty() {
            return Err(DomainError::InvalidInput("query vector is empty".into()));
        }
        let entries = self.entries.read();
        let mut results: Vec<SearchResult> = entries
            .iter()
            .filter_map(|(id, vector)| {
                cosine_similarity(query, vector)
                    .ok()
                    .map(|score| SearchResult::new(id.as_str(), score))
            })
            .collect();

        results.sort_by(|a, b| b.score.total_cmp(&a.score));
        results.truncate(limit);
        Ok(results)
    }

    /// Writes the whole map to `path`. Returns the number of entries written.
    pub fn save(&self, path: &Path) -> Result<usize, DomainError> {
        let entries = self.entries.read();
        self.snapshots.write(path, &entries)?;
        Ok(entries.len())
    }

    /// Replaces the map with the snapshot at `path`.
    ///
    /// A missing file leaves the map as it was. A decode failure also leaves it
    /// as it was, never half-populated.
    pub fn load(&self, path: &Path) -> Result<LoadOutcome, DomainError> {
        let mut entries = self.entries.write();
        match self.snapshots.read(path)? {
            Some(loaded) => {
                *entries = loaded;
                Ok(LoadOutcome::Loaded(entries.len()))
            }
            None => Ok(LoadOutcome::Missing),
        }
    }

    pub fn get(&self, id: &str) -> Option<Vector> {
        self.entries.read().get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    pub fn stats(&self) -> StoreStats {
        let entries = self.entries.read();
        let mut dimensions = BTreeMap::new();
        for vector in entries.values() {
            *dimensions.entry(vector.dimension()).or_insert(0) += 1;
        }
        StoreStats {
            entries: entries.len(),
            dimensions,
        }
    }
}
