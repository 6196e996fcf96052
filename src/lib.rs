pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

use crate::application::engine::VectorEngine;
use crate::application::insert::InsertUseCase;
use crate::application::persist::PersistUseCase;
use crate::application::search::SearchUseCase;
use crate::application::stats::StatsUseCase;
use crate::domain::entities::load_outcome::LoadOutcome;
use crate::domain::entities::search_result::SearchResult;
use crate::domain::entities::stats::StoreStats;
use crate::domain::error::DomainError;
use crate::domain::ports::snapshot_store::SnapshotStore;
use crate::domain::values::vector::Vector;
use crate::infrastructure::json::snapshot_store::JsonSnapshotStore;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// One explicitly constructed store. Share it between connections with `Arc`.
pub struct VecStore {
    data_file: PathBuf,
    engine: Arc<VectorEngine>,
    insert_uc: InsertUseCase,
    search_uc: SearchUseCase,
    persist_uc: PersistUseCase,
    stats_uc: StatsUseCase,
}

impl VecStore {
    /// An empty store persisting to `data_file` as JSON. Nothing is read yet.
    pub fn new(data_file: impl Into<PathBuf>) -> Self {
        Self::with_snapshot_store(data_file, Arc::new(JsonSnapshotStore))
    }

    pub fn with_snapshot_store(
        data_file: impl Into<PathBuf>,
        snapshots: Arc<dyn SnapshotStore>,
    ) -> Self {
        let engine = Arc::new(VectorEngine::new(snapshots));
        Self {
            data_file: data_file.into(),
            insert_uc: InsertUseCase::new(engine.clone()),
            search_uc: SearchUseCase::new(engine.clone()),
            persist_uc: PersistUseCase::new(engine.clone()),
            stats_uc: StatsUseCase::new(engine.clone()),
            engine,
        }
    }

    /// `new` followed by `load`. A missing data file gives an empty store.
    pub fn open(data_file: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let store = Self::new(data_file);
        store.load()?;
        Ok(store)
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    pub fn engine(&self) -> &Arc<VectorEngine> {
        &self.engine
    }

    // Delegating methods
    pub fn add(&self, id: String, vector: Vector) -> Result<(), DomainError> {
        self.insert_uc.execute(id, vector)
    }

    pub fn search(&self, query: &[f64], limit: usize) -> Result<Vec<SearchResult>, DomainError> {
        self.search_uc.execute(query, limit)
    }

    pub fn save(&self) -> Result<usize, DomainError> {
        self.persist_uc.save(&self.data_file)
    }

    pub fn save_to(&self, path: &Path) -> Result<usize, DomainError> {
        self.persist_uc.save(path)
    }

    pub fn load(&self) -> Result<LoadOutcome, DomainError> {
        self.persist_uc.load(&self.data_file)
    }

    pub fn load_from(&self, path: &Path) -> Result<LoadOutcome, DomainError> {
        self.persist_uc.load(path)
    }

    pub fn stats(&self) -> StoreStats {
        self.stats_uc.stats()
    }

    pub fn len(&self) -> usize {
        self.engine.len()
    }

    pub fn is_empty(&self) -> bool {
        self.engine.is_empty()
    }
}
