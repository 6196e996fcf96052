use crate::application::engine::VectorEngine;
use crate::domain::entities::load_outcome::LoadOutcome;
use crate::domain::error::DomainError;
use std::path::Path;
use std::sync::Arc;

pub struct PersistUseCase {
    engine: Arc<VectorEngine>,
}

impl PersistUseCase {
    pub fn new(engine: Arc<VectorEngine>) -> Self {
        Self { engine }
    }

    pub fn save(&self, path: &Path) -> Result<usize, DomainError> {
        match self.engine.save(path) {
            Ok(count) => {
                tracing::info!(path = %path.display(), entries = count, "Saved snapshot");
                Ok(count)
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Save failed");
                Err(e)
            }
        }
    }

    pub fn load(&self, path: &Path) -> Result<LoadOutcome, DomainError> {
        let outcome = self.engine.load(path)?;
        match outcome {
            LoadOutcome::Loaded(count) => {
                tracing::info!(path = %path.display(), entries = count, "Loaded snapshot");
            }
            LoadOutcome::Missing => {
                tracing::info!(
                    path = %path.display(),
                    "No data file found. Starting with empty database."
                );
            }
        }
        Ok(outcome)
    }
}
