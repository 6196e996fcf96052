use crate::application::engine::VectorEngine;
use crate::domain::error::DomainError;
use crate::domain::values::vector::Vector;
use std::sync::Arc;

pub struct InsertUseCase {
    engine: Arc<VectorEngine>,
}

impl InsertUseCase {
    pub fn new(engine: Arc<VectorEngine>) -> Self {
        Self { engine }
    }

    /// Rejects an empty id or an empty vector; otherwise overwrites unconditionally.
    /// Dimensionality is not checked against what is already stored.
    pub fn execute(&self, id: String, vector: Vector) -> Result<(), DomainError> {
        if id.is_empty() {
            return Err(DomainError::InvalidInput("id must not be empty".into()));
        }
        if vector.is_empty() {
            return Err(DomainError::InvalidInput(format!(
                "vector for '{id}' must not be empty"
            )));
        }
        tracing::debug!(id = %id, dimension = vector.dimension(), "insert");
        self.engine.insert(id, vector);
        Ok(())
    }
}
