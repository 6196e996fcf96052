use crate::application::engine::VectorEngine;
use crate::domain::entities::search_result::SearchResult;
use crate::domain::error::DomainError;
use std::sync::Arc;

pub struct SearchUseCase {
    engine: Arc<VectorEngine>,
}

impl SearchUseCase {
    pub fn new(engine: Arc<VectorEngine>) -> Self {
        Self { engine }
    }

    pub fn execute(&self, query: &[f64], limit: usize) -> Result<Vec<SearchResult>, DomainError> {
        let results = self.engine.search(query, limit)?;
        tracing::debug!(
            dimension = query.len(),
            limit,
            hits = results.len(),
            "search"
        );
        Ok(results)
    }
}
