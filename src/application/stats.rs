use crate::application::engine::VectorEngine;
use crate::domain::entities::stats::StoreStats;
use std::sync::Arc;

pub struct StatsUseCase {
    engine: Arc<VectorEngine>,
}

impl StatsUseCase {
    pub fn new(engine: Arc<VectorEngine>) -> Self {
        Self { engine }
    }

    pub fn stats(&self) -> StoreStats {
        self.engine.stats()
    }
}
