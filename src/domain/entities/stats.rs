use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoreStats {
    pub entries: usize,
    /// Dimensionality -> number of entries with that length.
    pub dimensions: BTreeMap<usize, usize>,
}
