pub mod entries;
pub mod load_outcome;
pub mod search_result;
pub mod stats;
