pub mod engine;
pub mod insert;
pub mod persist;
pub mod search;
pub mod stats;
