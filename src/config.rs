//! Server defaults. Runtime overrides come from CLI flags and environment
//! variables (see `cli::commands`).

/// Listen address when `--addr` / `VECSTORE_ADDR` is not given.
pub const DEFAULT_ADDR: &str = "0.0.0.0:8080";

/// Snapshot file loaded at startup and written by `SAVE`.
pub const DEFAULT_DATA_FILE: &str = "vectors.json";

/// Number of hits a protocol `SEARCH` returns.
pub const DEFAULT_SEARCH_LIMIT: usize = 3;

/// Longest accepted protocol line, newline included.
pub const MAX_LINE_BYTES: usize = 64 * 1024;

/// First line written to every new connection.
pub const GREETING: &str = "Hello! You are connected to vecstore!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: String,
    pub search_limit: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: DEFAULT_ADDR.to_string(),
            search_limit: DEFAULT_SEARCH_LIMIT,
        }
    }
}
