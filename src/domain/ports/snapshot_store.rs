use crate::domain::entities::entries::Entries;
use crate::domain::error::DomainError;
use std::path::Path;

/// Persisted form of the whole store.
pub trait SnapshotStore: Send + Sync {
    /// Writes every entry to `path`, replacing whatever was there.
    fn write(&self, path: &Path, entries: &Entries) -> Result<(), DomainError>;

    /// Reads a snapshot back. `Ok(None)` means the file does not exist.
    fn read(&self, path: &Path) -> Result<Option<Entries>, DomainError>;
}
