use crate::domain::entities::entries::Entries;
use crate::domain::error::DomainError;
use crate::domain::ports::snapshot_store::SnapshotStore;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

/// Stores the map as a pretty-printed JSON object keyed by identifier.
///
/// Writes go straight to the destination; a failure part-way leaves a
/// truncated file behind.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonSnapshotStore;

impl SnapshotStore for JsonSnapshotStore {
    fn write(&self, path: &Path, entries: &Entries) -> Result<(), DomainError> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, entries)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }

    fn read(&self, path: &Path) -> Result<Option<Entries>, DomainError> {
        let file = match File::open(path) {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let entries: Entries = serde_json::from_reader(BufReader::new(file))?;
        Ok(Some(entries))
    }
}
