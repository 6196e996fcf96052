use crate::domain::entities::search_result::SearchResult;
use crate::domain::error::DomainError;
use std::fmt;

/// Text written back for one command. Every variant renders as one or more
/// newline-terminated lines.
#[derive(Debug)]
pub enum Response {
    Ok,
    Hits(Vec<SearchResult>),
    Saved,
    SaveFailed(DomainError),
    Error(DomainError),
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Response::Ok => writeln!(f, "OK"),
            Response::Hits(hits) if hits.is_empty() => writeln!(f, "No results found."),
            Response::Hits(hits) => {
                for hit in hits {
                    writeln!(f, "ID: {}, Score: {:.4}", hit.id, hit.score)?;
                }
                Ok(())
            }
            Response::Saved => writeln!(f, "Saved!"),
            Response::SaveFailed(e) => writeln!(f, "Error: Save failed - {e}"),
            Response::Error(DomainError::UnknownCommand(_)) => writeln!(f, "UNKNOWN COMMAND"),
            Response::Error(e) => writeln!(f, "Error: {e}"),
        }
    }
}
