use crate::domain::error::DomainError;
use crate::domain::values::vector::Vector;

/// One parsed protocol line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add { id: String, vector: Vector },
    Search { query: Vector },
    Save,
}

impl Command {
    /// Parses a whitespace-delimited line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Command>, DomainError> {
        let mut tokens = line.split_whitespace();
        let Some(keyword) = tokens.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = tokens.collect();

        let command = match keyword {
            "ADD" => {
                if args.len() < 2 {
                    return Err(DomainError::Usage("ADD <id> <vector...>"));
                }
                Command::Add {
                    id: args[0].to_string(),
                    vector: Vector::parse_tokens(&args[1..])?,
                }
            }
            "SEARCH" => {
                if args.is_empty() {
                    return Err(DomainError::Usage("SEARCH <vector...>"));
                }
                Command::Search {
                    query: Vector::parse_tokens(&args)?,
                }
            }
            "SAVE" => Command::Save,
            other => return Err(DomainError::UnknownCommand(other.to_string())),
        };
        Ok(Some(command))
    }
}
