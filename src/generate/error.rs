// Thu Feb 12 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Failed to parse structs table {path}: {reason}")]
    InvalidStructsTable { path: String, reason: String },
    #[error("Line number out of bounds for {name}: {line} (file has {total} lines)")]
    LineOutOfBounds { name: String, line: usize, total: usize },
    #[error("Unmatched braces for {name} at {location}")]
    UnmatchedBraces { name: String, location: String },
    #[error("No struct body found for {name} at {location}")]
    MissingBody { name: String, location: String },
    #[error("No definition found for {name} in any listed file")]
    NoOwningFile { name: String },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
