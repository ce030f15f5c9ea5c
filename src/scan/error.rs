// Thu Feb 12 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Source root not readable: {0}")]
    SourceRootUnreadable(String),
    #[error("IO error processing {path}: {source}")]
    FileUnreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid struct match in {path}: {snippet}")]
    MalformedMatch { path: String, snippet: String },
    #[error("Invalid glob pattern: {0}")]
    InvalidPattern(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
