// Thu Feb 12 2026 - Alex

pub mod analyzer;
pub mod comment;
pub mod error;
pub mod extractor;
pub mod pattern;
pub mod source;
pub mod usage;

pub use analyzer::{ScanStats, StructAnalyzer};
pub use comment::strip_comments;
pub use error::ScanError;
pub use extractor::{DeclarationCandidate, DeclarationExtractor};
pub use pattern::DeclarationShape;
pub use source::SourceUnit;
pub use usage::UsageDetector;
