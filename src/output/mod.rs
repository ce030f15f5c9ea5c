// Thu Feb 12 2026 - Alex

pub mod errors;
pub mod json;
pub mod report;

pub use errors::{ErrorSink, FileErrorSink, LogOnlyErrorSink};
pub use json::{ExportedStruct, RegistryExport};
pub use report::ReportWriter;
