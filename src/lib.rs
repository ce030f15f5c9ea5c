// Thu Feb 12 2026 - Alex

pub mod config;
pub mod generate;
pub mod output;
pub mod registry;
pub mod scan;
pub mod utils;

pub use config::Config;
pub use generate::ClassGenerator;
pub use output::RegistryExport;
pub use registry::TypeRegistry;
pub use scan::StructAnalyzer;
