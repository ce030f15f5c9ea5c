// Thu Feb 12 2026 - Alex

pub mod entry;
pub mod location;
pub mod registry;

pub use entry::RegistryEntry;
pub use location::Location;
pub use registry::TypeRegistry;
