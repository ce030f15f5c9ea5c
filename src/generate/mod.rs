// Thu Feb 12 2026 - Alex

pub mod body;
pub mod emitter;
pub mod error;
pub mod field;
pub mod generator;
pub mod mapper;

pub use body::BodyLocator;
pub use emitter::{ClassEmitter, EmittedField, GeneratedClass};
pub use error::GenerateError;
pub use field::{FieldDescriptor, FieldParser};
pub use generator::{ClassGenerator, GenerationStats};
pub use mapper::{MappedType, PrimitiveKind, TypeMapper};
