// Thu Feb 12 2026 - Alex

use crate::generate::field::FieldDescriptor;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveKind {
    Int,
    UnsignedInt,
    Char,
}

/// Target-language type a field maps to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MappedType {
    Primitive(PrimitiveKind),
    Reference(String),
    Repeated(Box<MappedType>),
    Opaque,
}

impl MappedType {
    /// Rendering for a scalar field position.
    pub fn render(&self) -> String {
        match self {
            MappedType::Primitive(PrimitiveKind::Int) => "int".to_string(),
            MappedType::Primitive(PrimitiveKind::UnsignedInt) => "UnsignedInt".to_string(),
            MappedType::Primitive(PrimitiveKind::Char) => "char".to_string(),
            MappedType::Reference(name) => name.clone(),
            MappedType::Repeated(inner) => format!("List<{}>", inner.render_boxed()),
            MappedType::Opaque => "Object".to_string(),
        }
    }

    /// Rendering inside a container, where primitives take their boxed form
    /// and the character base degrades to a string.
    fn render_boxed(&self) -> String {
        match self {
            MappedType::Primitive(PrimitiveKind::Int) => "Integer".to_string(),
            MappedType::Primitive(PrimitiveKind::UnsignedInt) => "UnsignedInt".to_string(),
            MappedType::Primitive(PrimitiveKind::Char) => "String".to_string(),
            other => other.render(),
        }
    }

    pub fn requires_unsigned_helper(&self) -> bool {
        match self {
            MappedType::Primitive(PrimitiveKind::UnsignedInt) => true,
            MappedType::Repeated(inner) => inner.requires_unsigned_helper(),
            _ => false,
        }
    }

    pub fn is_repeated(&self) -> bool {
        matches!(self, MappedType::Repeated(_))
    }
}

/// Maps parsed field descriptors onto target types. Known names are the
/// registry's canonical type names; anything else degrades to an opaque
/// object reference.
pub struct TypeMapper {
    known_types: BTreeSet<String>,
}

impl TypeMapper {
    pub fn new(known_types: impl IntoIterator<Item = String>) -> Self {
        Self {
            known_types: known_types.into_iter().collect(),
        }
    }

    pub fn is_known(&self, name: &str) -> bool {
        self.known_types.contains(name)
    }

    /// Precedence: pointer, then repetition, then scalar. A repetition token
    /// always yields the repeated container; the grammar cannot surface a
    /// bit-field width as a scalar (colon syntax never parses), so no
    /// disambiguation is attempted.
    pub fn map_field(&self, field: &FieldDescriptor) -> MappedType {
        if field.pointer {
            return self.reference_or_opaque(&field.type_token);
        }
        let base = self.base_type(&field.type_token);
        if field.repetition.is_some() {
            MappedType::Repeated(Box::new(base))
        } else {
            base
        }
    }

    fn base_type(&self, token: &str) -> MappedType {
        match token {
            "int" => MappedType::Primitive(PrimitiveKind::Int),
            "unsigned" | "unsigned int" => MappedType::Primitive(PrimitiveKind::UnsignedInt),
            "char" => MappedType::Primitive(PrimitiveKind::Char),
            other => self.reference_or_opaque(other),
        }
    }

    fn reference_or_opaque(&self, token: &str) -> MappedType {
        if self.known_types.contains(token) {
            MappedType::Reference(token.to_string())
        } else {
            MappedType::Opaque
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapper() -> TypeMapper {
        TypeMapper::new(["Foo".to_string(), "Point".to_string()])
    }

    fn field(type_token: &str, pointer: bool, repetition: Option<&str>) -> FieldDescriptor {
        FieldDescriptor {
            name: "f".to_string(),
            type_token: type_token.to_string(),
            pointer,
            repetition: repetition.map(|s| s.to_string()),
            struct_keyword: false,
        }
    }

    #[test]
    fn test_scalar_primitives() {
        let m = mapper();
        assert_eq!(m.map_field(&field("int", false, None)).render(), "int");
        assert_eq!(m.map_field(&field("char", false, None)).render(), "char");
        assert_eq!(
            m.map_field(&field("unsigned", false, None)).render(),
            "UnsignedInt"
        );
    }

    #[test]
    fn test_repeated_primitives_use_boxed_forms() {
        let m = mapper();
        assert_eq!(
            m.map_field(&field("int", false, Some("4"))).render(),
            "List<Integer>"
        );
        assert_eq!(
            m.map_field(&field("char", false, Some("4"))).render(),
            "List<String>"
        );
    }

    #[test]
    fn test_pointer_to_known_type_is_reference() {
        let m = mapper();
        assert_eq!(
            m.map_field(&field("Foo", true, None)),
            MappedType::Reference("Foo".to_string())
        );
    }

    #[test]
    fn test_pointer_to_unknown_type_is_opaque() {
        let m = mapper();
        assert_eq!(m.map_field(&field("Bar", true, None)), MappedType::Opaque);
    }

    #[test]
    fn test_pointer_ignores_repetition() {
        let m = mapper();
        assert_eq!(
            m.map_field(&field("Foo", true, Some("8"))),
            MappedType::Reference("Foo".to_string())
        );
    }

    #[test]
    fn test_scalar_known_type_is_reference() {
        let m = mapper();
        assert_eq!(
            m.map_field(&field("Point", false, None)).render(),
            "Point"
        );
    }

    #[test]
    fn test_repeated_unknown_type_is_repeated_opaque() {
        let m = mapper();
        assert_eq!(
            m.map_field(&field("Widget", false, Some("2"))).render(),
            "List<Object>"
        );
    }

    #[test]
    fn test_unsigned_helper_detection() {
        let m = mapper();
        assert!(m.map_field(&field("unsigned", false, None)).requires_unsigned_helper());
        assert!(m
            .map_field(&field("unsigned", false, Some("3")))
            .requires_unsigned_helper());
        assert!(!m.map_field(&field("int", false, None)).requires_unsigned_helper());
    }

    #[test]
    fn test_mixed_body_field_mapping() {
        // int a; char b[4]; struct Foo *c;  with Foo known.
        let m = mapper();
        assert_eq!(m.map_field(&field("int", false, None)).render(), "int");
        assert_eq!(m.map_field(&field("char", false, Some("4"))).render(), "List<String>");
        assert_eq!(
            m.map_field(&field("Foo", true, None)),
            MappedType::Reference("Foo".to_string())
        );
    }
}
