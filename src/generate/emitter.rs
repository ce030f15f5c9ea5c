// Thu Feb 12 2026 - Alex

use crate::generate::mapper::MappedType;
use std::collections::BTreeSet;
use std::fmt::Write;

pub const UNSIGNED_HELPER_IMPORT: &str = "structanalyzer.support.UnsignedInt";
pub const LIST_IMPORT: &str = "java.util.List";

#[derive(Debug, Clone)]
pub struct EmittedField {
    pub name: String,
    pub mapped: MappedType,
}

/// One data-holder class ready for emission: name plus fields in parse
/// order.
#[derive(Debug, Clone)]
pub struct GeneratedClass {
    pub name: String,
    pub fields: Vec<EmittedField>,
}

impl GeneratedClass {
    pub fn new(name: impl Into<String>, fields: Vec<EmittedField>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    fn imports(&self) -> BTreeSet<&'static str> {
        let mut imports = BTreeSet::new();
        for field in &self.fields {
            if field.mapped.is_repeated() {
                imports.insert(LIST_IMPORT);
            }
            if field.mapped.requires_unsigned_helper() {
                imports.insert(UNSIGNED_HELPER_IMPORT);
            }
        }
        imports
    }
}

/// Renders class definitions as Java source: private fields, a no-arg
/// constructor, an all-fields constructor, and getter/setter pairs.
pub struct ClassEmitter;

impl ClassEmitter {
    /// Renders one output unit holding every class whose body lives in the
    /// same owning source file.
    pub fn render_unit(classes: &[GeneratedClass]) -> String {
        let mut out = String::new();

        let imports: BTreeSet<_> = classes.iter().flat_map(|c| c.imports()).collect();
        out.push('\n');
        for import in &imports {
            let _ = writeln!(out, "import {};", import);
        }
        out.push('\n');

        for class in classes {
            Self::render_class(class, &mut out);
            out.push('\n');
        }

        out
    }

    fn render_class(class: &GeneratedClass, out: &mut String) {
        let _ = writeln!(out, "public class {} {{", class.name);

        for field in &class.fields {
            let _ = writeln!(out, "    private {} {};", field.mapped.render(), field.name);
        }

        let _ = writeln!(out, "    public {}() {{}}", class.name);

        let params = class
            .fields
            .iter()
            .map(|f| format!("{} {}", f.mapped.render(), f.name))
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(out, "    public {}({}) {{", class.name, params);
        for field in &class.fields {
            let _ = writeln!(out, "        this.{} = {};", field.name, field.name);
        }
        let _ = writeln!(out, "    }}");

        for field in &class.fields {
            let cap = capitalize(&field.name);
            let ty = field.mapped.render();
            let _ = writeln!(
                out,
                "    public {} get{}() {{ return {}; }}",
                ty, cap, field.name
            );
            let _ = writeln!(
                out,
                "    public void set{}({} {}) {{ this.{} = {}; }}",
                cap, ty, field.name, field.name, field.name
            );
        }

        let _ = writeln!(out, "}}");
    }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::mapper::PrimitiveKind;

    fn int_field(name: &str) -> EmittedField {
        EmittedField {
            name: name.to_string(),
            mapped: MappedType::Primitive(PrimitiveKind::Int),
        }
    }

    #[test]
    fn test_class_shape() {
        let class = GeneratedClass::new("Point", vec![int_field("x"), int_field("y")]);
        let text = ClassEmitter::render_unit(&[class]);

        assert!(text.contains("public class Point {"));
        assert!(text.contains("    private int x;"));
        assert!(text.contains("    public Point() {}"));
        assert!(text.contains("    public Point(int x, int y) {"));
        assert!(text.contains("        this.x = x;"));
        assert!(text.contains("    public int getX() { return x; }"));
        assert!(text.contains("    public void setY(int y) { this.y = y; }"));
    }

    #[test]
    fn test_field_order_matches_parse_order() {
        let class = GeneratedClass::new("Point", vec![int_field("b"), int_field("a")]);
        let text = ClassEmitter::render_unit(&[class]);
        let b_pos = text.find("private int b;").unwrap();
        let a_pos = text.find("private int a;").unwrap();
        assert!(b_pos < a_pos);
    }

    #[test]
    fn test_imports_only_when_needed() {
        let plain = ClassEmitter::render_unit(&[GeneratedClass::new("P", vec![int_field("x")])]);
        assert!(!plain.contains("import"));

        let repeated = GeneratedClass::new(
            "Buf",
            vec![EmittedField {
                name: "data".to_string(),
                mapped: MappedType::Repeated(Box::new(MappedType::Primitive(PrimitiveKind::Char))),
            }],
        );
        let text = ClassEmitter::render_unit(&[repeated]);
        assert!(text.contains("import java.util.List;"));
        assert!(text.contains("private List<String> data;"));
    }

    #[test]
    fn test_unsigned_helper_import() {
        let class = GeneratedClass::new(
            "Counter",
            vec![EmittedField {
                name: "ticks".to_string(),
                mapped: MappedType::Primitive(PrimitiveKind::UnsignedInt),
            }],
        );
        let text = ClassEmitter::render_unit(&[class]);
        assert!(text.contains(&format!("import {};", UNSIGNED_HELPER_IMPORT)));
    }

    #[test]
    fn test_empty_class_still_renders() {
        let text = ClassEmitter::render_unit(&[GeneratedClass::new("Empty", vec![])]);
        assert!(text.contains("public class Empty {"));
        assert!(text.contains("public Empty() {}"));
        assert!(text.contains("public Empty() {"));
    }

    #[test]
    fn test_multiple_classes_in_one_unit() {
        let text = ClassEmitter::render_unit(&[
            GeneratedClass::new("A", vec![int_field("x")]),
            GeneratedClass::new("B", vec![int_field("y")]),
        ]);
        assert!(text.contains("public class A {"));
        assert!(text.contains("public class B {"));
    }
}
