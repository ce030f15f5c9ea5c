// Thu Feb 12 2026 - Alex

use crate::registry::{Location, TypeRegistry};
use crate::scan::pattern::STRUCT_USAGE_PATTERN;
use crate::scan::source::SourceUnit;

/// Finds value-level references to names the registry already knows.
/// Only augments existing entries; an unknown name never creates one.
pub struct UsageDetector;

impl UsageDetector {
    pub fn new() -> Self {
        Self
    }

    pub fn detect(&self, unit: &SourceUnit, stripped: &str, registry: &mut TypeRegistry) -> usize {
        let mut recorded = 0;

        for caps in STRUCT_USAGE_PATTERN.captures_iter(stripped) {
            // First non-empty name group wins; the two alternatives capture
            // into different slots.
            let Some(name) = caps
                .iter()
                .skip(1)
                .flatten()
                .map(|m| m.as_str())
                .find(|s| !s.is_empty())
            else {
                continue;
            };

            if !registry.contains(name) {
                continue;
            }

            let offset = caps.get(0).map(|m| m.start()).unwrap_or(0);
            let line = SourceUnit::line_of_offset(stripped, offset);
            registry.record_usage(name, Location::new(unit.relative_path(), line));
            recorded += 1;
        }

        recorded
    }
}

impl Default for UsageDetector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry_with(names: &[&str]) -> TypeRegistry {
        let mut registry = TypeRegistry::new();
        for name in names {
            registry.record_definition(name, Location::new("defs.h", 1));
        }
        registry
    }

    fn detect(registry: &mut TypeRegistry, path: &str, text: &str) -> usize {
        let unit = SourceUnit::new(path, text);
        UsageDetector::new().detect(&unit, text, registry)
    }

    #[test]
    fn test_empty_registry_stays_empty() {
        let mut registry = TypeRegistry::new();
        detect(&mut registry, "b.c", "struct Point p;\nPoint q;\n");
        assert!(registry.is_empty());
    }

    #[test]
    fn test_variable_declaration_counts_as_usage() {
        let mut registry = registry_with(&["Point"]);
        let recorded = detect(&mut registry, "b.c", "struct Point p;\n");
        assert_eq!(recorded, 1);
        let usages: Vec<_> = registry.get("Point").unwrap().usages().collect();
        assert_eq!(usages, vec![&Location::new("b.c", 1)]);
    }

    #[test]
    fn test_pointer_and_array_declarations() {
        let mut registry = registry_with(&["Point"]);
        detect(&mut registry, "b.c", "Point *p;\nPoint buf[16];\n");
        assert_eq!(registry.get("Point").unwrap().usage_count(), 2);
    }

    #[test]
    fn test_initializer_expression() {
        let mut registry = registry_with(&["Point"]);
        detect(&mut registry, "b.c", "struct Point origin = { 0, 0 };\n");
        assert_eq!(registry.get("Point").unwrap().usage_count(), 1);
    }

    #[test]
    fn test_unknown_name_ignored() {
        let mut registry = registry_with(&["Point"]);
        detect(&mut registry, "b.c", "struct Vector v;\n");
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("Point").unwrap().usage_count(), 0);
    }

    #[test]
    fn test_field_of_known_type_inside_body_counts() {
        // Corpus-wide detection does not exclude struct-body interiors.
        let mut registry = registry_with(&["Point"]);
        detect(&mut registry, "b.h", "struct Rect {\n    Point origin;\n    Point size;\n};\n");
        assert_eq!(registry.get("Point").unwrap().usage_count(), 2);
    }

    #[test]
    fn test_same_line_detected_twice_dedups() {
        let mut registry = registry_with(&["Point"]);
        let unit = SourceUnit::new("b.c", "Point p;\n");
        let detector = UsageDetector::new();
        detector.detect(&unit, unit.text(), &mut registry);
        detector.detect(&unit, unit.text(), &mut registry);
        assert_eq!(registry.get("Point").unwrap().usage_count(), 1);
    }
}
