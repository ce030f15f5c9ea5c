// Thu Feb 12 2026 - Alex

use crate::registry::TypeRegistry;
use itertools::Itertools;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Human-readable analysis report listing every registry entry with its
/// reference count and locations.
pub struct ReportWriter;

impl ReportWriter {
    pub fn write(registry: &TypeRegistry, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::render(registry, &mut writer)?;
        writer.flush()?;
        log::info!("Wrote TXT output to {}", path.display());
        Ok(())
    }

    fn render(registry: &TypeRegistry, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "Struct Analysis Report")?;
        writeln!(out, "=====================")?;
        for entry in registry.entries() {
            writeln!(out, "Struct: {}", entry.name())?;
            writeln!(out, "Total References: {}", entry.reference_count())?;
            writeln!(out, "Definitions: [{}]", entry.definitions().join(", "))?;
            writeln!(out, "Usages: [{}]", entry.usages().join(", "))?;
            writeln!(out, "---------------------")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Location;

    #[test]
    fn test_report_lists_entries() {
        let mut registry = TypeRegistry::new();
        registry.record_definition("Point", Location::new("a.h", 1));
        registry.record_usage("Point", Location::new("b.c", 1));

        let mut buf = Vec::new();
        ReportWriter::render(&registry, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.starts_with("Struct Analysis Report"));
        assert!(text.contains("Struct: Point"));
        assert!(text.contains("Total References: 2"));
        assert!(text.contains("Definitions: [a.h:1]"));
        assert!(text.contains("Usages: [b.c:1]"));
    }
}
