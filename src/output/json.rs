// Thu Feb 12 2026 - Alex

use crate::registry::{Location, TypeRegistry};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

/// Persisted registry export. The generation phase runs against this plus
/// the original source tree, never against extraction's in-memory state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryExport {
    pub definitions: Vec<ExportedStruct>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportedStruct {
    pub name: String,
    pub count: usize,
    #[serde(rename = "definitionFiles")]
    pub definition_files: Vec<Location>,
    #[serde(rename = "usageFiles")]
    pub usage_files: Vec<Location>,
}

impl ExportedStruct {
    /// Definition locations first, then usages, in recorded order.
    pub fn all_locations(&self) -> Vec<Location> {
        self.definition_files
            .iter()
            .chain(self.usage_files.iter())
            .cloned()
            .collect()
    }
}

impl RegistryExport {
    pub fn from_registry(registry: &TypeRegistry) -> Self {
        let definitions = registry
            .entries()
            .map(|entry| ExportedStruct {
                name: entry.name().to_string(),
                count: entry.reference_count(),
                definition_files: entry.definitions().cloned().collect(),
                usage_files: entry.usages().cloned().collect(),
            })
            .collect();
        Self { definitions }
    }

    pub fn write(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        log::info!("Wrote JSON output to {}", path.display());
        Ok(())
    }

    pub fn read(path: &Path) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        let export: RegistryExport = serde_json::from_str(&content)?;
        Ok(export)
    }
}
