// Thu Feb 12 2026 - Alex

use crate::registry::{Location, RegistryEntry};
use indexmap::IndexMap;
use itertools::Itertools;

/// The shared name -> entry map populated during extraction and read by the
/// generation phase. The key space is flat: type names are assumed globally
/// unique across the corpus.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    entries: IndexMap<String, RegistryEntry>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_definition(&mut self, name: &str, location: Location) {
        self.entries
            .entry(name.to_string())
            .or_insert_with(|| RegistryEntry::new(name))
            .add_definition(location);
    }

    /// Usage detection only augments existing entries; an unknown name is a
    /// no-op.
    pub fn record_usage(&mut self, name: &str, location: Location) {
        if let Some(entry) = self.entries.get_mut(name) {
            entry.add_usage(location);
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&RegistryEntry> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = &RegistryEntry> {
        self.entries.values()
    }

    /// Top-N entries by total reference count, ties broken by name so the
    /// selection is deterministic.
    pub fn select_top(&self, n: usize) -> Vec<&RegistryEntry> {
        self.entries
            .values()
            .sorted_by(|a, b| {
                b.reference_count()
                    .cmp(&a.reference_count())
                    .then_with(|| a.name().cmp(b.name()))
            })
            .take(n)
            .collect()
    }
}
