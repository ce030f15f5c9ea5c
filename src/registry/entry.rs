// Thu Feb 12 2026 - Alex

use crate::registry::Location;
use std::collections::BTreeSet;

/// Aggregated definition/usage locations for one canonical type name.
///
/// Locations are kept in ordered sets, so a physical line recorded twice
/// (e.g. by two overlapping scan passes) still counts once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryEntry {
    name: String,
    definitions: BTreeSet<Location>,
    usages: BTreeSet<Location>,
}

impl RegistryEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            definitions: BTreeSet::new(),
            usages: BTreeSet::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn add_definition(&mut self, location: Location) {
        self.definitions.insert(location);
    }

    pub fn add_usage(&mut self, location: Location) {
        self.usages.insert(location);
    }

    pub fn definitions(&self) -> impl Iterator<Item = &Location> {
        self.definitions.iter()
    }

    pub fn usages(&self) -> impl Iterator<Item = &Location> {
        self.usages.iter()
    }

    pub fn definition_count(&self) -> usize {
        self.definitions.len()
    }

    pub fn usage_count(&self) -> usize {
        self.usages.len()
    }

    /// Total reference count: |definitions| + |usages|.
    pub fn reference_count(&self) -> usize {
        self.definitions.len() + self.usages.len()
    }

    /// Definition locations first, then usages. The generation phase walks
    /// this list looking for the file that actually holds the body.
    pub fn all_locations(&self) -> Vec<Location> {
        self.definitions
            .iter()
            .chain(self.usages.iter())
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_definition_counts_once() {
        let mut entry = RegistryEntry::new("Point");
        entry.add_definition(Location::new("a.h", 1));
        entry.add_definition(Location::new("a.h", 1));
        assert_eq!(entry.definition_count(), 1);
        assert_eq!(entry.reference_count(), 1);
    }

    #[test]
    fn test_reference_count_sums_both_sets() {
        let mut entry = RegistryEntry::new("Point");
        entry.add_definition(Location::new("a.h", 1));
        entry.add_usage(Location::new("b.c", 1));
        entry.add_usage(Location::new("b.c", 7));
        assert_eq!(entry.reference_count(), 3);
    }

    #[test]
    fn test_same_line_definition_and_usage_are_distinct() {
        let mut entry = RegistryEntry::new("Point");
        entry.add_definition(Location::new("a.h", 1));
        entry.add_usage(Location::new("a.h", 1));
        assert_eq!(entry.reference_count(), 2);
    }
}
