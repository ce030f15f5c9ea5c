// Thu Feb 12 2026 - Alex

use crate::registry::{Location, TypeRegistry};
use crate::scan::pattern::{self, BROAD_STRUCT_PATTERN};
use crate::scan::source::SourceUnit;

/// A broad-pattern match awaiting disambiguation. Transient: consumed
/// immediately to produce a registry entry or a malformed-match report.
#[derive(Debug, Clone)]
pub struct DeclarationCandidate {
    pub content: String,
    pub start: usize,
}

/// Outcome of one extraction pass over a file.
#[derive(Debug, Default)]
pub struct ExtractionOutcome {
    pub definitions_found: usize,
    pub malformed: Vec<DeclarationCandidate>,
}

/// Finds candidate aggregate declarations in comment-free text and files
/// each one under its canonical name.
pub struct DeclarationExtractor;

impl DeclarationExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn find_candidates(&self, stripped: &str) -> Vec<DeclarationCandidate> {
        BROAD_STRUCT_PATTERN
            .find_iter(stripped)
            .map(|m| DeclarationCandidate {
                content: m.as_str().to_string(),
                start: m.start(),
            })
            .collect()
    }

    /// Disambiguates every candidate and records a definition location for
    /// each one that resolves to a canonical name. Candidates matching none
    /// of the four shapes are returned as malformed, not recorded.
    pub fn extract(
        &self,
        unit: &SourceUnit,
        stripped: &str,
        registry: &mut TypeRegistry,
    ) -> ExtractionOutcome {
        let mut outcome = ExtractionOutcome::default();

        for candidate in self.find_candidates(stripped) {
            match pattern::disambiguate(&candidate.content) {
                Some((shape, name)) => {
                    let line = SourceUnit::line_of_offset(stripped, candidate.start);
                    log::debug!(
                        "{}:{} {:?} declaration of {}",
                        unit.relative_path(),
                        line,
                        shape,
                        name
                    );
                    registry.record_definition(&name, Location::new(unit.relative_path(), line));
                    outcome.definitions_found += 1;
                }
                None => outcome.malformed.push(candidate),
            }
        }

        outcome
    }
}

impl Default for DeclarationExtractor {
    fn default() -> Self {
        Self::new()
    }
}
