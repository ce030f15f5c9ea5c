// Thu Feb 12 2026 - Alex

use crate::output::ErrorSink;
use crate::registry::TypeRegistry;
use crate::scan::comment::strip_comments;
use crate::scan::error::ScanError;
use crate::scan::extractor::DeclarationExtractor;
use crate::scan::source::SourceUnit;
use crate::scan::usage::UsageDetector;
use crate::utils::fs::collect_source_files;
use std::path::Path;

#[derive(Debug, Default)]
pub struct ScanStats {
    pub files_scanned: usize,
    pub files_failed: usize,
    pub definitions_found: usize,
    pub usages_found: usize,
    pub malformed_matches: usize,
}

/// Drives the extraction phase: walks the file set one file at a time,
/// strips comments, extracts declarations, then detects usages against the
/// registry built so far.
pub struct StructAnalyzer {
    extractor: DeclarationExtractor,
    detector: UsageDetector,
}

impl StructAnalyzer {
    pub fn new() -> Self {
        Self {
            extractor: DeclarationExtractor::new(),
            detector: UsageDetector::new(),
        }
    }

    /// Scans every matching file under `root`. Per-file failures are
    /// reported and skipped; only an unreadable root is fatal.
    pub fn analyze_tree(
        &self,
        root: &Path,
        include: &[String],
        exclude: &[String],
        registry: &mut TypeRegistry,
        errors: &mut dyn ErrorSink,
        mut progress: impl FnMut(usize, usize),
    ) -> Result<ScanStats, ScanError> {
        let files = collect_source_files(root, include, exclude)?;
        log::info!("Found {} files to process", files.len());

        let mut stats = ScanStats::default();
        for (index, file) in files.iter().enumerate() {
            match SourceUnit::load(root, file) {
                Ok(unit) => {
                    self.analyze_unit(&unit, registry, errors, &mut stats);
                    stats.files_scanned += 1;
                }
                Err(e) => {
                    log::warn!("Skipped {} due to IO error: {}", file.display(), e);
                    errors.report(&format!("IO Error processing {}: {}", file.display(), e));
                    stats.files_failed += 1;
                }
            }
            progress(index + 1, files.len());
        }
        Ok(stats)
    }

    /// Per-file pipeline: comment stripping, declaration extraction, usage
    /// detection. Usage detection sees the registry as populated by every
    /// file processed so far, this one included.
    pub fn analyze_unit(
        &self,
        unit: &SourceUnit,
        registry: &mut TypeRegistry,
        errors: &mut dyn ErrorSink,
        stats: &mut ScanStats,
    ) {
        let stripped = strip_comments(unit.text());

        let outcome = self.extractor.extract(unit, &stripped, registry);
        stats.definitions_found += outcome.definitions_found;
        for candidate in &outcome.malformed {
            log::warn!(
                "Invalid struct match in {}: {}",
                unit.relative_path(),
                candidate.content
            );
            errors.report(&format!(
                "Invalid struct match in {}: {}",
                unit.relative_path(),
                candidate.content
            ));
            stats.malformed_matches += 1;
        }

        stats.usages_found += self.detector.detect(unit, &stripped, registry);
    }
}

impl Default for StructAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
