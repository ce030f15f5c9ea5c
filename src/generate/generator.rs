// Thu Feb 12 2026 - Alex

use crate::generate::body::BodyLocator;
use crate::generate::emitter::{ClassEmitter, EmittedField, GeneratedClass};
use crate::generate::error::GenerateError;
use crate::generate::field::FieldParser;
use crate::generate::mapper::TypeMapper;
use crate::output::{ErrorSink, ExportedStruct, RegistryExport};
use crate::scan::source::read_with_fallback;
use indexmap::IndexMap;
use itertools::Itertools;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default)]
pub struct GenerationStats {
    pub files_written: usize,
    pub classes_emitted: usize,
    pub types_skipped: usize,
}

/// Generation phase driver. Consumes the persisted registry export plus the
/// original source tree; extraction's in-memory state is never reused.
pub struct ClassGenerator {
    output_dir: PathBuf,
    source_dir: PathBuf,
    structs: Vec<ExportedStruct>,
    mapper: TypeMapper,
}

impl ClassGenerator {
    pub fn from_table(
        output_dir: impl Into<PathBuf>,
        structs_table: &Path,
        source_dir: impl Into<PathBuf>,
    ) -> Result<Self, GenerateError> {
        let export =
            RegistryExport::read(structs_table).map_err(|e| GenerateError::InvalidStructsTable {
                path: structs_table.display().to_string(),
                reason: e.to_string(),
            })?;
        log::info!(
            "Parsed {} structs from {} based on definitions",
            export.definitions.len(),
            structs_table.display()
        );
        Ok(Self::from_export(output_dir, export, source_dir))
    }

    pub fn from_export(
        output_dir: impl Into<PathBuf>,
        export: RegistryExport,
        source_dir: impl Into<PathBuf>,
    ) -> Self {
        let mapper = TypeMapper::new(export.definitions.iter().map(|d| d.name.clone()));
        Self {
            output_dir: output_dir.into(),
            source_dir: source_dir.into(),
            structs: export.definitions,
            mapper,
        }
    }

    /// Emits one output unit per distinct owning file of the top-N structs
    /// by reference count. Per-type failures are reported and skipped;
    /// sibling types and files still generate.
    pub fn generate(
        &self,
        top_n: usize,
        errors: &mut dyn ErrorSink,
    ) -> Result<GenerationStats, GenerateError> {
        fs::create_dir_all(&self.output_dir)?;

        let locator = BodyLocator::new(&self.source_dir);
        let mut stats = GenerationStats::default();

        let mut by_owning_file: IndexMap<String, Vec<&ExportedStruct>> = IndexMap::new();
        for entry in self.select_top(top_n) {
            match locator.find_owning_file(entry) {
                Ok(owning) => by_owning_file.entry(owning).or_default().push(entry),
                Err(e) => {
                    log::warn!("{}", e);
                    errors.report(&e.to_string());
                    stats.types_skipped += 1;
                }
            }
        }

        for (owning_file, entries) in &by_owning_file {
            match self.generate_unit(owning_file, entries, errors, &mut stats) {
                Ok(()) => stats.files_written += 1,
                Err(e) => {
                    log::error!("Error writing unit for {}: {}", owning_file, e);
                    errors.report(&e.to_string());
                }
            }
        }

        log::info!(
            "Generated classes for {} files from top {} structs by references",
            stats.files_written,
            top_n
        );
        Ok(stats)
    }

    /// Top-N structs by total reference count, ties broken by name.
    fn select_top(&self, n: usize) -> Vec<&ExportedStruct> {
        self.structs
            .iter()
            .sorted_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)))
            .take(n)
            .collect()
    }

    fn generate_unit(
        &self,
        owning_file: &str,
        entries: &[&ExportedStruct],
        errors: &mut dyn ErrorSink,
        stats: &mut GenerationStats,
    ) -> Result<(), GenerateError> {
        let full_path = self.source_dir.join(owning_file);
        let content = read_with_fallback(&full_path)?;

        let mut classes = Vec::new();
        for entry in entries {
            match self.build_class(entry, owning_file, &content, errors) {
                Some(class) => classes.push(class),
                None => stats.types_skipped += 1,
            }
        }

        if classes.is_empty() {
            return Err(GenerateError::MissingBody {
                name: entries.iter().map(|e| e.name.as_str()).join(", "),
                location: owning_file.to_string(),
            });
        }

        let output_path = self.output_dir.join(output_file_name(owning_file));
        fs::write(&output_path, ClassEmitter::render_unit(&classes))?;
        log::info!("Wrote {}", output_path.display());
        stats.classes_emitted += classes.len();
        Ok(())
    }

    /// Parses one struct's body out of its owning file and maps its fields.
    /// Returns None (after reporting) when the body cannot be isolated; an
    /// empty field set still yields an empty class.
    fn build_class(
        &self,
        entry: &ExportedStruct,
        owning_file: &str,
        content: &str,
        errors: &mut dyn ErrorSink,
    ) -> Option<GeneratedClass> {
        let location = entry
            .all_locations()
            .into_iter()
            .find(|l| l.path() == owning_file)?;

        let body = match BodyLocator::extract_body(content, location.line(), &entry.name, &location)
        {
            Ok(body) => body,
            Err(e) => {
                log::warn!("{}", e);
                errors.report(&e.to_string());
                return None;
            }
        };

        let fields = FieldParser::parse(&body);
        if fields.is_empty() {
            log::warn!("No fields parsed for {} from body: {}", entry.name, body);
            errors.report(&format!("No fields parsed for {}", entry.name));
        }

        let emitted = fields
            .iter()
            .map(|f| EmittedField {
                name: f.name.clone(),
                mapped: self.mapper.map_field(f),
            })
            .collect();

        Some(GeneratedClass::new(entry.name.clone(), emitted))
    }
}

/// Output unit name: owning file's base name with the extension remapped to
/// the target language.
fn output_file_name(owning_file: &str) -> String {
    let base = owning_file.rsplit('/').next().unwrap_or(owning_file);
    match base.rsplit_once('.') {
        Some((stem, _)) => format!("{}.java", stem),
        None => format!("{}.java", base),
    }
}
