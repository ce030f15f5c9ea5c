// Thu Feb 12 2026 - Alex

use crate::generate::error::GenerateError;
use crate::output::ExportedStruct;
use crate::registry::Location;
use crate::scan::pattern::{self, BROAD_STRUCT_PATTERN};
use crate::scan::source::read_with_fallback;
use std::path::{Path, PathBuf};

/// Re-reads source files for the generation phase and isolates the
/// brace-delimited body of a declaration.
pub struct BodyLocator<'a> {
    source_dir: &'a Path,
}

impl<'a> BodyLocator<'a> {
    pub fn new(source_dir: &'a Path) -> Self {
        Self { source_dir }
    }

    pub fn resolve(&self, relative: &str) -> PathBuf {
        self.source_dir.join(relative)
    }

    /// The owning file of a struct: the first recorded location whose file
    /// holds a declaration of this name with an actual `{` body. Earlier
    /// locations may be forward declarations; when no location has a body,
    /// falls back to the first recorded location.
    pub fn find_owning_file(&self, entry: &ExportedStruct) -> Result<String, GenerateError> {
        let locations = entry.all_locations();
        let mut seen = Vec::new();

        for location in &locations {
            if seen.contains(&location.path()) {
                continue;
            }
            seen.push(location.path());

            let full_path = self.resolve(location.path());
            let content = match read_with_fallback(&full_path) {
                Ok(c) => c,
                Err(e) => {
                    log::warn!(
                        "Error reading {} for {}: {}",
                        full_path.display(),
                        entry.name,
                        e
                    );
                    continue;
                }
            };
            if Self::has_body_declaration(&content, &entry.name) {
                log::debug!("Found definition for {} in {}", entry.name, location.path());
                return Ok(location.path().to_string());
            }
        }

        match locations.first() {
            Some(first) => {
                log::warn!(
                    "No definition found for {} in any listed file, using first location as fallback: {}",
                    entry.name,
                    first
                );
                Ok(first.path().to_string())
            }
            None => Err(GenerateError::NoOwningFile {
                name: entry.name.clone(),
            }),
        }
    }

    fn has_body_declaration(content: &str, name: &str) -> bool {
        BROAD_STRUCT_PATTERN.find_iter(content).any(|m| {
            m.as_str().contains('{')
                && pattern::disambiguate(m.as_str())
                    .map(|(_, n)| n == name)
                    .unwrap_or(false)
        })
    }

    /// Extracts the brace-delimited body starting at a 1-based line number.
    /// Scans forward counting braces; the body accumulates every line while
    /// the depth is positive, closing line included.
    pub fn extract_body(
        content: &str,
        start_line: usize,
        name: &str,
        location: &Location,
    ) -> Result<String, GenerateError> {
        let lines: Vec<&str> = content.split('\n').collect();
        if start_line == 0 || start_line > lines.len() {
            return Err(GenerateError::LineOutOfBounds {
                name: name.to_string(),
                line: start_line,
                total: lines.len(),
            });
        }

        let mut depth: isize = 0;
        let mut started = false;
        let mut body = String::new();

        for line in &lines[start_line - 1..] {
            let opens = line.matches('{').count() as isize;
            let closes = line.matches('}').count() as isize;

            depth += opens;
            if depth > 0 {
                body.push_str(line.trim());
                body.push('\n');
                started = true;
            }
            depth -= closes;

            if depth < 0 {
                return Err(GenerateError::UnmatchedBraces {
                    name: name.to_string(),
                    location: location.to_string(),
                });
            }
            if started && depth == 0 {
                return Ok(body);
            }
        }

        if depth > 0 {
            return Err(GenerateError::UnmatchedBraces {
                name: name.to_string(),
                location: location.to_string(),
            });
        }
        Err(GenerateError::MissingBody {
            name: name.to_string(),
            location: location.to_string(),
        })
    }
}
