// Thu Feb 12 2026 - Alex

use crate::scan::error::ScanError;
use ignore::overrides::OverrideBuilder;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// Collects regular files under `root` matching the include globs and not
/// matching any exclude glob. Results are sorted so runs are deterministic.
pub fn collect_source_files(
    root: &Path,
    include: &[String],
    exclude: &[String],
) -> Result<Vec<PathBuf>, ScanError> {
    if !root.is_dir() {
        return Err(ScanError::SourceRootUnreadable(root.display().to_string()));
    }

    let mut overrides = OverrideBuilder::new(root);
    for pattern in include {
        overrides
            .add(pattern)
            .map_err(|_| ScanError::InvalidPattern(pattern.clone()))?;
    }
    for pattern in exclude {
        let negated = format!("!{}", pattern);
        overrides
            .add(&negated)
            .map_err(|_| ScanError::InvalidPattern(pattern.clone()))?;
    }
    let overrides = overrides
        .build()
        .map_err(|e| ScanError::InvalidPattern(e.to_string()))?;

    let mut files = Vec::new();
    let walker = WalkBuilder::new(root)
        .overrides(overrides)
        .standard_filters(false)
        .build();

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                log::warn!("Skipping unreadable directory entry: {}", e);
                continue;
            }
        };
        if entry.file_type().map(|t| t.is_file()).unwrap_or(false) {
            files.push(entry.into_path());
        }
    }

    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    #[test]
    fn test_include_filters_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("a.c"));
        touch(&dir.path().join("b.h"));
        touch(&dir.path().join("notes.txt"));
        touch(&dir.path().join("sub/c.h"));

        let files = collect_source_files(
            dir.path(),
            &["**/*.c".to_string(), "**/*.h".to_string()],
            &[],
        )
        .unwrap();

        let names: Vec<_> = files
            .iter()
            .map(|p| p.strip_prefix(dir.path()).unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names.len(), 3);
        assert!(!names.iter().any(|n| n.ends_with(".txt")));
    }

    #[test]
    fn test_exclude_wins_over_include() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("keep.h"));
        touch(&dir.path().join("vendor/skip.h"));

        let files = collect_source_files(
            dir.path(),
            &["**/*.h".to_string()],
            &["vendor/**".to_string()],
        )
        .unwrap();

        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("keep.h"));
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let err = collect_source_files(Path::new("/no/such/dir"), &[], &[]).unwrap_err();
        assert!(matches!(err, ScanError::SourceRootUnreadable(_)));
    }
}
