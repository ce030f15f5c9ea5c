// Thu Feb 12 2026 - Alex

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// One source file: its path relative to the scan root plus decoded text.
/// Loaded once and read-only; the generation phase re-reads files itself
/// instead of reusing these.
#[derive(Debug, Clone)]
pub struct SourceUnit {
    relative_path: String,
    text: String,
}

impl SourceUnit {
    pub fn new(relative_path: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            relative_path: relative_path.into(),
            text: text.into(),
        }
    }

    /// Reads and decodes a file, trying UTF-8 first and falling back to
    /// ISO-8859-1 when the bytes are not valid UTF-8.
    pub fn load(root: &Path, file: &Path) -> io::Result<Self> {
        let text = read_with_fallback(file)?;
        let relative_path = relative_display(root, file);
        Ok(Self::new(relative_path, text))
    }

    pub fn relative_path(&self) -> &str {
        &self.relative_path
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// 1-based line number of a character offset, counting newline-terminated
    /// lines consumed before the offset.
    pub fn line_of_offset(text: &str, offset: usize) -> usize {
        1 + text[..offset.min(text.len())]
            .bytes()
            .filter(|&b| b == b'\n')
            .count()
    }
}

/// Reads file bytes, decoding UTF-8 with an ISO-8859-1 fallback. Latin-1
/// maps every byte to the code point of the same value, so the fallback
/// cannot fail.
pub fn read_with_fallback(path: &Path) -> io::Result<String> {
    let bytes = fs::read(path)?;
    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(err) => {
            log::debug!("UTF-8 failed for {}, falling back to ISO-8859-1", path.display());
            Ok(err.into_bytes().iter().map(|&b| b as char).collect())
        }
    }
}

/// Path relative to the scan root, with forward slashes on every platform.
pub fn relative_display(root: &Path, file: &Path) -> String {
    let relative: PathBuf = file.strip_prefix(root).unwrap_or(file).to_path_buf();
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
