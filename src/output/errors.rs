// Thu Feb 12 2026 - Alex

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Append-only sink of human-readable error lines. Advisory: reporting
/// never blocks or aborts a run.
pub trait ErrorSink {
    fn report(&mut self, line: &str);
}

/// Appends each error line to a file, creating it on first use. Write
/// failures are logged and swallowed.
pub struct FileErrorSink {
    path: PathBuf,
}

impl FileErrorSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ErrorSink for FileErrorSink {
    fn report(&mut self, line: &str) {
        let result = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .and_then(|mut file| writeln!(file, "{}", line));
        if let Err(e) = result {
            log::error!("Failed to write error to {}: {}", self.path.display(), e);
        }
    }
}

/// Discards error lines after logging them. Used when no error file is
/// configured.
#[derive(Default)]
pub struct LogOnlyErrorSink;

impl ErrorSink for LogOnlyErrorSink {
    fn report(&mut self, line: &str) {
        log::warn!("{}", line);
    }
}

/// In-memory sink for tests.
#[derive(Default)]
pub struct MemoryErrorSink {
    pub lines: Vec<String>,
}

impl ErrorSink for MemoryErrorSink {
    fn report(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_file_sink_appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("errors.txt");
        let mut sink = FileErrorSink::new(&path);
        sink.report("first error");
        sink.report("second error");

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "first error\nsecond error\n");
    }
}
