// Thu Feb 12 2026 - Alex

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub source_dir: PathBuf,
    pub include_patterns: Vec<String>,
    pub exclude_patterns: Vec<String>,
    pub output_dir: PathBuf,
    pub json_output: String,
    pub report_output: String,
    pub error_output: String,
    pub generated_dir: String,
    pub top_n: usize,
    pub enable_verbose_output: bool,
    pub enable_progress_bars: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("."),
            include_patterns: vec!["**/*.c".to_string(), "**/*.h".to_string()],
            exclude_patterns: Vec::new(),
            output_dir: PathBuf::from("SAOut"),
            json_output: "structs.json".to_string(),
            report_output: "report.txt".to_string(),
            error_output: "errors.txt".to_string(),
            generated_dir: "generated".to_string(),
            top_n: 5,
            enable_verbose_output: false,
            enable_progress_bars: true,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(path: &Path) -> Result<Self, String> {
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config {}: {}", path.display(), e))?;
        serde_json::from_str(&content)
            .map_err(|e| format!("Failed to parse config {}: {}", path.display(), e))
    }

    pub fn with_source_dir(mut self, dir: PathBuf) -> Self {
        self.source_dir = dir;
        self
    }

    pub fn with_output_dir(mut self, dir: PathBuf) -> Self {
        self.output_dir = dir;
        self
    }

    pub fn json_path(&self) -> PathBuf {
        self.output_dir.join(&self.json_output)
    }

    pub fn report_path(&self) -> PathBuf {
        self.output_dir.join(&self.report_output)
    }

    pub fn error_path(&self) -> PathBuf {
        self.output_dir.join(&self.error_output)
    }

    pub fn generated_path(&self) -> PathBuf {
        self.output_dir.join(&self.generated_dir)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.include_patterns.is_empty() {
            return Err("include_patterns must not be empty".to_string());
        }
        if self.top_n == 0 {
            return Err("top_n must be greater than 0".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_zero_top_n_rejected() {
        let mut config = Config::default();
        config.top_n = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_partial_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"source_dir": "/tmp/src", "top_n": 3}"#).unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.source_dir, PathBuf::from("/tmp/src"));
        assert_eq!(config.top_n, 3);
        assert_eq!(config.json_output, "structs.json");
    }

    #[test]
    fn test_output_paths_join_output_dir() {
        let config = Config::default().with_output_dir(PathBuf::from("/out"));
        assert_eq!(config.json_path(), PathBuf::from("/out/structs.json"));
        assert_eq!(config.generated_path(), PathBuf::from("/out/generated"));
    }
}
