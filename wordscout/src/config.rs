use config::{Config as ConfigBuilder, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::errors::{ScanError, ScanResult};

/// Files scanned by the driver when nothing else is supplied
pub const DEFAULT_FILES: [&str; 3] = ["words_1.txt", "words_2.txt", "words_3.txt"];

/// Keywords searched by the driver when nothing else is supplied
pub const DEFAULT_KEYWORDS: [&str; 3] = ["choose", "come", "cost"];

/// Inputs for a keyword scan.
///
/// The driver always runs with [`ScanConfig::default`], which holds the literal
/// file and keyword lists. Embedders and tests can describe other inputs in a
/// YAML file:
/// ```yaml
/// files:
///   - "notes/a.txt"
///   - "notes/b.txt"
/// keywords: ["deadline", "budget"]
/// log_level: "info"
/// ```
/// Fields that are left out fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Files to scan, in dispatch order
    #[serde(default = "default_files")]
    pub files: Vec<PathBuf>,

    /// Keywords to look for (plain substrings)
    #[serde(default = "default_keywords")]
    pub keywords: Vec<String>,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_files() -> Vec<PathBuf> {
    DEFAULT_FILES.iter().map(PathBuf::from).collect()
}

fn default_keywords() -> Vec<String> {
    DEFAULT_KEYWORDS.iter().map(|k| k.to_string()).collect()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            files: default_files(),
            keywords: default_keywords(),
            log_level: default_log_level(),
        }
    }
}

impl ScanConfig {
    /// Builds a config from explicit inputs, keeping the default log level
    pub fn new(files: Vec<PathBuf>, keywords: Vec<String>) -> Self {
        Self {
            files,
            keywords,
            log_level: default_log_level(),
        }
    }

    /// Loads configuration from a YAML file
    pub fn load_from(config_path: &Path) -> ScanResult<Self> {
        if !config_path.exists() {
            return Err(ScanError::config_error(format!(
                "config file {} does not exist",
                config_path.display()
            )));
        }

        let config: ScanConfig = ConfigBuilder::builder()
            .add_source(File::from(config_path))
            .build()?
            .try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects inputs that would make every file match
    pub fn validate(&self) -> ScanResult<()> {
        if self.keywords.iter().any(|k| k.is_empty()) {
            return Err(ScanError::config_error("keywords must not be empty strings"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_default_values() {
        let config = ScanConfig::default();
        assert_eq!(
            config.files,
            vec![
                PathBuf::from("words_1.txt"),
                PathBuf::from("words_2.txt"),
                PathBuf::from("words_3.txt"),
            ]
        );
        assert_eq!(config.keywords, vec!["choose", "come", "cost"]);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_load_config_file() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.yaml");
        fs::write(
            &config_path,
            r#"
            files: ["a.txt", "b.txt"]
            keywords: ["deadline", "budget"]
            log_level: "debug"
        "#,
        )
        .unwrap();

        let config = ScanConfig::load_from(&config_path).unwrap();
        assert_eq!(
            config.files,
            vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")]
        );
        assert_eq!(config.keywords, vec!["deadline", "budget"]);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.yaml");
        fs::write(&config_path, "keywords: [\"cost\"]\n").unwrap();

        let config = ScanConfig::load_from(&config_path).unwrap();
        assert_eq!(config.keywords, vec!["cost"]);
        assert_eq!(config.files, ScanConfig::default().files);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_invalid_config() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.yaml");
        fs::write(&config_path, "files: 42\nkeywords: {a: 1}\n").unwrap();

        let result = ScanConfig::load_from(&config_path);
        assert!(matches!(result, Err(ScanError::ConfigError(_))));
    }

    #[test]
    fn test_empty_keyword_rejected() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.yaml");
        fs::write(&config_path, "keywords: [\"\", \"come\"]\n").unwrap();

        assert!(ScanConfig::load_from(&config_path).is_err());
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = ScanConfig::load_from(Path::new("nonexistent.yaml"));
        assert!(result.is_err());
    }
}
