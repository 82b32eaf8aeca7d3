//! Application configuration
//!
//! TOML-backed settings for the CLI driver: logging and default output
//! format. The library itself takes no configuration; it only emits
//! through the `log` facade.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{GraphError, GraphResult};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub log: LogConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub dir: String,
    pub file: String,
    pub max_file_size: u64,
    pub max_files: usize,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

/// How the CLI renders planned routes.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log: LogConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            dir: "logs".to_string(),
            file: "routegraph".to_string(),
            max_file_size: 10 * 1024 * 1024, // 10MB
            max_files: 5,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> GraphResult<Self> {
        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| GraphError::Parse(format!("config: {}", e)))
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> GraphResult<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| GraphError::Serialization(format!("config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = Config::default();
        assert_eq!(config.log.level, "info");
        assert_eq!(config.log.file, "routegraph");
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.log.level = "debug".to_string();
        config.output.format = OutputFormat::Json;
        config.save(&path).expect("save");

        let loaded = Config::load(&path).expect("load");
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: Config = toml::from_str("[log]\nlevel = \"warn\"\n").expect("parse");
        assert_eq!(config.log.level, "warn");
        assert_eq!(config.log.dir, "logs");
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn test_load_rejects_malformed_toml() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "log = not toml").expect("write");

        let result = Config::load(&path);
        assert!(matches!(result, Err(GraphError::Parse(_))));
    }
}
