// Thu Oct 15 2026 - Alex

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub classes_file: Option<PathBuf>,
    pub signatures_file: Option<PathBuf>,
    pub output_file: Option<PathBuf>,
    pub pretty_output: bool,
    pub parallel: bool,
    pub max_threads: usize,
    pub strict: bool,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            classes_file: None,
            signatures_file: None,
            output_file: None,
            pretty_output: true,
            parallel: false,
            max_threads: num_cpus::get(),
            strict: false,
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fields absent from the file keep their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn with_classes_file(mut self, path: PathBuf) -> Self {
        self.classes_file = Some(path);
        self
    }

    pub fn with_signatures_file(mut self, path: PathBuf) -> Self {
        self.signatures_file = Some(path);
        self
    }

    pub fn with_output_file(mut self, path: PathBuf) -> Self {
        self.output_file = Some(path);
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_max_threads(mut self, threads: usize) -> Self {
        self.max_threads = threads;
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.classes_file.is_none() {
            return Err(ConfigError::Invalid("classes_file must be set".to_string()));
        }
        if self.signatures_file.is_none() {
            return Err(ConfigError::Invalid("signatures_file must be set".to_string()));
        }
        if self.parallel && self.max_threads == 0 {
            return Err(ConfigError::Invalid("max_threads must be greater than 0".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        let config = Config::new();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let config = Config::new()
            .with_classes_file(PathBuf::from("classes.json"))
            .with_signatures_file(PathBuf::from("signatures.json"));
        assert!(config.validate().is_ok());

        let config = config.with_parallel(true).with_max_threads(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: Config = serde_json::from_str(r#"{ "strict": true, "classes_file": "c.json" }"#).unwrap();
        assert!(config.strict);
        assert!(config.pretty_output);
        assert_eq!(config.classes_file, Some(PathBuf::from("c.json")));
        assert_eq!(config.log_level, "warn");
    }
}
