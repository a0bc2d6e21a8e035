use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub project: ProjectConfig,
    pub cleaner: CleanerConfig,
    pub lines: LinesConfig,
    pub checker: CheckerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Package directory name, also the stem of the egg-info directory
    pub package: String,
    /// Source file extension, without the leading dot
    pub source_extension: String,
    /// Directory names never descended into
    pub exclude: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanerConfig {
    /// Name of bytecode cache directories
    pub cache_dir_name: String,
    /// What to do when a deletion fails
    pub on_error: FailurePolicy,
}

/// Behavior of the cleaner after a failed deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Attempt every deletion, then report all failures together.
    #[default]
    Continue,
    /// Stop at the first failure.
    Abort,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LinesConfig {
    /// Width the per-file counts are right-justified to
    pub width: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckerConfig {
    /// Checker implementation: external or builtin
    pub backend: CheckerBackend,
    /// External program to run
    pub program: String,
    /// Arguments passed before the file list
    pub args: Vec<String>,
    /// Line length limit for the builtin checker
    pub max_line_length: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckerBackend {
    #[default]
    External,
    Builtin,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            package: "pyan".to_string(),
            source_extension: "py".to_string(),
            exclude: vec![".git".to_string()],
        }
    }
}

impl Default for CleanerConfig {
    fn default() -> Self {
        Self {
            cache_dir_name: "__pycache__".to_string(),
            on_error: FailurePolicy::Continue,
        }
    }
}

impl Default for LinesConfig {
    fn default() -> Self {
        Self { width: 4 }
    }
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            backend: CheckerBackend::External,
            program: "flake8".to_string(),
            args: vec![],
            max_line_length: 79,
        }
    }
}

impl ProjectConfig {
    /// Name of the packaging metadata directory at the repository root.
    pub fn metadata_dir_name(&self) -> String {
        format!("{}.egg-info", self.package)
    }
}

impl Config {
    /// Load configuration from `path`, or the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Config = toml::from_str(&content).map_err(|source| ConfigError::ParseError {
            path: path.to_path_buf(),
            source,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Reject values the operations cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.project.package.trim().is_empty() {
            return Err(ConfigError::Invalid("project.package must not be empty".into()));
        }
        let ext = &self.project.source_extension;
        if ext.is_empty() || ext.starts_with('.') {
            return Err(ConfigError::Invalid(format!(
                "project.source_extension must be non-empty without a leading dot, got '{}'",
                ext
            )));
        }
        if self.cleaner.cache_dir_name.is_empty() {
            return Err(ConfigError::Invalid("cleaner.cache_dir_name must not be empty".into()));
        }
        if !(1..=20).contains(&self.lines.width) {
            return Err(ConfigError::Invalid(format!(
                "lines.width must be between 1 and 20, got {}",
                self.lines.width
            )));
        }
        if self.checker.program.trim().is_empty() {
            return Err(ConfigError::Invalid("checker.program must not be empty".into()));
        }
        if self.checker.max_line_length == 0 {
            return Err(ConfigError::Invalid("checker.max_line_length must be positive".into()));
        }
        Ok(())
    }
}
