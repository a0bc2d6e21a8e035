use std::path::PathBuf;
use thiserror::Error;

/// Core library errors
#[derive(Error, Debug)]
pub enum MaintError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error at path '{path}': {source}")]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to walk directory tree: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Failed to clean {} path(s): {}", .0.len(), format_failures(.0))]
    PartialClean(Vec<(PathBuf, String)>),

    #[error("Style checker error: {0}")]
    Tool(#[from] ToolError),
}

impl MaintError {
    /// Wrap an IO error with the path it happened on.
    pub fn fs(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        MaintError::Filesystem {
            path: path.into(),
            source,
        }
    }
}

/// Errors from the style checking collaborator
#[derive(Error, Debug)]
pub enum ToolError {
    #[error("'{0}' not found; is it installed and on PATH?")]
    NotFound(String),

    #[error("Failed to start '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("No source files to check in '{0}'")]
    NoSources(PathBuf),
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

fn format_failures(failures: &[(PathBuf, String)]) -> String {
    failures
        .iter()
        .map(|(path, err)| format!("{}: {}", path.display(), err))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, MaintError>;
