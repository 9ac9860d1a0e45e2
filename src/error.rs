use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FileError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),

    #[error("Path is not a file: {0}")]
    NotAFile(PathBuf),

    #[error("Path is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("File name error: {0}")]
    NameError(String),

    #[error("Header read error for {path:?}")]
    HeaderReadError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug)]
pub enum ConfigError {
    IoError(io::Error),
    ParseError(toml::de::Error),
    HomeDirError,
    InvalidPath(String),
    InvalidValue(String),
}

impl std::error::Error for ConfigError {}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error in config: {}", e),
            ConfigError::ParseError(e) => write!(f, "Failed to parse config file: {}", e),
            ConfigError::HomeDirError => write!(f, "Failed to get home directory"),
            ConfigError::InvalidPath(s) => write!(f, "Invalid path in config: {}", s),
            ConfigError::InvalidValue(s) => write!(f, "Invalid configuration value: {}", s),
        }
    }
}

impl Clone for ConfigError {
    fn clone(&self) -> Self {
        match self {
            ConfigError::IoError(e) => {
                ConfigError::IoError(io::Error::new(e.kind(), e.to_string()))
            }
            ConfigError::ParseError(e) => {
                use serde::de::Error;
                ConfigError::ParseError(toml::de::Error::custom(e.to_string()))
            }
            ConfigError::HomeDirError => ConfigError::HomeDirError,
            ConfigError::InvalidPath(s) => ConfigError::InvalidPath(s.clone()),
            ConfigError::InvalidValue(s) => ConfigError::InvalidValue(s.clone()),
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(error: io::Error) -> Self {
        ConfigError::IoError(error)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(error: toml::de::Error) -> Self {
        ConfigError::ParseError(error)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FilesigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("File error: {0}")]
    FileError(#[from] FileError),

    #[error("Configuration error: {0}")]
    ConfigError(#[from] ConfigError),
}
