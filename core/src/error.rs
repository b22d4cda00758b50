//! Unified error types for i18n-asset Core
//!
//! Only loading can fail. Lookup and formatting always produce a string,
//! so none of these errors surface from [`crate::Formatter`].

use std::path::PathBuf;
use thiserror::Error;

/// Core library error type
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration file errors
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Dictionary loading errors
    #[error("Dictionary error: {0}")]
    Dictionary(#[from] DictionaryError),
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to parse TOML
    #[error("Failed to parse TOML config: {0}")]
    ParseToml(#[from] toml::de::Error),

    /// Failed to serialize config
    #[error("Failed to serialize config: {0}")]
    SerializeToml(#[from] toml::ser::Error),

    /// Failed to write config file
    #[error("Failed to write config file {path}: {source}")]
    WriteFile {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Home directory not found
    #[error("Could not determine home directory")]
    NoHomeDir,
}

/// Dictionary-specific errors
#[derive(Error, Debug)]
pub enum DictionaryError {
    /// Failed to read dictionary file
    #[error("Failed to read dictionary file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Dictionary source is not valid JSON of the expected shape
    #[error("Failed to parse dictionary: {0}")]
    ParseJson(#[from] serde_json::Error),

    /// A plain dictionary carried a fragment list
    #[error("Code '{code}' has a structured template, but the dictionary only accepts plain strings")]
    StructuredInPlain { code: String },
}
