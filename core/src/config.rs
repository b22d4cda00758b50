//! Configuration module for i18n-asset
//!
//! Handles loading, parsing, and saving of configuration files.
//! Default configuration path: `~/.i18n-asset/config.toml`

use crate::dictionary::{Dictionary, DictionaryVariant};
use crate::error::{ConfigError, CoreError};
use crate::formatter::FormatterOptions;
use crate::template::MISSING_ARGUMENT;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,
    /// Dictionary source settings
    pub dictionary: DictionaryConfig,
    /// Formatter behavior
    pub formatter: FormatterConfig,
}

impl Config {
    /// Load configuration from default path (~/.i18n-asset/config.toml)
    pub fn load() -> Result<Self, CoreError> {
        let path = Self::default_path()?;
        if path.exists() {
            Self::load_from_path(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, CoreError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML string
    pub fn from_toml(content: &str) -> Result<Self, CoreError> {
        Ok(toml::from_str(content).map_err(ConfigError::ParseToml)?)
    }

    /// Get default configuration file path
    pub fn default_path() -> Result<PathBuf, CoreError> {
        dirs::home_dir()
            .ok_or(ConfigError::NoHomeDir)
            .map(|home| home.join(".i18n-asset").join("config.toml"))
            .map_err(CoreError::Config)
    }

    /// Save configuration to file
    pub fn save(&self, path: &std::path::Path) -> Result<(), CoreError> {
        let content = toml::to_string_pretty(self).map_err(ConfigError::SerializeToml)?;
        std::fs::write(path, content).map_err(|e| ConfigError::WriteFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(())
    }
}

/// General configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Enable verbose output
    pub verbose: bool,
    /// Default output format (pretty, json, compact)
    pub default_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            default_format: "pretty".to_string(),
        }
    }
}

/// Dictionary source configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DictionaryConfig {
    /// JSON dictionary file; none means the caller supplies one
    pub path: Option<PathBuf>,
    /// Accepted template forms
    pub variant: DictionaryVariant,
}

impl DictionaryConfig {
    /// Load the configured dictionary file, if one is set
    pub fn load(&self) -> Result<Option<Dictionary>, CoreError> {
        self.path
            .as_deref()
            .map(|path| Dictionary::load_from_path(path, self.variant))
            .transpose()
    }
}

/// Formatter configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatterConfig {
    /// Substitute arguments into defaults and `[code]` placeholders
    pub substitute_fallbacks: bool,
    /// Text written for a missing argument
    pub missing_argument: String,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            substitute_fallbacks: true,
            missing_argument: MISSING_ARGUMENT.to_string(),
        }
    }
}

impl FormatterConfig {
    /// Formatter options described by this section
    pub fn options(&self) -> FormatterOptions {
        FormatterOptions {
            substitute_fallbacks: self.substitute_fallbacks,
            missing_argument: self.missing_argument.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(!config.general.verbose);
        assert_eq!(config.general.default_format, "pretty");
        assert!(config.dictionary.path.is_none());
        assert_eq!(config.dictionary.variant, DictionaryVariant::Structured);
        assert!(config.formatter.substitute_fallbacks);
        assert_eq!(config.formatter.missing_argument, "undefined");
    }

    #[test]
    fn test_config_parse_toml() {
        let toml_content = r#"
[general]
verbose = true
default_format = "json"

[dictionary]
path = "/srv/app/messages.json"
variant = "plain"

[formatter]
substitute_fallbacks = false
missing_argument = "?"
"#;

        let config = Config::from_toml(toml_content).unwrap();
        assert!(config.general.verbose);
        assert_eq!(config.general.default_format, "json");
        assert_eq!(
            config.dictionary.path,
            Some(PathBuf::from("/srv/app/messages.json"))
        );
        assert_eq!(config.dictionary.variant, DictionaryVariant::Plain);
        assert!(!config.formatter.substitute_fallbacks);
        assert_eq!(config.formatter.missing_argument, "?");
    }

    #[test]
    fn test_config_partial_toml() {
        let toml_content = r#"
[dictionary]
variant = "plain"
"#;

        let config = Config::from_toml(toml_content).unwrap();
        assert_eq!(config.dictionary.variant, DictionaryVariant::Plain);
        // Other fields should have defaults
        assert!(!config.general.verbose);
        assert_eq!(config.formatter.missing_argument, "undefined");
    }

    #[test]
    fn test_config_empty_toml() {
        let config = Config::from_toml("").unwrap();
        assert!(!config.general.verbose);
        assert_eq!(config.general.default_format, "pretty");
    }

    #[test]
    fn test_config_unknown_variant() {
        let result = Config::from_toml("[dictionary]\nvariant = \"yaml\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");

        let mut config = Config::default();
        config.general.verbose = true;
        config.dictionary.path = Some(temp_dir.path().join("messages.json"));
        config.formatter.substitute_fallbacks = false;

        config.save(&config_path).unwrap();
        assert!(config_path.exists());

        let loaded = Config::load_from_path(&config_path).unwrap();
        assert!(loaded.general.verbose);
        assert_eq!(loaded.dictionary.path, config.dictionary.path);
        assert!(!loaded.formatter.substitute_fallbacks);
    }

    #[test]
    fn test_config_load_nonexistent() {
        let result = Config::load_from_path(std::path::Path::new("/nonexistent/config.toml"));
        assert!(matches!(
            result,
            Err(CoreError::Config(ConfigError::ReadFile { .. }))
        ));
    }

    #[test]
    fn test_formatter_options_from_config() {
        let config = FormatterConfig {
            substitute_fallbacks: true,
            missing_argument: "-".to_string(),
        };
        let options = config.options();
        assert!(options.substitute_fallbacks);
        assert_eq!(options.missing_argument, "-");
        assert_eq!(FormatterConfig::default().options(), FormatterOptions::default());
    }

    #[test]
    fn test_dictionary_config_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("messages.json");
        std::fs::write(&path, r#"{"greeting": "Hi"}"#).unwrap();

        let config = DictionaryConfig {
            path: Some(path),
            variant: DictionaryVariant::Plain,
        };
        let dict = config.load().unwrap().unwrap();
        assert_eq!(dict.variant(), DictionaryVariant::Plain);
        assert!(dict.contains("greeting"));

        assert!(DictionaryConfig::default().load().unwrap().is_none());
    }

    #[test]
    fn test_invalid_toml() {
        let result = Config::from_toml("invalid { toml content");
        assert!(result.is_err());
    }
}
