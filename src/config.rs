//! Configuration for the catalog CLI tools
//!
//! Settings load in layers:
//! - built-in defaults
//! - config file (`tuples.toml`, `.tuples.toml`, or the XDG config dir)
//! - environment variables (`TUPLES_*`, `__`-separated)
//!
//! ## Example config file (tuples.toml):
//! ```toml
//! [output]
//! format = "pretty"
//!
//! [verify]
//! strict = true
//! ```

use config_crate::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level tool configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TuplesConfig {
    /// JSON output settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Intermediate verification settings
    #[serde(default)]
    pub verify: VerifyConfig,
}

/// JSON output settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Pretty or compact JSON
    #[serde(default)]
    pub format: OutputFormat,
}

/// Output format for JSON
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Pretty,
    Compact,
}

/// Intermediate verification settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyConfig {
    /// Fail verification on rows with unset non-nullable fields
    #[serde(default = "default_true")]
    pub strict: bool,

    /// Default intermediate to check when none is given
    #[serde(default)]
    pub default_intermediate: Option<PathBuf>,
}

fn default_true() -> bool {
    true
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            strict: true,
            default_intermediate: None,
        }
    }
}

impl TuplesConfig {
    /// Load configuration from the default locations
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration, optionally forcing a specific file
    pub fn load_from(config_path: Option<&str>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        for location in ["tuples.toml", ".tuples.toml"] {
            builder = builder.add_source(File::with_name(location).required(false));
        }

        if let Some(config_dir) = directories::ProjectDirs::from("dev", "forge", "tuples") {
            let xdg_config = config_dir.config_dir().join("tuples.toml");
            if xdg_config.exists() {
                builder = builder.add_source(File::from(xdg_config).required(false));
            }
        }

        if let Some(path) = config_path {
            builder = builder.add_source(File::with_name(path).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix("TUPLES")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Save the configuration to a file
    pub fn save(&self, path: &str) -> std::io::Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TuplesConfig::default();
        assert!(config.verify.strict);
        assert_eq!(config.output.format, OutputFormat::Pretty);
    }

    #[test]
    fn test_serialize_config() {
        let config = TuplesConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("[output]"));
        assert!(toml_str.contains("[verify]"));
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tuples.toml");

        let mut config = TuplesConfig::default();
        config.output.format = OutputFormat::Compact;
        config.verify.strict = false;
        config.save(path.to_str().unwrap()).unwrap();

        let loaded = TuplesConfig::load_from(Some(path.to_str().unwrap())).unwrap();
        assert_eq!(loaded.output.format, OutputFormat::Compact);
        assert!(!loaded.verify.strict);
    }
}
