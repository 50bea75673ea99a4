//! Configuration module
//!
//! ```toml
//! preset = "av-once"
//!
//! [classifier]
//! score_function = "linear"
//! negation = true
//! negation_window = 8
//!
//! [output]
//! default_format = "json"
//! pretty_json = true
//! ```

use crate::error::CliError;
use anyhow::{Context, Result};
use lexsent_api::Options;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Preset to start from
    #[serde(default)]
    pub preset: Option<String>,

    /// Option overrides applied on top of the preset
    #[serde(default)]
    pub classifier: Options,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Output-related configuration
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,

    /// Include the annotated document in text output
    pub annotate: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
            annotate: false,
        }
    }
}

impl CliConfig {
    /// Parse a configuration file
    pub fn from_path(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&source)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert!(config.preset.is_none());
        assert_eq!(config.output.default_format, "text");
        assert!(config.output.pretty_json);
    }

    #[test]
    fn test_parse() {
        let config: CliConfig = toml::from_str(
            r#"
            preset = "a-once"

            [classifier]
            score_function = "cosine"
            negation = false

            [output]
            default_format = "json"
            pretty_json = false
            "#,
        )
        .unwrap();

        assert_eq!(config.preset.as_deref(), Some("a-once"));
        assert_eq!(config.classifier.score_function.as_deref(), Some("cosine"));
        assert_eq!(config.classifier.negation, Some(false));
        assert_eq!(config.output.default_format, "json");
        assert!(!config.output.pretty_json);
        assert!(!config.output.annotate);
    }

    #[test]
    fn test_missing_file() {
        let err = CliConfig::from_path(Path::new("/nonexistent/lexsent.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_unknown_section_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "[performance]\nthreads = 4\n").unwrap();
        let err = CliConfig::from_path(&path).unwrap_err();
        assert!(err.downcast_ref::<CliError>().is_some());
    }
}
