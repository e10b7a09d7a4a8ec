//! CLI configuration loaded from an optional YAML file.
//!
//! Every field has a default and unknown fields are ignored, so an empty
//! file is a valid config. Command-line flags are applied on top.

use crate::error::{DiffError, Result};
use crate::options::ParseOptions;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// How parsed files are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The full file/chunk/change tree as JSON.
    #[default]
    Json,
    /// One line per file: status, path, added and removed line counts.
    Summary,
}

/// Configuration for the `diffparse` binary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Pair deleted and added files with identical content.
    pub find_renames: bool,

    /// Pretty-print JSON output.
    pub pretty: bool,

    /// Output format.
    pub format: OutputFormat,
}

impl CliConfig {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(CliConfig)` - Successfully loaded config
    /// * `Err(DiffError::Io)` - The file could not be read
    /// * `Err(DiffError::Config)` - The YAML does not describe a config
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml)
            .map_err(|e| DiffError::Config(format!("failed to parse config YAML: {}", e)))
    }

    /// Options to hand to the parser.
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            find_renames: self.find_renames,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_minimal_yaml() {
        let config = CliConfig::from_yaml("").unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_parse_partial_yaml() {
        let yaml = r#"
find_renames: true
unknown_key: 42
"#;
        let config = CliConfig::from_yaml(yaml).unwrap();
        assert!(config.find_renames);
        assert!(!config.pretty);
        assert!(config.parse_options().find_renames);
    }

    #[test]
    fn test_parse_full_yaml() {
        let yaml = r#"
find_renames: false
pretty: true
format: summary
"#;
        let config = CliConfig::from_yaml(yaml).unwrap();
        assert!(!config.find_renames);
        assert!(config.pretty);
        assert_eq!(config.format, OutputFormat::Summary);
    }

    #[test]
    fn test_invalid_yaml_is_config_error() {
        let err = CliConfig::from_yaml("format: [nope").unwrap_err();
        assert!(matches!(err, DiffError::Config(_)));

        let err = CliConfig::from_yaml("format: xml").unwrap_err();
        assert!(matches!(err, DiffError::Config(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "pretty: true").unwrap();
        let config = CliConfig::load(file.path()).unwrap();
        assert!(config.pretty);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = CliConfig::load(dir.path().join("missing.yaml")).unwrap_err();
        assert!(matches!(err, DiffError::Io(_)));
    }
}
