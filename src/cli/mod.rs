//! CLI argument parsing for diffparse.
//!
//! Uses clap derive macros for declarative argument definitions.
//! The work itself lives in the `commands` module.

use clap::Parser;
use diffparse::config::{CliConfig, OutputFormat};
use diffparse::error::Result;
use std::path::PathBuf;

/// Parse unified diff output (git, hg, svn, GNU diff) into JSON.
///
/// Reads the diff from FILE, or from stdin when FILE is omitted or `-`,
/// and writes one record per changed file.
#[derive(Parser, Debug)]
#[command(name = "diffparse")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Diff file to read (default: stdin).
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Collapse deleted/added file pairs with identical content into renames.
    #[arg(long)]
    pub find_renames: bool,

    /// Pretty-print JSON output.
    #[arg(long)]
    pub pretty: bool,

    /// Output format (overrides the config file).
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// YAML config file with defaults for the flags above.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Config file values with command-line flags applied on top.
    pub fn resolve_config(&self) -> Result<CliConfig> {
        let mut config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };
        config.find_renames |= self.find_renames;
        config.pretty |= self.pretty;
        if let Some(format) = self.format {
            config.format = format;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::io::Write;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::parse_from(["diffparse", "--find-renames", "--format", "summary", "x.diff"]);
        assert_eq!(cli.input, Some(PathBuf::from("x.diff")));
        let config = cli.resolve_config().unwrap();
        assert!(config.find_renames);
        assert!(!config.pretty);
        assert_eq!(config.format, OutputFormat::Summary);
    }

    #[test]
    fn flags_layer_over_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "find_renames: true\nformat: summary").unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let cli = Cli::parse_from(["diffparse", "--pretty", "--config", path.as_str()]);
        let config = cli.resolve_config().unwrap();
        assert!(config.find_renames);
        assert!(config.pretty);
        assert_eq!(config.format, OutputFormat::Summary);

        let cli = Cli::parse_from(["diffparse", "--config", path.as_str(), "--format", "json"]);
        assert_eq!(cli.resolve_config().unwrap().format, OutputFormat::Json);
    }
}
