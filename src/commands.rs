//! Command implementation for the diffparse binary.

use crate::cli::Cli;
use diffparse::config::{CliConfig, OutputFormat};
use diffparse::error::Result;
use diffparse::{File, parse};
use log::debug;
use std::io::Read;
use std::path::Path;

/// Read the diff, parse it and render it according to the config.
pub fn run(cli: &Cli) -> Result<String> {
    let config = cli.resolve_config()?;
    let text = read_input(cli.input.as_deref())?;
    debug!("read {} bytes of diff input", text.len());

    let files = parse(&text, &config.parse_options())?;
    render(&files, &config)
}

/// Read the diff from `path`, or from stdin when `path` is `None` or `-`.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => Ok(std::fs::read_to_string(path)?),
        _ => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

/// Render parsed files in the configured output format.
pub fn render(files: &[File], config: &CliConfig) -> Result<String> {
    match config.format {
        OutputFormat::Json if config.pretty => Ok(serde_json::to_string_pretty(files)?),
        OutputFormat::Json => Ok(serde_json::to_string(files)?),
        OutputFormat::Summary => Ok(files
            .iter()
            .map(summary_line)
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

fn summary_line(file: &File) -> String {
    if file.renamed {
        return format!("R {} -> {}", file.from, file.to);
    }
    let status = if file.new {
        'A'
    } else if file.deleted {
        'D'
    } else {
        'M'
    };
    let binary = if file.binary { " (binary)" } else { "" };
    format!(
        "{} {} +{} -{}{}",
        status,
        file.path(),
        file.additions,
        file.deletions,
        binary
    )
}
