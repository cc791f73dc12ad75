//! Rendering of expansion results
//!
//! Each pattern contributes one list of words. How the lists are laid out depends on the
//! configured [`OutputFormat`]; patterns that expand to nothing print nothing, except in
//! json where they show up as `[]`.

use braces_config::{OutputConfig, OutputFormat};
use std::fmt;

/// Failures the CLI reports before exiting
#[derive(Debug)]
pub enum CliError {
    /// Configuration could not be loaded or deserialized
    Config(braces_config::ConfigError),
    /// Results could not be serialized
    Json(serde_json::Error),
    /// Writing to stdout failed
    Io(std::io::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Config(e) => write!(f, "invalid configuration: {}", e),
            CliError::Json(e) => write!(f, "cannot format results as json: {}", e),
            CliError::Io(e) => write!(f, "cannot write output: {}", e),
        }
    }
}

impl std::error::Error for CliError {}

impl From<braces_config::ConfigError> for CliError {
    fn from(e: braces_config::ConfigError) -> Self {
        CliError::Config(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Json(e)
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}

/// Lay out the expansions of every pattern, in pattern order.
pub fn render(expansions: &[Vec<String>], output: &OutputConfig) -> Result<String, CliError> {
    let lines: Vec<String> = match output.format {
        OutputFormat::Null => {
            return Ok(expansions
                .iter()
                .flatten()
                .map(|word| format!("{}\0", word))
                .collect());
        }
        OutputFormat::Lines => expansions.iter().flatten().cloned().collect(),
        OutputFormat::Words => expansions
            .iter()
            .filter(|words| !words.is_empty())
            .map(|words| words.join(" "))
            .collect(),
        OutputFormat::Json => expansions
            .iter()
            .map(serde_json::to_string)
            .collect::<Result<_, _>>()?,
    };

    let mut rendered = lines.join("\n");
    if output.trailing_newline && !lines.is_empty() {
        rendered.push('\n');
    }
    Ok(rendered)
}
