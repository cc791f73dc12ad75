//! Command-line interface for braces
//! Expands the brace patterns given as arguments and prints the results, one per line by default.
//!
//! Usage:
//!   braces `<pattern>...` [--format `<format>`] [--config `<file>`] [-v]

mod output;

use braces_config::{BracesConfig, Loader, OutputFormat};
use clap::{Arg, ArgAction, Command};
use output::{render, CliError};
use std::io::Write;
use tracing_subscriber::EnvFilter;

fn main() {
    let matches = Command::new("braces")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Expand bash-style brace patterns such as 'file{1..3}.{txt,md}'")
        .arg_required_else_help(true)
        .arg(
            Arg::new("patterns")
                .help("Patterns to expand (quote them so the shell leaves the braces alone)")
                .required(true)
                .num_args(1..)
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format: lines, null, words or json (default from config: lines)")
                .value_parser(|s: &str| s.parse::<OutputFormat>()),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log debug information to stderr")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let config_path = matches.get_one::<String>("config");
    let format = matches.get_one::<OutputFormat>("format").copied();
    let config = load_config(config_path.map(String::as_str), format).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(1);
    });

    init_logging(&config, matches.get_flag("verbose"));

    let patterns: Vec<&str> = matches
        .get_many::<String>("patterns")
        .map(|values| values.map(String::as_str).collect())
        .unwrap_or_default();

    if let Err(e) = handle_expand_command(&patterns, &config) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn load_config(path: Option<&str>, format: Option<OutputFormat>) -> Result<BracesConfig, CliError> {
    let mut loader = Loader::new();
    if let Some(path) = path {
        loader = loader.with_file(path);
    }
    if let Some(format) = format {
        loader = loader.set_override("output.format", format.as_str())?;
    }
    Ok(loader.build()?)
}

/// `RUST_LOG` wins over the configured filter; `--verbose` raises the configured one.
fn init_logging(config: &BracesConfig, verbose: bool) {
    let fallback = if verbose {
        "debug"
    } else {
        config.logging.filter.as_str()
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Handle the expand command
fn handle_expand_command(patterns: &[&str], config: &BracesConfig) -> Result<(), CliError> {
    let expansions: Vec<Vec<String>> = patterns
        .iter()
        .map(|pattern| braces::expand(pattern))
        .collect();
    tracing::debug!(
        patterns = patterns.len(),
        results = expansions.iter().map(Vec::len).sum::<usize>(),
        "expansion finished"
    );

    let rendered = render(&expansions, &config.output)?;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
