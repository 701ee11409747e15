//! auto-commit-msg - CLI entry point.

use std::io::{self, IsTerminal, Read};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use auto_commit_msg::summary::{format_message, summarize};
use auto_commit_msg::LineFormat;

/// Summarize git status output as a commit message.
#[derive(Parser, Debug)]
#[command(name = "auto-commit-msg")]
#[command(about = "Summarize git status output as a commit message")]
#[command(version)]
struct Cli {
    /// Status lines, e.g. "$(git diff-index --name-status HEAD)". Reads stdin when omitted
    lines: Vec<String>,

    /// Line format: auto, status or diff-index [default: $AUTO_COMMIT_MSG_FORMAT or auto]
    #[arg(long)]
    format: Option<LineFormat>,

    /// Print the per-action file counts as JSON instead of a message
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let format = cli.format.unwrap_or_else(LineFormat::from_env);

    let input = if cli.lines.is_empty() {
        read_stdin().context("Failed to read status lines from stdin")?
    } else {
        cli.lines
    };
    let lines = split_lines(&input);

    let counts = summarize(&lines, format).context("Could not generate commit message")?;

    if cli.json {
        let json = serde_json::to_string(&counts).context("Failed to serialize counts")?;
        println!("{}", json);
    } else {
        println!("{}", format_message(&counts));
    }

    Ok(())
}

/// Install the tracing subscriber on stderr, honouring RUST_LOG.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .init();
}

/// Read all of stdin unless it is an interactive terminal.
fn read_stdin() -> Result<Vec<String>> {
    let mut stdin = io::stdin();
    if stdin.is_terminal() {
        return Ok(Vec::new());
    }

    let mut buffer = String::new();
    stdin.read_to_string(&mut buffer)?;
    Ok(vec![buffer])
}

/// Split arguments holding several newline-separated lines, dropping blanks.
fn split_lines(input: &[String]) -> Vec<&str> {
    input
        .iter()
        .flat_map(|arg| arg.lines())
        .filter(|line| !line.trim().is_empty())
        .collect()
}
