//! CLI argument definitions using clap

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "phishscan")]
#[command(version)]
#[command(about = "Terminal client for an AI phishing-URL classification service", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// URL to scan (shortcut for 'check' command)
    #[arg(value_name = "URL")]
    pub url: Option<String>,

    /// Interactive mode (full-screen TUI)
    #[arg(short, long)]
    pub interactive: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Prediction service endpoint (overrides the config file)
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Request timeout in seconds (overrides the config file)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scan a single URL
    Check(CheckArgs),

    /// Scan multiple URLs from a file
    Batch(BatchArgs),
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// URL to scan
    #[arg(required = true)]
    pub url: String,
}

#[derive(Debug, Args)]
pub struct BatchArgs {
    /// File containing URLs (one per line, '#' comments allowed)
    #[arg(required = true)]
    pub file: PathBuf,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Rich terminal output (default)
    Table,
    /// JSON output
    Json,
    /// Plain text (one line per scan)
    Plain,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Plain => write!(f, "plain"),
        }
    }
}
