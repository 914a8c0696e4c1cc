//! PhishScan entry point

use clap::Parser;
use console::style;
use phishscan::cli::{Cli, Commands};
use phishscan::error::Result;
use phishscan::tui::TuiRunner;
use phishscan::{commands, config};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    if let Err(e) = run().await {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    // Handle color preference
    if cli.no_color {
        console::set_colors_enabled(false);
    }

    let (mut settings, theme, messages) = config::load_default_config()?;

    // CLI flags override the config file.
    if let Some(endpoint) = cli.endpoint {
        settings.endpoint = endpoint;
    }
    if let Some(secs) = cli.timeout {
        settings.scan.request_timeout_secs = Some(secs);
    }

    // Interactive mode
    if cli.interactive {
        let mut runner = TuiRunner::new(&settings, messages)?;
        return runner.run().await;
    }

    // Handle subcommands
    if let Some(command) = cli.command {
        return match command {
            Commands::Check(args) => {
                commands::run_check(
                    &args.url,
                    &settings,
                    &theme,
                    &messages,
                    cli.format,
                    cli.verbose,
                )
                .await
            }
            Commands::Batch(args) => {
                commands::run_batch(&args.file, &settings, &theme, cli.format).await
            }
        };
    }

    // Default: scan the URL if one was given
    if let Some(url) = cli.url {
        return commands::run_check(&url, &settings, &theme, &messages, cli.format, cli.verbose)
            .await;
    }

    // No command or URL: launch the TUI
    let mut runner = TuiRunner::new(&settings, messages)?;
    runner.run().await
}
