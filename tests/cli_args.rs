//! CLI argument parsing tests

use clap::Parser;
use phishscan::cli::{Cli, Commands, OutputFormat};

#[test]
fn test_defaults() {
    let cli = Cli::try_parse_from(["phishscan"]).unwrap();
    assert!(cli.command.is_none());
    assert!(cli.url.is_none());
    assert!(!cli.interactive);
    assert_eq!(cli.format, OutputFormat::Table);
    assert!(cli.endpoint.is_none());
    assert!(cli.timeout.is_none());
}

#[test]
fn test_url_shortcut() {
    let cli = Cli::try_parse_from(["phishscan", "http://example.com/login"]).unwrap();
    assert_eq!(cli.url.as_deref(), Some("http://example.com/login"));
    assert!(cli.command.is_none());
}

#[test]
fn test_check_subcommand() {
    let cli = Cli::try_parse_from(["phishscan", "check", "http://example.com"]).unwrap();
    match cli.command {
        Some(Commands::Check(args)) => assert_eq!(args.url, "http://example.com"),
        other => panic!("expected check command, got {:?}", other),
    }
}

#[test]
fn test_check_requires_url() {
    assert!(Cli::try_parse_from(["phishscan", "check"]).is_err());
}

#[test]
fn test_batch_subcommand() {
    let cli = Cli::try_parse_from(["phishscan", "batch", "urls.txt"]).unwrap();
    match cli.command {
        Some(Commands::Batch(args)) => {
            assert_eq!(args.file.to_str(), Some("urls.txt"));
        }
        other => panic!("expected batch command, got {:?}", other),
    }
}

#[test]
fn test_format_flag() {
    let cli = Cli::try_parse_from(["phishscan", "--format", "json", "http://example.com"]).unwrap();
    assert_eq!(cli.format, OutputFormat::Json);

    let cli = Cli::try_parse_from(["phishscan", "-f", "plain", "http://example.com"]).unwrap();
    assert_eq!(cli.format, OutputFormat::Plain);
}

#[test]
fn test_endpoint_and_timeout_overrides() {
    let cli = Cli::try_parse_from([
        "phishscan",
        "--endpoint",
        "http://10.0.0.5:9000/predict",
        "--timeout",
        "30",
        "http://example.com",
    ])
    .unwrap();
    assert_eq!(cli.endpoint.as_deref(), Some("http://10.0.0.5:9000/predict"));
    assert_eq!(cli.timeout, Some(30));
}

#[test]
fn test_interactive_flag() {
    let cli = Cli::try_parse_from(["phishscan", "--interactive"]).unwrap();
    assert!(cli.interactive);

    let cli = Cli::try_parse_from(["phishscan", "-i"]).unwrap();
    assert!(cli.interactive);
}

#[test]
fn test_invalid_format_rejected() {
    assert!(Cli::try_parse_from(["phishscan", "--format", "xml"]).is_err());
}
