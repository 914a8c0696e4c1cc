//! Check command implementation

use crate::cli::OutputFormat;
use crate::config::{Messages, Settings, Theme};
use crate::error::{PhishscanError, Result};
use crate::output::{self, create_spinner};
use crate::predict::PredictClient;
use crate::scan::ScanRequest;
use std::collections::HashMap;

/// Run the check command
pub async fn run_check(
    raw_url: &str,
    settings: &Settings,
    theme: &Theme,
    messages: &Messages,
    format: OutputFormat,
    verbose: bool,
) -> Result<()> {
    let request = ScanRequest::from_input(raw_url)
        .ok_or_else(|| PhishscanError::InvalidUrl("no URL provided".to_string()))?;

    let client = PredictClient::from_settings(settings)?;

    if verbose {
        output::print_info(&format!("Endpoint: {}", client.endpoint()));
    }

    let mut vars = HashMap::new();
    vars.insert("url", request.url.clone());
    let spinner = create_spinner(&Messages::format(&messages.scan.checking, &vars));

    let result = client.classify(&request).await;
    spinner.finish_and_clear();
    let result = result?;

    match format {
        OutputFormat::Json => {
            let json = output::to_json_output(&result);
            output::print_json(&json)?;
        }
        OutputFormat::Plain => {
            println!(
                "{}\t{:.1}%\t{}\t{}",
                result.prediction.as_str(),
                result.confidence_percent(),
                result.risk_level().label(),
                result.url
            );
        }
        OutputFormat::Table => {
            output::print_result(&result, theme, messages);
        }
    }

    Ok(())
}
