//! Batch scan command implementation

use crate::cli::OutputFormat;
use crate::config::{Settings, Theme};
use crate::error::{PhishscanError, Result};
use crate::output::{
    create_progress_bar, print_batch_summary, print_batch_table, print_json, print_success,
    print_warning, to_json_output, BatchRow, JsonOutput,
};
use crate::predict::PredictClient;
use crate::scan::{Prediction, ScanRequest};
use std::path::Path;

/// Run the batch scan command
pub async fn run_batch(
    file: &Path,
    settings: &Settings,
    theme: &Theme,
    format: OutputFormat,
) -> Result<()> {
    let content = std::fs::read_to_string(file)
        .map_err(|e| PhishscanError::File(format!("Failed to open file: {}", e)))?;

    let urls = parse_url_lines(&content);
    if urls.is_empty() {
        return Err(PhishscanError::File("No URLs found in file".to_string()));
    }

    let client = PredictClient::from_settings(settings)?;
    let total = urls.len();
    let pb = create_progress_bar(total as u64, "Scanning URLs");

    let mut rows: Vec<BatchRow> = Vec::with_capacity(total);
    let mut outputs: Vec<JsonOutput> = Vec::new();
    let mut phishing = 0;
    let mut safe = 0;
    let mut failed = 0;

    for url in urls {
        let request = ScanRequest { url: url.clone() };
        match client.classify(&request).await {
            Ok(result) => {
                match result.prediction {
                    Prediction::Phishing => phishing += 1,
                    Prediction::Safe => safe += 1,
                }
                outputs.push(to_json_output(&result));
                rows.push(BatchRow::from_result(&result));
            }
            Err(e) => {
                failed += 1;
                tracing::debug!("scan failed for {}: {}", url, e);
                rows.push(BatchRow::failed(&url));
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    match format {
        OutputFormat::Json => {
            print_json(&outputs)?;
        }
        OutputFormat::Plain => {
            for row in &rows {
                println!(
                    "{}\t{}\t{}\t{}",
                    row.verdict, row.confidence, row.risk, row.url
                );
            }
        }
        OutputFormat::Table => {
            print_batch_table(rows);
            print_batch_summary(theme, total, phishing, safe, failed);
            if failed > 0 {
                print_warning(&format!("{} URLs could not be scanned", failed));
            } else {
                print_success("All URLs scanned");
            }
        }
    }

    Ok(())
}

/// Extract URLs from file content: one per line, trimmed, skipping blanks
/// and `#` comments.
fn parse_url_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
        .collect()
}
