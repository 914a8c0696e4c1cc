//! JSON output formatter

use crate::error::Result;
use crate::scan::ScanResult;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// JSON-serializable scan output
#[derive(Debug, Serialize)]
pub struct JsonOutput {
    pub url: String,
    pub prediction: String,
    pub confidence: f64,
    pub confidence_percent: f64,
    pub risk_level: String,
    pub checked_at: DateTime<Utc>,
}

/// Build the JSON view of a scan result
pub fn to_json_output(result: &ScanResult) -> JsonOutput {
    JsonOutput {
        url: result.url.clone(),
        prediction: result.prediction.as_str().to_string(),
        confidence: result.confidence,
        confidence_percent: result.confidence_percent(),
        risk_level: result.risk_level().label().to_string(),
        checked_at: Utc::now(),
    }
}

/// Print a value as pretty JSON to stdout
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}
