//! Scan lifecycle: wire types, state machine, and dispatch helper

pub mod controller;
pub mod types;

pub use controller::{ScanController, ScanPhase};
pub use types::{Prediction, RiskLevel, ScanRequest, ScanResult};

use crate::error::Result;
use crate::predict::PredictClient;
use std::time::Duration;

/// Classify a URL and hold the outcome for the minimum display duration.
///
/// The sleep applies only on success, so the loading animation is visible
/// for a perceptible span even when the endpoint answers instantly;
/// failures propagate immediately.
pub async fn run_scan(
    client: &PredictClient,
    request: ScanRequest,
    min_display: Duration,
) -> Result<ScanResult> {
    let result = client.classify(&request).await?;
    if !min_display.is_zero() {
        tokio::time::sleep(min_display).await;
    }
    Ok(result)
}
