//! HTTP client for the prediction endpoint
//!
//! One wire call: `POST {"url": ...}` to the configured endpoint, answered
//! with `{"url", "prediction", "confidence"}`. No authentication and no
//! retries; a request timeout applies only when one is configured.

use crate::config::Settings;
use crate::error::Result;
use crate::scan::{ScanRequest, ScanResult};
use std::time::Duration;

/// Client for the phishing classification service
#[derive(Debug, Clone)]
pub struct PredictClient {
    http: reqwest::Client,
    endpoint: String,
}

impl PredictClient {
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            endpoint: endpoint.into(),
        })
    }

    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Self::new(&settings.endpoint, settings.scan.request_timeout())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Submit a URL for classification.
    ///
    /// Transport failures, non-success statuses, and unparsable bodies all
    /// surface as `Err`; callers treat them uniformly.
    pub async fn classify(&self, request: &ScanRequest) -> Result<ScanResult> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(request)
            .send()
            .await?
            .error_for_status()?;

        let result = response.json::<ScanResult>().await?;
        Ok(result)
    }
}
