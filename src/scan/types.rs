//! Scan request/response types and derived presentation values

use serde::{Deserialize, Serialize};

/// Payload sent to the prediction endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanRequest {
    pub url: String,
}

impl ScanRequest {
    /// Build a request from raw user input.
    ///
    /// Returns `None` when the trimmed input is empty; a scan is never
    /// issued for blank input.
    pub fn from_input(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self {
                url: trimmed.to_string(),
            })
        }
    }
}

/// Classifier verdict as it appears on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Prediction {
    Phishing,
    Safe,
}

impl Prediction {
    /// Wire-format name
    pub fn as_str(&self) -> &'static str {
        match self {
            Prediction::Phishing => "phishing",
            Prediction::Safe => "safe",
        }
    }
}

/// Response from the prediction endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanResult {
    pub url: String,
    pub prediction: Prediction,
    /// Classifier certainty in the phishing class, in `[0, 1]`
    pub confidence: f64,
}

impl ScanResult {
    /// Confidence in the displayed verdict, as a percentage.
    ///
    /// A `safe` verdict with phishing-class confidence 0.05 reads as
    /// "95% confident this URL is safe".
    pub fn confidence_percent(&self) -> f64 {
        match self.prediction {
            Prediction::Phishing => self.confidence * 100.0,
            Prediction::Safe => (1.0 - self.confidence) * 100.0,
        }
    }

    /// Display risk tier.
    ///
    /// Tiers are cut on the raw phishing-class confidence, not on
    /// [`confidence_percent`](Self::confidence_percent), and do not depend
    /// on the predicted label.
    pub fn risk_level(&self) -> RiskLevel {
        if self.confidence < 0.20 {
            RiskLevel::Low
        } else if self.confidence < 0.65 {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }
}

/// Display risk tier derived from raw confidence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low Risk",
            RiskLevel::Medium => "Medium Risk",
            RiskLevel::High => "High Risk",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(prediction: Prediction, confidence: f64) -> ScanResult {
        ScanResult {
            url: "http://example.com".to_string(),
            prediction,
            confidence,
        }
    }

    #[test]
    fn test_from_input_trims() {
        let req = ScanRequest::from_input("  http://example.com  ").unwrap();
        assert_eq!(req.url, "http://example.com");
    }

    #[test]
    fn test_from_input_rejects_blank() {
        assert!(ScanRequest::from_input("").is_none());
        assert!(ScanRequest::from_input("   ").is_none());
        assert!(ScanRequest::from_input("\t\n").is_none());
    }

    #[test]
    fn test_request_wire_shape() {
        let req = ScanRequest::from_input("http://example.com").unwrap();
        let body = serde_json::to_string(&req).unwrap();
        assert_eq!(body, r#"{"url":"http://example.com"}"#);
    }

    #[test]
    fn test_result_parses_wire_response() {
        let json = r#"{"url":"http://bad.site","prediction":"phishing","confidence":0.9}"#;
        let result: ScanResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.prediction, Prediction::Phishing);
        assert!((result.confidence - 0.9).abs() < 1e-9);
    }

    #[test]
    fn test_confidence_percent_phishing() {
        let r = result(Prediction::Phishing, 0.9);
        assert!((r.confidence_percent() - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_confidence_percent_safe_inverts() {
        let r = result(Prediction::Safe, 0.05);
        assert!((r.confidence_percent() - 95.0).abs() < 1e-9);
    }

    #[test]
    fn test_risk_level_boundaries() {
        assert_eq!(result(Prediction::Phishing, 0.19).risk_level(), RiskLevel::Low);
        assert_eq!(
            result(Prediction::Phishing, 0.20).risk_level(),
            RiskLevel::Medium
        );
        assert_eq!(
            result(Prediction::Phishing, 0.64).risk_level(),
            RiskLevel::Medium
        );
        assert_eq!(result(Prediction::Phishing, 0.65).risk_level(), RiskLevel::High);
    }

    #[test]
    fn test_risk_level_ignores_label() {
        // A safe verdict at confidence 0.10 tiers exactly like a phishing
        // verdict at 0.10.
        assert_eq!(result(Prediction::Safe, 0.10).risk_level(), RiskLevel::Low);
        assert_eq!(result(Prediction::Phishing, 0.10).risk_level(), RiskLevel::Low);
    }

    #[test]
    fn test_risk_labels() {
        assert_eq!(RiskLevel::Low.label(), "Low Risk");
        assert_eq!(RiskLevel::Medium.label(), "Medium Risk");
        assert_eq!(RiskLevel::High.label(), "High Risk");
    }
}
