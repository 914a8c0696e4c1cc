//! Scan lifecycle state machine
//!
//! Pure state transitions driven by the TUI event loop (or by tests):
//! the controller never performs I/O itself. Drivers dispatch the
//! [`ScanRequest`] returned by [`ScanController::submit`] and feed the
//! outcome back through [`complete`](ScanController::complete) or
//! [`fail`](ScanController::fail).

use crate::config::ScanMessages;
use crate::error::PhishscanError;
use crate::scan::types::{ScanRequest, ScanResult};
use std::time::{Duration, Instant};

/// Current phase of the scan lifecycle.
///
/// A result exists only inside `Done`, so "loading with a result" is
/// unrepresentable.
#[derive(Debug, Clone)]
pub enum ScanPhase {
    Idle,
    Loading {
        /// Rotation position; `None` until the first interval elapses,
        /// during which the initializing message is shown.
        message_index: Option<usize>,
        last_advance: Instant,
    },
    Done(ScanResult),
}

/// State machine mediating between user input, the prediction call, and
/// presentation.
#[derive(Debug)]
pub struct ScanController {
    phase: ScanPhase,
    messages: ScanMessages,
    message_interval: Duration,
    last_error: Option<PhishscanError>,
}

impl ScanController {
    pub fn new(messages: ScanMessages, message_interval: Duration) -> Self {
        Self {
            phase: ScanPhase::Idle,
            messages,
            message_interval,
            last_error: None,
        }
    }

    /// Accept raw input and begin a scan.
    ///
    /// Blank input is a no-op, as is submitting while a scan is already in
    /// flight. On acceptance the phase moves to `Loading`, any previous
    /// result is dropped, and the request to dispatch is returned.
    pub fn submit(&mut self, raw: &str, now: Instant) -> Option<ScanRequest> {
        let request = ScanRequest::from_input(raw)?;
        if self.is_loading() {
            return None;
        }
        self.phase = ScanPhase::Loading {
            message_index: None,
            last_advance: now,
        };
        self.last_error = None;
        Some(request)
    }

    /// Deliver a successful result. Ignored unless a scan is in flight.
    pub fn complete(&mut self, result: ScanResult) {
        if self.is_loading() {
            self.phase = ScanPhase::Done(result);
        }
    }

    /// Deliver a failure. The scan resets to `Idle` with nothing rendered;
    /// the error is kept in [`last_error`](Self::last_error) for callers
    /// that want it. Ignored unless a scan is in flight.
    pub fn fail(&mut self, error: PhishscanError) {
        if self.is_loading() {
            self.phase = ScanPhase::Idle;
            self.last_error = Some(error);
        }
    }

    /// Advance the status-message rotation. Call on every UI tick; the
    /// message changes only once the rotation interval has elapsed, and
    /// wraps cyclically over the rotation list.
    pub fn tick(&mut self, now: Instant) {
        if let ScanPhase::Loading {
            message_index,
            last_advance,
        } = &mut self.phase
        {
            if !self.messages.rotation.is_empty()
                && now.duration_since(*last_advance) >= self.message_interval
            {
                *message_index = Some(match *message_index {
                    None => 0,
                    Some(i) => (i + 1) % self.messages.rotation.len(),
                });
                *last_advance = now;
            }
        }
    }

    pub fn phase(&self) -> &ScanPhase {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, ScanPhase::Loading { .. })
    }

    pub fn result(&self) -> Option<&ScanResult> {
        match &self.phase {
            ScanPhase::Done(result) => Some(result),
            _ => None,
        }
    }

    /// Status message to display while loading, `None` otherwise.
    pub fn current_message(&self) -> Option<&str> {
        match &self.phase {
            ScanPhase::Loading {
                message_index: None,
                ..
            } => Some(&self.messages.initializing),
            ScanPhase::Loading {
                message_index: Some(i),
                ..
            } => self.messages.rotation.get(*i).map(String::as_str),
            _ => None,
        }
    }

    /// Most recent swallowed failure, if any. The default UI never renders
    /// this; it exists so callers can observe failures without changing
    /// the silent reset behavior.
    pub fn last_error(&self) -> Option<&PhishscanError> {
        self.last_error.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::types::Prediction;
    use std::io::ErrorKind;

    fn controller() -> ScanController {
        ScanController::new(ScanMessages::default(), Duration::from_millis(900))
    }

    fn sample_result() -> ScanResult {
        ScanResult {
            url: "http://example.com".to_string(),
            prediction: Prediction::Safe,
            confidence: 0.05,
        }
    }

    fn io_error() -> PhishscanError {
        PhishscanError::Io(std::io::Error::new(
            ErrorKind::ConnectionRefused,
            "connection refused",
        ))
    }

    #[test]
    fn test_blank_submit_is_noop() {
        let mut c = controller();
        let now = Instant::now();
        assert!(c.submit("", now).is_none());
        assert!(c.submit("   ", now).is_none());
        assert!(c.submit("\t\n", now).is_none());
        assert!(matches!(c.phase(), ScanPhase::Idle));
    }

    #[test]
    fn test_blank_submit_keeps_existing_result() {
        let mut c = controller();
        let now = Instant::now();
        c.submit("http://example.com", now).unwrap();
        c.complete(sample_result());
        assert!(c.submit("   ", now).is_none());
        assert!(c.result().is_some());
    }

    #[test]
    fn test_submit_moves_to_loading_with_trimmed_url() {
        let mut c = controller();
        let request = c.submit("  http://example.com  ", Instant::now()).unwrap();
        assert_eq!(request.url, "http://example.com");
        assert!(c.is_loading());
        assert!(c.result().is_none());
    }

    #[test]
    fn test_resubmit_while_loading_is_noop() {
        let mut c = controller();
        let now = Instant::now();
        assert!(c.submit("http://example.com", now).is_some());
        assert!(c.submit("http://other.com", now).is_none());
        assert!(c.is_loading());
    }

    #[test]
    fn test_new_submit_clears_previous_result() {
        let mut c = controller();
        let now = Instant::now();
        c.submit("http://example.com", now).unwrap();
        c.complete(sample_result());
        assert!(c.result().is_some());

        c.submit("http://other.com", now).unwrap();
        assert!(c.is_loading());
        assert!(c.result().is_none());
    }

    #[test]
    fn test_complete_sets_done() {
        let mut c = controller();
        c.submit("http://example.com", Instant::now()).unwrap();
        c.complete(sample_result());
        assert!(matches!(c.phase(), ScanPhase::Done(_)));
        assert_eq!(c.result().unwrap().url, "http://example.com");
    }

    #[test]
    fn test_complete_outside_loading_is_ignored() {
        let mut c = controller();
        c.complete(sample_result());
        assert!(matches!(c.phase(), ScanPhase::Idle));
    }

    #[test]
    fn test_failure_resets_to_idle_silently() {
        let mut c = controller();
        c.submit("http://example.com", Instant::now()).unwrap();
        c.fail(io_error());
        assert!(matches!(c.phase(), ScanPhase::Idle));
        assert!(c.result().is_none());
        assert!(c.last_error().is_some());
    }

    #[test]
    fn test_fail_outside_loading_is_ignored() {
        let mut c = controller();
        c.fail(io_error());
        assert!(c.last_error().is_none());
    }

    #[test]
    fn test_submit_clears_last_error() {
        let mut c = controller();
        let now = Instant::now();
        c.submit("http://example.com", now).unwrap();
        c.fail(io_error());
        c.submit("http://example.com", now).unwrap();
        assert!(c.last_error().is_none());
    }

    #[test]
    fn test_message_rotation_starts_with_initializing() {
        let mut c = controller();
        let t0 = Instant::now();
        c.submit("http://example.com", t0).unwrap();
        assert_eq!(c.current_message(), Some("Initializing scan…"));

        // Under the interval: unchanged.
        c.tick(t0 + Duration::from_millis(100));
        assert_eq!(c.current_message(), Some("Initializing scan…"));
    }

    #[test]
    fn test_message_rotation_advances_and_wraps() {
        let messages = ScanMessages::default();
        let rotation = messages.rotation.clone();
        let mut c = ScanController::new(messages, Duration::from_millis(900));

        let t0 = Instant::now();
        c.submit("http://example.com", t0).unwrap();

        for step in 0..rotation.len() + 1 {
            let t = t0 + Duration::from_millis(900 * (step as u64 + 1));
            c.tick(t);
            let expected = &rotation[step % rotation.len()];
            assert_eq!(c.current_message(), Some(expected.as_str()));
        }
    }

    #[test]
    fn test_no_message_outside_loading() {
        let mut c = controller();
        assert!(c.current_message().is_none());
        c.submit("http://example.com", Instant::now()).unwrap();
        c.complete(sample_result());
        assert!(c.current_message().is_none());
    }
}
