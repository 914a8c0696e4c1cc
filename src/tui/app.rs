//! Application state and terminal lifecycle

use crate::config::{Messages, Settings};
use crate::error::Result;
use crate::predict::PredictClient;
use crate::scan::{self, ScanController};
use crate::tui::events::{AppEvent, EventHandler, KeyAction};
use crate::tui::ui;
use crate::tui::widgets::{InputState, LoadingSpinner, MatrixRain};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// TUI application state
pub struct App {
    /// Scan lifecycle state machine
    pub controller: ScanController,
    /// URL entry field
    pub input: InputState,
    /// In-flight animation frame
    pub spinner: LoadingSpinner,
    /// Background rain animation
    pub rain: MatrixRain,
    /// User-facing strings
    pub messages: Messages,
    /// Whether the app should exit
    pub should_quit: bool,
    client: PredictClient,
    min_display: Duration,
    event_tx: Option<mpsc::UnboundedSender<AppEvent>>,
}

impl App {
    /// Create a new application from settings
    pub fn new(settings: &Settings, messages: Messages) -> Result<Self> {
        let controller = ScanController::new(
            messages.scan.clone(),
            settings.scan.message_interval(),
        );
        let input = InputState::new(&messages.ui.input_prompt)
            .with_placeholder(&messages.ui.input_placeholder);
        let client = PredictClient::from_settings(settings)?;

        Ok(Self {
            controller,
            input,
            spinner: LoadingSpinner::new(),
            rain: MatrixRain::new(settings.ui.rain_interval()),
            messages,
            should_quit: false,
            client,
            min_display: settings.scan.min_display(),
            event_tx: None,
        })
    }

    /// Set the sender used to deliver scan outcomes back to the event loop
    pub fn set_event_sender(&mut self, tx: mpsc::UnboundedSender<AppEvent>) {
        self.event_tx = Some(tx);
    }

    /// Handle a key action
    pub fn handle_key(&mut self, action: KeyAction) {
        // While a scan is in flight the input is frozen; only quitting works.
        if self.controller.is_loading() {
            if action == KeyAction::Quit {
                self.should_quit = true;
            }
            return;
        }

        match action {
            KeyAction::Quit | KeyAction::Back => self.should_quit = true,
            KeyAction::Enter => self.start_scan(),
            KeyAction::Char(c) => self.input.insert(c),
            KeyAction::Backspace => self.input.delete_backward(),
            KeyAction::Delete => self.input.delete_forward(),
            KeyAction::Left => self.input.move_left(),
            KeyAction::Right => self.input.move_right(),
            KeyAction::Home => self.input.move_home(),
            KeyAction::End => self.input.move_end(),
            KeyAction::None => {}
        }
    }

    /// Submit the current input and dispatch the scan in the background
    fn start_scan(&mut self) {
        let Some(request) = self.controller.submit(&self.input.value, Instant::now()) else {
            return;
        };
        self.spinner.reset();

        let Some(tx) = self.event_tx.clone() else {
            return;
        };
        let client = self.client.clone();
        let min_display = self.min_display;
        tokio::spawn(async move {
            let result = scan::run_scan(&client, request, min_display).await;
            let _ = tx.send(AppEvent::ScanComplete(Box::new(result)));
        });
    }

    /// Deliver a finished scan to the controller.
    ///
    /// Failures reset to idle without any on-screen notice; they are logged
    /// at debug level and kept on the controller for inspection.
    pub fn handle_scan_complete(&mut self, outcome: Result<scan::ScanResult>) {
        match outcome {
            Ok(result) => self.controller.complete(result),
            Err(e) => {
                tracing::debug!("scan failed: {}", e);
                self.controller.fail(e);
            }
        }
    }

    /// Advance time-driven state
    pub fn tick(&mut self) {
        let now = Instant::now();
        if self.controller.is_loading() {
            self.spinner.tick();
        }
        self.controller.tick(now);
        self.rain.advance(now);
    }
}

/// Terminal lifecycle wrapper that restores the terminal on drop
pub struct TuiRunner {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    events: EventHandler,
    app: App,
}

impl TuiRunner {
    /// Set up the terminal and create the application
    pub fn new(settings: &Settings, messages: Messages) -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        let events = EventHandler::new(settings.ui.tick_rate());
        let mut app = App::new(settings, messages)?;
        app.set_event_sender(events.sender());

        Ok(Self {
            terminal,
            events,
            app,
        })
    }

    /// Run the main event loop until the user quits
    pub async fn run(&mut self) -> Result<()> {
        loop {
            self.terminal.draw(|f| ui::draw(f, &mut self.app))?;

            match self.events.next().await {
                Some(AppEvent::Key(key)) => {
                    self.app.handle_key(KeyAction::from_input(key));
                }
                Some(AppEvent::Tick) => self.app.tick(),
                Some(AppEvent::ScanComplete(outcome)) => {
                    self.app.handle_scan_complete(*outcome);
                }
                Some(AppEvent::Resize(w, h)) => self.app.rain.resize(w, h),
                None => break,
            }

            if self.app.should_quit {
                break;
            }
        }
        Ok(())
    }
}

impl Drop for TuiRunner {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::{Prediction, ScanPhase, ScanResult};
    use crate::PhishscanError;

    fn app() -> App {
        App::new(&Settings::default(), Messages::default()).unwrap()
    }

    fn sample_result() -> ScanResult {
        ScanResult {
            url: "http://example.com".to_string(),
            prediction: Prediction::Phishing,
            confidence: 0.9,
        }
    }

    #[test]
    fn test_typing_edits_input() {
        let mut app = app();
        app.handle_key(KeyAction::Char('a'));
        app.handle_key(KeyAction::Char('b'));
        app.handle_key(KeyAction::Backspace);
        assert_eq!(app.input.value, "a");
    }

    #[test]
    fn test_esc_quits_when_idle() {
        let mut app = app();
        app.handle_key(KeyAction::Back);
        assert!(app.should_quit);
    }

    #[test]
    fn test_enter_on_empty_input_stays_idle() {
        let mut app = app();
        app.handle_key(KeyAction::Enter);
        assert!(matches!(app.controller.phase(), ScanPhase::Idle));
        assert!(!app.should_quit);
    }

    #[test]
    fn test_input_frozen_while_loading() {
        let mut app = app();
        app.input.value = "http://example.com".to_string();
        app.controller
            .submit("http://example.com", Instant::now())
            .unwrap();

        app.handle_key(KeyAction::Char('x'));
        app.handle_key(KeyAction::Back);
        assert_eq!(app.input.value, "http://example.com");
        assert!(!app.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits_while_loading() {
        let mut app = app();
        app.controller
            .submit("http://example.com", Instant::now())
            .unwrap();
        app.handle_key(KeyAction::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn test_scan_complete_renders_result() {
        let mut app = app();
        app.controller
            .submit("http://example.com", Instant::now())
            .unwrap();
        app.handle_scan_complete(Ok(sample_result()));
        assert!(app.controller.result().is_some());
    }

    #[test]
    fn test_scan_failure_is_silent() {
        let mut app = app();
        app.controller
            .submit("http://example.com", Instant::now())
            .unwrap();
        app.handle_scan_complete(Err(PhishscanError::InvalidUrl("bad".to_string())));
        assert!(matches!(app.controller.phase(), ScanPhase::Idle));
        assert!(app.controller.last_error().is_some());
    }
}
