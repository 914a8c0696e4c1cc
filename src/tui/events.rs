//! Event handling for TUI

use crate::error::Result;
use crate::scan::ScanResult;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;
use tokio::sync::mpsc;

/// Application events
#[derive(Debug)]
pub enum AppEvent {
    /// Keyboard input
    Key(KeyEvent),
    /// Tick for animations/updates
    Tick,
    /// Prediction call finished
    ScanComplete(Box<Result<ScanResult>>),
    /// Resize event
    Resize(u16, u16),
}

/// Event handler that polls for keyboard events
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<AppEvent>,
    _tx: mpsc::UnboundedSender<AppEvent>,
}

impl EventHandler {
    /// Create a new event handler
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let event_tx = tx.clone();

        // Spawn event polling task
        tokio::spawn(async move {
            loop {
                // Poll for events with timeout
                if event::poll(tick_rate).unwrap_or(false) {
                    if let Ok(evt) = event::read() {
                        let app_event = match evt {
                            // Some terminals report key releases too; only
                            // presses drive the app.
                            Event::Key(key) if key.kind == KeyEventKind::Press => {
                                AppEvent::Key(key)
                            }
                            Event::Resize(w, h) => AppEvent::Resize(w, h),
                            _ => continue,
                        };
                        if event_tx.send(app_event).is_err() {
                            break;
                        }
                    }
                } else {
                    // Send tick event
                    if event_tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                }
            }
        });

        Self { rx, _tx: tx }
    }

    /// Get the next event
    pub async fn next(&mut self) -> Option<AppEvent> {
        self.rx.recv().await
    }

    /// Get sender for sending events from async tasks
    pub fn sender(&self) -> mpsc::UnboundedSender<AppEvent> {
        self._tx.clone()
    }
}

/// Key action abstraction
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KeyAction {
    Quit,
    Back,
    Enter,
    Char(char),
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
    None,
}

impl KeyAction {
    /// Convert a key event for single-line text entry.
    ///
    /// All printable characters pass through to the input; only Ctrl+C is
    /// reserved for quitting.
    pub fn from_input(key: KeyEvent) -> Self {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
            KeyCode::Esc => KeyAction::Back,
            KeyCode::Enter => KeyAction::Enter,
            KeyCode::Left => KeyAction::Left,
            KeyCode::Right => KeyAction::Right,
            KeyCode::Backspace => KeyAction::Backspace,
            KeyCode::Delete => KeyAction::Delete,
            KeyCode::Home => KeyAction::Home,
            KeyCode::End => KeyAction::End,
            KeyCode::Char(c) => KeyAction::Char(c),
            _ => KeyAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_ctrl_c_quits() {
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(KeyAction::from_input(event), KeyAction::Quit);
    }

    #[test]
    fn test_plain_letters_pass_through() {
        // 'q' and 'c' must type into the URL, not quit.
        assert_eq!(
            KeyAction::from_input(key(KeyCode::Char('q'))),
            KeyAction::Char('q')
        );
        assert_eq!(
            KeyAction::from_input(key(KeyCode::Char('c'))),
            KeyAction::Char('c')
        );
    }

    #[test]
    fn test_editing_keys_map() {
        assert_eq!(KeyAction::from_input(key(KeyCode::Enter)), KeyAction::Enter);
        assert_eq!(KeyAction::from_input(key(KeyCode::Esc)), KeyAction::Back);
        assert_eq!(
            KeyAction::from_input(key(KeyCode::Backspace)),
            KeyAction::Backspace
        );
        assert_eq!(KeyAction::from_input(key(KeyCode::Home)), KeyAction::Home);
    }
}
