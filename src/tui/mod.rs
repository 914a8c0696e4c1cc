//! Terminal user interface

pub mod app;
pub mod events;
pub mod ui;
pub mod widgets;

pub use app::{App, TuiRunner};
pub use events::{AppEvent, EventHandler, KeyAction};
