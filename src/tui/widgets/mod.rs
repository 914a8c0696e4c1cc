//! Reusable TUI widgets

pub mod input;
pub mod rain;
pub mod status;
pub mod verdict;

pub use input::{render_input, InputDialog, InputState};
pub use rain::{MatrixRain, RainWidget};
pub use status::{HeaderBar, LoadingSpinner, StatusBar, StatusMode};
pub use verdict::VerdictWidget;
