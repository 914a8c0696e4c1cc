//! PhishScan - terminal client for an AI phishing-URL classification service
//!
//! Sends URLs to a machine-learning endpoint that labels them `phishing` or
//! `safe` with a confidence score, and presents the verdict either in a
//! full-screen TUI or as one-shot command output.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod predict;
pub mod scan;
pub mod tui;

pub use error::{PhishscanError, Result};
