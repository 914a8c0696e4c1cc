//! Rich terminal output formatting

use crate::config::{Messages, Theme};
use crate::scan::{Prediction, RiskLevel, ScanResult};
use console::{style, Style};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tabled::{settings::Style as TabledStyle, Table, Tabled};

/// Create a spinner for long-running operations
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// Create a progress bar for batch operations
pub fn create_progress_bar(len: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::with_template("{msg} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .unwrap()
            .progress_chars("█▓░"),
    );
    pb.set_message(message.to_string());
    pb
}

/// Print section header
pub fn print_header(title: &str) {
    println!();
    println!("{}", style(format!("━━━ {} ━━━", title)).cyan().bold());
    println!();
}

/// Console style for a risk tier
fn risk_style(level: RiskLevel) -> Style {
    match level {
        RiskLevel::Low => Style::new().green().bold(),
        RiskLevel::Medium => Style::new().yellow().bold(),
        RiskLevel::High => Style::new().red().bold(),
    }
}

/// Render a fixed-width confidence bar from block glyphs
fn confidence_bar(percent: f64, width: usize) -> String {
    let filled = ((percent / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Print a scan verdict
pub fn print_result(result: &ScanResult, theme: &Theme, messages: &Messages) {
    print_header("Scan Result");

    let verdict = match result.prediction {
        Prediction::Phishing => style(format!(
            "{} {}",
            theme.icons.warning, messages.verdict.phishing
        ))
        .red()
        .bold(),
        Prediction::Safe => style(format!("{} {}", theme.icons.pass, messages.verdict.safe))
            .green()
            .bold(),
    };

    println!("  {}", verdict);
    println!("  URL: {}", style(&result.url).bold());

    let percent = result.confidence_percent();
    let bar_style = match result.prediction {
        Prediction::Phishing => Style::new().red(),
        Prediction::Safe => Style::new().green(),
    };
    println!(
        "  {}: {} {:.1}%",
        messages.verdict.confidence_label,
        bar_style.apply_to(confidence_bar(percent, 30)),
        percent
    );

    let risk = result.risk_level();
    println!(
        "  {}: {}",
        messages.verdict.risk_label,
        risk_style(risk).apply_to(risk.label())
    );

    println!();
    println!(
        "  {}",
        style(format!(
            "{} {}",
            theme.icons.warning, messages.verdict.disclaimer
        ))
        .dim()
    );
}

/// Row of the batch summary table
#[derive(Tabled)]
pub struct BatchRow {
    #[tabled(rename = "URL")]
    pub url: String,
    #[tabled(rename = "Verdict")]
    pub verdict: String,
    #[tabled(rename = "Confidence")]
    pub confidence: String,
    #[tabled(rename = "Risk")]
    pub risk: String,
}

impl BatchRow {
    pub fn from_result(result: &ScanResult) -> Self {
        Self {
            url: result.url.clone(),
            verdict: result.prediction.as_str().to_string(),
            confidence: format!("{:.1}%", result.confidence_percent()),
            risk: result.risk_level().label().to_string(),
        }
    }

    pub fn failed(url: &str) -> Self {
        Self {
            url: url.to_string(),
            verdict: "error".to_string(),
            confidence: "-".to_string(),
            risk: "-".to_string(),
        }
    }
}

/// Print the batch results table
pub fn print_batch_table(rows: Vec<BatchRow>) {
    let mut table = Table::new(rows);
    table.with(TabledStyle::rounded());
    println!("{}", table);
}

/// Print batch scan summary counts
pub fn print_batch_summary(
    theme: &Theme,
    total: usize,
    phishing: usize,
    safe: usize,
    failed: usize,
) {
    print_header("Batch Scan Summary");

    let bullet = style(&theme.icons.bullet).cyan();
    println!("  {} Total URLs scanned: {}", bullet, style(total).bold());
    println!("  {} Phishing: {}", bullet, style(phishing).red());
    println!("  {} Safe: {}", bullet, style(safe).green());
    println!("  {} Failed: {}", bullet, style(failed).yellow());
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", style("✓").green().bold(), message);
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("✗").red().bold(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("{} {}", style("!").yellow().bold(), message);
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("{} {}", style("ℹ").blue(), message);
}
