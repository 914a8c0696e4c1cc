//! Scan result panel

use crate::config::Messages;
use crate::scan::{Prediction, RiskLevel, ScanResult};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Gauge, Paragraph, Widget, Wrap},
};

fn risk_color(risk: RiskLevel) -> Color {
    match risk {
        RiskLevel::Low => Color::Green,
        RiskLevel::Medium => Color::Yellow,
        RiskLevel::High => Color::Red,
    }
}

/// Verdict, confidence gauge, and risk tier for a completed scan
pub struct VerdictWidget<'a> {
    result: &'a ScanResult,
    messages: &'a Messages,
}

impl<'a> VerdictWidget<'a> {
    /// Create a verdict widget for a scan result
    pub fn new(result: &'a ScanResult, messages: &'a Messages) -> Self {
        Self { result, messages }
    }
}

impl Widget for VerdictWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(2),
        ])
        .split(area);

        let verdict = &self.messages.verdict;
        let (icon, text, color) = match self.result.prediction {
            Prediction::Phishing => ("⚠", verdict.phishing.as_str(), Color::Red),
            Prediction::Safe => ("✓", verdict.safe.as_str(), Color::Green),
        };

        Paragraph::new(Line::from(Span::styled(
            format!("{} {}", icon, text),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .render(rows[0], buf);

        Paragraph::new(self.result.url.as_str())
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center)
            .render(rows[1], buf);

        let percent = self.result.confidence_percent();
        Gauge::default()
            .gauge_style(Style::default().fg(color).bg(Color::Black))
            .ratio((percent / 100.0).clamp(0.0, 1.0))
            .label(format!("{}: {:.1}%", verdict.confidence_label, percent))
            .render(rows[3], buf);

        let risk = self.result.risk_level();
        Paragraph::new(Line::from(vec![
            Span::styled(
                format!("{}: ", verdict.risk_label),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(
                risk.label(),
                Style::default()
                    .fg(risk_color(risk))
                    .add_modifier(Modifier::BOLD),
            ),
        ]))
        .alignment(Alignment::Center)
        .render(rows[4], buf);

        Paragraph::new(format!("⚠ {}", verdict.disclaimer))
            .style(
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::DIM),
            )
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(rows[6], buf);
    }
}
