//! Screen layout and rendering

use crate::scan::{ScanPhase, ScanResult};
use crate::tui::app::App;
use crate::tui::widgets::{
    render_input, HeaderBar, InputDialog, RainWidget, StatusBar, StatusMode, VerdictWidget,
};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Draw the full UI
pub fn draw(f: &mut Frame, app: &mut App) {
    let size = f.area();

    // The rain fills the whole screen; everything else draws over it.
    f.render_stateful_widget(RainWidget, size, &mut app.rain);

    let chunks = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(10),
        Constraint::Length(2),
    ])
    .split(size);

    let header = HeaderBar::new(&app.messages.ui.title, VERSION)
        .with_tagline(&app.messages.ui.tagline);
    f.render_widget(header, chunks[0]);

    match app.controller.phase() {
        ScanPhase::Idle => render_scan_dialog(f, chunks[1], app, None),
        ScanPhase::Loading { .. } => {
            let message = app.controller.current_message();
            render_scan_dialog(f, chunks[1], app, message);
        }
        ScanPhase::Done(result) => render_result_dialog(f, chunks[1], app, result),
    }

    let mode = match app.controller.phase() {
        ScanPhase::Idle => StatusMode::Input,
        ScanPhase::Loading { .. } => StatusMode::Loading,
        ScanPhase::Done(_) => StatusMode::Done,
    };
    f.render_widget(StatusBar::new(mode), chunks[2]);
}

fn dialog_block(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(Span::styled(
            format!(" {} ", title),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
}

/// Centered dialog with the URL input, plus either an idle hint or the
/// in-flight spinner and status message.
fn render_scan_dialog(f: &mut Frame, area: Rect, app: &App, status: Option<&str>) {
    let dialog = InputDialog::new(64, 9).centered_area(area);
    f.render_widget(Clear, dialog);

    let block = dialog_block(&app.messages.ui.tagline);
    let inner = block.inner(dialog);
    f.render_widget(block, dialog);

    let rows = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Min(1),
    ])
    .split(inner);

    render_input(rows[0], f.buffer_mut(), &app.input, status.is_none());

    match status {
        Some(message) => {
            let line = Line::from(vec![
                Span::styled(
                    app.spinner.current_frame(),
                    Style::default().fg(Color::Green),
                ),
                Span::raw(" "),
                Span::styled(message, Style::default().fg(Color::Green)),
            ]);
            f.render_widget(Paragraph::new(line).alignment(Alignment::Center), rows[2]);
        }
        None => {
            let hint = Paragraph::new(app.messages.ui.press_enter.as_str())
                .style(
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::DIM),
                )
                .alignment(Alignment::Center);
            f.render_widget(hint, rows[2]);
        }
    }
}

/// Taller dialog shown once a result is in: input on top, verdict below.
fn render_result_dialog(f: &mut Frame, area: Rect, app: &App, result: &ScanResult) {
    let dialog = InputDialog::new(64, 15).centered_area(area);
    f.render_widget(Clear, dialog);

    let block = dialog_block(&app.messages.ui.tagline);
    let inner = block.inner(dialog);
    f.render_widget(block, dialog);

    let rows = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Min(8),
    ])
    .split(inner);

    render_input(rows[0], f.buffer_mut(), &app.input, true);
    f.render_widget(VerdictWidget::new(result, &app.messages), rows[2]);
}
