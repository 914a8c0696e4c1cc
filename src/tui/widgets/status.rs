//! Status bar and header widgets

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Which key hints the status bar shows
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatusMode {
    /// Waiting for URL entry
    Input,
    /// Scan in flight
    Loading,
    /// Result on screen
    Done,
}

/// Bottom status bar with contextual key hints
pub struct StatusBar {
    mode: StatusMode,
}

impl StatusBar {
    /// Create a status bar for the given mode
    pub fn new(mode: StatusMode) -> Self {
        Self { mode }
    }

    fn help_text(&self) -> Vec<(&'static str, &'static str)> {
        match self.mode {
            StatusMode::Input => vec![("Enter", "Scan"), ("Esc", "Quit")],
            StatusMode::Loading => vec![("Ctrl+C", "Quit")],
            StatusMode::Done => vec![("Enter", "Scan again"), ("Esc", "Quit")],
        }
    }
}

impl Widget for StatusBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let help = self.help_text();
        let mut spans = vec![Span::raw(" ")];

        for (i, (key, action)) in help.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
            }
            spans.push(Span::styled(
                format!(" {} ", key),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                *action,
                Style::default().fg(Color::Gray),
            ));
        }

        let paragraph = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        paragraph.render(area, buf);
    }
}

/// Top header bar with title, version, and quit hint
pub struct HeaderBar<'a> {
    title: &'a str,
    tagline: Option<&'a str>,
    version: &'a str,
}

impl<'a> HeaderBar<'a> {
    /// Create a header bar
    pub fn new(title: &'a str, version: &'a str) -> Self {
        Self {
            title,
            tagline: None,
            version,
        }
    }

    /// Add a tagline after the title
    pub fn with_tagline(mut self, tagline: &'a str) -> Self {
        self.tagline = Some(tagline);
        self
    }
}

impl Widget for HeaderBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut left = vec![
            Span::styled(
                format!(" {} ", self.title),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" v{}", self.version),
                Style::default().fg(Color::DarkGray),
            ),
        ];
        if let Some(tagline) = self.tagline {
            left.push(Span::raw("  "));
            left.push(Span::styled(tagline, Style::default().fg(Color::Gray)));
        }

        let left_width: usize = left.iter().map(|s| s.content.chars().count()).sum();
        let quit_text = "[Esc] Quit  ";
        let padding = (area.width as usize).saturating_sub(left_width + quit_text.len());

        let mut spans = left;
        spans.push(Span::raw(" ".repeat(padding)));
        spans.push(Span::styled(
            quit_text,
            Style::default().fg(Color::DarkGray),
        ));

        let paragraph = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        paragraph.render(area, buf);
    }
}

/// Animated braille spinner shown while a scan is in flight
pub struct LoadingSpinner {
    frame: usize,
}

const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

impl LoadingSpinner {
    /// Create a spinner at frame zero
    pub fn new() -> Self {
        Self { frame: 0 }
    }

    /// Advance to the next frame
    pub fn tick(&mut self) {
        self.frame = (self.frame + 1) % FRAMES.len();
    }

    /// Restart from frame zero
    pub fn reset(&mut self) {
        self.frame = 0;
    }

    /// Get the current frame glyph
    pub fn current_frame(&self) -> &'static str {
        FRAMES[self.frame]
    }
}

impl Default for LoadingSpinner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_wraps() {
        let mut spinner = LoadingSpinner::new();
        let first = spinner.current_frame();
        for _ in 0..FRAMES.len() {
            spinner.tick();
        }
        assert_eq!(spinner.current_frame(), first);
    }

    #[test]
    fn test_spinner_reset() {
        let mut spinner = LoadingSpinner::new();
        spinner.tick();
        spinner.tick();
        spinner.reset();
        assert_eq!(spinner.current_frame(), FRAMES[0]);
    }

    #[test]
    fn test_help_text_per_mode() {
        assert_eq!(StatusBar::new(StatusMode::Loading).help_text().len(), 1);
        assert_eq!(StatusBar::new(StatusMode::Input).help_text().len(), 2);
        let done = StatusBar::new(StatusMode::Done).help_text();
        assert_eq!(done[0], ("Enter", "Scan again"));
    }
}
