//! Text input widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

/// State for a single-line text input
#[derive(Debug, Clone)]
pub struct InputState {
    /// Current input value
    pub value: String,
    /// Cursor position in characters
    pub cursor: usize,
    /// Prompt shown in the border title
    pub prompt: String,
    /// Placeholder text shown while empty
    pub placeholder: String,
}

impl InputState {
    /// Create a new input state
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            value: String::new(),
            cursor: 0,
            prompt: prompt.into(),
            placeholder: String::new(),
        }
    }

    /// Set placeholder text
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    // Cursor is tracked in characters; the value is UTF-8, so edits have to
    // convert to a byte offset first.
    fn byte_index(&self) -> usize {
        self.value
            .char_indices()
            .map(|(i, _)| i)
            .nth(self.cursor)
            .unwrap_or(self.value.len())
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        let index = self.byte_index();
        self.value.insert(index, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor
    pub fn delete_backward(&mut self) {
        if self.cursor > 0 {
            let before = self.value.chars().take(self.cursor - 1);
            let after = self.value.chars().skip(self.cursor);
            self.value = before.chain(after).collect();
            self.cursor -= 1;
        }
    }

    /// Delete the character at the cursor
    pub fn delete_forward(&mut self) {
        if self.cursor < self.value.chars().count() {
            let before = self.value.chars().take(self.cursor);
            let after = self.value.chars().skip(self.cursor + 1);
            self.value = before.chain(after).collect();
        }
    }

    /// Move cursor left
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move cursor right
    pub fn move_right(&mut self) {
        if self.cursor < self.value.chars().count() {
            self.cursor += 1;
        }
    }

    /// Move cursor to the start
    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to the end
    pub fn move_end(&mut self) {
        self.cursor = self.value.chars().count();
    }

    /// Clear the input
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Check if the input is empty
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

/// Render a text input field
pub fn render_input(area: Rect, buf: &mut Buffer, state: &InputState, focused: bool) {
    Clear.render(area, buf);

    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Span::styled(
            format!(" {} ", state.prompt),
            Style::default().add_modifier(Modifier::BOLD),
        ));

    let chars: Vec<char> = state.value.chars().collect();
    let mut spans = Vec::new();

    if chars.is_empty() {
        if focused {
            // Block cursor over the first placeholder cell
            spans.push(Span::styled(
                " ",
                Style::default().bg(Color::White).fg(Color::Black),
            ));
            if !state.placeholder.is_empty() {
                spans.push(Span::styled(
                    state.placeholder.chars().skip(1).collect::<String>(),
                    Style::default().fg(Color::DarkGray),
                ));
            }
        } else if !state.placeholder.is_empty() {
            spans.push(Span::styled(
                state.placeholder.clone(),
                Style::default().fg(Color::DarkGray),
            ));
        }
    } else {
        let before: String = chars[..state.cursor.min(chars.len())].iter().collect();
        spans.push(Span::raw(before));

        if focused {
            let at_cursor = chars
                .get(state.cursor)
                .map(|c| c.to_string())
                .unwrap_or_else(|| " ".to_string());
            spans.push(Span::styled(
                at_cursor,
                Style::default().bg(Color::White).fg(Color::Black),
            ));
            if state.cursor < chars.len() {
                let after: String = chars[state.cursor + 1..].iter().collect();
                spans.push(Span::raw(after));
            }
        } else if state.cursor < chars.len() {
            let after: String = chars[state.cursor..].iter().collect();
            spans.push(Span::raw(after));
        }
    }

    let input = Paragraph::new(Line::from(spans)).block(block);
    input.render(area, buf);
}

/// Centered dialog geometry
pub struct InputDialog {
    width: u16,
    height: u16,
}

impl InputDialog {
    /// Create a new dialog shape
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Compute centered area within the given bounds
    pub fn centered_area(&self, bounds: Rect) -> Rect {
        let width = self.width.min(bounds.width);
        let height = self.height.min(bounds.height);
        let x = bounds.x + (bounds.width.saturating_sub(width)) / 2;
        let y = bounds.y + (bounds.height.saturating_sub(height)) / 2;
        Rect::new(x, y, width, height)
    }
}
