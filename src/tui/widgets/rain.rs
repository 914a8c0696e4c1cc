//! Matrix-style digital rain background

use rand::Rng;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::StatefulWidget,
};
use std::time::{Duration, Instant};

const GLYPHS: [char; 2] = ['0', '1'];
const RESET_CHANCE: f64 = 0.025;
const TRAIL_LEN: u16 = 7;

/// State for the rain animation, one falling drop per column
#[derive(Debug)]
pub struct MatrixRain {
    interval: Duration,
    last_step: Option<Instant>,
    drops: Vec<u16>,
    width: u16,
    height: u16,
}

impl MatrixRain {
    /// Create a rain animation stepping at the given interval
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_step: None,
            drops: Vec::new(),
            width: 0,
            height: 0,
        }
    }

    /// Rebuild the drop columns when the terminal size changes
    pub fn resize(&mut self, width: u16, height: u16) {
        if width != self.width || height != self.height {
            self.drops = vec![0; width as usize];
            self.width = width;
            self.height = height;
        }
    }

    /// Step the animation if the interval has elapsed
    pub fn advance(&mut self, now: Instant) {
        match self.last_step {
            None => self.last_step = Some(now),
            Some(last) => {
                if now.duration_since(last) >= self.interval {
                    self.step();
                    self.last_step = Some(now);
                }
            }
        }
    }

    fn step(&mut self) {
        let mut rng = rand::thread_rng();
        for drop in &mut self.drops {
            // Drops run past the bottom edge before resetting, which
            // desynchronizes the columns after the first pass.
            if *drop >= self.height && rng.gen_bool(RESET_CHANCE) {
                *drop = 0;
            } else {
                *drop = drop.saturating_add(1);
            }
        }
    }

    #[cfg(test)]
    fn drops(&self) -> &[u16] {
        &self.drops
    }
}

/// Renders a [`MatrixRain`] state into the full background area
pub struct RainWidget;

impl StatefulWidget for RainWidget {
    type State = MatrixRain;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        state.resize(area.width, area.height);
        let mut rng = rand::thread_rng();

        for x in 0..area.width {
            let head = state.drops[x as usize];
            for y in 0..area.height {
                if y > head {
                    break;
                }
                let distance = head - y;
                let style = match distance {
                    0 => Style::default()
                        .fg(Color::LightGreen)
                        .add_modifier(Modifier::BOLD),
                    1..=3 => Style::default().fg(Color::Green),
                    d if d <= TRAIL_LEN => {
                        Style::default().fg(Color::Green).add_modifier(Modifier::DIM)
                    }
                    _ => continue,
                };
                let glyph = GLYPHS[rng.gen_range(0..GLYPHS.len())];
                if let Some(cell) = buf.cell_mut((area.x + x, area.y + y)) {
                    cell.set_char(glyph);
                    cell.set_style(style);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_respects_interval() {
        let mut rain = MatrixRain::new(Duration::from_millis(55));
        rain.resize(4, 10);
        let t0 = Instant::now();

        // First call only anchors the clock.
        rain.advance(t0);
        assert!(rain.drops().iter().all(|&d| d == 0));

        rain.advance(t0 + Duration::from_millis(60));
        assert!(rain.drops().iter().all(|&d| d == 1));

        // Not enough time since the last step.
        rain.advance(t0 + Duration::from_millis(70));
        assert!(rain.drops().iter().all(|&d| d == 1));
    }

    #[test]
    fn test_resize_rebuilds_on_dimension_change() {
        let mut rain = MatrixRain::new(Duration::from_millis(55));
        rain.resize(4, 10);
        let t0 = Instant::now();
        rain.advance(t0);
        rain.advance(t0 + Duration::from_millis(60));

        // Same dimensions keep drop positions.
        rain.resize(4, 10);
        assert!(rain.drops().iter().all(|&d| d == 1));

        rain.resize(5, 10);
        assert_eq!(rain.drops().len(), 5);
        assert!(rain.drops().iter().all(|&d| d == 0));
    }

    #[test]
    fn test_render_writes_binary_glyphs() {
        let mut rain = MatrixRain::new(Duration::from_millis(55));
        let area = Rect::new(0, 0, 8, 6);
        let mut buf = Buffer::empty(area);

        RainWidget.render(area, &mut buf, &mut rain);

        // Fresh drops sit at row zero, so every column head is drawn there.
        for x in 0..8 {
            let symbol = buf[(x, 0)].symbol();
            assert!(symbol == "0" || symbol == "1", "unexpected glyph {symbol}");
        }
    }
}
