//! Base stat bar widget for the detail view

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

/// Highest base stat any species has
pub const MAX_BASE_STAT: u32 = 255;

/// Width reserved for the stat label
const LABEL_WIDTH: u16 = 16;

/// Width reserved for the numeric value
const VALUE_WIDTH: u16 = 5;

/// Block characters for partially filled cells (eighths)
const PARTIAL_BLOCKS: [char; 8] = [' ', '▏', '▎', '▍', '▌', '▋', '▊', '▉'];

/// A single-line bar: `label  value ████▌`
pub struct StatBar<'a> {
    label: &'a str,
    value: u32,
    style: Style,
    highlight_style: Style,
    highlighted: bool,
}

impl<'a> StatBar<'a> {
    pub fn new(label: &'a str, value: u32) -> Self {
        Self {
            label,
            value,
            style: Style::default().fg(Color::Cyan),
            highlight_style: Style::default().fg(Color::Yellow),
            highlighted: false,
        }
    }

    /// Draws the bar in the highlight color (used for the highest stat)
    pub fn highlighted(mut self, highlighted: bool) -> Self {
        self.highlighted = highlighted;
        self
    }

    /// Bar text for the given number of cells
    fn bar(&self, width: u16) -> String {
        let ratio = (f64::from(self.value) / f64::from(MAX_BASE_STAT)).clamp(0.0, 1.0);
        let eighths = (ratio * f64::from(width) * 8.0).round() as usize;
        let full = eighths / 8;
        let partial = eighths % 8;

        let mut bar = "█".repeat(full);
        if partial > 0 {
            bar.push(PARTIAL_BLOCKS[partial]);
        }
        bar
    }
}

impl<'a> Widget for StatBar<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let label: String = self.label.chars().take(LABEL_WIDTH as usize - 1).collect();
        buf.set_string(area.x, area.y, &label, Style::default());

        if area.width <= LABEL_WIDTH {
            return;
        }
        let value_x = area.x + LABEL_WIDTH;
        buf.set_string(
            value_x,
            area.y,
            format!("{:>3}", self.value),
            Style::default().fg(Color::White),
        );

        let bar_x = value_x + VALUE_WIDTH;
        let bar_width = area.width.saturating_sub(LABEL_WIDTH + VALUE_WIDTH);
        if bar_width == 0 {
            return;
        }

        let style = if self.highlighted {
            self.highlight_style
        } else {
            self.style
        };
        buf.set_string(bar_x, area.y, self.bar(bar_width), style);
    }
}
