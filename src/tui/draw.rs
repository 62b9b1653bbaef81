use ratatui::style::{Color, Style};

use crate::chart::{series_color, Rgb};

pub fn to_tui_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// Foreground style for series `index` of `count`, same palette as the SVG chart.
pub fn series_style(index: usize, count: usize) -> Style {
    Style::default().fg(to_tui_color(series_color(index, count)))
}
