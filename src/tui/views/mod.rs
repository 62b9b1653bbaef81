mod chart;
mod help;

pub use chart::{draw_chart_view, legend_lines, MatrixBars};
pub use help::draw_help_overlay;
