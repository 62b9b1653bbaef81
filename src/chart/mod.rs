pub mod color;
pub mod exec;
pub mod geometry;
pub mod layout;
pub mod svg;

pub use color::{series_color, Rgb};
pub use exec::exec;
pub use geometry::{legend_entries, BarRect, ChartGeometry, LegendEntry};
pub use layout::ChartLayout;
pub use svg::{render_svg, render_svg_string, ChartOptions};
