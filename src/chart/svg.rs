use crate::error::{Result, VizError};
use crate::model::CommitMatrix;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;
use tracing::{debug, info};

use super::color::{series_color, Rgb};
use super::geometry::{legend_entries, ChartGeometry, LEGEND_SWATCH};
use super::layout::ChartLayout;

const MARGIN: u32 = 20;
const LEGEND_SPACE: u32 = 100;
const LABEL_FONT: (&str, u32) = ("sans-serif", 11);
const LEGEND_FONT: (&str, u32) = ("sans-serif", 14);

/// Canvas size for the SVG chart.
#[derive(Debug, Clone, Copy)]
pub struct ChartOptions {
    pub width: u32,
    /// Height of the plot area plus the margin; the legend is added below.
    pub height: u32,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self { width: 960, height: 500 }
    }
}

impl ChartOptions {
    pub fn plot_height(&self) -> u32 {
        self.height.saturating_sub(MARGIN)
    }

    pub fn canvas(&self) -> (u32, u32) {
        (self.width, self.plot_height() + MARGIN + LEGEND_SPACE)
    }
}

fn chart_err<E: std::fmt::Display>(e: E) -> VizError {
    VizError::Chart(e.to_string())
}

fn to_color(rgb: Rgb) -> RGBColor {
    RGBColor(rgb.0, rgb.1, rgb.2)
}

/// Render the chart into an SVG document held in memory.
pub fn render_svg_string(matrix: &CommitMatrix, layout: ChartLayout, options: &ChartOptions) -> Result<String> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, options.canvas()).into_drawing_area();
        draw_chart(&root, matrix, layout, options)?;
        root.present().map_err(chart_err)?;
    }
    Ok(svg)
}

/// Render the chart and write it to `path`.
pub fn render_svg(matrix: &CommitMatrix, layout: ChartLayout, options: &ChartOptions, path: &Path) -> Result<()> {
    let svg = render_svg_string(matrix, layout, options)?;
    std::fs::write(path, svg)?;
    info!(path = %path.display(), %layout, "wrote chart");
    Ok(())
}

fn draw_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    matrix: &CommitMatrix,
    layout: ChartLayout,
    options: &ChartOptions,
) -> Result<()> {
    root.fill(&WHITE).map_err(chart_err)?;

    let plot_height = options.plot_height() as f64;
    let geometry = ChartGeometry::compute(matrix, layout, options.width as f64, plot_height);
    let layers = matrix.author_count();
    debug!(bars = geometry.bars.len(), scale_max = geometry.scale_max, "drawing bars");

    for bar in geometry.bars.iter().filter(|b| b.height > 0.0) {
        let color = to_color(series_color(bar.series, layers));
        let top_left = (bar.x.round() as i32, bar.y.round() as i32);
        let bottom_right = (bar.right().round() as i32, bar.bottom().round() as i32);
        root.draw(&Rectangle::new([top_left, bottom_right], color.filled()))
            .map_err(chart_err)?;
    }

    let label_style = TextStyle::from(LABEL_FONT.into_font())
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Top));
    let label_y = plot_height as i32 + 6;
    for (day, label) in matrix.axis_labels().iter().enumerate() {
        if label.is_empty() {
            continue;
        }
        let x = geometry.label_x(day).round() as i32;
        root.draw(&Text::new(label.clone(), (x, label_y), label_style.clone()))
            .map_err(chart_err)?;
    }

    let legend_top = plot_height + 36.0;
    let legend_style = TextStyle::from(LEGEND_FONT.into_font())
        .color(&BLACK)
        .pos(Pos::new(HPos::Left, VPos::Center));
    for entry in legend_entries(matrix) {
        let color = to_color(series_color(entry.series, layers));
        let x0 = entry.swatch_x as i32;
        let y0 = (legend_top + entry.swatch_y) as i32;
        let side = LEGEND_SWATCH as i32;
        root.draw(&Rectangle::new([(x0, y0), (x0 + side, y0 + side)], color.filled()))
            .map_err(chart_err)?;
        root.draw(&Text::new(
            entry.label,
            (entry.text_x as i32, (legend_top + entry.text_y) as i32),
            legend_style.clone(),
        ))
        .map_err(chart_err)?;
    }

    Ok(())
}
