use crate::model::CommitMatrix;

use super::layout::ChartLayout;

/// Share of a day's slot covered by bars; the rest is the gap between days.
pub const BAR_FILL: f64 = 0.9;

pub const LEGEND_ROWS: usize = 3;
pub const LEGEND_COLUMN_STEP: f64 = 155.0;
pub const LEGEND_ROW_STEP: f64 = 30.0;
pub const LEGEND_SWATCH: f64 = 20.0;

/// One bar in plot coordinates: origin top-left, `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarRect {
    pub series: usize,
    pub day: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BarRect {
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }
}

/// Bar placement for a matrix inside a `width` x `height` plot area.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartGeometry {
    pub layout: ChartLayout,
    pub width: f64,
    pub height: f64,
    pub days: usize,
    /// Value mapped to the full plot height
    pub scale_max: u32,
    pub bars: Vec<BarRect>,
}

impl ChartGeometry {
    pub fn compute(matrix: &CommitMatrix, layout: ChartLayout, width: f64, height: f64) -> Self {
        let days = matrix.day_count();
        let layers = matrix.author_count();
        let scale_max = match layout {
            ChartLayout::Stacked => matrix.max_stacked(),
            ChartLayout::Grouped => matrix.max_bucket(),
        };

        let day_width = if days == 0 { 0.0 } else { width / days as f64 };
        let scale = |v: u32| {
            if scale_max == 0 {
                0.0
            } else {
                v as f64 * height / scale_max as f64
            }
        };

        let mut bars = Vec::with_capacity(days * layers);
        let mut baseline = vec![0u32; days];

        for (series, buckets) in matrix.series().iter().enumerate() {
            for bucket in buckets {
                let slot_x = bucket.x as f64 * day_width;
                let bar = match layout {
                    ChartLayout::Stacked => {
                        let y0 = baseline[bucket.x];
                        baseline[bucket.x] += bucket.y;
                        let top = height - scale(y0 + bucket.y);
                        BarRect {
                            series,
                            day: bucket.x,
                            x: slot_x,
                            y: top,
                            width: BAR_FILL * day_width,
                            height: scale(bucket.y),
                        }
                    }
                    ChartLayout::Grouped => {
                        let sub_width = BAR_FILL * day_width / layers as f64;
                        let bar_height = scale(bucket.y);
                        BarRect {
                            series,
                            day: bucket.x,
                            x: slot_x + series as f64 * sub_width,
                            y: height - bar_height,
                            width: sub_width,
                            height: bar_height,
                        }
                    }
                };
                bars.push(bar);
            }
        }

        Self {
            layout,
            width,
            height,
            days,
            scale_max,
            bars,
        }
    }

    /// Horizontal centre of a day's bars, where its axis label goes.
    pub fn label_x(&self, day: usize) -> f64 {
        if self.days == 0 {
            return 0.0;
        }
        let day_width = self.width / self.days as f64;
        day as f64 * day_width + BAR_FILL * day_width / 2.0
    }
}

/// Placement of one legend swatch and its text, relative to the legend origin.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub series: usize,
    pub label: String,
    pub swatch_x: f64,
    pub swatch_y: f64,
    pub text_x: f64,
    pub text_y: f64,
}

/// Legend laid out column by column, three entries per column.
pub fn legend_entries(matrix: &CommitMatrix) -> Vec<LegendEntry> {
    matrix
        .author_names()
        .into_iter()
        .enumerate()
        .map(|(i, name)| {
            let column = (i / LEGEND_ROWS) as f64;
            let row = (i % LEGEND_ROWS) as f64;
            let x = column * LEGEND_COLUMN_STEP;
            let y = row * LEGEND_ROW_STEP;
            LegendEntry {
                series: i,
                label: name.to_string(),
                swatch_x: x,
                swatch_y: y,
                text_x: x + LEGEND_SWATCH + 6.0,
                text_y: y + LEGEND_SWATCH / 2.0,
            }
        })
        .collect()
}
