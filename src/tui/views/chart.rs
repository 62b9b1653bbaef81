use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};
use ratatui::Frame;

use crate::chart::geometry::LEGEND_ROWS;
use crate::chart::{ChartGeometry, ChartLayout};
use crate::model::CommitMatrix;

use super::super::draw::series_style;
use super::super::layout::cell_span;
use super::super::state::TuiState;

const LEGEND_COLUMN_WIDTH: usize = 22;

/// Bars of a matrix drawn with block glyphs, one terminal cell per unit.
pub struct MatrixBars<'a> {
    pub matrix: &'a CommitMatrix,
    pub layout: ChartLayout,
}

impl Widget for MatrixBars<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height < 2 {
            return;
        }

        let plot_height = area.height - 1;
        let geometry =
            ChartGeometry::compute(self.matrix, self.layout, area.width as f64, plot_height as f64);
        let layers = self.matrix.author_count();

        for bar in geometry.bars.iter().filter(|b| b.height > 0.0) {
            let (x0, x1) = cell_span(bar.x, bar.width, area.width);
            let bottom = (bar.bottom().round() as u16).min(plot_height);
            let mut top = (bar.y.round().max(0.0) as u16).min(bottom);
            if top == bottom && bottom > 0 {
                top = bottom - 1;
            }
            let style = series_style(bar.series, layers);
            for row in top..bottom {
                for col in x0..x1 {
                    buf.get_mut(area.x + col, area.y + row)
                        .set_symbol("█")
                        .set_style(style);
                }
            }
        }

        // skip labels that would collide with the previous one
        let label_row = area.y + plot_height;
        let mut next_free = 0u16;
        for (day, label) in self.matrix.axis_labels().iter().enumerate() {
            if label.is_empty() {
                continue;
            }
            let len = label.chars().count() as u16;
            let centre = geometry.label_x(day).round() as u16;
            let start = centre.saturating_sub(len / 2);
            if start < next_free || start + len > area.width {
                continue;
            }
            buf.set_string(area.x + start, label_row, label, Style::default().fg(Color::Gray));
            next_free = start + len + 1;
        }
    }
}

/// Legend lines: entries fill three rows, then wrap to the next column.
pub fn legend_lines(matrix: &CommitMatrix) -> Vec<Line<'static>> {
    let names = matrix.author_names();
    let count = names.len();
    let mut rows: Vec<Vec<Span<'static>>> = vec![Vec::new(); LEGEND_ROWS.min(count.max(1))];

    for (i, name) in names.into_iter().enumerate() {
        let row = &mut rows[i % LEGEND_ROWS];
        let label: String = name.chars().take(LEGEND_COLUMN_WIDTH - 3).collect();
        row.push(Span::styled("■ ", series_style(i, count)));
        row.push(Span::raw(format!(
            "{:<width$}",
            label,
            width = LEGEND_COLUMN_WIDTH - 2
        )));
    }

    rows.into_iter().map(Line::from).collect()
}

/// Header, chart, legend and prompt for the current state.
pub fn draw_chart_view(f: &mut Frame, area: Rect, state: &TuiState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Length(LEGEND_ROWS as u16 + 2),
            Constraint::Length(3),
        ])
        .split(area);

    draw_header(f, chunks[0], state);

    let chart_block = Block::default()
        .title(format!("Commits per day ({})", state.app.layout))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue));
    let inner = chart_block.inner(chunks[1]);
    f.render_widget(chart_block, chunks[1]);

    match &state.app.matrix {
        Some(matrix) => {
            f.render_widget(MatrixBars { matrix, layout: state.app.layout }, inner);
            let legend = Paragraph::new(legend_lines(matrix))
                .block(Block::default().title("Authors").borders(Borders::ALL));
            f.render_widget(legend, chunks[2]);
        }
        None => {
            let text = if state.loading { "Loading..." } else { "No data to display" };
            f.render_widget(
                Paragraph::new(text).style(Style::default().fg(Color::Gray)),
                inner,
            );
        }
    }

    draw_footer(f, chunks[3], state);
}

fn draw_header(f: &mut Frame, area: Rect, state: &TuiState) {
    let mut spans = vec![Span::styled(
        state.app.repo.to_string(),
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    )];

    if let Some(matrix) = &state.app.matrix {
        spans.push(Span::raw(format!(
            "  {} commits · {} authors · {} days",
            matrix.total_commits(),
            matrix.author_count(),
            matrix.day_count()
        )));
    }
    if state.loading {
        spans.push(Span::styled("  fetching…", Style::default().fg(Color::Cyan)));
    }
    if state.app.has_error() {
        spans.push(Span::styled(
            format!("  {}", state.app.error),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ));
    }

    let header = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    f.render_widget(header, area);
}

fn draw_footer(f: &mut Frame, area: Rect, state: &TuiState) {
    let line = if state.edit_mode {
        Line::from(vec![
            Span::styled("Repository: ", Style::default().fg(Color::Yellow)),
            Span::raw(format!("{}_", state.edit_input)),
            Span::styled("  Enter to load, Esc to cancel", Style::default().fg(Color::Gray)),
        ])
    } else if let Some(status) = state.current_status() {
        Line::from(Span::styled(status.to_string(), Style::default().fg(Color::Cyan)))
    } else {
        Line::from(Span::styled(
            "g/space: stacked/grouped  r: refresh  e: edit repo  h: help  q: quit",
            Style::default().fg(Color::Gray),
        ))
    };

    let footer = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    f.render_widget(footer, area);
}
