use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Terminal cell span `[start, end)` covered by `[x, x + width)`, at least one cell wide.
pub fn cell_span(x: f64, width: f64, limit: u16) -> (u16, u16) {
    let start = (x.floor().max(0.0) as u16).min(limit);
    let end = ((x + width).round().max(0.0) as u16).min(limit);
    (start, end.max((start + 1).min(limit)))
}
