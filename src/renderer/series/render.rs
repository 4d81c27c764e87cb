use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Style},
    symbols::Marker,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph, Widget},
};

use super::{Series, SeriesRenderer, SeriesStatus};

const SERIES_COLORS: [Color; 6] = [
    Color::Cyan,
    Color::Yellow,
    Color::Magenta,
    Color::Green,
    Color::LightRed,
    Color::LightBlue,
];

impl SeriesRenderer {
    pub(super) fn _render(&self, area: Rect, buf: &mut Buffer) {
        match &self.status {
            SeriesStatus::Loading => {
                // Middle row; the panel's spinner owns the top one.
                let middle = Rect { y: area.y + area.height / 2, height: area.height.min(1), ..area };
                Paragraph::new("Loading graph...")
                    .style(Style::default().fg(Color::DarkGray))
                    .alignment(Alignment::Center)
                    .render(middle, buf);
            }
            SeriesStatus::Failed(_) => {
                Paragraph::new("Error loading graph")
                    .style(Style::default().fg(Color::White).bg(Color::Red))
                    .alignment(Alignment::Center)
                    .render(area, buf);
            }
            SeriesStatus::Ready(series) => render_chart(series, area, buf),
        }
    }
}

fn render_chart(series: &[Series], area: Rect, buf: &mut Buffer) {
    // Nulls are gaps in Graphite; a line chart just skips them.
    let points: Vec<Vec<(f64, f64)>> = series
        .iter()
        .map(|s| {
            s.datapoints
                .iter()
                .filter_map(|(value, ts)| value.map(|v| (*ts as f64, v)))
                .collect()
        })
        .collect();

    let all = points.iter().flatten();
    let (mut min_x, mut max_x, mut min_y, mut max_y) = (f64::MAX, f64::MIN, f64::MAX, f64::MIN);
    for (x, y) in all {
        min_x = min_x.min(*x);
        max_x = max_x.max(*x);
        min_y = min_y.min(*y);
        max_y = max_y.max(*y);
    }

    if min_x > max_x {
        Paragraph::new("No data")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .render(area, buf);
        return;
    }

    if max_y - min_y < f64::EPSILON {
        max_y = min_y + 1.0;
    }

    let datasets: Vec<Dataset> = series
        .iter()
        .zip(points.iter())
        .enumerate()
        .map(|(i, (s, data))| {
            Dataset::default()
                .name(s.target.clone())
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(SERIES_COLORS[i % SERIES_COLORS.len()]))
                .data(data)
        })
        .collect();

    let y_labels = vec![
        Span::raw(format!("{:.1}", min_y)),
        Span::raw(format!("{:.1}", (min_y + max_y) / 2.0)),
        Span::raw(format!("{:.1}", max_y)),
    ];

    Chart::new(datasets)
        .block(Block::default().borders(Borders::NONE))
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([min_x, max_x]),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([min_y, max_y])
                .labels(y_labels),
        )
        .render(area, buf);
}
