use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::panel::GraphPanel;
use crate::ui::style::dim_unless_focused;

/// `▾ Title  [source 1/2] *` where `*` marks a selection not yet loaded.
pub fn render_header(panel: &GraphPanel, is_selected: bool, area: Rect, buf: &mut Buffer) {
    let icon = panel
        .toggle_handle()
        .map(|handle| handle.icon().glyph())
        .unwrap_or("•");

    let title_style = dim_unless_focused(
        is_selected,
        Style::default().fg(if is_selected { Color::Cyan } else { Color::White }),
    );

    let mut spans = vec![
        Span::styled(format!("{} ", icon), title_style),
        Span::styled(panel.container().title().to_string(), title_style),
    ];

    if panel.sources().len() > 1 {
        spans.push(Span::styled(
            format!("  [source {}/{}]", panel.active_source_index() + 1, panel.sources().len()),
            Style::default().fg(Color::DarkGray),
        ));
    }

    if panel.is_initialized() && panel.should_reload() {
        spans.push(Span::styled(" *", Style::default().fg(Color::Yellow)));
    }

    Paragraph::new(Line::from(spans)).render(area, buf);
}
