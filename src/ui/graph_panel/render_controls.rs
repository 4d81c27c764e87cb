use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::panel::GraphPanel;
use crate::ui::style::{publish_button_style, range_button_style};

pub fn render_controls(panel: &GraphPanel, area: Rect, buf: &mut Buffer) {
    let Some(controls) = panel.container().controls() else {
        return;
    };

    let publish_label = format!(" {} ", controls.publish.label);
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(publish_label.chars().count() as u16),
        ])
        .split(area);

    let mut buttons = Vec::with_capacity(controls.buttons.len() * 2);
    for button in &controls.buttons {
        buttons.push(Span::styled(format!(" {} ", button.label), range_button_style(button.active)));
        buttons.push(Span::raw(" "));
    }
    Paragraph::new(Line::from(buttons)).render(chunks[0], buf);

    Paragraph::new(Span::styled(publish_label, publish_button_style(controls.publish.state)))
        .alignment(Alignment::Right)
        .render(chunks[1], buf);
}
