use ratatui::style::{Color, Style, Stylize};

use crate::panel::PublishState;

pub fn dim_unless_focused(is_focused: bool, style: Style) -> Style {
    if is_focused { style.bold() } else { style.dim() }
}

pub fn range_button_style(is_active: bool) -> Style {
    if is_active {
        Style::default().fg(Color::Black).bg(Color::Cyan).bold()
    } else {
        Style::default().fg(Color::Gray)
    }
}

pub fn publish_button_style(state: PublishState) -> Style {
    match state {
        PublishState::Secondary => Style::default().fg(Color::Gray),
        PublishState::Success => Style::default().fg(Color::Black).bg(Color::Green),
        PublishState::Alert => Style::default().fg(Color::White).bg(Color::Red),
    }
}
