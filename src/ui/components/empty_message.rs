use ratatui::{
    layout::Alignment,
    prelude::{Color, Stylize, Style},
    widgets::{Paragraph, Wrap},
};

use super::UiComponent;

impl UiComponent {
    pub fn empty_message(text: &str) -> Paragraph {
        Paragraph::new(text)
            .style(Style::default().fg(Color::Gray).italic())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
    }
}
