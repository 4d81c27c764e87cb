use ratatui::{
    layout::Alignment,
    prelude::{Color, Style},
    widgets::Paragraph,
};

use super::UiComponent;

impl UiComponent {
    /// Inline indicator shown in place of a graph that failed to load.
    pub fn error_box(text: &str) -> Paragraph {
        Paragraph::new(text)
            .style(Style::default().fg(Color::White).bg(Color::Red))
            .alignment(Alignment::Center)
    }
}
