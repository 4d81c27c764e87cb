pub mod components;
pub mod graph_image;
pub mod graph_panel;
pub mod style;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    widgets::{Paragraph, Widget},
};

use crate::app::App;
use crate::ui::components::UiComponent;
use crate::ui::graph_panel::{panel_constraint, render_graph_panel};

const HELP_TEXT: &str =
    "↑/↓ select · Enter toggle · d/w/m/y range · 1-9 source · a add to dashboard · q quit";

impl Widget for &mut App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let main_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Min(1),    // Panels
                Constraint::Length(1), // Help
            ])
            .split(area);

        Paragraph::new(format!("Graphs · {}", self.page_target))
            .style(Style::default().fg(Color::White).bold())
            .alignment(Alignment::Center)
            .render(main_layout[0], buf);

        if self.panels.is_empty() {
            UiComponent::empty_message("No graphs configured").render(main_layout[1], buf);
        } else {
            let constraints: Vec<Constraint> = self.panels.iter().map(panel_constraint).collect();
            let panel_areas = Layout::default()
                .direction(Direction::Vertical)
                .constraints(constraints)
                .split(main_layout[1]);

            for (idx, panel) in self.panels.iter().enumerate() {
                render_graph_panel(
                    panel,
                    idx == self.selected,
                    &mut self.images,
                    &mut self.throbber,
                    panel_areas[idx],
                    buf,
                );
            }
        }

        UiComponent::help(HELP_TEXT).render(main_layout[2], buf);
    }
}
