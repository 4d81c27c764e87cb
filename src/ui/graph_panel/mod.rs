mod render_header;
mod render_controls;
mod render_body;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
};
use throbber_widgets_tui::ThrobberState;

use crate::panel::GraphPanel;
use crate::ui::graph_image::ImageCache;

pub use render_header::render_header;
pub use render_controls::render_controls;
pub use render_body::render_body;

/// Header line always; controls and body only while the container is visible.
pub fn render_graph_panel(
    panel: &GraphPanel,
    is_selected: bool,
    images: &mut ImageCache,
    throbber: &mut ThrobberState,
    area: Rect,
    buf: &mut Buffer,
) {
    if !panel.container().is_visible() {
        render_header(panel, is_selected, area, buf);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(1), // Range buttons + publish
            Constraint::Min(3),    // Graph
        ])
        .split(area);

    render_header(panel, is_selected, chunks[0], buf);
    render_controls(panel, chunks[1], buf);
    render_body(panel, images, throbber, chunks[2], buf);
}

/// Rows a panel wants: one when collapsed, the rest of the screen shared
/// among expanded ones otherwise.
pub fn panel_constraint(panel: &GraphPanel) -> Constraint {
    if panel.container().is_visible() {
        Constraint::Fill(1)
    } else {
        Constraint::Length(1)
    }
}
