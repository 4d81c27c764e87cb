use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, StatefulWidget, Widget},
};
use throbber_widgets_tui::{Throbber, ThrobberState, BRAILLE_SIX};

use crate::panel::{DisplaySlot, GraphPanel};
use crate::ui::components::UiComponent;
use crate::ui::graph_image::ImageCache;

pub fn render_body(
    panel: &GraphPanel,
    images: &mut ImageCache,
    throbber: &mut ThrobberState,
    area: Rect,
    buf: &mut Buffer,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(format!(" {} ", panel.current_url().unwrap_or("")));
    let inner = block.inner(area);
    block.render(area, buf);

    if let Some(renderer) = panel.renderer() {
        renderer.render(inner, buf);
    } else {
        render_display(panel, images, inner, buf);
    }

    if panel.is_loading() && inner.height > 0 {
        let spinner_area = Rect { height: 1, ..inner };
        let spinner = Throbber::default()
            .label("Loading graph...")
            .style(Style::default().fg(Color::Cyan))
            .throbber_set(BRAILLE_SIX);
        StatefulWidget::render(spinner, spinner_area, buf, throbber);
    }
}

fn render_display(panel: &GraphPanel, images: &mut ImageCache, inner: Rect, buf: &mut Buffer) {
    match panel.container().display() {
        DisplaySlot::Empty => {
            if !panel.is_loading() {
                UiComponent::empty_message("No graph loaded").render(inner, buf);
            }
        }
        DisplaySlot::Image { url, image } => {
            images.render(panel.container().id(), url, image, inner, buf);
        }
        DisplaySlot::Error(text) => {
            UiComponent::error_box(text).render(inner, buf);
        }
    }
}
