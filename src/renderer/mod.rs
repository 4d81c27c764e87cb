pub mod series;

use ratatui::{buffer::Buffer, layout::Rect};
use std::fmt::Debug;

use crate::panel::Container;

pub use series::{SeriesRenderer, SeriesRendererFactory};

/// A rich graph renderer living inside a panel's container.
///
/// A renderer is created once, with its first URL, and from then on is only
/// re-pointed: `set_data_url` followed by `request`.
pub trait GraphRenderer: Send + Debug {
    fn data_url(&self) -> &str;
    fn set_data_url(&mut self, url: &str);

    /// (Re)fetch whatever `data_url` currently points at.
    fn request(&mut self);

    /// Apply finished fetches. Returns true when something visible changed.
    fn process_messages(&mut self) -> bool {
        false
    }

    fn is_loading(&self) -> bool {
        false
    }

    fn render(&self, area: Rect, buf: &mut Buffer);
}

/// Builds the renderer for a container that has a renderer slot. The
/// returned renderer has already issued its first request.
pub trait RendererFactory: Send + Sync + Debug {
    fn create(&self, container: &Container, url: &str) -> Box<dyn GraphRenderer>;
}
