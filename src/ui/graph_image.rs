// src/ui/graph_image.rs
use image::DynamicImage;
use ratatui::{buffer::Buffer, layout::Rect, widgets::StatefulWidget};
use ratatui_image::{picker::Picker, protocol::StatefulProtocol, Resize, StatefulImage};
use std::collections::HashMap;

use crate::log_warn;

/// Terminal encoding of one displayed graph image, tied to the URL it was
/// loaded from so a new load re-encodes.
pub struct GraphImage {
    url: String,
    protocol: StatefulProtocol,
}

// Manual Debug implementation since StatefulProtocol doesn't implement Debug
impl std::fmt::Debug for GraphImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphImage")
            .field("url", &self.url)
            .field("protocol", &"<StatefulProtocol>")
            .finish()
    }
}

impl GraphImage {
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Letterboxed into `area`.
    pub fn render(&mut self, area: Rect, buf: &mut Buffer) {
        let image = StatefulImage::default().resize(Resize::Fit(None));
        image.render(area, buf, &mut self.protocol);

        if let Err(e) = self.protocol.last_encoding_result().unwrap_or(Ok(())) {
            log_warn!("Image encoding error for {}: {}", self.url, e);
        }
    }
}

/// Encoded images per panel id.
pub struct ImageCache {
    picker: Picker,
    images: HashMap<String, GraphImage>,
}

impl std::fmt::Debug for ImageCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageCache")
            .field("images", &self.images.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl ImageCache {
    /// Asks the terminal for its graphics protocol and font size; falls back
    /// to half-blocks at a guessed cell size when the query fails.
    pub fn new() -> Self {
        let picker = Picker::from_query_stdio().unwrap_or_else(|e| {
            log_warn!("Terminal graphics query failed, using fallback: {}", e);
            Picker::from_fontsize((8, 16))
        });

        Self {
            picker,
            images: HashMap::new(),
        }
    }

    /// Draw `image` for `panel_id`, re-encoding only when the URL changed.
    pub fn render(&mut self, panel_id: &str, url: &str, image: &DynamicImage, area: Rect, buf: &mut Buffer) {
        let stale = self
            .images
            .get(panel_id)
            .map_or(true, |cached| cached.url() != url);

        if stale {
            let protocol = self.picker.new_resize_protocol(image.clone());
            self.images.insert(
                panel_id.to_string(),
                GraphImage {
                    url: url.to_string(),
                    protocol,
                },
            );
        }

        if let Some(cached) = self.images.get_mut(panel_id) {
            cached.render(area, buf);
        }
    }
}

impl Default for ImageCache {
    fn default() -> Self {
        Self::new()
    }
}
