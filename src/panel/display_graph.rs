use crate::error::FetcherError;
use crate::log_warn;

use super::{GraphPanel, PanelMessage};

impl GraphPanel {
    /// Hand `url` to the renderer, or fetch it as a plain image when the
    /// container has no renderer slot. Earlier fetches are not cancelled;
    /// whichever completes last is shown.
    pub(super) fn display_graph(&mut self, url: String) {
        self.current_url = Some(url.clone());

        if self.container.has_renderer_slot() {
            match self.renderer.as_mut() {
                Some(renderer) => {
                    renderer.set_data_url(&url);
                    renderer.request();
                }
                None => {
                    let renderer = self.context.renderer_factory.create(&self.container, &url);
                    self.renderer = Some(renderer);
                }
            }
            return;
        }

        self.pending_fetches += 1;

        let fetch = self.context.client.get_bytes(&url);
        let tx = self.message_tx.clone();

        tokio::spawn(async move {
            let decoded = fetch
                .await
                .and_then(|body| image::load_from_memory(&body).map_err(FetcherError::from));

            let message = match decoded {
                Ok(image) => PanelMessage::ImageLoaded { url, image },
                Err(e) => {
                    log_warn!("Image load for {} failed: {}", url, e);
                    PanelMessage::ImageFailed { url, error: e.to_string() }
                }
            };
            let _ = tx.send(message);
        });
    }
}
