use crate::log_debug;

use super::{DisplaySlot, GraphPanel, PanelMessage, PublishState, LOAD_ERROR_TEXT};

impl GraphPanel {
    /// Drain finished fetches and publish attempts. Called from the UI loop;
    /// returns true when the panel needs a redraw.
    pub fn process_messages(&mut self) -> bool {
        let mut changed = false;

        while let Ok(msg) = self.message_rx.try_recv() {
            match msg {
                PanelMessage::ImageLoaded { url, image } => {
                    log_debug!("Panel '{}' showing {}", self.container.id(), url);
                    self.container.set_display(DisplaySlot::Image { url, image });
                    self.pending_fetches = self.pending_fetches.saturating_sub(1);
                }
                PanelMessage::ImageFailed { url, error } => {
                    log_debug!("Panel '{}' failed {}: {}", self.container.id(), url, error);
                    self.container.set_display(DisplaySlot::Error(LOAD_ERROR_TEXT.to_string()));
                    self.pending_fetches = self.pending_fetches.saturating_sub(1);
                }
                PanelMessage::PublishSucceeded => self.set_publish_state(PublishState::Success),
                PanelMessage::PublishFailed(error) => {
                    log_debug!("Panel '{}' publish failed: {}", self.container.id(), error);
                    self.set_publish_state(PublishState::Alert);
                }
            }
            changed = true;
        }

        if let Some(renderer) = self.renderer.as_mut() {
            changed |= renderer.process_messages();
        }

        changed
    }

    fn set_publish_state(&mut self, state: PublishState) {
        if let Some(controls) = self.container.controls_mut() {
            controls.publish.state = state;
        }
    }
}
