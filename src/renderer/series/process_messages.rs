use crate::log_debug;

use super::{SeriesMessage, SeriesRenderer, SeriesStatus};

impl SeriesRenderer {
    /// Whatever completes last is what stays on screen, even when it answers
    /// an older URL.
    pub(super) fn _process_messages(&mut self) -> bool {
        let mut changed = false;

        while let Ok(msg) = self.message_rx.try_recv() {
            self.pending_requests = self.pending_requests.saturating_sub(1);
            match msg {
                SeriesMessage::Loaded { url, series } => {
                    log_debug!("Series ready for {} ({} targets)", url, series.len());
                    self.status = SeriesStatus::Ready(series);
                }
                SeriesMessage::Failed { url, error } => {
                    log_debug!("Series failed for {}: {}", url, error);
                    self.status = SeriesStatus::Failed(error);
                }
            }
            changed = true;
        }

        changed
    }
}
