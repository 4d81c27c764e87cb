use crate::log_debug;

use super::GraphPanel;

impl GraphPanel {
    /// Switch source without loading; the next open or range change picks it
    /// up. Out-of-range indices are ignored.
    pub fn select_source_index(&mut self, index: usize) {
        if index < self.sources.len() {
            self.active_source_index = index;
        } else {
            log_debug!(
                "Panel '{}' ignoring source index {} ({} sources)",
                self.container.id(),
                index,
                self.sources.len()
            );
        }
    }
}
