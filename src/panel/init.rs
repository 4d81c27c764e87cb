use crate::log_info;

use super::{ControlBar, GraphPanel};

impl GraphPanel {
    /// One-time setup: controls, first load.
    pub(super) fn init(&mut self) {
        self.container.set_controls(ControlBar::new());
        self.load();
        self.is_initialized = true;

        log_info!("Panel '{}' initialized", self.container.id());
    }
}
