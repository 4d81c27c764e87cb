use super::{GraphPanel, ToggleIcon};

impl GraphPanel {
    /// Show the panel. The first open initializes (and loads); later opens
    /// only reload when the range or source changed while it was closed.
    pub fn toggle_open(&mut self) {
        if !self.is_initialized {
            self.init();
        }
        if self.should_reload() {
            self.load();
        }

        self.container.show();
        self.is_expanded = true;
        if let Some(handle) = self.toggle_handle.as_mut() {
            handle.set_icon(ToggleIcon::Expanded);
        }
    }
}
