use super::{GraphPanel, ToggleIcon};

impl GraphPanel {
    pub fn toggle_close(&mut self) {
        self.is_expanded = false;
        self.container.hide();
        if let Some(handle) = self.toggle_handle.as_mut() {
            handle.set_icon(ToggleIcon::Collapsed);
        }
    }
}
