use super::GraphPanel;

impl GraphPanel {
    /// Click on the toggle handle. Returns false when the panel has no handle
    /// and so nothing listens for the click.
    pub fn handle_toggle_click(&mut self) -> bool {
        if self.toggle_handle.is_none() {
            return false;
        }

        if self.container.is_visible() {
            self.toggle_close();
        } else {
            self.toggle_open();
        }
        true
    }
}
