use crate::log_debug;

use super::GraphPanel;

impl GraphPanel {
    pub(super) fn load(&mut self) {
        self.last_fetched_time_range = Some(self.time_range);
        self.last_fetched_source_index = Some(self.active_source_index);

        let url = self.get_url();
        log_debug!("Panel '{}' loading {}", self.container.id(), url);

        self.display_graph(url);

        let range = self.time_range;
        if let Some(controls) = self.container.controls_mut() {
            controls.select_button(range);
        }
    }
}
