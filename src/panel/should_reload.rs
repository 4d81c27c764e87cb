use super::GraphPanel;

impl GraphPanel {
    /// Whether what is displayed no longer matches the selected range and
    /// source.
    pub fn should_reload(&self) -> bool {
        self.last_fetched_time_range != Some(self.time_range)
            || self.last_fetched_source_index != Some(self.active_source_index)
    }
}
