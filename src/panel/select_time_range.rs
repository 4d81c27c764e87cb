use super::{GraphPanel, TimeRange};

impl GraphPanel {
    /// Always loads, even when `range` is already selected.
    pub fn select_time_range(&mut self, range: TimeRange) {
        self.time_range = range;
        self.load();
    }
}
