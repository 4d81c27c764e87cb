use super::ControlBar;
use crate::panel::TimeRange;

impl ControlBar {
    /// Leaves exactly one range button active.
    pub fn select_button(&mut self, range: TimeRange) {
        for button in self.buttons.iter_mut() {
            button.active = button.range == range;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_button_is_active() {
        let mut controls = ControlBar::new();
        assert_eq!(controls.active_range(), None);

        controls.select_button(TimeRange::Week);
        controls.select_button(TimeRange::Year);

        let active: Vec<TimeRange> = controls.buttons.iter().filter(|b| b.active).map(|b| b.range).collect();
        assert_eq!(active, vec![TimeRange::Year]);
    }
}
