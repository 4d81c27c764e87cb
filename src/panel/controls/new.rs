use super::{ControlBar, PublishButton, PublishState, RangeButton, ADD_GRAPH_LABEL};
use crate::panel::TimeRange;

impl ControlBar {
    /// One button per time range, then the publish action. Nothing is active
    /// until the first load highlights its range.
    pub fn new() -> Self {
        let buttons = TimeRange::all()
            .into_iter()
            .map(|range| RangeButton {
                range,
                label: range.label(),
                active: false,
            })
            .collect();

        Self {
            buttons,
            publish: PublishButton {
                label: ADD_GRAPH_LABEL,
                state: PublishState::Secondary,
            },
        }
    }
}

impl Default for ControlBar {
    fn default() -> Self {
        Self::new()
    }
}
