mod new;
mod select_button;

use super::TimeRange;

pub const ADD_GRAPH_LABEL: &str = "Add graph to dashboard";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeButton {
    pub range: TimeRange,
    pub label: &'static str,
    pub active: bool,
}

/// Visual state of the publish button, named after the CSS classes it used
/// to toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PublishState {
    #[default]
    Secondary,
    Success,
    Alert,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishButton {
    pub label: &'static str,
    pub state: PublishState,
}

/// Header row built once, at initialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlBar {
    pub buttons: Vec<RangeButton>,
    pub publish: PublishButton,
}

impl ControlBar {
    pub fn active_range(&self) -> Option<TimeRange> {
        self.buttons.iter().find(|b| b.active).map(|b| b.range)
    }
}
