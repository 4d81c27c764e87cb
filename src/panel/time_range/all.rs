use super::TimeRange;

impl TimeRange {
    /// Button order in the control bar.
    pub fn all() -> [TimeRange; 4] {
        [TimeRange::Day, TimeRange::Week, TimeRange::Month, TimeRange::Year]
    }
}
