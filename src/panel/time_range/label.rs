use super::TimeRange;

impl TimeRange {
    pub fn label(&self) -> &'static str {
        match self {
            TimeRange::Day => "Day",
            TimeRange::Week => "Week",
            TimeRange::Month => "Month",
            TimeRange::Year => "Year",
        }
    }

    /// Key bound to the range button in the terminal host.
    pub fn hotkey(&self) -> char {
        match self {
            TimeRange::Day => 'd',
            TimeRange::Week => 'w',
            TimeRange::Month => 'm',
            TimeRange::Year => 'y',
        }
    }
}
