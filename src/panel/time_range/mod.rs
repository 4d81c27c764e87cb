mod all;
mod as_str;
mod label;

use serde::{Deserialize, Serialize};

/// Window applied to every graph request as `timeframe=<range>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeRange {
    #[default]
    Day,
    Week,
    Month,
    Year,
}

impl std::fmt::Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_ranges_have_distinct_query_values_and_labels() {
        let ranges = TimeRange::all();
        assert_eq!(ranges.len(), 4);

        let values: Vec<&str> = ranges.iter().map(|r| r.as_str()).collect();
        assert_eq!(values, vec!["day", "week", "month", "year"]);

        let labels: Vec<&str> = ranges.iter().map(|r| r.label()).collect();
        assert_eq!(labels, vec!["Day", "Week", "Month", "Year"]);
    }

    #[test]
    fn test_serde_uses_query_values() {
        let parsed: TimeRange = serde_yaml::from_str("month").unwrap();
        assert_eq!(parsed, TimeRange::Month);
        assert_eq!(TimeRange::default(), TimeRange::Day);
    }
}
