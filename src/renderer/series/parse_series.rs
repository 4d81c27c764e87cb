use crate::error::Result;

use super::Series;

/// Parse a Graphite `format=json` body.
pub fn parse_series(body: &[u8]) -> Result<Vec<Series>> {
    Ok(serde_json::from_slice(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_graphite_json_with_nulls() {
        let body = br#"[
            {"target": "sw1.cpu", "datapoints": [[1.5, 1700000000], [null, 1700000060], [2.0, 1700000120]]},
            {"target": "sw1.mem", "datapoints": []}
        ]"#;

        let series = parse_series(body).unwrap();

        assert_eq!(series.len(), 2);
        assert_eq!(series[0].target, "sw1.cpu");
        assert_eq!(series[0].datapoints[1], (None, 1700000060));
        assert!(series[1].datapoints.is_empty());
    }

    #[test]
    fn test_rejects_non_series_payload() {
        assert!(parse_series(b"<html>proxy error</html>").is_err());
    }
}
