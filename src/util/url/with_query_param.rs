use super::UrlUtils;

impl UrlUtils {
    /// Append `key=value`, using `?` when the URL has no query yet and `&`
    /// otherwise.
    pub fn with_query_param(url: &str, key: &str, value: &str) -> String {
        let separator = if !url.contains('?') {
            "?"
        } else if url.ends_with('?') || url.ends_with('&') {
            ""
        } else {
            "&"
        };

        format!("{}{}{}={}", url, separator, key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separator_follows_existing_query() {
        assert_eq!(UrlUtils::with_query_param("/render", "timeframe", "week"), "/render?timeframe=week");
        assert_eq!(UrlUtils::with_query_param("/render?x=1", "timeframe", "day"), "/render?x=1&timeframe=day");
        assert_eq!(UrlUtils::with_query_param("/render?", "format", "json"), "/render?format=json");
    }
}
