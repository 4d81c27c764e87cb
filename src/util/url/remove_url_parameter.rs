use super::UrlUtils;

impl UrlUtils {
    /// Drop every `parameter=` pair from the query string. Pairs may be
    /// separated by `&` or `;`; survivors are rejoined with `&`.
    pub fn remove_url_parameter(url: &str, parameter: &str) -> String {
        let Some((base, query)) = url.split_once('?') else {
            return url.to_string();
        };

        let prefix = format!("{}=", urlencoding::encode(parameter));
        let kept: Vec<&str> = query
            .split(['&', ';'])
            .filter(|pair| !pair.starts_with(&prefix))
            .collect();

        if kept.is_empty() {
            base.to_string()
        } else {
            format!("{}?{}", base, kept.join("&"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_format_and_keeps_the_rest() {
        assert_eq!(
            UrlUtils::remove_url_parameter("/render?target=a&format=png;from=-1d", "format"),
            "/render?target=a&from=-1d"
        );
    }

    #[test]
    fn test_only_parameter_drops_question_mark() {
        assert_eq!(UrlUtils::remove_url_parameter("/render?format=json", "format"), "/render");
    }

    #[test]
    fn test_url_without_query_is_unchanged() {
        assert_eq!(UrlUtils::remove_url_parameter("/render/a", "format"), "/render/a");
    }

    #[test]
    fn test_does_not_match_longer_names() {
        assert_eq!(
            UrlUtils::remove_url_parameter("/render?formats=1&format=png", "format"),
            "/render?formats=1"
        );
    }
}
