use super::UrlUtils;

impl UrlUtils {
    /// Percent-encode every `/`-delimited path segment on its own, so a graph
    /// target like `sw1/Gi0/1` inside a segment cannot be mistaken for path
    /// structure. The `scheme://authority` prefix and the query string are
    /// left untouched.
    pub fn escape_url(url: &str) -> String {
        let (head, query) = match url.find('?') {
            Some(idx) => url.split_at(idx),
            None => (url, ""),
        };

        let (prefix, path) = match head.find("://").filter(|&end| is_scheme(&head[..end])) {
            Some(scheme_end) => {
                let authority_start = scheme_end + 3;
                match head[authority_start..].find('/') {
                    Some(path_start) => head.split_at(authority_start + path_start),
                    None => (head, ""),
                }
            }
            None => ("", head),
        };

        let escaped = path
            .split('/')
            .map(|segment| urlencoding::encode(segment).into_owned())
            .collect::<Vec<_>>()
            .join("/");

        format!("{}{}{}", prefix, escaped, query)
    }
}

/// RFC 3986: `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`.
fn is_scheme(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escapes_spaces_inside_segments() {
        assert_eq!(UrlUtils::escape_url("http://g/render/a b"), "http://g/render/a%20b");
    }

    #[test]
    fn test_keeps_structural_slashes_and_query() {
        assert_eq!(
            UrlUtils::escape_url("/graphite/render/cpu:load?target=a.b"),
            "/graphite/render/cpu%3Aload?target=a.b"
        );
    }

    #[test]
    fn test_authority_only_url_is_unchanged() {
        assert_eq!(UrlUtils::escape_url("http://graphite:8080"), "http://graphite:8080");
        assert_eq!(UrlUtils::escape_url("http://g/render?x=1"), "http://g/render?x=1");
    }

    #[test]
    fn test_percent_sign_is_escaped() {
        assert_eq!(UrlUtils::escape_url("/render/50%"), "/render/50%25");
    }

    #[test]
    fn test_colon_slashes_inside_relative_path_are_escaped() {
        assert_eq!(UrlUtils::escape_url("/render/a b://x"), "/render/a%20b%3A//x");
        assert_eq!(
            UrlUtils::escape_url("render/http://g/x?y=1"),
            "render/http%3A//g/x?y=1"
        );
    }

    #[test]
    fn test_scheme_with_plus_keeps_authority() {
        assert_eq!(UrlUtils::escape_url("svn+ssh://host/a b"), "svn+ssh://host/a%20b");
    }
}
