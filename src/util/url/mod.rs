mod escape_url;
mod remove_url_parameter;
mod with_query_param;

/// Helpers for the graph URLs handed around by panels. Relative URLs such as
/// `/graphite/render?target=x` are common, so nothing here parses into
/// `reqwest::Url`; the client resolves them against its base URL later.
pub struct UrlUtils {}
