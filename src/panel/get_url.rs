use crate::util::url::UrlUtils;

use super::GraphPanel;

impl GraphPanel {
    /// Active source with escaped path segments and the `timeframe` parameter.
    pub fn get_url(&self) -> String {
        let source = &self.sources[self.active_source_index];
        UrlUtils::with_query_param(
            &UrlUtils::escape_url(source),
            "timeframe",
            self.time_range.as_str(),
        )
    }
}
