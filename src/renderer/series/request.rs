use crate::{log_debug, log_warn};
use crate::util::url::UrlUtils;

use super::{parse_series::parse_series, SeriesMessage, SeriesRenderer, SeriesStatus};

impl SeriesRenderer {
    pub(super) fn _request(&mut self) {
        self.status = SeriesStatus::Loading;
        self.pending_requests += 1;

        let url = self.data_url.clone();
        let fetch = self
            .client
            .get_bytes(&UrlUtils::with_query_param(&url, "format", "json"));
        let tx = self.message_tx.clone();

        log_debug!("Requesting series from {}", url);

        tokio::spawn(async move {
            let message = match fetch.await.and_then(|body| parse_series(&body)) {
                Ok(series) => SeriesMessage::Loaded { url, series },
                Err(e) => {
                    log_warn!("Series request for {} failed: {}", url, e);
                    SeriesMessage::Failed { url, error: e.to_string() }
                }
            };
            let _ = tx.send(message);
        });
    }
}
