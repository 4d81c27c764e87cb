use crate::util::url::UrlUtils;
use crate::{log_debug, log_info, log_warn};

use super::{GraphPanel, PanelMessage};

impl GraphPanel {
    /// "Add graph to dashboard".
    ///
    /// The displayed URL may go through a local redirecting proxy, so it is
    /// HEAD-probed first and the canonical address from the response header
    /// is what gets registered. No header means nothing to publish.
    pub fn publish_to_dashboard(&mut self) {
        if self.container.controls().is_none() {
            log_debug!("Panel '{}' has no controls yet, ignoring publish", self.container.id());
            return;
        }
        let Some(displayed) = self.displayed_url() else {
            log_warn!("Panel '{}' has nothing displayed to publish", self.container.id());
            return;
        };

        let probe_url = UrlUtils::remove_url_parameter(&displayed, "format");
        let head = self.context.client.head(&probe_url);
        let client = self.context.client.clone();
        let header = self.context.dashboard.canonical_url_header.clone();
        let endpoint = self.context.dashboard.add_graph_widget_url.clone();
        let target = self.context.page_target.clone();
        let tx = self.message_tx.clone();

        tokio::spawn(async move {
            let headers = match head.await {
                Ok(headers) => headers,
                Err(e) => {
                    log_warn!("HEAD {} failed, not publishing: {}", probe_url, e);
                    return;
                }
            };

            let Some(canonical) = headers.get(header.as_str()).and_then(|v| v.to_str().ok()) else {
                log_info!("No {} header for {}, not publishing", header, probe_url);
                return;
            };

            let form = vec![
                ("url".to_string(), UrlUtils::remove_url_parameter(canonical, "format")),
                ("target".to_string(), target),
            ];

            let message = match client.post_form(&endpoint, form).await {
                Ok(()) => {
                    log_info!("Published {} to dashboard", probe_url);
                    PanelMessage::PublishSucceeded
                }
                Err(e) => {
                    log_warn!("Dashboard POST for {} failed: {}", probe_url, e);
                    PanelMessage::PublishFailed(e.to_string())
                }
            };
            let _ = tx.send(message);
        });
    }
}
