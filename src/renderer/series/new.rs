use std::sync::Arc;
use tokio::sync::mpsc;

use crate::net::GraphClient;

use super::{SeriesRenderer, SeriesStatus};

impl SeriesRenderer {
    /// Creating the renderer is what triggers its first fetch.
    pub fn new(client: Arc<dyn GraphClient>, url: &str) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();

        let mut renderer = Self {
            data_url: url.to_string(),
            status: SeriesStatus::Loading,
            pending_requests: 0,
            client,
            message_tx,
            message_rx,
        };

        renderer._request();

        renderer
    }
}
