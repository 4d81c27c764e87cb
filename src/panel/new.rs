use tokio::sync::mpsc;

use crate::error::{FetcherError, Result};
use crate::log_debug;

use super::{Container, GraphPanel, PanelContext, TimeRange, ToggleHandle};

impl GraphPanel {
    /// Bind a panel to `container` with `;`-separated candidate `sources`.
    ///
    /// With a `handler_id` the panel stays dormant until its handle is first
    /// clicked open. Without one it initializes, and therefore loads, right
    /// here.
    pub fn new(
        container: Container,
        sources: &str,
        handler_id: Option<&str>,
        context: PanelContext,
    ) -> Result<Self> {
        if !container.is_attached() {
            return Err(FetcherError::InvalidArgument(format!(
                "Need a valid container to attach to (got '{}')",
                container.id()
            )));
        }
        if sources.trim().is_empty() {
            return Err(FetcherError::InvalidArgument(format!(
                "Need a non-empty source list for '{}'",
                container.id()
            )));
        }

        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let toggle_handle = handler_id.map(ToggleHandle::new);
        let is_expanded = container.is_visible();

        let mut panel = Self {
            sources: sources.split(';').map(|s| s.trim().to_string()).collect(),
            container,
            active_source_index: 0,
            last_fetched_source_index: None,
            time_range: TimeRange::Day,
            last_fetched_time_range: None,
            is_expanded,
            is_initialized: false,
            pending_fetches: 0,
            toggle_handle,
            renderer: None,
            current_url: None,
            context,
            message_tx,
            message_rx,
        };

        log_debug!(
            "Panel '{}' created with {} source(s), toggle handle: {:?}",
            panel.container.id(),
            panel.sources.len(),
            handler_id
        );

        if panel.toggle_handle.is_none() {
            panel.init();
        }

        Ok(panel)
    }
}
