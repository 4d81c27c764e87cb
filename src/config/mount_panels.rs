use crate::error::{FetcherError, Result};
use crate::log_info;
use crate::panel::{Container, GraphPanel, PanelContext};

use super::{DisplayKind, FetcherConfig};

/// Build one container and panel per configured graph, in config order.
///
/// Graphs with a toggle handle get a hidden container and stay dormant;
/// the rest load immediately, so this must run inside a tokio runtime.
pub fn mount_panels(config: &FetcherConfig, context: &PanelContext) -> Result<Vec<GraphPanel>> {
    config
        .graphs
        .iter()
        .map(|graph| -> Result<GraphPanel> {
            let title = graph.title.clone().unwrap_or_else(|| graph.id.clone());
            let mut container = Container::new(&graph.id, title, graph.display == DisplayKind::Series);
            if graph.handler_id.is_some() {
                container = container.hidden();
            }

            let panel = GraphPanel::new(container, &graph.urls, graph.handler_id.as_deref(), context.clone())
                .map_err(|e| FetcherError::Config(format!("graph '{}': {}", graph.id, e)))?;

            log_info!("Mounted graph '{}'", graph.id);
            Ok(panel)
        })
        .collect()
}
