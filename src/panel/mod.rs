// src/panel/mod.rs

mod container;
mod controls;
mod time_range;

mod new;
mod init;
mod toggle_open;
mod toggle_close;
mod handle_toggle_click;
mod should_reload;
mod select_time_range;
mod select_source_index;
mod load;
mod get_url;
mod display_graph;
mod publish_to_dashboard;
mod process_messages;

use image::DynamicImage;
use std::sync::Arc;
use tokio::sync::mpsc;

use crate::config::DashboardConfig;
use crate::net::GraphClient;
use crate::renderer::{GraphRenderer, RendererFactory};

pub use container::{Container, DisplaySlot, ToggleHandle, ToggleIcon};
pub use controls::{ControlBar, PublishButton, PublishState, RangeButton, ADD_GRAPH_LABEL};
pub use time_range::TimeRange;

pub const LOAD_ERROR_TEXT: &str = "Error loading image";

/// Collaborators shared by every panel on a page.
#[derive(Debug, Clone)]
pub struct PanelContext {
    pub client: Arc<dyn GraphClient>,
    pub renderer_factory: Arc<dyn RendererFactory>,
    pub dashboard: DashboardConfig,
    /// Page path plus fragment, sent as the dashboard placement target.
    pub page_target: String,
}

/// Completions of work a panel spawned, applied on the UI loop.
#[derive(Debug)]
pub(crate) enum PanelMessage {
    ImageLoaded { url: String, image: DynamicImage },
    ImageFailed { url: String, error: String },
    PublishSucceeded,
    PublishFailed(String),
}

/// One lazily loaded graph with selectable time range and source.
///
/// Freshness is tracked by what was last *requested*, not what last arrived:
/// `last_fetched_*` are written before a fetch is issued.
#[derive(Debug)]
pub struct GraphPanel {
    container: Container,
    sources: Vec<String>,
    active_source_index: usize,
    last_fetched_source_index: Option<usize>,
    time_range: TimeRange,
    last_fetched_time_range: Option<TimeRange>,
    is_expanded: bool,
    is_initialized: bool,
    /// Image fetches spawned but not yet drained.
    pending_fetches: usize,
    toggle_handle: Option<ToggleHandle>,
    renderer: Option<Box<dyn GraphRenderer>>,
    current_url: Option<String>,
    context: PanelContext,
    message_tx: mpsc::UnboundedSender<PanelMessage>,
    message_rx: mpsc::UnboundedReceiver<PanelMessage>,
}

impl GraphPanel {
    pub fn container(&self) -> &Container {
        &self.container
    }

    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    pub fn active_source_index(&self) -> usize {
        self.active_source_index
    }

    pub fn last_fetched_source_index(&self) -> Option<usize> {
        self.last_fetched_source_index
    }

    pub fn time_range(&self) -> TimeRange {
        self.time_range
    }

    pub fn last_fetched_time_range(&self) -> Option<TimeRange> {
        self.last_fetched_time_range
    }

    pub fn is_expanded(&self) -> bool {
        self.is_expanded
    }

    pub fn is_initialized(&self) -> bool {
        self.is_initialized
    }

    /// True while a plain image fetch or the renderer's request is pending.
    pub fn is_loading(&self) -> bool {
        self.pending_fetches > 0 || self.renderer.as_ref().is_some_and(|r| r.is_loading())
    }

    pub fn toggle_handle(&self) -> Option<&ToggleHandle> {
        self.toggle_handle.as_ref()
    }

    pub fn renderer(&self) -> Option<&dyn GraphRenderer> {
        self.renderer.as_deref()
    }

    /// URL of the most recent Load.
    pub fn current_url(&self) -> Option<&str> {
        self.current_url.as_deref()
    }

    /// What is on screen: the renderer's data URL when there is one,
    /// otherwise the last URL handed to the image path.
    pub fn displayed_url(&self) -> Option<String> {
        self.renderer
            .as_ref()
            .map(|r| r.data_url().to_string())
            .or_else(|| self.current_url.clone())
    }
}
