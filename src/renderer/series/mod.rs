mod new;
mod parse_series;
mod request;
mod process_messages;
mod render;

use std::sync::Arc;
use serde::Deserialize;
use tokio::sync::mpsc;

use crate::net::GraphClient;
use crate::panel::Container;

use super::{GraphRenderer, RendererFactory};

/// One Graphite target: `{"target": "...", "datapoints": [[value, epoch], ...]}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Series {
    pub target: String,
    pub datapoints: Vec<(Option<f64>, i64)>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SeriesStatus {
    Loading,
    Ready(Vec<Series>),
    Failed(String),
}

#[derive(Debug)]
enum SeriesMessage {
    Loaded { url: String, series: Vec<Series> },
    Failed { url: String, error: String },
}

/// Draws Graphite JSON as a terminal line chart.
#[derive(Debug)]
pub struct SeriesRenderer {
    data_url: String,
    status: SeriesStatus,
    pending_requests: usize,
    client: Arc<dyn GraphClient>,
    message_tx: mpsc::UnboundedSender<SeriesMessage>,
    message_rx: mpsc::UnboundedReceiver<SeriesMessage>,
}

impl SeriesRenderer {
    pub fn status(&self) -> &SeriesStatus {
        &self.status
    }
}

impl GraphRenderer for SeriesRenderer {
    fn data_url(&self) -> &str {
        &self.data_url
    }

    fn set_data_url(&mut self, url: &str) {
        self.data_url = url.to_string();
    }

    fn request(&mut self) {
        self._request();
    }

    fn process_messages(&mut self) -> bool {
        self._process_messages()
    }

    fn is_loading(&self) -> bool {
        self.pending_requests > 0
    }

    fn render(&self, area: ratatui::layout::Rect, buf: &mut ratatui::buffer::Buffer) {
        self._render(area, buf);
    }
}

#[derive(Debug)]
pub struct SeriesRendererFactory {
    client: Arc<dyn GraphClient>,
}

impl SeriesRendererFactory {
    pub fn new(client: Arc<dyn GraphClient>) -> Self {
        Self { client }
    }
}

impl RendererFactory for SeriesRendererFactory {
    fn create(&self, _container: &Container, url: &str) -> Box<dyn GraphRenderer> {
        Box::new(SeriesRenderer::new(self.client.clone(), url))
    }
}
