mod load_from_path;
mod validate;
mod mount_panels;

use serde::{Deserialize, Serialize};

pub use mount_panels::mount_panels;

pub const DEFAULT_CONFIG_PATH: &str = "graphfetcher.yml";

fn default_add_graph_widget_url() -> String {
    "/navlets/add-graph-widget/".to_string()
}

fn default_canonical_url_header() -> String {
    "X-Where-Am-I".to_string()
}

/// Where "Add graph to dashboard" posts, and which HEAD response header
/// carries the canonical graph URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_add_graph_widget_url")]
    pub add_graph_widget_url: String,
    #[serde(default = "default_canonical_url_header")]
    pub canonical_url_header: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            add_graph_widget_url: default_add_graph_widget_url(),
            canonical_url_header: default_canonical_url_header(),
        }
    }
}

/// How a graph's container shows its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayKind {
    /// Plain image fetched from the source URL.
    #[default]
    Image,
    /// Graphite JSON drawn by the series renderer.
    Series,
}

/// One graph placeholder on the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphConfig {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    /// `;`-separated candidate source URLs.
    pub urls: String,
    /// Id of the toggle handle; when set the panel starts collapsed and
    /// loads on first open.
    #[serde(default)]
    pub handler_id: Option<String>,
    #[serde(default)]
    pub display: DisplayKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FetcherConfig {
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub page_target: String,
    #[serde(default)]
    pub dashboard: DashboardConfig,
    pub graphs: Vec<GraphConfig>,
}
