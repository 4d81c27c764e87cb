use std::{fs, path::Path};

use crate::error::Result;

use super::FetcherConfig;

impl FetcherConfig {
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: FetcherConfig = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DisplayKind;
    use crate::error::FetcherError;

    #[test]
    fn test_defaults_are_filled_in() {
        let config = FetcherConfig::from_yaml(
            r#"
graphs:
  - id: cpu
    urls: "/graphite/render?target=cpu"
"#,
        )
        .unwrap();

        assert_eq!(config.base_url, None);
        assert_eq!(config.dashboard.add_graph_widget_url, "/navlets/add-graph-widget/");
        assert_eq!(config.dashboard.canonical_url_header, "X-Where-Am-I");
        assert_eq!(config.graphs[0].display, DisplayKind::Image);
        assert_eq!(config.graphs[0].handler_id, None);
    }

    #[test]
    fn test_full_config_round_trips_fields() {
        let config = FetcherConfig::from_yaml(
            r#"
base_url: "http://nav.example"
page_target: "/ipdevinfo/sw1/#!graphs"
dashboard:
  add_graph_widget_url: "/dash/add/"
  canonical_url_header: "X-Canonical"
graphs:
  - id: octets
    title: "Octets"
    urls: "/a;/b"
    handler_id: octets-toggle
    display: series
"#,
        )
        .unwrap();

        let graph = &config.graphs[0];
        assert_eq!(config.page_target, "/ipdevinfo/sw1/#!graphs");
        assert_eq!(config.dashboard.canonical_url_header, "X-Canonical");
        assert_eq!(graph.title.as_deref(), Some("Octets"));
        assert_eq!(graph.handler_id.as_deref(), Some("octets-toggle"));
        assert_eq!(graph.display, DisplayKind::Series);
    }

    #[test]
    fn test_malformed_yaml_is_a_yaml_error() {
        let result = FetcherConfig::from_yaml("graphs: [unterminated");
        assert!(matches!(result, Err(FetcherError::Yaml(_))));
    }
}
