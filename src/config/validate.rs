use std::collections::HashSet;

use crate::error::{FetcherError, Result};

use super::FetcherConfig;

impl FetcherConfig {
    /// Catches what serde cannot: no graphs at all, or ids that would not
    /// give each panel its own container.
    pub fn validate(&self) -> Result<()> {
        if self.graphs.is_empty() {
            return Err(FetcherError::Config("no graphs configured".to_string()));
        }

        let mut seen = HashSet::new();
        for graph in &self.graphs {
            if graph.id.trim().is_empty() {
                return Err(FetcherError::Config("graph with empty id".to_string()));
            }
            if !seen.insert(graph.id.as_str()) {
                return Err(FetcherError::Config(format!("duplicate graph id '{}'", graph.id)));
            }
        }

        Ok(())
    }
}
