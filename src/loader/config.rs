//! Loader configuration

use super::LoadResult;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// How a graph file announces whether it is directed.
///
/// The default keeps the established file convention: `G` marks an undirected
/// graph and `D` a directed one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// First-line marker of an undirected graph
    pub undirected_marker: String,
    /// First-line marker of a directed graph
    pub directed_marker: String,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            undirected_marker: "G".to_string(),
            directed_marker: "D".to_string(),
        }
    }
}

impl LoaderConfig {
    /// Read a config from a JSON file; missing fields keep their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> LoadResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Directedness announced by `marker`, or `None` if it matches neither marker
    pub fn directedness(&self, marker: &str) -> Option<bool> {
        if marker == self.directed_marker {
            Some(true)
        } else if marker == self.undirected_marker {
            Some(false)
        } else {
            None
        }
    }
}
