//! Graph file loader
//!
//! Builds a [`Graph`] from the line-based adjacency format:
//!
//! ```text
//! G
//! a,b,c
//! (a,b)
//! (b,c)
//! ```
//!
//! Line 1 is the directedness marker (see [`LoaderConfig`]), line 2 lists the
//! vertex ids, and each further non-blank line is one edge. Fields after the
//! second one on an edge line (such as a weight) are ignored.

mod config;

pub use config::LoaderConfig;

use crate::graph::{Graph, GraphError};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while loading a graph file
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid loader config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Graph file is empty")]
    Empty,

    #[error("Improper graph type: {0:?}")]
    InvalidGraphType(String),

    #[error("Graph file has no vertex line")]
    MissingVertexLine,

    #[error("Line {line}: malformed edge {text:?}")]
    MalformedEdge { line: usize, text: String },

    #[error("Line {line}: {source}")]
    UnknownVertex {
        line: usize,
        #[source]
        source: GraphError,
    },
}

pub type LoadResult<T> = Result<T, LoadError>;

/// Load a graph file using the default markers
pub fn load_graph(path: impl AsRef<Path>) -> LoadResult<Graph> {
    load_graph_with(path, &LoaderConfig::default())
}

/// Load a graph file
pub fn load_graph_with(path: impl AsRef<Path>, config: &LoaderConfig) -> LoadResult<Graph> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let graph = parse_graph(&text, config)?;
    info!(
        "Loaded graph from {:?}: {} vertices, {} edges",
        path,
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(graph)
}

/// Parse the text of a graph file
pub fn parse_graph(text: &str, config: &LoaderConfig) -> LoadResult<Graph> {
    let mut lines = text.lines().enumerate().map(|(i, line)| (i + 1, line));

    let (_, marker) = lines.next().ok_or(LoadError::Empty)?;
    let marker = marker.trim();
    let directed = config
        .directedness(marker)
        .ok_or_else(|| LoadError::InvalidGraphType(marker.to_string()))?;
    let mut graph = Graph::new(directed);

    let (_, vertex_line) = lines.next().ok_or(LoadError::MissingVertexLine)?;
    for id in vertex_line.split(',').map(str::trim).filter(|id| !id.is_empty()) {
        graph.add_vertex(id);
    }
    debug!("Declared {} vertices (directed: {})", graph.vertex_count(), directed);

    for (line, raw) in lines {
        let Some((from, to)) = parse_edge(raw) else {
            if raw.trim().is_empty() {
                continue;
            }
            return Err(LoadError::MalformedEdge {
                line,
                text: raw.to_string(),
            });
        };
        graph
            .add_edge(from, to)
            .map_err(|source| LoadError::UnknownVertex { line, source })?;
    }

    Ok(graph)
}

/// Split `(a,b)` (parentheses optional) into its two endpoint ids.
fn parse_edge(text: &str) -> Option<(&str, &str)> {
    let body = text.trim_matches(|c: char| c == '(' || c == ')' || c.is_whitespace());
    let mut fields = body.split(',').map(str::trim);
    let from = fields.next().filter(|id| !id.is_empty())?;
    let to = fields.next().filter(|id| !id.is_empty())?;
    Some((from, to))
}
