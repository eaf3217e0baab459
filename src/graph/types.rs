//! Core type definitions for the graph

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Caller-chosen identifier of a vertex (e.g., "A", "berlin")
///
/// Unique within a graph and the only handle used in the API and in results.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
pub struct VertexId(String);

impl VertexId {
    pub fn new(id: impl Into<String>) -> Self {
        VertexId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for VertexId {
    fn from(s: String) -> Self {
        VertexId(s)
    }
}

impl From<&str> for VertexId {
    fn from(s: &str) -> Self {
        VertexId(s.to_string())
    }
}

impl Borrow<str> for VertexId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for VertexId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for VertexId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for VertexId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_vertex_id() {
        let id = VertexId::new("A");
        assert_eq!(id.as_str(), "A");
        assert_eq!(format!("{}", id), "A");

        let id2: VertexId = "B".into();
        assert_eq!(id2, "B");
        assert!(id < id2);
    }

    #[test]
    fn test_lookup_by_str() {
        let mut map = HashMap::new();
        map.insert(VertexId::new("x"), 1);
        assert_eq!(map.get("x"), Some(&1));
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let json = serde_json::to_string(&vec![VertexId::new("a"), VertexId::new("b")]).unwrap();
        assert_eq!(json, r#"["a","b"]"#);
    }
}
