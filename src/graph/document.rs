//! GraphDocument: one unit of extracted knowledge

use super::node::Node;
use super::relationship::Relationship;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The source text a graph document was extracted from
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Source {
    /// Raw content of the source
    pub content: String,
    /// Source metadata (origin path, chunk index, etc.)
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, String>,
}

impl Source {
    /// Create a source from raw content
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            metadata: HashMap::new(),
        }
    }
}

/// A bundle of nodes, relationships, and source metadata representing
/// one unit of extracted knowledge.
///
/// Node order is significant: enrichment results are merged back by
/// position, so the `nodes` sequence is the document's canonical order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument {
    /// Nodes in extraction order
    pub nodes: Vec<Node>,
    /// Relationships between nodes
    pub relationships: Vec<Relationship>,
    /// The text this graph was extracted from
    pub source: Source,
}

impl GraphDocument {
    /// Create a document over the given source with no nodes yet
    pub fn new(source: Source) -> Self {
        Self {
            nodes: Vec::new(),
            relationships: Vec::new(),
            source,
        }
    }

    /// Append a node, preserving insertion order
    pub fn with_node(mut self, node: Node) -> Self {
        self.nodes.push(node);
        self
    }

    /// Append a relationship
    pub fn with_relationship(mut self, relationship: Relationship) -> Self {
        self.relationships.push(relationship);
        self
    }

    /// Number of nodes in the document
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}
