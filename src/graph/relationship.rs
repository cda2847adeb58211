//! Relationship between two nodes in a graph document

use super::node::{NodeId, Properties};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A directed relationship between two nodes.
///
/// Enrichment never touches relationships; they ride along with the
/// document so a caller gets back the same graph it passed in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relationship {
    /// Id of the source node
    pub source: NodeId,
    /// Id of the target node
    pub target: NodeId,
    /// Relationship type (e.g. "LOCATED_IN")
    pub rel_type: String,
    /// Domain-specific properties
    #[serde(default)]
    pub properties: Properties,
}

impl Relationship {
    /// Create a new relationship of the given type
    pub fn new(
        source: impl Into<NodeId>,
        target: impl Into<NodeId>,
        rel_type: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            rel_type: rel_type.into(),
            properties: HashMap::new(),
        }
    }
}
