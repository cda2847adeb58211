//! Node representation in a graph document

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Identifier of a node within one graph document.
///
/// The id carries the node's human-readable label verbatim (e.g. a city
/// name); it doubles as the search query during entity linking.
/// Serializes as a plain string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Create a NodeId from a label string
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Typed property values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Null,
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Array(Vec<PropertyValue>),
    Object(HashMap<String, PropertyValue>),
}

impl PropertyValue {
    /// The string payload, if this value is a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// True if this value is the null marker
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

/// Properties collection
pub type Properties = HashMap<String, PropertyValue>;

/// A node in a graph document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Identifier within the document; also the node's label
    pub id: NodeId,
    /// Entity type (e.g. "city", "person")
    pub node_type: String,
    /// Domain-specific properties
    #[serde(default)]
    pub properties: Properties,
}

impl Node {
    /// Create a new node with the given label and type
    pub fn new(id: impl Into<NodeId>, node_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            node_type: node_type.into(),
            properties: HashMap::new(),
        }
    }

    /// Add a property to the node
    pub fn with_property(mut self, key: impl Into<String>, value: PropertyValue) -> Self {
        self.properties.insert(key.into(), value);
        self
    }

    /// The label used as the lookup query: the id string, verbatim
    pub fn label(&self) -> &str {
        self.id.as_str()
    }
}
