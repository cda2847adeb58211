//! Graph-document data structures

mod document;
mod node;
mod relationship;


pub use document::{GraphDocument, Source};
pub use node::{Node, NodeId, Properties, PropertyValue};
pub use relationship::Relationship;
