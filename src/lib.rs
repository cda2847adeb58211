//! Wikilink: Wikidata entity linking for knowledge-graph documents
//!
//! Enriches in-memory graph documents by resolving each node's label
//! against the Wikidata entity-search API and writing the resulting QID
//! back onto the node as a reserved property.
//!
//! # Core Concepts
//!
//! - **Graph documents**: ordered nodes + relationships extracted from one
//!   source text; the node order is the merge order
//! - **Resolver**: one label, one lookup, first candidate wins
//! - **Enricher**: per-document concurrent fan-out over a scoped session,
//!   strict ordered fan-in, positional merge
//!
//! # Example
//!
//! ```no_run
//! use wikilink::{Enricher, GraphDocument, Node, Source};
//!
//! # async fn run() -> Result<(), wikilink::EnrichError> {
//! let doc = GraphDocument::new(Source::new("Paris is the capital of France."))
//!     .with_node(Node::new("Paris", "city"))
//!     .with_node(Node::new("France", "country"));
//!
//! let mut batch = vec![doc];
//! let report = Enricher::new().enrich(&mut batch).await?;
//! assert_eq!(report.documents, 1);
//! # Ok(())
//! # }
//! ```

mod graph;

pub mod enrich;
pub mod resolver;

pub use enrich::{
    EnrichError, EnrichReport, Enricher, Resolution, QID_ERROR_PROPERTY, QID_PROPERTY,
};
pub use graph::{GraphDocument, Node, NodeId, Properties, PropertyValue, Relationship, Source};
pub use resolver::{resolve_label, EntityId, LookupError, ResolverConfig, DEFAULT_ENDPOINT};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
