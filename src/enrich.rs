//! Enrichment pipeline: per-document fan-out, ordered fan-in, merge.
//!
//! For each document the pipeline opens one pooled HTTP session, launches
//! one lookup per node over it, waits for all of them, and writes the
//! results back by position. Documents are processed one at a time;
//! concurrency lives inside a document, never across documents.
//!
//! Failure policy: per-node isolation. A failed lookup marks its own node
//! and nothing else. Partial success is the normal case, and the report
//! carries the counts.

use crate::graph::{GraphDocument, Node, PropertyValue};
use crate::resolver::{resolve_label, EntityId, ResolverConfig};
use futures::future::join_all;
use thiserror::Error;
use tracing::{info, warn};

/// Reserved property key holding the resolved identifier.
///
/// Always present after enrichment: a QID string, or null when the lookup
/// found no match or failed. The double-underscore prefix keeps it out of
/// the domain-property namespace; enrichment overwrites it unconditionally.
pub const QID_PROPERTY: &str = "__qid__";

/// Reserved property key holding a lookup failure description.
///
/// Present only on nodes whose lookup failed, never on a mere "no match".
pub const QID_ERROR_PROPERTY: &str = "__qid_error__";

/// Outcome of resolving one node's label.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// The service returned at least one candidate; this is the first one
    Resolved(EntityId),
    /// The service answered with an empty candidate list
    NoMatch,
    /// The lookup itself failed (transport or protocol error)
    Failed(String),
}

/// Errors from the pipeline itself, as opposed to individual lookups.
#[derive(Debug, Error)]
pub enum EnrichError {
    /// The per-document lookup session could not be constructed
    #[error("failed to open lookup session: {0}")]
    Session(#[from] reqwest::Error),
}

/// Counts for one `enrich` run.
///
/// Individual lookup failures never abort the batch, so the report is how
/// callers observe them without walking every property map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnrichReport {
    /// Documents processed
    pub documents: usize,
    /// Nodes seen across all documents
    pub nodes: usize,
    /// Nodes that received an identifier
    pub resolved: usize,
    /// Nodes the service had no candidate for
    pub unmatched: usize,
    /// Nodes whose lookup failed
    pub failed: usize,
}

impl EnrichReport {
    fn record(&mut self, resolution: &Resolution) {
        self.nodes += 1;
        match resolution {
            Resolution::Resolved(_) => self.resolved += 1,
            Resolution::NoMatch => self.unmatched += 1,
            Resolution::Failed(_) => self.failed += 1,
        }
    }

    /// True if every node got an identifier
    pub fn is_fully_resolved(&self) -> bool {
        self.resolved == self.nodes
    }

    /// True if no lookup failed (no-match nodes are fine)
    pub fn has_no_failures(&self) -> bool {
        self.failed == 0
    }
}

/// The enrichment pipeline.
///
/// Holds only configuration; each document gets a fresh session, so one
/// `Enricher` can serve any number of batches.
#[derive(Debug, Clone)]
pub struct Enricher {
    config: ResolverConfig,
}

impl Enricher {
    /// Create an enricher against the production Wikidata endpoint.
    pub fn new() -> Self {
        Self::with_config(ResolverConfig::default())
    }

    /// Create an enricher with explicit lookup configuration.
    pub fn with_config(config: ResolverConfig) -> Self {
        Self { config }
    }

    /// Access the lookup configuration.
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Build the pooled session for one document's lookups.
    fn open_session(&self) -> Result<reqwest::Client, EnrichError> {
        let session = reqwest::Client::builder()
            .timeout(self.config.timeout)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()?;
        Ok(session)
    }

    /// Resolve every node label in one document concurrently.
    ///
    /// Opens one session scoped to this call, launches one lookup per node
    /// sharing it, and joins all of them. The returned resolutions are in
    /// node order: `join_all` yields results in launch order regardless of
    /// completion order, which is what keeps result *i* bound to node *i*.
    /// The session is dropped on every exit path.
    pub async fn resolve_document(
        &self,
        document: &GraphDocument,
    ) -> Result<Vec<Resolution>, EnrichError> {
        let session = self.open_session()?;

        let lookups = document.nodes.iter().map(|node| {
            let session = &session;
            async move {
                match resolve_label(session, &self.config, node.label()).await {
                    Ok(Some(id)) => Resolution::Resolved(id),
                    Ok(None) => Resolution::NoMatch,
                    Err(err) => {
                        warn!("lookup for '{}' failed: {}", node.label(), err);
                        Resolution::Failed(err.to_string())
                    }
                }
            }
        });

        Ok(join_all(lookups).await)
    }

    /// Enrich a batch of documents in place.
    ///
    /// Documents are processed sequentially; within each one, lookups run
    /// concurrently via [`resolve_document`](Self::resolve_document). After
    /// the fan-in, resolution *i* is merged into node *i*'s property map.
    /// Every node ends up with [`QID_PROPERTY`] present.
    pub async fn enrich(
        &self,
        documents: &mut [GraphDocument],
    ) -> Result<EnrichReport, EnrichError> {
        let mut report = EnrichReport::default();

        for document in documents.iter_mut() {
            let resolutions = self.resolve_document(document).await?;
            debug_assert_eq!(resolutions.len(), document.nodes.len());

            for (node, resolution) in document.nodes.iter_mut().zip(resolutions) {
                report.record(&resolution);
                apply_resolution(node, resolution);
            }
            report.documents += 1;
        }

        info!(
            "enriched {} documents: {} nodes, {} resolved, {} unmatched, {} failed",
            report.documents, report.nodes, report.resolved, report.unmatched, report.failed
        );
        Ok(report)
    }
}

impl Default for Enricher {
    fn default() -> Self {
        Self::new()
    }
}

/// Write one resolution into its node's property map.
///
/// [`QID_PROPERTY`] is always written. [`QID_ERROR_PROPERTY`] is written on
/// failure and cleared otherwise, so re-enriching a document never leaves a
/// stale error next to a fresh result.
fn apply_resolution(node: &mut Node, resolution: Resolution) {
    match resolution {
        Resolution::Resolved(id) => {
            node.properties
                .insert(QID_PROPERTY.to_string(), PropertyValue::String(id.to_string()));
            node.properties.remove(QID_ERROR_PROPERTY);
        }
        Resolution::NoMatch => {
            node.properties
                .insert(QID_PROPERTY.to_string(), PropertyValue::Null);
            node.properties.remove(QID_ERROR_PROPERTY);
        }
        Resolution::Failed(message) => {
            node.properties
                .insert(QID_PROPERTY.to_string(), PropertyValue::Null);
            node.properties
                .insert(QID_ERROR_PROPERTY.to_string(), PropertyValue::String(message));
        }
    }
}
