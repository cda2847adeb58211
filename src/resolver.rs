//! Single-label Wikidata lookup.
//!
//! One label in, one `wbsearchentities` call out. The first candidate in
//! the response wins; an empty candidate list is a normal "no match", not
//! an error. Transport and protocol failures stay distinct so the pipeline
//! can report them per node.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Production endpoint of the Wikidata entity-search API.
pub const DEFAULT_ENDPOINT: &str = "https://www.wikidata.org/w/api.php";

/// Default per-request timeout applied to lookup sessions.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the lookup service.
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// API endpoint. Overridable so tests can point at a local server.
    pub endpoint: String,
    /// Result language requested from the API.
    pub language: String,
    /// Request timeout for each lookup session.
    pub timeout: Duration,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            language: "en".to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ResolverConfig {
    /// Override the API endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Override the result language (default `"en"`).
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Override the request timeout (default 30 s).
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Opaque external knowledge-base key (a QID like `"Q90"`).
///
/// Serializes as a plain string. The crate never validates the format.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    /// Wrap an identifier string
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Errors from a single lookup. Never produced for an empty candidate list.
#[derive(Debug, Error)]
pub enum LookupError {
    /// Network-level failure: connect, timeout, error status, body read
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// Response arrived but is not the expected JSON shape
    #[error("unexpected response shape: {0}")]
    Protocol(#[source] serde_json::Error),
}

/// `wbsearchentities` response body. Fields beyond `search` are ignored.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    search: Vec<SearchMatch>,
}

/// One candidate match. Only the identifier is consumed.
#[derive(Debug, Deserialize)]
struct SearchMatch {
    id: String,
}

/// Resolve one label to an entity identifier via the configured endpoint.
///
/// Issues a single entity-search request over the shared `session` and
/// returns the first candidate's id, or `None` if the service found no
/// match. The await on the response is the suspension point that lets
/// sibling lookups on the same session make progress.
pub async fn resolve_label(
    session: &reqwest::Client,
    config: &ResolverConfig,
    label: &str,
) -> Result<Option<EntityId>, LookupError> {
    let response = session
        .get(&config.endpoint)
        .query(&[
            ("action", "wbsearchentities"),
            ("format", "json"),
            ("language", config.language.as_str()),
            ("search", label),
        ])
        .send()
        .await?
        .error_for_status()?;

    let body = response.text().await?;
    let parsed: SearchResponse = serde_json::from_str(&body).map_err(LookupError::Protocol)?;

    match parsed.search.into_iter().next() {
        Some(candidate) => {
            debug!("resolved '{}' to {}", label, candidate.id);
            Ok(Some(EntityId(candidate.id)))
        }
        None => {
            debug!("no candidate for '{}'", label);
            Ok(None)
        }
    }
}
