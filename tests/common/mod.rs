//! Common test utilities for enrichment scenarios
//!
//! Provides document fixtures and helpers for standing up a mock
//! Wikidata entity-search endpoint.

use serde_json::json;
use wikilink::{GraphDocument, Node, Relationship, ResolverConfig, Source};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Path the mock endpoint is mounted on, mirroring the real API.
pub const API_PATH: &str = "/w/api.php";

/// Install a fmt subscriber so `RUST_LOG` controls test output.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Resolver configuration pointed at a mock server.
pub fn config_for(server: &MockServer) -> ResolverConfig {
    ResolverConfig::default().with_endpoint(format!("{}{}", server.uri(), API_PATH))
}

/// A city node with an empty property map, as extraction produces it.
pub fn city_node(label: &str) -> Node {
    Node::new(label, "city")
}

/// A document over the given labels, with one throwaway relationship so
/// the merge step demonstrably leaves relationships alone.
pub fn city_document(labels: &[&str]) -> GraphDocument {
    let mut doc = GraphDocument::new(Source::new("hello world"));
    for label in labels {
        doc = doc.with_node(city_node(label));
    }
    doc.with_relationship(Relationship::new(
        "Marseille",
        "Aix-en-Provence",
        "NEAR",
    ))
}

/// `wbsearchentities` response body with the given candidate ids.
pub fn search_body(ids: &[&str]) -> serde_json::Value {
    let candidates: Vec<_> = ids
        .iter()
        .map(|id| json!({ "id": id, "label": "candidate", "match": {} }))
        .collect();
    json!({ "searchinfo": { "search": "query" }, "search": candidates })
}

/// Mount a mock answering the given label with a single candidate.
pub async fn mount_match(server: &MockServer, label: &str, qid: &str) {
    Mock::given(method("GET"))
        .and(path(API_PATH))
        .and(query_param("action", "wbsearchentities"))
        .and(query_param("search", label))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_body(&[qid])))
        .mount(server)
        .await;
}

/// Same as [`mount_match`], but delays the response. Used to force
/// completion order to differ from launch order.
pub async fn mount_match_delayed(
    server: &MockServer,
    label: &str,
    qid: &str,
    delay: std::time::Duration,
) {
    Mock::given(method("GET"))
        .and(path(API_PATH))
        .and(query_param("action", "wbsearchentities"))
        .and(query_param("search", label))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(search_body(&[qid]))
                .set_delay(delay),
        )
        .mount(server)
        .await;
}

/// Mount a mock answering the given label with an empty candidate list.
pub async fn mount_no_match(server: &MockServer, label: &str) {
    Mock::given(method("GET"))
        .and(path(API_PATH))
        .and(query_param("search", label))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_body(&[])))
        .mount(server)
        .await;
}

/// Mount a mock failing the given label with a server error.
pub async fn mount_server_error(server: &MockServer, label: &str) {
    Mock::given(method("GET"))
        .and(path(API_PATH))
        .and(query_param("search", label))
        .respond_with(ResponseTemplate::new(503))
        .mount(server)
        .await;
}

/// Mount a catch-all returning an empty candidate list for any label.
pub async fn mount_fallback_no_match(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path(API_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_body(&[])))
        .mount(server)
        .await;
}
