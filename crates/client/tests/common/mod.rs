//! Common test utilities for integration tests.
//!
//! Re-exports the fixture loader, the endpoint module and wiremock types so
//! test files can `use common::*;`.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)

#[allow(unused_imports)]
pub use scs_client::testing::load_fixture;

#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use scs_client::endpoints;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Query string of the single request the mock server received.
#[allow(dead_code)]
pub async fn only_request_query(server: &MockServer) -> Option<String> {
    let requests = server
        .received_requests()
        .await
        .expect("request recording enabled");
    assert_eq!(requests.len(), 1, "expected exactly one request");
    requests[0].url.query().map(str::to_string)
}

/// A catalog client pointed at the mock server.
#[allow(dead_code)]
pub fn catalog_client(server: &MockServer) -> scs_client::CatalogClient {
    scs_client::CatalogClient::builder()
        .base_url(server.uri())
        .build()
        .expect("mock server uri is a valid base url")
}
