//! Finish options endpoint tests.

mod common;

use common::*;
use wiremock::matchers::{method, path};

#[tokio::test]
async fn test_get_finish_options() {
    let mock_server = MockServer::start().await;
    let fixture = load_fixture("finishes/list_finish_options.json");

    Mock::given(method("GET"))
        .and(path("/finish_options"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let finishes = endpoints::get_finish_options(&client, &mock_server.uri())
        .await
        .unwrap();

    assert_eq!(finishes.len(), 2);
    assert_eq!(finishes[0].finish_type, "anodizing");
    assert_eq!(finishes[0].swatch.dark, None);
    assert_eq!(finishes[1].swatch.dark, Some(true));
    assert_eq!(only_request_query(&mock_server).await, None);
}

#[tokio::test]
async fn test_catalog_client_finish_options() {
    let mock_server = MockServer::start().await;
    let fixture = load_fixture("finishes/list_finish_options.json");

    Mock::given(method("GET"))
        .and(path("/finish_options"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .mount(&mock_server)
        .await;

    let finishes = catalog_client(&mock_server).finish_options().await.unwrap();
    let types = scs_client::finish_types(&finishes);
    assert_eq!(types, vec!["anodizing", "powder_coating"]);
}
