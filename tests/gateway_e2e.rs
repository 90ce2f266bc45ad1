//! End-to-end: HTTP client -> gateway -> fake external API.

mod common;

use common::harness::{MockApiConfig, SearchBehavior, spawn_gateway, spawn_mock_api};
use common::http_client::TestClient;
use serde_json::json;
use std::collections::HashMap;

#[tokio::test]
async fn test_health_endpoint() {
    let api = spawn_mock_api(MockApiConfig::default()).await.unwrap();
    let gateway = spawn_gateway(&api).await.unwrap();
    let client = TestClient::new(gateway.url());

    let resp = client.get("/api/health").await.unwrap();
    assert_eq!(resp.status, 200);
    assert_eq!(resp.body["status"], "healthy");
}

#[tokio::test]
async fn test_search_round_trip() {
    let api = spawn_mock_api(MockApiConfig {
        search: SearchBehavior::Results(vec![
            json!({"cableID": 5, "cableDescription": "Unitube 12F", "fiberCount": "12F", "typeofCable": "UT"}),
            json!({"cableID": 6, "cableDescription": "Multitube 24F", "fiberCount": "24F", "typeofCable": "MT"}),
        ]),
        ..Default::default()
    })
    .await
    .unwrap();
    let gateway = spawn_gateway(&api).await.unwrap();
    let client = TestClient::new(gateway.url());

    let resp = client
        .post("/api/search?ranked=true", &json!({"typeofCable": "MT"}))
        .await
        .unwrap();

    assert_eq!(resp.status, 200);
    assert_eq!(resp.fibersheet_status, "MATCHED");
    assert_eq!(resp.body["results"][0]["record"]["cableId"], 6);
    assert_eq!(resp.body["results"][0]["accuracy"]["overallScore"], 100);
    assert_eq!(resp.body["results"][1]["accuracy"]["overallScore"], 0);

    assert_eq!(api.searches()[0]["typeofCable"], "MT");
}

#[tokio::test]
async fn test_search_failure_is_reported() {
    let api = spawn_mock_api(MockApiConfig {
        search: SearchBehavior::Status(503),
        ..Default::default()
    })
    .await
    .unwrap();
    let gateway = spawn_gateway(&api).await.unwrap();
    let client = TestClient::new(gateway.url());

    let resp = client
        .post("/api/search", &json!({"fiberCount": "24F"}))
        .await
        .unwrap();

    assert_eq!(resp.status, 502);
    assert_eq!(resp.fibersheet_status, "SEARCH_FAILED");
    assert_eq!(resp.body["message"], "Search failed. Please try again.");
}

#[tokio::test]
async fn test_options_are_cached_between_requests() {
    let mut parameters = HashMap::new();
    parameters.insert("fiberCount".to_string(), vec![json!("12F"), json!("24F")]);
    let api = spawn_mock_api(MockApiConfig {
        parameters,
        ..Default::default()
    })
    .await
    .unwrap();
    let gateway = spawn_gateway(&api).await.unwrap();
    let client = TestClient::new(gateway.url());

    let first = client.get("/api/options?field=fiberCount").await.unwrap();
    let second = client
        .get("/api/options?field=fiberCount&filter=24")
        .await
        .unwrap();

    assert_eq!(first.body["options"]["fiberCount"]["allValues"], json!(["12F", "24F"]));
    assert_eq!(first.body["liveFields"], 1);
    assert_eq!(second.body["matches"], json!(["24F"]));
    assert_eq!(api.lookups(), vec!["fiberCount"]);
}

#[tokio::test]
async fn test_publish_batch() {
    let api = spawn_mock_api(MockApiConfig::default()).await.unwrap();
    let gateway = spawn_gateway(&api).await.unwrap();
    let client = TestClient::new(gateway.url());

    let resp = client
        .post(
            "/api/datasheets",
            &json!({
                "records": [
                    {"cableDescription": "ADSS 24F", "fiberCount": "24F"},
                    {"cableDescription": "ADSS 48F", "fiberCount": "48F"}
                ]
            }),
        )
        .await
        .unwrap();

    assert_eq!(resp.status, 200);
    assert_eq!(resp.fibersheet_status, "PUBLISHED");
    assert_eq!(resp.body["success"], true);
    assert_eq!(resp.body["succeeded"], 2);
    assert_eq!(resp.body["summaries"][1]["properties"][0]["value"], "48F");
    assert_eq!(resp.body["summaries"][0]["sourceFile"], "Unknown");
    assert_eq!(api.configured().len(), 2);
}
