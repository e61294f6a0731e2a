//! API Integration Tests for the item browser
//!
//! Runs the full router on an ephemeral port and exercises it over HTTP.

use itembrowser::config::ServerConfig;
use itembrowser::server::{AppState, create_router};
use itembrowser::{ItemStore, RawItem, default_items};
use serde_json::Value;
use tokio::net::TcpListener;

// =============================================================================
// Test Helpers
// =============================================================================

fn scenario_items() -> Vec<RawItem> {
    vec![
        RawItem::new(1, "red", "circle", "A"),
        RawItem::new(2, "blue", "square", "A"),
        RawItem::new(3, "red", "square", "B"),
        RawItem::new(4, "green", "circle", "B"),
    ]
}

/// Start test server and return base URL.
async fn start_test_server(items: Vec<RawItem>) -> String {
    let store = ItemStore::new(items).expect("Failed to build store");
    let router = create_router(AppState { store }, &ServerConfig::default());

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");
    let addr = listener.local_addr().expect("Failed to get local addr");

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    // Give server time to start
    tokio::time::sleep(std::time::Duration::from_millis(50)).await;

    format!("http://{}", addr)
}

/// Fetch `/api/items` with the given query string and return the group
/// keys with their item ids.
async fn fetch_groups(
    client: &reqwest::Client,
    base_url: &str,
    query: &str,
) -> Vec<(String, Vec<u64>)> {
    let resp = client
        .get(format!("{}/api/items?{}", base_url, query))
        .send()
        .await
        .expect("Failed to fetch items");
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.expect("Failed to parse items response");
    body["groups"]
        .as_array()
        .expect("groups should be an array")
        .iter()
        .map(|group| {
            let key = group["key"].as_str().unwrap().to_string();
            let ids: Vec<u64> = group["items"]
                .as_array()
                .unwrap()
                .iter()
                .map(|item| item["id"].as_u64().unwrap())
                .collect();
            (key, ids)
        })
        .collect()
}

fn owned(groups: Vec<(&str, Vec<u64>)>) -> Vec<(String, Vec<u64>)> {
    groups
        .into_iter()
        .map(|(key, ids)| (key.to_string(), ids))
        .collect()
}

// =============================================================================
// Health Probe Tests
// =============================================================================

#[tokio::test]
async fn test_health_probe() {
    let base_url = start_test_server(default_items()).await;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{}/healthz", base_url))
        .send()
        .await
        .expect("Failed to send healthz request");
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.expect("Failed to parse healthz response");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["items"], 12);
}

// =============================================================================
// Items API Tests
// =============================================================================

#[tokio::test]
async fn test_filter_and_group() {
    let base_url = start_test_server(scenario_items()).await;
    let client = reqwest::Client::new();

    // Multi-filter form
    let groups = fetch_groups(&client, &base_url, "filter=color:red&groupBy=shape").await;
    assert_eq!(groups, owned(vec![("circle", vec![1]), ("square", vec![3])]));

    // Legacy single-filter form
    let groups = fetch_groups(&client, &base_url, "filterBy=color&filterValue=red").await;
    assert_eq!(groups, owned(vec![("circle", vec![1]), ("square", vec![3])]));
}

#[tokio::test]
async fn test_unknown_group_by() {
    let base_url = start_test_server(scenario_items()).await;
    let client = reqwest::Client::new();

    let groups = fetch_groups(&client, &base_url, "groupBy=bogus").await;
    assert_eq!(groups, owned(vec![("All Items", vec![1, 2, 3, 4])]));
}

#[tokio::test]
async fn test_no_matches() {
    let base_url = start_test_server(scenario_items()).await;
    let client = reqwest::Client::new();

    let groups = fetch_groups(&client, &base_url, "filter=color:purple&groupBy=shape").await;
    assert!(groups.is_empty());
}

#[tokio::test]
async fn test_unknown_filter_key_is_ignored() {
    let base_url = start_test_server(scenario_items()).await;
    let client = reqwest::Client::new();

    let groups = fetch_groups(&client, &base_url, "filter=weight:heavy&groupBy=category").await;
    assert_eq!(groups, owned(vec![("A", vec![1, 2]), ("B", vec![3, 4])]));
}

#[tokio::test]
async fn test_repeated_requests_are_identical() {
    let base_url = start_test_server(default_items()).await;
    let client = reqwest::Client::new();
    let url = format!("{}/items?filter=category:A&groupBy=color", base_url);

    let first = client.get(&url).send().await.unwrap().text().await.unwrap();
    let second = client.get(&url).send().await.unwrap().text().await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_distinct_values_api() {
    let base_url = start_test_server(scenario_items()).await;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{}/api/values/shape", base_url))
        .send()
        .await
        .expect("Failed to fetch values");
    assert_eq!(resp.status(), 200);
    let values: Vec<String> = resp.json().await.expect("Failed to parse values");
    assert_eq!(values, vec!["circle", "square"]);
}

// =============================================================================
// HTML Tests
// =============================================================================

#[tokio::test]
async fn test_html_pages() {
    let base_url = start_test_server(default_items()).await;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{}/?groupBy=category", base_url))
        .send()
        .await
        .expect("Failed to fetch index");
    assert_eq!(resp.status(), 200);
    let body = resp.text().await.unwrap();
    assert!(body.contains("Grouped by Category"));

    let resp = client
        .get(format!("{}/items?filter=shape:circle", base_url))
        .send()
        .await
        .expect("Failed to fetch partial");
    assert_eq!(resp.status(), 200);
    let body = resp.text().await.unwrap();
    assert!(body.contains("4 items"));
    assert!(!body.contains("<html"));
}

#[tokio::test]
async fn test_items_method_not_allowed() {
    let base_url = start_test_server(default_items()).await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/items", base_url))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(resp.status(), 405);
}
