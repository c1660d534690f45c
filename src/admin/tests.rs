//! Tests for the admin facade

use super::*;
use crate::config::AdminConfig;
use pretty_assertions::assert_eq;
use reqwest::Method;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::router::EndpointDescriptor;

fn host_of(server: &MockServer) -> String {
    server
        .uri()
        .trim_start_matches("http://")
        .to_string()
}

fn client_for(server: &MockServer) -> AdminClient {
    AdminClient::new(AdminConfig::builder().host(host_of(server)).build()).unwrap()
}

async fn mount_version(server: &MockServer, version: &str) {
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "version": version,
            "tagline": "Welcome to Kong"
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_fetch_apis() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/apis"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": "a1", "name": "mockbin"}]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let apis = client.fetch_apis().await.unwrap();

    assert_eq!(apis, vec![json!({"id": "a1", "name": "mockbin"})]);
}

#[tokio::test]
async fn test_fetch_plugins_for_api() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/apis/a1/plugins"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"name": "key-auth"}]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let plugins = client.fetch_plugins("a1").await.unwrap();

    assert_eq!(plugins.len(), 1);
    assert_eq!(plugins[0]["name"], "key-auth");
}

#[tokio::test]
async fn test_ignore_consumers_skips_network() {
    let server = MockServer::start().await;

    // The consumers endpoint must never be hit
    Mock::given(method("GET"))
        .and(path("/consumers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"username": "alice"}]
        })))
        .expect(0)
        .mount(&server)
        .await;

    let config = AdminConfig::builder()
        .host(host_of(&server))
        .ignore_consumers(true)
        .build();
    let client = AdminClient::new(config).unwrap();

    let consumers = client.fetch_consumers().await.unwrap();
    assert!(consumers.is_empty());
}

#[tokio::test]
async fn test_undeclared_consumers_filtered() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/consumers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                {"username": "alice"},
                {"username": "bob"},
                {"username": "anonymous"}
            ]
        })))
        .mount(&server)
        .await;

    let config = AdminConfig::builder()
        .host(host_of(&server))
        .ignore_undeclared_consumers(true)
        .declare_consumer("alice")
        .build();
    let client = AdminClient::new(config).unwrap();

    let consumers = client.fetch_consumers().await.unwrap();

    // anonymous is always retained
    assert_eq!(
        consumers,
        vec![json!({"username": "alice"}), json!({"username": "anonymous"})]
    );
}

#[tokio::test]
async fn test_declared_filter_off_returns_everyone() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/consumers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"username": "alice"}, {"username": "bob"}]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let consumers = client.fetch_consumers().await.unwrap();

    assert_eq!(consumers.len(), 2);
}

#[tokio::test]
async fn test_plugin_schemas_fetched_and_cached() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/plugins/enabled"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "enabled_plugins": ["key-auth", "acl"]
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/plugins/schema/key-auth"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "fields": {"key_names": {"type": "array"}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/plugins/schema/acl"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "fields": {"whitelist": {"type": "array"}, "blacklist": {"type": "array"}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);

    let schemas = client.fetch_plugin_schemas().await.unwrap();
    assert_eq!(schemas.len(), 2);
    assert_eq!(schemas["key-auth"], vec!["key_names"]);
    assert_eq!(schemas["acl"].len(), 2);

    // Second call is served from the cache; the expect(1) mocks above verify
    // no further requests go out even though the backend would now differ.
    let again = client.fetch_plugin_schemas().await.unwrap();
    assert_eq!(again, schemas);
}

#[tokio::test]
async fn test_plugin_schemas_from_mapping_descriptor() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/plugins/enabled"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "enabled_plugins": {"key-auth": true}
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/plugins/schema/key-auth"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "fields": [{"key_names": {"type": "array"}}]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let schemas = client.fetch_plugin_schemas().await.unwrap();

    assert_eq!(schemas["key-auth"], vec!["key_names"]);
}

#[tokio::test]
async fn test_kong_version_fetched_and_cached() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "version": "0.14.1"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);

    let version = client.fetch_kong_version().await.unwrap();
    assert_eq!(version.to_string(), "0.14.1");

    // Cached; the expect(1) mock verifies no second request
    let again = client.fetch_kong_version().await.unwrap();
    assert_eq!(again, version);
}

#[tokio::test]
async fn test_targets_active_on_modern_gateway() {
    let server = MockServer::start().await;
    mount_version(&server, "0.14.1").await;

    Mock::given(method("GET"))
        .and(path("/upstreams/u1/targets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"target": "10.0.0.1:80", "weight": 100}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/upstreams/u1/targets/active"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let targets = client.fetch_targets_active("u1").await.unwrap();

    assert_eq!(targets.len(), 1);
}

#[tokio::test]
async fn test_targets_active_on_legacy_gateway() {
    let server = MockServer::start().await;
    mount_version(&server, "0.11.2").await;

    Mock::given(method("GET"))
        .and(path("/upstreams/u1/targets/active"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"target": "10.0.0.1:80", "weight": 100}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let targets = client.fetch_targets_active("u1").await.unwrap();

    assert_eq!(targets.len(), 1);
}

#[tokio::test]
async fn test_request_endpoint_with_body_sets_json_headers() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/consumers"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"username": "alice"})))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client
        .request_endpoint(
            &EndpointDescriptor::new("consumers"),
            RequestOptions::new()
                .method(Method::POST)
                .json(json!({"username": "alice"})),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), 201);
}

#[tokio::test]
async fn test_request_endpoint_without_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/apis"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client
        .request_endpoint(&EndpointDescriptor::new("apis"), RequestOptions::new())
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    // No body and no JSON content type on the recorded request
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].body.is_empty());
    assert!(!requests[0].headers.contains_key("content-type"));
}

#[tokio::test]
async fn test_request_endpoint_invalidates_results_cache() {
    let server = MockServer::start().await;

    // Two real fetches expected: before and after the mutation
    Mock::given(method("GET"))
        .and(path("/apis"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": "a1"}]
        })))
        .expect(2)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/consumers"))
        .respond_with(ResponseTemplate::new(201))
        .mount(&server)
        .await;

    let config = AdminConfig::builder()
        .host(host_of(&server))
        .enable_cache(true)
        .build();
    let client = AdminClient::new(config).unwrap();

    // First read populates the cache, second is served from it
    client.fetch_apis().await.unwrap();
    client.fetch_apis().await.unwrap();
    let requests_before = server.received_requests().await.unwrap().len();
    assert_eq!(requests_before, 1);

    // Any endpoint request clears cached reads
    client
        .request_endpoint(
            &EndpointDescriptor::new("consumers"),
            RequestOptions::new().method(Method::POST),
        )
        .await
        .unwrap();

    // Fresh network call after invalidation, then cached again
    client.fetch_apis().await.unwrap();
    client.fetch_apis().await.unwrap();

    let api_requests = server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .filter(|r| r.url.path() == "/apis")
        .count();
    assert_eq!(api_requests, 2);
}

#[tokio::test]
async fn test_fetch_error_carries_status_and_url() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/upstreams"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not found"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.fetch_upstreams().await.unwrap_err();

    assert_eq!(err.status(), Some(404));
    assert!(err.to_string().contains("/upstreams"));
}
