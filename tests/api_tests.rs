use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use infoblox_mcp_server::api::{AppState, create_api_routes};
use infoblox_mcp_server::core::config::InfobloxConfig;
use infoblox_mcp_server::domains::infoblox::InfobloxClient;
use serde_json::{Value, json};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use tower::ServiceExt;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const WAPI_PATH: &str = "/wapi/v2.12";

fn create_app(upstream: &MockServer, manifest_path: impl Into<PathBuf>) -> Router {
    let config = InfobloxConfig::new(
        format!("{}{}", upstream.uri(), WAPI_PATH),
        "admin",
        "infoblox",
    );
    let client = Arc::new(InfobloxClient::new(&config).unwrap());
    create_api_routes(AppState::new(client, manifest_path))
}

async fn mount(upstream: &MockServer, object: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(format!("{WAPI_PATH}/{object}")))
        .respond_with(response)
        .mount(upstream)
        .await;
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, body.to_vec())
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let (status, body) = send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await;
    (status, serde_json::from_slice(&body).unwrap())
}

async fn call_tool(app: Router, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/mcp/call")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let (status, body) = send(app, request).await;
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_get_zones_returns_typed_records() {
    let upstream = MockServer::start().await;
    mount(
        &upstream,
        "zone_auth",
        ResponseTemplate::new(200).set_body_json(json!([
            {"_ref": "zone_auth/ZG5z:example.com/default", "fqdn": "example.com", "view": "default"},
            {"_ref": "zone_auth/ZG5z:lab.local/default", "fqdn": "lab.local", "view": "default"}
        ])),
    )
    .await;

    let (status, json) = get_json(create_app(&upstream, "manifest.json"), "/zones").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        json!([
            {"fqdn": "example.com", "view": "default", "ref": "zone_auth/ZG5z:example.com/default"},
            {"fqdn": "lab.local", "view": "default", "ref": "zone_auth/ZG5z:lab.local/default"}
        ])
    );
}

#[tokio::test]
async fn test_get_records_passes_zone_filter() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{WAPI_PATH}/record:a")))
        .and(query_param("zone", "example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"_ref": "record:a/www", "name": "www.example.com", "ipv4addr": "192.0.2.10"}
        ])))
        .mount(&upstream)
        .await;

    let (status, json) = get_json(
        create_app(&upstream, "manifest.json"),
        "/records?zone=example.com",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json[0]["name"], "www.example.com");
    assert_eq!(json[0]["ipv4addr"], "192.0.2.10");
    assert_eq!(json[0]["ref"], "record:a/www");
}

#[tokio::test]
async fn test_get_records_without_zone_is_bad_request() {
    let upstream = MockServer::start().await;

    let (status, json) = get_json(create_app(&upstream, "manifest.json"), "/records").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("zone"));
}

#[tokio::test]
async fn test_grid_members_upstream_503_is_500_with_upstream_text() {
    let upstream = MockServer::start().await;
    mount(
        &upstream,
        "member",
        ResponseTemplate::new(503).set_body_string("Grid Master is not available"),
    )
    .await;

    let (status, json) = get_json(create_app(&upstream, "manifest.json"), "/grid-members").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let message = json["error"].as_str().unwrap();
    assert!(message.contains("503"));
    assert!(message.contains("Grid Master is not available"));
}

#[tokio::test]
async fn test_malformed_upstream_element_is_500() {
    let upstream = MockServer::start().await;
    mount(
        &upstream,
        "member",
        ResponseTemplate::new(200).set_body_json(json!([{"_ref": "member/1"}])),
    )
    .await;

    let (status, json) = get_json(create_app(&upstream, "manifest.json"), "/grid-members").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(json["error"].as_str().unwrap().contains("host_name"));
}

#[tokio::test]
async fn test_liveness_endpoints() {
    let upstream = MockServer::start().await;

    for uri in ["/mcp/", "/health"] {
        let (status, json) = get_json(create_app(&upstream, "manifest.json"), uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "ok");
        assert!(json["timestamp"].is_string());
    }
}

#[tokio::test]
async fn test_manifest_is_served_verbatim() {
    let upstream = MockServer::start().await;
    let mut manifest = tempfile::NamedTempFile::new().unwrap();
    let document = "{\n  \"name\": \"infoblox\",\n  \"tools\": []\n}\n";
    manifest.write_all(document.as_bytes()).unwrap();

    let request = Request::builder()
        .uri("/mcp/manifest")
        .body(Body::empty())
        .unwrap();
    let response = create_app(&upstream, manifest.path())
        .oneshot(request)
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json"
    );
    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(body.as_ref(), document.as_bytes());
}

#[tokio::test]
async fn test_missing_manifest_is_500() {
    let upstream = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();

    let (status, json) = get_json(
        create_app(&upstream, dir.path().join("manifest.json")),
        "/mcp/manifest",
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn test_call_list_zones() {
    let upstream = MockServer::start().await;
    mount(
        &upstream,
        "zone_auth",
        ResponseTemplate::new(200).set_body_json(json!([
            {"_ref": "zone_auth/one", "fqdn": "example.com", "view": "default"}
        ])),
    )
    .await;

    let (status, json) = call_tool(
        create_app(&upstream, "manifest.json"),
        json!({"tool": "list_zones", "arguments": {}}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        json!({
            "success": true,
            "data": [{"fqdn": "example.com", "view": "default", "ref": "zone_auth/one"}]
        })
    );
}

#[tokio::test]
async fn test_call_list_records_without_zone_is_400() {
    let upstream = MockServer::start().await;

    let (status, json) = call_tool(
        create_app(&upstream, "manifest.json"),
        json!({"tool": "list_records", "arguments": {}}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("zone"));
}

#[tokio::test]
async fn test_call_unknown_tool_is_400_naming_it() {
    let upstream = MockServer::start().await;

    let (status, json) = call_tool(
        create_app(&upstream, "manifest.json"),
        json!({"tool": "nope"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("nope"));
}

#[tokio::test]
async fn test_call_upstream_failure_is_500() {
    let upstream = MockServer::start().await;
    mount(
        &upstream,
        "member",
        ResponseTemplate::new(401).set_body_string("Authorization Required"),
    )
    .await;

    let (status, json) = call_tool(
        create_app(&upstream, "manifest.json"),
        json!({"tool": "list_grid_members"}),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(json["error"]
        .as_str()
        .unwrap()
        .contains("Authorization Required"));
}

#[tokio::test]
async fn test_call_body_without_tool_is_400() {
    let upstream = MockServer::start().await;

    let (status, json) = call_tool(
        create_app(&upstream, "manifest.json"),
        json!({"arguments": {}}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("tool"));

    let (status, json) = call_tool(create_app(&upstream, "manifest.json"), json!({"tool": 5})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn test_call_malformed_or_untyped_body_is_400() {
    let upstream = MockServer::start().await;

    let request = Request::builder()
        .method("POST")
        .uri("/mcp/call")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"tool\":"))
        .unwrap();
    let (status, body) = send(create_app(&upstream, "manifest.json"), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert!(json["error"].as_str().unwrap().starts_with("Malformed JSON"));

    let request = Request::builder()
        .method("POST")
        .uri("/mcp/call")
        .body(Body::from(json!({"tool": "list_zones"}).to_string()))
        .unwrap();
    let (status, body) = send(create_app(&upstream, "manifest.json"), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"], "Expected Content-Type: application/json");
}
