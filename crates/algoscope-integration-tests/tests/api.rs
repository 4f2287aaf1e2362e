//! The HTTP API driven through the server's router.

use algoscope_engine::VisualizerConfig;
use algoscope_integration_tests::{is_sorted, settled};
use algoscope_vis::{ServerConfig, VisServer};
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

fn server() -> VisServer {
    let config = ServerConfig {
        array_len: 10,
        visualizer: VisualizerConfig::instant(),
        ..ServerConfig::default()
    };
    VisServer::new(&config).unwrap()
}

async fn send(router: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header("content-type", "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

#[tokio::test]
async fn load_sort_and_read_back() {
    let server = server();
    let router = server.router();

    let (status, frame) = send(
        &router,
        "POST",
        "/api/array/load",
        Some(json!({ "text": "9, 4, 7, 1" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(frame["model"], json!([9, 4, 7, 1]));

    let (status, frame) = send(
        &router,
        "POST",
        "/api/array/sort",
        Some(json!({ "algorithm": "merge" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(frame["phase"], "running");

    let state = settled(&server.state().array).await;
    assert!(is_sorted(&state.model));

    let (status, frame) = send(&router, "GET", "/api/array", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(frame["model"], json!([1, 4, 7, 9]));
}

#[tokio::test]
async fn binary_search_on_unsorted_input_is_unprocessable() {
    let server = server();
    let router = server.router();
    send(&router, "POST", "/api/array/load", Some(json!({ "values": [3, 1, 2] }))).await;

    let (status, body) = send(
        &router,
        "POST",
        "/api/array/search",
        Some(json!({ "algorithm": "binary", "target": 2 })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].as_str().unwrap().contains("not sorted"));
    assert_eq!(server.state().array.model(), vec![3, 1, 2]);
}

#[tokio::test]
async fn oversized_requests_are_unprocessable() {
    let server = server();
    let router = server.router();

    let (status, _) = send(
        &router,
        "POST",
        "/api/array/load",
        Some(json!({ "random": { "len": u64::MAX } })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, body) = send(
        &router,
        "POST",
        "/api/open/resize",
        Some(json!({ "mode": "to", "capacity": u64::MAX })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].as_str().unwrap().contains("invalid capacity"));

    let (status, state) = send(&router, "GET", "/api/open", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(state["warning"].is_string());
}

#[tokio::test]
async fn status_lists_every_visualizer() {
    let server = server();
    let router = server.router();

    let (status, body) = send(&router, "POST", "/api/speed", Some(json!({ "speed": "fast" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["speed"], "fast");

    let (_, body) = send(&router, "GET", "/api/status", None).await;
    let names: Vec<&str> = body["visualizers"]
        .as_array()
        .unwrap()
        .iter()
        .map(|vis| vis["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec![
            "array",
            "open-addressing",
            "separate-chaining",
            "linked-list",
            "stack",
            "queue",
            "deque"
        ]
    );
}

#[tokio::test]
async fn stack_routes_push_and_pop() {
    let server = server();
    let router = server.router();
    let before = server.state().stack.model().len();

    let (status, _) = send(&router, "POST", "/api/stack/push", Some(json!({ "value": 42 }))).await;
    assert_eq!(status, StatusCode::OK);
    let state = settled(&server.state().stack).await;
    assert_eq!(state.model.len(), before + 1);
    assert_eq!(state.model.peek(), Some(&42));

    let (status, _) = send(&router, "POST", "/api/stack/pop", None).await;
    assert_eq!(status, StatusCode::OK);
    let state = settled(&server.state().stack).await;
    assert_eq!(state.model.len(), before);
}
