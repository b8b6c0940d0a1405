use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use road_graph::io::GraphReader;
use road_graph::web::{build_app, AppState};
use serde_json::Value;
use tower::ServiceExt;

const ROADS: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    { "type": "Feature", "id": "r1", "properties": {},
      "geometry": { "type": "LineString", "coordinates": [[0, 0], [3, 4]] } },
    { "type": "Feature", "id": "r2", "properties": {},
      "geometry": { "type": "LineString", "coordinates": [[3, 4], [3, 10]] } },
    { "type": "Feature", "id": "island", "properties": {},
      "geometry": { "type": "LineString", "coordinates": [[100, 100], [101, 100]] } }
  ]
}"#;

fn app() -> axum::Router {
    let graph = GraphReader::new().read_str(ROADS).unwrap();
    build_app(AppState::new(graph).with_source_file("roads.geojson"), true)
}

async fn get(uri: &str) -> (StatusCode, Value) {
    let response = app()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_health_check() {
    let (status, body) = get("/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_graph_summary() {
    let (status, body) = get("/api/graph").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["vertex_count"], 5);
    assert_eq!(body["edge_count"], 6);
    assert_eq!(body["source_file"], "roads.geojson");
}

#[tokio::test]
async fn test_get_vertex() {
    let (status, body) = get("/api/vertices/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "1");
    assert_eq!(body["coordinate"], serde_json::json!([3.0, 4.0]));

    let (status, body) = get("/api/vertices/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "vertex_not_found");
    assert!(body.get("details").is_none());
}

#[tokio::test]
async fn test_find_path() {
    let (status, body) = get("/api/path?source=0&target=2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["length"], 11.0);

    let edges = body["edges"].as_array().unwrap();
    assert_eq!(edges.len(), 2);
    assert_eq!(edges[0]["id"], "r1-direct");
    assert_eq!(edges[0]["source"], "0");
    assert_eq!(edges[0]["target"], "1");
    assert_eq!(edges[1]["id"], "r2-direct");
    assert_eq!(edges[1]["target"], "2");
}

#[tokio::test]
async fn test_unreachable_target_is_not_found() {
    let (status, body) = get("/api/path?source=0&target=3").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "path_not_found");
    assert_eq!(body["message"], "Path not found from '0' to '3'");
    assert_eq!(body["details"], serde_json::json!({ "source": "0", "target": "3" }));
}
