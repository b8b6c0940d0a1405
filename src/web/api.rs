use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use chrono::{DateTime, Utc};
use log::{info, warn};
use std::sync::Arc;
use std::time::Instant;

use crate::algorithm::{dijkstra::DijkstraPathFinder, PathFinding};
use crate::graph::{Graph, VertexIndex};
use crate::io::{PathView, VertexView};
use crate::web::models::*;
use crate::Error;

type ApiError = (StatusCode, Json<ErrorResponse>);

/// Shared application state
///
/// Searches keep their scratch state to themselves, so one graph is shared
/// by all requests without locking.
#[derive(Clone)]
pub struct AppState {
    pub graph: Arc<Graph>,
    pub source_file: Option<String>,
    pub loaded_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(graph: Graph) -> Self {
        Self {
            graph: Arc::new(graph),
            source_file: None,
            loaded_at: Utc::now(),
        }
    }

    pub fn with_source_file(mut self, source_file: impl Into<String>) -> Self {
        self.source_file = Some(source_file.into());
        self
    }
}

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/graph", get(get_graph))
        .route("/api/vertices/:vertex_id", get(get_vertex))
        .route("/api/path", get(find_path))
        .route("/api/health", get(health_check))
}

/// Summary of the loaded network
pub async fn get_graph(State(state): State<AppState>) -> Json<GraphSummary> {
    Json(GraphSummary {
        vertex_count: state.graph.vertex_count(),
        edge_count: state.graph.edge_count(),
        source_file: state.source_file.clone(),
        loaded_at: state.loaded_at,
    })
}

/// Get a single vertex by id
pub async fn get_vertex(
    State(state): State<AppState>,
    Path(vertex_id): Path<String>,
) -> Result<Json<VertexView>, ApiError> {
    let vertex = resolve_vertex(&state.graph, &vertex_id)?;
    Ok(Json(VertexView::new(&state.graph, vertex)))
}

/// Shortest path between two vertices
pub async fn find_path(
    State(state): State<AppState>,
    Query(request): Query<PathRequest>,
) -> Result<Json<PathView>, ApiError> {
    let source = resolve_vertex(&state.graph, &request.source)?;
    let target = resolve_vertex(&state.graph, &request.target)?;

    let graph = Arc::clone(&state.graph);
    let started = Instant::now();
    let result = tokio::task::spawn_blocking(move || {
        let finder = DijkstraPathFinder::new(&graph);
        finder
            .find_path(source, target)
            .map(|path| PathView::new(&graph, &path))
    })
    .await
    .map_err(|err| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new("search_failed", format!("Search task failed: {}", err))),
        )
    })?;

    match result {
        Ok(view) => {
            info!(
                "path {} -> {}: {} edges, length {:.3} in {:?}",
                request.source,
                request.target,
                view.edges.len(),
                view.length,
                started.elapsed()
            );
            Ok(Json(view))
        }
        Err(err @ Error::PathNotFound { .. }) => {
            warn!("{}", err);
            let details = serde_json::json!({
                "source": request.source,
                "target": request.target,
            });
            Err((
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new("path_not_found", err.to_string()).with_details(details)),
            ))
        }
        Err(err) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new("search_failed", err.to_string())),
        )),
    }
}

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

// Helper functions

fn resolve_vertex(graph: &Graph, vertex_id: &str) -> Result<VertexIndex, ApiError> {
    graph.find_vertex(vertex_id).ok_or_else(|| {
        warn!("unknown vertex '{}'", vertex_id);
        (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new(
                "vertex_not_found",
                format!("Vertex '{}' not found", vertex_id),
            )),
        )
    })
}
