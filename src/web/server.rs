use axum::{
    http::{header, Method},
    Router,
};
use log::info;
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};

use crate::io::GraphReader;
use crate::web::api::{create_router, AppState};

/// Configuration for the web server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub graph_path: String,
    pub enable_cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3005,
            graph_path: "data/roads.geojson".to_string(),
            enable_cors: true,
        }
    }
}

/// Builds the application router around a loaded graph
pub fn build_app(state: AppState, enable_cors: bool) -> Router {
    let app = Router::new().merge(create_router()).with_state(state);

    if enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET])
            .allow_headers([header::CONTENT_TYPE]);
        app.layer(cors)
    } else {
        app
    }
}

/// Load the configured graph and start the web server
pub async fn start_server_with_config(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let path = config.graph_path.clone();
    let graph = tokio::task::spawn_blocking(move || GraphReader::new().read(path)).await??;
    let state = AppState::new(graph).with_source_file(config.graph_path.as_str());

    let app = build_app(state, config.enable_cors);

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    info!("road graph server listening on http://{}", addr);
    info!("serving network from {}", config.graph_path);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
