use road_graph::web::{start_server_with_config, ServerConfig};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    // Parse command line arguments: <graph.geojson> [port]
    let args: Vec<String> = env::args().collect();
    let mut config = ServerConfig::default();
    if let Some(path) = args.get(1) {
        config.graph_path = path.clone();
    }
    if let Some(port) = args.get(2) {
        config.port = port.parse().unwrap_or(config.port);
    }

    println!("Starting road graph server...");
    println!("  Port: {}", config.port);
    println!("  Network: {}", config.graph_path);
    println!("  CORS enabled: {}", config.enable_cors);
    println!();

    start_server_with_config(config).await?;

    Ok(())
}
