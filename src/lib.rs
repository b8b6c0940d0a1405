//! Road Graph - shortest paths over an in-memory road network
//!
//! A [`Graph`] owns vertices and directed edges (with optional line geometry),
//! usually built by [`io::GraphReader`] from a GeoJSON line dataset.
//! [`DijkstraPathFinder`] answers single-pair queries with an early-exit
//! Dijkstra search and returns a [`Path`], which [`io::render`] turns into
//! serializable views.
//!
//! Search state is scoped to one query, so a graph behind an `Arc` can serve
//! any number of concurrent searches.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod io;
pub mod web;

pub use algorithm::{dijkstra::DijkstraPathFinder, PathFinding};
/// Re-export main types for convenient use
pub use graph::{Edge, EdgeIndex, Graph, Path, Vertex, VertexIndex};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Path not found from '{from}' to '{to}'")]
    PathNotFound { from: String, to: String },

    #[error("Edge '{next}' at position {position} does not start where '{previous}' ends")]
    DisconnectedPath {
        position: usize,
        previous: String,
        next: String,
    },

    #[error("Invalid road grid options: {0}")]
    InvalidGridOptions(String),

    #[error("Invalid vertex index: {0}")]
    InvalidVertex(usize),

    #[error("Duplicate vertex id: {0}")]
    DuplicateVertex(String),

    #[error("Duplicate edge id: {0}")]
    DuplicateEdge(String),

    #[error("Unsupported geometry type : {0}")]
    UnsupportedGeometry(String),

    #[error("Invalid geometry for feature {feature}: {reason}")]
    InvalidGeometry { feature: String, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// True for the recoverable "target unreachable" condition
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::PathNotFound { .. })
    }
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
