//! Serializable views of graph elements and paths
//!
//! Edges name their endpoints by vertex id instead of embedding them, and
//! geometries are rendered as GeoJSON `LineString` objects.

use geo::LineString;
use serde::{Deserialize, Serialize};

use crate::graph::{EdgeIndex, Graph, Path, VertexIndex};

/// GeoJSON `LineString` geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineStringView {
    #[serde(rename = "type")]
    pub kind: String,
    pub coordinates: Vec<[f64; 2]>,
}

impl From<&LineString<f64>> for LineStringView {
    fn from(line: &LineString<f64>) -> Self {
        LineStringView {
            kind: "LineString".to_string(),
            coordinates: line.0.iter().map(|c| [c.x, c.y]).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VertexView {
    pub id: String,
    pub coordinate: [f64; 2],
}

impl VertexView {
    pub fn new(graph: &Graph, vertex: VertexIndex) -> Self {
        let vertex = graph.vertex(vertex);
        let coordinate = vertex.coordinate();
        VertexView {
            id: vertex.id().to_string(),
            coordinate: [coordinate.x, coordinate.y],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeView {
    pub id: String,
    /// Id of the source vertex
    pub source: String,
    /// Id of the target vertex
    pub target: String,
    pub cost: f64,
    pub geometry: LineStringView,
}

impl EdgeView {
    pub fn new(graph: &Graph, edge_index: EdgeIndex) -> Self {
        let edge = graph.edge(edge_index);
        EdgeView {
            id: edge.id().to_string(),
            source: graph.vertex(edge.source()).id().to_string(),
            target: graph.vertex(edge.target()).id().to_string(),
            cost: edge.cost(),
            geometry: LineStringView::from(&*graph.edge_geometry(edge_index)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathView {
    pub edges: Vec<EdgeView>,
    pub length: f64,
}

impl PathView {
    pub fn new(graph: &Graph, path: &Path) -> Self {
        PathView {
            edges: path.edges().iter().map(|e| EdgeView::new(graph, *e)).collect(),
            length: path.length(),
        }
    }
}
