use geo::{Coord, LineString};
use std::fmt;

/// Handle of a vertex inside the [`Graph`](crate::graph::Graph) that owns it
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexIndex(pub(crate) usize);

impl VertexIndex {
    /// Position of the vertex in the owning graph's vertex list
    pub fn index(self) -> usize {
        self.0
    }
}

/// Handle of an edge inside the [`Graph`](crate::graph::Graph) that owns it
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeIndex(pub(crate) usize);

impl EdgeIndex {
    /// Position of the edge in the owning graph's edge list
    pub fn index(self) -> usize {
        self.0
    }
}

/// A node of the road network
#[derive(Debug, Clone)]
pub struct Vertex {
    /// Identifier, unique within the graph
    id: String,

    /// Position of the vertex
    coordinate: Coord<f64>,

    /// Edges ending at this vertex, in creation order
    in_edges: Vec<EdgeIndex>,

    /// Edges starting at this vertex, in creation order
    out_edges: Vec<EdgeIndex>,
}

impl Vertex {
    pub(crate) fn new(id: String, coordinate: Coord<f64>) -> Self {
        Vertex {
            id,
            coordinate,
            in_edges: Vec::new(),
            out_edges: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn coordinate(&self) -> Coord<f64> {
        self.coordinate
    }

    pub fn in_edges(&self) -> &[EdgeIndex] {
        &self.in_edges
    }

    pub fn out_edges(&self) -> &[EdgeIndex] {
        &self.out_edges
    }

    pub(crate) fn push_in_edge(&mut self, edge: EdgeIndex) {
        self.in_edges.push(edge);
    }

    pub(crate) fn push_out_edge(&mut self, edge: EdgeIndex) {
        self.out_edges.push(edge);
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

/// A directed connection between two vertices of the same graph
#[derive(Debug, Clone)]
pub struct Edge {
    /// Identifier, unique within the graph
    id: String,

    /// Start vertex; travel is only allowed source -> target
    source: VertexIndex,

    /// End vertex
    target: VertexIndex,

    /// Optional shape of the edge
    geometry: Option<LineString<f64>>,

    /// Travel cost, fixed at creation
    cost: f64,
}

impl Edge {
    pub(crate) fn new(
        id: String,
        source: VertexIndex,
        target: VertexIndex,
        geometry: Option<LineString<f64>>,
    ) -> Self {
        let cost = geometry.as_ref().map_or(0.0, line_length);
        Edge {
            id,
            source,
            target,
            geometry,
            cost,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn source(&self) -> VertexIndex {
        self.source
    }

    pub fn target(&self) -> VertexIndex {
        self.target
    }

    /// The explicit geometry, if one was given at creation
    pub fn geometry(&self) -> Option<&LineString<f64>> {
        self.geometry.as_ref()
    }

    /// Travel cost: the geometry length, or 0 when the edge has no geometry.
    ///
    /// Edges without geometry do not fall back to the straight-line distance
    /// between their endpoints.
    pub fn cost(&self) -> f64 {
        self.cost
    }
}

/// Euclidean length of a line string, in coordinate units
#[allow(deprecated)]
pub fn line_length(line: &LineString<f64>) -> f64 {
    use geo::EuclideanLength;
    line.euclidean_length()
}
