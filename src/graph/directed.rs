use geo::{Coord, LineString};
use log::trace;
use ordered_float::OrderedFloat;
use std::borrow::Cow;
use std::collections::HashMap;

use crate::graph::model::{Edge, EdgeIndex, Vertex, VertexIndex};
use crate::{Error, Result};

type CoordKey = (OrderedFloat<f64>, OrderedFloat<f64>);

fn coord_key(coordinate: Coord<f64>) -> CoordKey {
    (OrderedFloat(coordinate.x), OrderedFloat(coordinate.y))
}

/// A directed road graph stored as vertex and edge arenas
///
/// The graph owns every vertex and edge. Edges refer to their endpoints and
/// vertices to their incident edges through [`VertexIndex`] / [`EdgeIndex`]
/// handles, both of which stay valid for the lifetime of the graph since
/// nothing is ever removed.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// Vertices in insertion order
    vertices: Vec<Vertex>,

    /// Edges in insertion order
    edges: Vec<Edge>,

    /// Vertex id -> handle
    vertex_ids: HashMap<String, VertexIndex>,

    /// Edge id -> handle
    edge_ids: HashMap<String, EdgeIndex>,

    /// Exact coordinate -> first vertex inserted at it
    vertex_coordinates: HashMap<CoordKey, VertexIndex>,
}

impl Graph {
    /// Creates a new empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new empty graph with room for the given number of vertices and edges
    pub fn with_capacity(vertices: usize, edges: usize) -> Self {
        Graph {
            vertices: Vec::with_capacity(vertices),
            edges: Vec::with_capacity(edges),
            vertex_ids: HashMap::with_capacity(vertices),
            edge_ids: HashMap::with_capacity(edges),
            vertex_coordinates: HashMap::with_capacity(vertices),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Adds a vertex and returns its handle
    ///
    /// Several vertices may share a coordinate; only ids must be unique.
    pub fn add_vertex(&mut self, id: impl Into<String>, coordinate: Coord<f64>) -> Result<VertexIndex> {
        let id = id.into();
        if self.vertex_ids.contains_key(&id) {
            return Err(Error::DuplicateVertex(id));
        }

        let index = VertexIndex(self.vertices.len());
        self.vertex_ids.insert(id.clone(), index);
        self.vertex_coordinates.entry(coord_key(coordinate)).or_insert(index);
        self.vertices.push(Vertex::new(id, coordinate));
        Ok(index)
    }

    /// Adds a directed edge from `source` to `target` and registers it on both endpoints
    pub fn add_edge(
        &mut self,
        id: impl Into<String>,
        source: VertexIndex,
        target: VertexIndex,
        geometry: Option<LineString<f64>>,
    ) -> Result<EdgeIndex> {
        for endpoint in [source, target] {
            if !self.has_vertex(endpoint) {
                return Err(Error::InvalidVertex(endpoint.index()));
            }
        }

        let id = id.into();
        if self.edge_ids.contains_key(&id) {
            return Err(Error::DuplicateEdge(id));
        }

        let index = EdgeIndex(self.edges.len());
        trace!("adding edge {} ({} -> {})", id, source.index(), target.index());
        self.edge_ids.insert(id.clone(), index);
        self.edges.push(Edge::new(id, source, target, geometry));
        self.vertices[source.0].push_out_edge(index);
        self.vertices[target.0].push_in_edge(index);
        Ok(index)
    }

    /// Returns true if the handle designates a vertex of this graph
    pub fn has_vertex(&self, vertex: VertexIndex) -> bool {
        vertex.0 < self.vertices.len()
    }

    /// Looks a vertex up by id
    pub fn find_vertex(&self, id: &str) -> Option<VertexIndex> {
        self.vertex_ids.get(id).copied()
    }

    /// Looks a vertex up by exact coordinate equality
    pub fn find_vertex_by_coordinate(&self, coordinate: Coord<f64>) -> Option<VertexIndex> {
        self.vertex_coordinates.get(&coord_key(coordinate)).copied()
    }

    /// Looks an edge up by id
    pub fn find_edge(&self, id: &str) -> Option<EdgeIndex> {
        self.edge_ids.get(id).copied()
    }

    /// Panics if the handle does not belong to this graph
    pub fn vertex(&self, vertex: VertexIndex) -> &Vertex {
        &self.vertices[vertex.0]
    }

    /// Panics if the handle does not belong to this graph
    pub fn edge(&self, edge: EdgeIndex) -> &Edge {
        &self.edges[edge.0]
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Iterates over vertex handles in insertion order
    pub fn vertex_indices(&self) -> impl Iterator<Item = VertexIndex> + '_ {
        (0..self.vertices.len()).map(VertexIndex)
    }

    /// Returns an iterator over the outgoing edges from a vertex
    pub fn out_edges(&self, vertex: VertexIndex) -> impl Iterator<Item = &Edge> + '_ {
        self.vertex(vertex).out_edges().iter().map(move |e| self.edge(*e))
    }

    /// Returns an iterator over the incoming edges to a vertex
    pub fn in_edges(&self, vertex: VertexIndex) -> impl Iterator<Item = &Edge> + '_ {
        self.vertex(vertex).in_edges().iter().map(move |e| self.edge(*e))
    }

    /// Shape of an edge: its own geometry, or a straight segment between its endpoints
    pub fn edge_geometry(&self, edge: EdgeIndex) -> Cow<'_, LineString<f64>> {
        let edge = self.edge(edge);
        match edge.geometry() {
            Some(geometry) => Cow::Borrowed(geometry),
            None => Cow::Owned(LineString::new(vec![
                self.vertex(edge.source()).coordinate(),
                self.vertex(edge.target()).coordinate(),
            ])),
        }
    }
}
