use crate::graph::{Edge, EdgeIndex, Graph, VertexIndex};
use crate::{Error, Result};

/// A route through a graph: contiguous edges from a source to a target vertex
///
/// A path holds handles into the graph that produced it, so resolving its
/// edges requires that same graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    edges: Vec<EdgeIndex>,
    length: f64,
}

impl Path {
    /// Builds a path from edges ordered source -> target
    ///
    /// Fails with [`Error::DisconnectedPath`] when an edge does not start
    /// where the previous one ends.
    pub fn new(graph: &Graph, edges: Vec<EdgeIndex>) -> Result<Self> {
        for (position, pair) in edges.windows(2).enumerate() {
            let (previous, next) = (graph.edge(pair[0]), graph.edge(pair[1]));
            if previous.target() != next.source() {
                return Err(Error::DisconnectedPath {
                    position: position + 1,
                    previous: previous.id().to_string(),
                    next: next.id().to_string(),
                });
            }
        }
        let length: f64 = edges.iter().map(|e| graph.edge(*e).cost()).sum();
        Ok(Path { edges, length })
    }

    pub fn edges(&self) -> &[EdgeIndex] {
        &self.edges
    }

    /// Sum of the edge costs
    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Resolves the edges against the graph that produced the path
    pub fn iter<'g>(&'g self, graph: &'g Graph) -> impl Iterator<Item = &'g Edge> + 'g {
        self.edges.iter().map(move |e| graph.edge(*e))
    }

    /// Vertices crossed by the path, both ends included; empty for an empty path
    pub fn vertices(&self, graph: &Graph) -> Vec<VertexIndex> {
        let mut vertices = Vec::with_capacity(self.edges.len() + 1);
        if let Some(first) = self.edges.first() {
            vertices.push(graph.edge(*first).source());
        }
        vertices.extend(self.iter(graph).map(Edge::target));
        vertices
    }
}
