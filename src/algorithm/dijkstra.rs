use log::debug;
use ordered_float::OrderedFloat;
use std::ops::{Index, IndexMut};

use crate::algorithm::PathFinding;
use crate::data_structures::FrontierQueue;
use crate::graph::{EdgeIndex, Graph, Path, VertexIndex};
use crate::{Error, Result};

/// Per-vertex scratch values of one search
#[derive(Debug, Clone, Copy)]
struct VertexState {
    /// Best known cost from the search source
    cost: f64,
    /// Edge that yields `cost`
    reaching_edge: Option<EdgeIndex>,
    /// Cost is final
    visited: bool,
}

impl Default for VertexState {
    fn default() -> Self {
        VertexState {
            cost: f64::INFINITY,
            reaching_edge: None,
            visited: false,
        }
    }
}

/// Scratch state of a single search, indexed by vertex handle
///
/// Built fresh for every query, so no value survives from one search to the
/// next and the graph itself is never written to.
#[derive(Debug)]
struct SearchState {
    vertices: Vec<VertexState>,
}

impl SearchState {
    fn new(vertex_count: usize) -> Self {
        SearchState {
            vertices: vec![VertexState::default(); vertex_count],
        }
    }

    /// Number of vertices whose cost was settled
    fn settled(&self) -> usize {
        self.vertices.iter().filter(|v| v.visited).count()
    }
}

impl Index<VertexIndex> for SearchState {
    type Output = VertexState;

    fn index(&self, vertex: VertexIndex) -> &VertexState {
        &self.vertices[vertex.index()]
    }
}

impl IndexMut<VertexIndex> for SearchState {
    fn index_mut(&mut self, vertex: VertexIndex) -> &mut VertexState {
        &mut self.vertices[vertex.index()]
    }
}

/// Dijkstra's algorithm with early exit on the target
///
/// Relaxation only overwrites a predecessor on a strict improvement, so among
/// equally cheap routes the first one discovered (in edge insertion order)
/// wins and results are reproducible.
#[derive(Debug, Clone, Copy)]
pub struct DijkstraPathFinder<'g> {
    graph: &'g Graph,
}

impl<'g> DijkstraPathFinder<'g> {
    /// Creates a path finder over `graph`
    pub fn new(graph: &'g Graph) -> Self {
        DijkstraPathFinder { graph }
    }

    /// Runs the search until `target` is settled; returns `false` if the frontier ran dry first
    fn search(&self, source: VertexIndex, target: VertexIndex, state: &mut SearchState) -> bool {
        let graph = self.graph;
        let mut frontier = FrontierQueue::with_capacity(graph.vertex_count());

        state[source].cost = 0.0;
        frontier.push(source, OrderedFloat(0.0));

        while let Some((u, OrderedFloat(cost_u))) = frontier.pop() {
            // Older entries of a vertex that was re-queued with a lower cost
            if state[u].visited {
                continue;
            }
            state[u].visited = true;

            if u == target {
                return true;
            }

            for &edge_index in graph.vertex(u).out_edges() {
                let edge = graph.edge(edge_index);
                let v = edge.target();
                if state[v].visited {
                    continue;
                }

                let candidate = cost_u + edge.cost();
                if candidate < state[v].cost {
                    state[v].cost = candidate;
                    state[v].reaching_edge = Some(edge_index);
                    frontier.push(v, OrderedFloat(candidate));
                }
            }
        }

        false
    }

    /// Walks reaching edges back from `target`, then reverses them into source -> target order
    fn build_path(&self, target: VertexIndex, state: &SearchState) -> Result<Path> {
        let mut edges = Vec::new();
        let mut current = target;
        while let Some(edge_index) = state[current].reaching_edge {
            edges.push(edge_index);
            current = self.graph.edge(edge_index).source();
        }
        edges.reverse();
        Path::new(self.graph, edges)
    }
}

impl PathFinding for DijkstraPathFinder<'_> {
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn find_path(&self, source: VertexIndex, target: VertexIndex) -> Result<Path> {
        for vertex in [source, target] {
            if !self.graph.has_vertex(vertex) {
                return Err(Error::InvalidVertex(vertex.index()));
            }
        }

        let mut state = SearchState::new(self.graph.vertex_count());
        let found = self.search(source, target, &mut state);

        let source_id = self.graph.vertex(source).id();
        let target_id = self.graph.vertex(target).id();
        if !found {
            debug!(
                "no path from '{}' to '{}' ({} vertices settled)",
                source_id,
                target_id,
                state.settled()
            );
            return Err(Error::PathNotFound {
                from: source_id.to_string(),
                to: target_id.to_string(),
            });
        }

        let path = self.build_path(target, &state)?;
        debug!(
            "path from '{}' to '{}': {} edges, length {} ({} vertices settled)",
            source_id,
            target_id,
            path.len(),
            path.length(),
            state.settled()
        );
        Ok(path)
    }
}
