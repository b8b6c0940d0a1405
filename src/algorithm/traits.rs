use crate::graph::{Path, VertexIndex};
use crate::Result;

/// Trait for single-pair shortest path algorithms bound to one graph
pub trait PathFinding {
    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Finds the cheapest directed path from `source` to `target`
    ///
    /// Fails with [`Error::PathNotFound`](crate::Error::PathNotFound) when
    /// `target` cannot be reached from `source`.
    fn find_path(&self, source: VertexIndex, target: VertexIndex) -> Result<Path>;
}
