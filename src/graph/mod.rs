pub mod directed;
pub mod generators;
pub mod model;
pub mod path;

pub use directed::Graph;
pub use model::{Edge, EdgeIndex, Vertex, VertexIndex};
pub use path::Path;
