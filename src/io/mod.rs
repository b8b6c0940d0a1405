pub mod reader;
pub mod render;

pub use reader::GraphReader;
pub use render::{EdgeView, LineStringView, PathView, VertexView};
