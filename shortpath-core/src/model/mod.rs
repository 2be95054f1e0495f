//! Graph model shared by every search strategy
//!
//! The graph is built once and only read afterwards. Traversal state lives
//! in the searches, never on the vertices.

pub mod components;
pub mod graph;

pub use components::{AdjacencyEntry, Vertex};
pub use graph::Graph;
