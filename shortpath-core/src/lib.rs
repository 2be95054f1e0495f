//! Shortest path search over weighted directed graphs.
//!
//! Two interchangeable strategies work on the same [`Graph`]: an exhaustive
//! branch-and-bound backtracking search and Dijkstra's algorithm. Both return
//! a [`PathResult`] holding the total weight and the vertex sequence.

pub mod error;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod routing;

#[cfg(test)]
mod test_support;

pub use error::Error;
pub use loading::{ProblemInstance, load_problem, parse_problem};
pub use model::{AdjacencyEntry, Graph, Vertex};
pub use routing::{Algorithm, PathResult, backtrack_search, dijkstra_search, find_path};

/// Index of a vertex inside a [`Graph`]
pub type VertexId = usize;
/// Edge weight, also used for accumulated path weights
pub type Weight = u32;
