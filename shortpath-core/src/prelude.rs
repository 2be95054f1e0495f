// Re-export key components
pub use crate::Error;
pub use crate::loading::{ProblemInstance, load_problem, parse_problem};
pub use crate::model::{AdjacencyEntry, Graph, Vertex};
pub use crate::routing::{Algorithm, PathResult, backtrack_search, dijkstra_search, find_path};

// Core scalar types
pub use crate::VertexId;
pub use crate::Weight;
