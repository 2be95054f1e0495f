// Shortest path search strategies

pub mod backtrack;
pub mod dijkstra;
mod result;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use backtrack::backtrack_search;
pub use dijkstra::dijkstra_search;
pub use result::PathResult;

use crate::{Error, Graph, VertexId};

/// Available search strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// Exhaustive simple-path enumeration with branch-and-bound pruning
    Backtrack,
    /// Priority queue relaxation, polynomial time
    Dijkstra,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::Backtrack, Algorithm::Dijkstra];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Backtrack => "backtrack",
            Algorithm::Dijkstra => "dijkstra",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown algorithm '{s}', expected backtrack or dijkstra"))
    }
}

/// Runs a single search strategy between `source` and `destination`.
///
/// # Errors
///
/// Returns [`Error::VertexOutOfRange`] if either vertex is not in `graph`.
pub fn find_path(
    graph: &Graph,
    algorithm: Algorithm,
    source: VertexId,
    destination: VertexId,
) -> Result<PathResult, Error> {
    match algorithm {
        Algorithm::Backtrack => backtrack_search(graph, source, destination),
        Algorithm::Dijkstra => dijkstra_search(graph, source, destination),
    }
}

/// Shared input validation for both strategies
fn validate_endpoints(graph: &Graph, source: VertexId, destination: VertexId) -> Result<(), Error> {
    graph.validate_vertex(source)?;
    graph.validate_vertex(destination)
}
