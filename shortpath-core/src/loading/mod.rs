//! This module is responsible for reading problem instances from text
//! and building the graph a search runs on.

mod matrix;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::info;

pub use matrix::parse_problem;

use crate::{Error, Graph, VertexId};

/// A graph together with the two vertices to connect
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemInstance {
    pub graph: Graph,
    pub source: VertexId,
    pub destination: VertexId,
}

/// Reads an adjacency matrix problem file.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or is malformed
pub fn load_problem(path: impl AsRef<Path>) -> Result<ProblemInstance, Error> {
    let path = path.as_ref();
    info!("Loading adjacency matrix from {}", path.display());

    let file = File::open(path).map_err(|e| {
        std::io::Error::new(
            e.kind(),
            format!("Failed to open file '{}': {}", path.display(), e),
        )
    })?;
    let problem = parse_problem(BufReader::new(file))?;

    info!(
        "Loaded graph with {} vertices and {} edges",
        problem.graph.vertex_count(),
        problem.graph.edge_count()
    );
    Ok(problem)
}
