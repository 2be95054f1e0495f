use thiserror::Error;

use crate::VertexId;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Vertex index {index} is out of range for a graph with {vertex_count} vertices")]
    VertexOutOfRange {
        index: VertexId,
        vertex_count: usize,
    },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },
}
