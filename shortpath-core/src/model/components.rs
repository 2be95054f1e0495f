//! Graph components - vertices and their outgoing edges

use crate::{VertexId, Weight};

/// Outgoing edge of a vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdjacencyEntry {
    /// Vertex the edge points to
    pub target: VertexId,
    /// Cost of traversing the edge
    pub weight: Weight,
}

/// Graph vertex with its outgoing edges in insertion order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex {
    index: VertexId,
    edges: Vec<AdjacencyEntry>,
}

impl Vertex {
    pub(crate) fn new(index: VertexId) -> Self {
        Self {
            index,
            edges: Vec::new(),
        }
    }

    pub fn index(&self) -> VertexId {
        self.index
    }

    pub fn edges(&self) -> &[AdjacencyEntry] {
        &self.edges
    }

    pub fn out_degree(&self) -> usize {
        self.edges.len()
    }

    pub(crate) fn push_edge(&mut self, target: VertexId, weight: Weight) {
        self.edges.push(AdjacencyEntry { target, weight });
    }
}
