//! Fixed-size directed graph with weighted adjacency lists

use itertools::Itertools;

use super::components::{AdjacencyEntry, Vertex};
use crate::{Error, VertexId, Weight};

/// Directed weighted graph with a vertex set fixed at construction.
///
/// Edges can only be appended. Every stored edge points to a valid vertex,
/// which is checked in [`Graph::add_edge`], so searches never see a dangling
/// target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    vertices: Vec<Vertex>,
}

impl Graph {
    /// Creates a graph with `vertex_count` vertices indexed `0..vertex_count`
    /// and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertices: (0..vertex_count).map(Vertex::new).collect(),
        }
    }

    /// Appends the edge `from -> to` to the adjacency list of `from`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VertexOutOfRange`] if either endpoint is not a vertex
    /// of this graph.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId, weight: Weight) -> Result<(), Error> {
        self.validate_vertex(from)?;
        self.validate_vertex(to)?;
        self.vertices[from].push_edge(to, weight);
        Ok(())
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.vertices.iter().map(Vertex::out_degree).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn vertex(&self, index: VertexId) -> Option<&Vertex> {
        self.vertices.get(index)
    }

    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.iter()
    }

    /// Outgoing edges of `index` in insertion order.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range; callers validate first.
    pub fn neighbours(&self, index: VertexId) -> &[AdjacencyEntry] {
        self.vertices[index].edges()
    }

    /// check if such vertex exists
    pub fn validate_vertex(&self, index: VertexId) -> Result<(), Error> {
        if index < self.vertices.len() {
            Ok(())
        } else {
            Err(Error::VertexOutOfRange {
                index,
                vertex_count: self.vertices.len(),
            })
        }
    }

    /// Total weight of walking `path` edge by edge.
    ///
    /// Returns `None` for an empty path, an unknown vertex, a missing edge
    /// between consecutive vertices or an overflowing sum. When parallel
    /// edges exist the lightest one is taken.
    pub fn path_weight(&self, path: &[VertexId]) -> Option<Weight> {
        let (&first, _) = path.split_first()?;
        self.vertex(first)?;

        path.iter()
            .tuple_windows()
            .try_fold(0 as Weight, |total, (&from, &to)| {
                let hop = self
                    .vertex(from)?
                    .edges()
                    .iter()
                    .filter(|edge| edge.target == to)
                    .map(|edge| edge.weight)
                    .min()?;
                total.checked_add(hop)
            })
    }
}
