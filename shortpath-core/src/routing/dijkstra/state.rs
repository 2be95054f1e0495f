use std::cmp::Ordering;

use crate::{VertexId, Weight};

/// Queue entry: a vertex with the distance it had when it was pushed
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub(super) struct State {
    pub(super) cost: Weight,
    pub(super) vertex: VertexId,
}

// Implement Ord for State to use in BinaryHeap
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap by cost (reversed from standard Rust BinaryHeap),
        // lower vertex index first on equal cost
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
