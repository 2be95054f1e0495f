//! Exhaustive shortest path search over simple paths.
//!
//! Every simple path leaving the source is explored depth first, following
//! each vertex's edges in insertion order. A branch is cut as soon as its
//! accumulated weight can no longer beat the best path found so far. The
//! search runs on an explicit frame stack, so its depth is bounded by the
//! heap rather than by the thread's call stack.
//!
//! Running time is exponential in the worst case; use
//! [`dijkstra_search`](super::dijkstra_search) for anything but small graphs.

use fixedbitset::FixedBitSet;
use log::{debug, trace};

use super::{PathResult, validate_endpoints};
use crate::{AdjacencyEntry, Error, Graph, VertexId, Weight};

/// Vertex currently on the working path together with the position of the
/// next edge to try and the accumulated weight before the vertex was entered.
#[derive(Debug, Clone, Copy)]
struct Frame {
    vertex: VertexId,
    next_edge: usize,
    entry_weight: Weight,
}

#[derive(Debug)]
struct BestPath {
    weight: Weight,
    path: Vec<VertexId>,
}

/// Scratch state owned by a single search call
#[derive(Debug)]
struct BacktrackState<'a> {
    graph: &'a Graph,
    destination: VertexId,
    path: Vec<VertexId>,
    weight: Weight,
    visited: FixedBitSet,
    best: Option<BestPath>,
    // Number of vertices entered, for diagnostics only.
    expanded: usize,
}

impl<'a> BacktrackState<'a> {
    fn new(graph: &'a Graph, destination: VertexId) -> Self {
        let vertex_count = graph.vertex_count();
        Self {
            graph,
            destination,
            path: Vec::with_capacity(vertex_count),
            weight: 0,
            visited: FixedBitSet::with_capacity(vertex_count),
            best: None,
            expanded: 0,
        }
    }

    /// A branch with accumulated `weight` cannot beat the best known path.
    fn is_pruned(&self, weight: Weight) -> bool {
        self.best.as_ref().is_some_and(|best| weight >= best.weight)
    }

    fn enter(&mut self, vertex: VertexId, weight: Weight, frames: &mut Vec<Frame>) {
        frames.push(Frame {
            vertex,
            next_edge: 0,
            entry_weight: self.weight,
        });
        self.path.push(vertex);
        self.visited.insert(vertex);
        self.weight = weight;
        self.expanded += 1;
    }

    /// Restores the state exactly as it was before `frame.vertex` was entered.
    fn leave(&mut self, frame: Frame) {
        self.visited.set(frame.vertex, false);
        self.path.pop();
        self.weight = frame.entry_weight;
    }

    fn record(&mut self, destination_weight: Weight) {
        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend_from_slice(&self.path);
        path.push(self.destination);
        trace!("Improved path to {} with weight {destination_weight}", self.destination);
        self.best = Some(BestPath {
            weight: destination_weight,
            path,
        });
    }

    fn run(&mut self, source: VertexId) {
        let graph = self.graph;
        let mut frames = Vec::with_capacity(graph.vertex_count());
        self.enter(source, 0, &mut frames);

        while let Some(frame) = frames.last_mut() {
            let edge = if self.is_pruned(self.weight) {
                None
            } else {
                graph.neighbours(frame.vertex).get(frame.next_edge).copied()
            };

            let Some(AdjacencyEntry { target, weight }) = edge else {
                // All candidates tried, or the bound made the rest pointless
                let finished = *frame;
                frames.pop();
                self.leave(finished);
                continue;
            };
            frame.next_edge += 1;

            if self.visited.contains(target) {
                continue;
            }
            let Some(extended) = self.weight.checked_add(weight) else {
                continue;
            };
            if self.is_pruned(extended) {
                continue;
            }

            if target == self.destination {
                self.record(extended);
            } else {
                self.enter(target, extended, &mut frames);
            }
        }
    }

    fn into_result(self) -> PathResult {
        match self.best {
            Some(BestPath { weight, path }) => PathResult::Found { weight, path },
            None => PathResult::NoPath,
        }
    }
}

/// Finds a minimum weight simple path from `source` to `destination` by
/// exhaustive backtracking.
///
/// Among several optimal paths the first one discovered wins, which depends
/// on edge insertion order.
///
/// # Errors
///
/// Returns [`Error::VertexOutOfRange`] if either vertex is not in `graph`.
pub fn backtrack_search(
    graph: &Graph,
    source: VertexId,
    destination: VertexId,
) -> Result<PathResult, Error> {
    validate_endpoints(graph, source, destination)?;

    if source == destination {
        return Ok(PathResult::Found {
            weight: 0,
            path: vec![source],
        });
    }

    let mut state = BacktrackState::new(graph, destination);
    state.run(source);

    debug!(
        "Backtracking from {source} to {destination} expanded {} vertices",
        state.expanded
    );
    debug_assert!(state.path.is_empty() && state.visited.count_ones(..) == 0);

    Ok(state.into_result())
}
