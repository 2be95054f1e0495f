//! Dijkstra's algorithm with a lazily cleaned binary heap.
//!
//! Stale queue entries are not removed when a vertex gets a better distance;
//! they are skipped when popped because the vertex is already visited.

mod state;

use std::collections::BinaryHeap;

use fixedbitset::FixedBitSet;
use log::debug;

use super::{PathResult, validate_endpoints};
use crate::{Error, Graph, VertexId, Weight};
use state::State;

/// Finds a minimum weight path from `source` to `destination`.
///
/// Distances only change on strict improvement, so for a given edge order
/// the reconstructed path is deterministic.
///
/// # Errors
///
/// Returns [`Error::VertexOutOfRange`] if either vertex is not in `graph`.
pub fn dijkstra_search(
    graph: &Graph,
    source: VertexId,
    destination: VertexId,
) -> Result<PathResult, Error> {
    validate_endpoints(graph, source, destination)?;

    let vertex_count = graph.vertex_count();
    let mut distances: Vec<Option<Weight>> = vec![None; vertex_count];
    let mut predecessors: Vec<Option<VertexId>> = vec![None; vertex_count];
    let mut visited = FixedBitSet::with_capacity(vertex_count);
    let mut heap = BinaryHeap::new();

    // Source vertex is the only one we currently know
    distances[source] = Some(0);
    heap.push(State {
        cost: 0,
        vertex: source,
    });

    let mut settled = 0usize;
    while let Some(State { cost, vertex }) = heap.pop() {
        // Stale entry, the vertex was settled with a smaller distance
        if visited.put(vertex) {
            continue;
        }
        settled += 1;

        for edge in graph.neighbours(vertex) {
            if visited.contains(edge.target) {
                continue;
            }
            let Some(next_cost) = cost.checked_add(edge.weight) else {
                continue;
            };

            if distances[edge.target].is_none_or(|best| next_cost < best) {
                distances[edge.target] = Some(next_cost);
                predecessors[edge.target] = Some(vertex);
                heap.push(State {
                    cost: next_cost,
                    vertex: edge.target,
                });
            }
        }
    }

    debug!("Dijkstra from {source} settled {settled} of {vertex_count} vertices");

    let Some(weight) = distances[destination] else {
        return Ok(PathResult::NoPath);
    };

    Ok(PathResult::Found {
        weight,
        path: reconstruct_path(&predecessors, destination),
    })
}

/// Follows predecessor links back from `destination` and reverses them
fn reconstruct_path(predecessors: &[Option<VertexId>], destination: VertexId) -> Vec<VertexId> {
    let mut path: Vec<VertexId> =
        std::iter::successors(Some(destination), |&vertex| predecessors[vertex]).collect();
    path.reverse(); // Now path is from source to destination
    path
}
