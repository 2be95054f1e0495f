//! Graphs shared by the unit tests

use crate::Graph;

/// 0 -> 1 (1), 0 -> 2 (4), 1 -> 2 (2), 1 -> 3 (6), 2 -> 3 (3).
/// Shortest 0 -> 3 is [0, 1, 2, 3] with weight 6; 3 has no outgoing edges.
pub(crate) fn diamond() -> Graph {
    let mut graph = Graph::new(4);
    graph.add_edge(0, 1, 1).unwrap();
    graph.add_edge(0, 2, 4).unwrap();
    graph.add_edge(1, 2, 2).unwrap();
    graph.add_edge(1, 3, 6).unwrap();
    graph.add_edge(2, 3, 3).unwrap();
    graph
}
