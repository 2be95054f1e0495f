use std::collections::HashSet;

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use proptest::prelude::*;
use shortpath_core::prelude::*;

type Matrix = Vec<Vec<Option<Weight>>>;

fn matrix_problem(
    weights: impl Strategy<Value = Weight> + Clone,
) -> impl Strategy<Value = (Matrix, VertexId, VertexId)> {
    (1usize..=7).prop_flat_map(move |n| {
        (
            prop::collection::vec(
                prop::collection::vec(prop::option::weighted(0.4, weights.clone()), n),
                n,
            ),
            0..n,
            0..n,
        )
    })
}

fn problem() -> impl Strategy<Value = (Matrix, VertexId, VertexId)> {
    matrix_problem(0u32..20)
}

/// Mixes small weights with weights close to `Weight::MAX`, so many paths overflow
fn heavy_problem() -> impl Strategy<Value = (Matrix, VertexId, VertexId)> {
    matrix_problem(prop_oneof![0u32..50, (Weight::MAX - 100)..=Weight::MAX])
}

fn build_graph(matrix: &Matrix) -> Graph {
    let mut graph = Graph::new(matrix.len());
    for (from, row) in matrix.iter().enumerate() {
        for (to, weight) in row.iter().enumerate() {
            if let Some(weight) = weight {
                graph.add_edge(from, to, *weight).unwrap();
            }
        }
    }
    graph
}

/// Independent reference distance computed with petgraph
fn reference_distance(matrix: &Matrix, source: VertexId, destination: VertexId) -> Option<Weight> {
    let mut graph = DiGraph::<(), Weight>::new();
    let nodes: Vec<NodeIndex> = (0..matrix.len()).map(|_| graph.add_node(())).collect();
    for (from, row) in matrix.iter().enumerate() {
        for (to, weight) in row.iter().enumerate() {
            if let Some(weight) = weight {
                graph.add_edge(nodes[from], nodes[to], *weight);
            }
        }
    }
    let distances = petgraph::algo::dijkstra(&graph, nodes[source], Some(nodes[destination]), |e| {
        *e.weight()
    });
    distances.get(&nodes[destination]).copied()
}

fn assert_valid_path(graph: &Graph, source: VertexId, destination: VertexId, result: &PathResult) {
    let PathResult::Found { weight, path } = result else {
        return;
    };
    assert_eq!(path.first(), Some(&source), "path must start at the source");
    assert_eq!(path.last(), Some(&destination), "path must end at the destination");
    let distinct: HashSet<_> = path.iter().collect();
    assert_eq!(distinct.len(), path.len(), "path repeats a vertex: {path:?}");
    assert_eq!(graph.path_weight(path), Some(*weight), "weight mismatch for {path:?}");
}

proptest! {
    #[test]
    fn strategies_agree_with_reference((matrix, source, destination) in problem()) {
        let graph = build_graph(&matrix);
        let expected = reference_distance(&matrix, source, destination);

        let backtrack = backtrack_search(&graph, source, destination).unwrap();
        let dijkstra = dijkstra_search(&graph, source, destination).unwrap();

        prop_assert_eq!(backtrack.weight(), expected);
        prop_assert_eq!(dijkstra.weight(), expected);
        prop_assert_eq!(backtrack.is_found(), dijkstra.is_found());
    }

    #[test]
    fn strategies_agree_when_paths_overflow((matrix, source, destination) in heavy_problem()) {
        let graph = build_graph(&matrix);

        let backtrack = backtrack_search(&graph, source, destination).unwrap();
        let dijkstra = dijkstra_search(&graph, source, destination).unwrap();

        prop_assert_eq!(backtrack.weight(), dijkstra.weight());
        assert_valid_path(&graph, source, destination, &backtrack);
        assert_valid_path(&graph, source, destination, &dijkstra);
    }

    #[test]
    fn reported_paths_are_simple_and_consistent((matrix, source, destination) in problem()) {
        let graph = build_graph(&matrix);
        for algorithm in Algorithm::ALL {
            let result = find_path(&graph, algorithm, source, destination).unwrap();
            assert_valid_path(&graph, source, destination, &result);
            if !result.is_found() {
                prop_assert!(result.path().is_empty());
            }
        }
    }

    #[test]
    fn searches_are_repeatable((matrix, source, destination) in problem()) {
        let graph = build_graph(&matrix);
        let snapshot = graph.clone();
        for algorithm in Algorithm::ALL {
            let first = find_path(&graph, algorithm, source, destination).unwrap();
            let second = find_path(&graph, algorithm, source, destination).unwrap();
            prop_assert_eq!(first, second);
        }
        prop_assert_eq!(graph, snapshot);
    }

    #[test]
    fn source_to_itself_is_free((matrix, source, _destination) in problem()) {
        let graph = build_graph(&matrix);
        for algorithm in Algorithm::ALL {
            let result = find_path(&graph, algorithm, source, source).unwrap();
            prop_assert_eq!(result, PathResult::Found { weight: 0, path: vec![source] });
        }
    }
}
