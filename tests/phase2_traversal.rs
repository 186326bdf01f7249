//! Phase 2 tests: neighbor ordering, BFS, DFS.

use std::collections::HashSet;

use adjacency_graph::format::GraphReader;
use adjacency_graph::graph::{
    bfs, dfs, sorted_neighbors, traverse, Graph, GraphBuilder, TraversalKind,
};
use adjacency_graph::types::GraphError;

use rand::Rng;

fn load(text: &str) -> Graph {
    GraphReader::default().read_str(text).unwrap()
}

/// A: [B, C], B: [A, D], C: [A, E]; input lists are deliberately unsorted.
const TREE: &str = "5\nA C B -1\nB D A -1\nC E A -1\nD B -1\nE C -1\n";

fn random_graph(n: usize, edges: usize) -> Graph {
    let mut rng = rand::thread_rng();
    let labels: Vec<String> = (0..n).map(|i| format!("V{}", i)).collect();
    let mut builder = GraphBuilder::new();
    for l in &labels {
        builder = builder.vertex(l, &[]);
    }
    for _ in 0..edges {
        let a = rng.gen_range(0..n);
        let b = rng.gen_range(0..n);
        if a != b {
            builder = builder.edge(&labels[a], &labels[b]);
        }
    }
    builder.build().unwrap()
}

// ==================== Neighbor Ordering Tests ====================

#[test]
fn test_sorted_neighbors_example() {
    let graph = load("3\nA C B -1\nB A -1\nC A -1\n");
    assert_eq!(sorted_neighbors(&graph, 0), vec![1, 2]);
    assert_eq!(sorted_neighbors(&graph, 1), vec![0]);
}

#[test]
fn test_sorted_neighbors_by_label_not_index() {
    // Load order Z, M, A; sorting must follow labels.
    let graph = load("3\nZ A M -1\nM Z -1\nA Z -1\n");
    assert_eq!(sorted_neighbors(&graph, 0), vec![2, 1]);
}

#[test]
fn test_sorted_neighbors_drops_unresolved() {
    let graph = load("2\nA GHOST B -1\nB A -1\n");
    assert_eq!(sorted_neighbors(&graph, 0), vec![1]);
}

#[test]
fn test_sorted_neighbors_excludes_self() {
    let graph = load("2\nA A B -1\nB A -1\n");
    assert_eq!(sorted_neighbors(&graph, 0), vec![1]);
}

#[test]
fn test_sorted_neighbors_isolated_and_out_of_range() {
    let graph = load("1\nA -1\n");
    assert!(sorted_neighbors(&graph, 0).is_empty());
    assert!(sorted_neighbors(&graph, 9).is_empty());
}

#[test]
fn test_sorted_neighbors_properties_random() {
    let graph = random_graph(40, 120);
    for v in 0..graph.vertex_count() {
        let neighbors = sorted_neighbors(&graph, v);
        assert!(!neighbors.contains(&v));
        for pair in neighbors.windows(2) {
            assert!(graph.label(pair[0]) <= graph.label(pair[1]));
        }
    }
}

// ==================== BFS Tests ====================

#[test]
fn test_bfs_example() {
    let graph = load("3\nA B C -1\nB A -1\nC A -1\n");
    let result = bfs(&graph, "A").unwrap();
    assert_eq!(result.joined(), "A B C");
    assert_eq!(result.count(), 3);
    assert_eq!(result.order, vec![0, 1, 2]);
}

#[test]
fn test_bfs_level_order() {
    let graph = load(TREE);
    assert_eq!(bfs(&graph, "A").unwrap().joined(), "A B C D E");
    assert_eq!(bfs(&graph, "D").unwrap().joined(), "D B A C E");
}

#[test]
fn test_bfs_cycle_visits_once() {
    let graph = load("3\nA B C -1\nB A C -1\nC A B -1\n");
    let result = bfs(&graph, "B").unwrap();
    assert_eq!(result.joined(), "B A C");
}

#[test]
fn test_bfs_only_reachable_component() {
    let graph = load("4\nA B -1\nB A -1\nC D -1\nD C -1\n");
    let result = bfs(&graph, "C").unwrap();
    assert_eq!(result.joined(), "C D");
    assert_eq!(result.count(), 2);
}

#[test]
fn test_bfs_start_not_found() {
    let graph = load("1\nA -1\n");
    match bfs(&graph, "Q").unwrap_err() {
        GraphError::VertexNotFound(label) => assert_eq!(label, "Q"),
        e => panic!("Expected VertexNotFound, got {:?}", e),
    }
}

// ==================== DFS Tests ====================

#[test]
fn test_dfs_example() {
    let graph = load("3\nA B C -1\nB A -1\nC A -1\n");
    assert_eq!(dfs(&graph, "A").unwrap().joined(), "A B C");
}

#[test]
fn test_dfs_preorder() {
    let graph = load(TREE);
    assert_eq!(dfs(&graph, "A").unwrap().joined(), "A B D C E");
    assert_eq!(dfs(&graph, "E").unwrap().joined(), "E C A B D");
}

#[test]
fn test_dfs_backtracks_to_earlier_frames() {
    // A-B, B-C, A-D: after exhausting B's branch, DFS resumes at A.
    let graph = load("4\nA B D -1\nB A C -1\nC B -1\nD A -1\n");
    assert_eq!(dfs(&graph, "A").unwrap().joined(), "A B C D");
    assert_eq!(bfs(&graph, "A").unwrap().joined(), "A B D C");
}

#[test]
fn test_dfs_isolated_start() {
    let graph = load("2\nA -1\nB -1\n");
    let result = dfs(&graph, "B").unwrap();
    assert_eq!(result.joined(), "B");
    assert_eq!(result.count(), 1);
}

#[test]
fn test_dfs_start_not_found() {
    let graph = load("1\nA -1\n");
    assert!(matches!(
        dfs(&graph, "missing"),
        Err(GraphError::VertexNotFound(_))
    ));
}

#[test]
fn test_dfs_long_chain_uses_explicit_stack() {
    let n = 3000;
    let labels: Vec<String> = (0..n).map(|i| format!("N{:04}", i)).collect();
    let mut builder = GraphBuilder::new();
    for l in &labels {
        builder = builder.vertex(l, &[]);
    }
    for pair in labels.windows(2) {
        builder = builder.edge(&pair[0], &pair[1]);
    }
    let graph = builder.build().unwrap();

    let result = dfs(&graph, "N0000").unwrap();
    assert_eq!(result.count(), n);
    assert_eq!(result.labels.last().unwrap().as_str(), "N2999");
}

// ==================== Cross-Traversal Properties ====================

#[test]
fn test_traverse_dispatch() {
    let graph = load(TREE);
    let b = traverse(&graph, "A", TraversalKind::Breadth).unwrap();
    let d = traverse(&graph, "A", TraversalKind::Depth).unwrap();
    assert_eq!(b.kind, TraversalKind::Breadth);
    assert_eq!(d.kind, TraversalKind::Depth);
    assert_eq!(b, bfs(&graph, "A").unwrap());
    assert_eq!(d, dfs(&graph, "A").unwrap());
}

#[test]
fn test_traversal_kind_names() {
    assert_eq!(TraversalKind::from_name("BFS"), Some(TraversalKind::Breadth));
    assert_eq!(TraversalKind::from_name("dfs"), Some(TraversalKind::Depth));
    assert_eq!(TraversalKind::from_name("ids"), None);
    assert_eq!(TraversalKind::Depth.to_string(), "DFS");
}

#[test]
fn test_bfs_dfs_same_component_random() {
    for _ in 0..10 {
        let graph = random_graph(30, 35);
        for start in graph.labels() {
            let b = bfs(&graph, start.as_str()).unwrap();
            let d = dfs(&graph, start.as_str()).unwrap();

            let b_set: HashSet<usize> = b.order.iter().copied().collect();
            let d_set: HashSet<usize> = d.order.iter().copied().collect();
            assert_eq!(b_set.len(), b.count(), "BFS visited a vertex twice");
            assert_eq!(d_set.len(), d.count(), "DFS visited a vertex twice");
            assert_eq!(b_set, d_set);
            assert_eq!(b.order[0], d.order[0]);
        }
    }
}

#[test]
fn test_traversal_deterministic() {
    let graph = random_graph(50, 100);
    let first = graph.label(0).unwrap().as_str().to_string();
    assert_eq!(bfs(&graph, &first).unwrap(), bfs(&graph, &first).unwrap());
    assert_eq!(dfs(&graph, &first).unwrap(), dfs(&graph, &first).unwrap());
}
