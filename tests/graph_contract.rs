//! Contract tests run against both storage backends.

use adjgraph::graph::{Graph, ListGraph, MatrixGraph};
use adjgraph::types::{Backend, VertexId};
use adjgraph::{build_graph, GraphBuilder};

fn backends(vertex_count: usize) -> Vec<Box<dyn Graph>> {
    vec![
        Box::new(MatrixGraph::new(vertex_count)),
        Box::new(ListGraph::new(vertex_count)),
    ]
}

// ==================== Edge Mutation Tests ====================

#[test]
fn test_add_edge_increments_count() {
    for mut g in backends(4) {
        assert_eq!(g.edge_count(), 0);
        g.add_edge(0, 1);
        assert!(g.edge_exists(0, 1), "{}", g.backend());
        assert!(!g.edge_exists(1, 0), "{}", g.backend());
        assert_eq!(g.edge_count(), 1);
    }
}

#[test]
fn test_add_edge_idempotent() {
    for mut g in backends(4) {
        g.add_edge(2, 3);
        g.add_edge(2, 3);
        assert_eq!(g.edge_count(), 1, "{}", g.backend());
    }
}

#[test]
fn test_self_loop_allowed() {
    for mut g in backends(3) {
        g.add_edge(1, 1);
        assert!(g.edge_exists(1, 1));
        assert_eq!(g.edge_count(), 1);
    }
}

#[test]
fn test_remove_edge_restores_count() {
    for mut g in backends(4) {
        g.add_edge(0, 2);
        let before = g.edge_count();
        g.add_edge(0, 1);
        g.remove_edge(0, 1);
        assert_eq!(g.edge_count(), before, "{}", g.backend());
        assert!(!g.edge_exists(0, 1));
        assert!(g.edge_exists(0, 2));
    }
}

#[test]
fn test_remove_missing_edge_is_noop() {
    for mut g in backends(3) {
        g.add_edge(0, 1);
        g.remove_edge(1, 0);
        g.remove_edge(2, 2);
        assert_eq!(g.edge_count(), 1);
    }
}

#[test]
fn test_remove_edge_discards_metadata() {
    for mut g in backends(3) {
        g.add_weighted_edge(0, 1, 9);
        g.set_edge_label(0, 1, "road");
        g.remove_edge(0, 1);
        assert_eq!(g.edge_label(0, 1), None);
        assert_eq!(g.edge_weight(0, 1), 0);

        // Re-adding must not resurrect the old metadata
        g.add_edge(0, 1);
        assert_eq!(g.edge_label(0, 1), None, "{}", g.backend());
        assert_eq!(g.edge_weight(0, 1), 0, "{}", g.backend());
    }
}

#[test]
fn test_add_weighted_edge_sets_weight() {
    for mut g in backends(3) {
        g.add_weighted_edge(0, 2, 42);
        assert!(g.edge_exists(0, 2));
        assert_eq!(g.edge_weight(0, 2), 42);
        assert_eq!(g.edge_count(), 1);
    }
}

#[test]
fn test_add_weighted_edge_keeps_existing_weight() {
    for mut g in backends(3) {
        g.add_weighted_edge(0, 1, 5);
        g.add_weighted_edge(0, 1, 99);
        assert_eq!(g.edge_weight(0, 1), 5, "{}", g.backend());
        assert_eq!(g.edge_count(), 1);

        g.add_edge(1, 2);
        g.add_weighted_edge(1, 2, 7);
        assert_eq!(g.edge_weight(1, 2), 0, "{}", g.backend());
    }
}

// ==================== Adjacency / Incidence Tests ====================

#[test]
fn test_are_adjacent_matches_either_direction() {
    for mut g in backends(4) {
        g.add_edge(0, 1);
        g.add_edge(3, 2);
        g.add_edge(2, 2);
        for i in 0..4 as VertexId {
            for j in 0..4 as VertexId {
                let expected = g.edge_exists(i, j) || g.edge_exists(j, i);
                assert_eq!(g.are_adjacent(i, j), expected, "({}, {})", i, j);
            }
        }
        assert!(g.are_adjacent(1, 0));
        assert!(g.are_adjacent(2, 2));
        assert!(!g.are_adjacent(0, 0));
    }
}

#[test]
fn test_edges_are_adjacent() {
    for mut g in backends(5) {
        g.add_edge(0, 1);
        g.add_edge(1, 2);
        g.add_edge(3, 4);
        g.add_edge(2, 0);
        assert!(g.edges_are_adjacent(0, 1, 1, 2)); // d1 == o2
        assert!(g.edges_are_adjacent(1, 2, 0, 1)); // o1 == d2
        assert!(g.edges_are_adjacent(0, 1, 2, 0)); // o1 == d2
        assert!(g.edges_are_adjacent(1, 2, 2, 0)); // d1 == o2
        assert!(g.edges_are_adjacent(0, 1, 0, 1)); // same edge
        assert!(!g.edges_are_adjacent(0, 1, 3, 4));
    }
}

#[test]
fn test_edges_are_adjacent_requires_both_edges() {
    for mut g in backends(3) {
        g.add_edge(0, 1);
        // (1, 2) shares vertex 1 but does not exist
        assert!(!g.edges_are_adjacent(0, 1, 1, 2));
        assert!(!g.edges_are_adjacent(1, 2, 0, 1));
    }
}

#[test]
fn test_edge_incides_on_vertex() {
    for mut g in backends(3) {
        g.add_edge(0, 1);
        assert!(g.edge_incides_on_vertex(0, 1, 0));
        assert!(g.edge_incides_on_vertex(0, 1, 1));
        assert!(!g.edge_incides_on_vertex(0, 1, 2));
        assert!(!g.edge_incides_on_vertex(1, 2, 1));
        assert!(!g.edge_incides_on_vertex(0, 1, -1));
    }
}

// ==================== Count / Shape Tests ====================

#[test]
fn test_is_empty_tracks_edge_count() {
    for mut g in backends(3) {
        assert!(g.is_empty());
        g.add_edge(0, 1);
        assert!(!g.is_empty());
        g.remove_edge(0, 1);
        assert!(g.is_empty());
        assert_eq!(g.is_empty(), g.edge_count() == 0);
    }
}

#[test]
fn test_vertex_count_fixed() {
    for mut g in backends(7) {
        g.add_edge(0, 6);
        g.add_edge(0, 7);
        assert_eq!(g.vertex_count(), 7);
    }
}

#[test]
fn test_is_complete_both_backends() {
    for backend in [Backend::Matrix, Backend::List] {
        let mut g = build_graph(backend, 3).unwrap();
        g.add_weighted_edge(0, 1, 5);
        g.add_weighted_edge(1, 2, 7);
        g.add_weighted_edge(0, 2, 2);
        assert_eq!(g.edge_count(), 3);
        assert!(!g.is_complete(), "{}", backend);

        g.add_edge(1, 0);
        g.add_edge(2, 1);
        g.add_edge(2, 0);
        assert_eq!(g.edge_count(), 6);
        assert!(g.is_complete(), "{}", backend);

        g.remove_edge(2, 0);
        assert!(!g.is_complete(), "{}", backend);
    }
}

#[test]
fn test_is_complete_trivial_graphs() {
    for n in [0, 1] {
        for g in backends(n) {
            assert!(g.is_complete(), "{} with {} vertices", g.backend(), n);
        }
    }
}

#[test]
fn test_is_complete_counts_self_loops() {
    for mut g in backends(2) {
        g.add_edge(0, 0);
        g.add_edge(1, 1);
        assert_eq!(g.edge_count(), 2);
        // Completeness is a pure count comparison against V * (V - 1)
        assert!(g.is_complete(), "{}", g.backend());
        assert!(!g.edge_exists(0, 1));

        g.add_edge(0, 1);
        assert!(!g.is_complete(), "{}", g.backend());
    }
}

#[test]
fn test_is_complete_builder() {
    for backend in [Backend::Matrix, Backend::List] {
        let g = GraphBuilder::new(backend, 5).complete().build().unwrap();
        assert_eq!(g.edge_count(), 20);
        assert!(g.is_complete(), "{}", backend);
    }
}

// ==================== Metadata Tests ====================

#[test]
fn test_vertex_metadata_last_write_wins() {
    for mut g in backends(3) {
        assert_eq!(g.vertex_label(1), None);
        assert_eq!(g.vertex_weight(1), 0);
        g.set_vertex_label(1, "first");
        g.set_vertex_label(1, "second");
        g.set_vertex_weight(1, 3);
        g.set_vertex_weight(1, -8);
        assert_eq!(g.vertex_label(1), Some("second"));
        assert_eq!(g.vertex_weight(1), -8);

        // Independent of edges
        g.add_edge(1, 2);
        g.remove_edge(1, 2);
        assert_eq!(g.vertex_label(1), Some("second"));
    }
}

#[test]
fn test_edge_metadata_requires_edge() {
    for mut g in backends(3) {
        g.set_edge_label(0, 1, "ghost");
        g.set_edge_weight(0, 1, 4);
        assert_eq!(g.edge_label(0, 1), None);
        assert_eq!(g.edge_weight(0, 1), 0);

        g.add_edge(0, 1);
        assert_eq!(g.edge_label(0, 1), None, "{}", g.backend());
        assert_eq!(g.edge_weight(0, 1), 0, "{}", g.backend());

        g.set_edge_label(0, 1, "real");
        g.set_edge_weight(0, 1, 4);
        assert_eq!(g.edge_label(0, 1), Some("real"));
        assert_eq!(g.edge_weight(0, 1), 4);
        // Direction matters
        assert_eq!(g.edge_label(1, 0), None);
    }
}

// ==================== Out-of-Range Tests ====================

#[test]
fn test_out_of_range_queries_return_defaults() {
    for mut g in backends(3) {
        g.add_edge(0, 1);
        for bad in [-1 as VertexId, 3, 100, VertexId::MIN, VertexId::MAX] {
            assert!(!g.edge_exists(bad, 0));
            assert!(!g.edge_exists(0, bad));
            assert!(!g.are_adjacent(bad, 1));
            assert!(!g.edges_are_adjacent(0, 1, bad, 1));
            assert!(!g.edge_incides_on_vertex(bad, 1, 1));
            assert_eq!(g.vertex_label(bad), None);
            assert_eq!(g.vertex_weight(bad), 0);
            assert_eq!(g.edge_label(bad, 1), None);
            assert_eq!(g.edge_weight(0, bad), 0);
            assert!(g.out_neighbors(bad).is_empty());
            assert_eq!(g.out_degree(bad), 0);
        }
    }
}

#[test]
fn test_out_of_range_mutators_change_nothing() {
    for mut g in backends(3) {
        g.add_weighted_edge(0, 1, 2);
        g.set_edge_label(0, 1, "keep");
        g.set_vertex_label(2, "two");
        let before = g.snapshot();

        for bad in [-1 as VertexId, 3, 42] {
            g.add_edge(bad, 0);
            g.add_edge(0, bad);
            g.add_weighted_edge(bad, bad, 9);
            g.remove_edge(bad, 1);
            g.set_vertex_label(bad, "x");
            g.set_vertex_weight(bad, 9);
            g.set_edge_label(bad, 1, "x");
            g.set_edge_weight(0, bad, 9);
        }

        assert_eq!(g.snapshot(), before, "{}", g.backend());
    }
}

// ==================== Listing / Snapshot Tests ====================

#[test]
fn test_out_neighbors_and_degree() {
    for mut g in backends(4) {
        g.add_edge(1, 3);
        g.add_edge(1, 0);
        g.add_edge(2, 1);
        let mut n = g.out_neighbors(1);
        n.sort_unstable();
        assert_eq!(n, vec![0, 3]);
        assert_eq!(g.out_degree(1), 2);
        assert_eq!(g.out_degree(0), 0);
        assert_eq!(g.edges().len(), g.edge_count());
    }
}

#[test]
fn test_snapshot_contents() {
    for backend in [Backend::Matrix, Backend::List] {
        let g = GraphBuilder::new(backend, 2)
            .weighted_edge(0, 1, 5)
            .edge_label(0, 1, "x")
            .vertex_label(0, "a")
            .vertex_weight(1, 3)
            .build()
            .unwrap();
        let snap = g.snapshot();
        assert_eq!(snap.backend, backend);
        assert_eq!(snap.vertex_count, 2);
        assert_eq!(snap.edge_count, 1);
        assert_eq!(snap.vertices[0].label.as_deref(), Some("a"));
        assert_eq!(snap.vertices[1].weight, 3);
        assert_eq!(snap.edges.len(), 1);
        assert_eq!(snap.edges[0].label.as_deref(), Some("x"));
        assert_eq!(snap.edges[0].weight, 5);

        let json: serde_json::Value = serde_json::from_str(&snap.to_json().unwrap()).unwrap();
        assert_eq!(json["backend"], backend.name());
        assert_eq!(json["edges"][0]["destination"], 1);
        assert!(json["vertices"][1]["label"].is_null());
    }
}
