//! End-to-end tests: shell command flows and invariant sweeps.

use std::io::Cursor;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use social_graph::cli::{commands, shell};
use social_graph::engine::QueryEngine;
use social_graph::graph::SocialGraph;
use social_graph::types::error::GraphError;

// ==================== Shell Session Tests ====================

#[test]
fn test_scripted_session_mutates_graph() {
    let script = "\
add Alice
add Bob
add Carol
connect Alice Bob
connect Bob Carol
path Alice Carol
influencer
clusters
stats
quit
";
    let mut graph = SocialGraph::new();
    shell::run(Cursor::new(script), &mut graph, false, false).unwrap();

    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.edge_count(), 2);
    assert!(graph.has_connection("Alice", "Bob"));
    assert!(graph.has_connection("Bob", "Carol"));
}

#[test]
fn test_session_continues_after_errors() {
    // Every faulty line is reported and skipped; the session keeps going
    let script = "\
add Alice
add Alice
connect Alice Ghost
path Alice Nobody
remove Nobody
nonsense command here
add Bob
connect Alice Bob
";
    let mut graph = SocialGraph::new();
    shell::run(Cursor::new(script), &mut graph, false, false).unwrap();

    assert_eq!(graph.node_count(), 2);
    assert!(graph.has_connection("Alice", "Bob"));
}

#[test]
fn test_session_quit_stops_processing() {
    let script = "\
add Alice
quit
add Bob
";
    let mut graph = SocialGraph::new();
    shell::run(Cursor::new(script), &mut graph, false, false).unwrap();

    assert_eq!(graph.node_count(), 1);
    assert!(!graph.contains("Bob"));
}

#[test]
fn test_json_session() {
    let script = "\
add Alice
add Alice
export
quit
";
    let mut graph = SocialGraph::new();
    shell::run(Cursor::new(script), &mut graph, true, false).unwrap();
    assert_eq!(graph.node_count(), 1);
}

// ==================== Command Layer Tests ====================

#[test]
fn test_commands_report_engine_errors() {
    let mut graph = SocialGraph::new();
    let engine = QueryEngine::new();

    commands::cmd_add_person(&mut graph, "Alice", false).unwrap();
    assert!(matches!(
        commands::cmd_add_person(&mut graph, "Alice", false).unwrap_err(),
        GraphError::AlreadyExists(_)
    ));
    assert!(matches!(
        commands::cmd_connect(&mut graph, "Alice", "Ghost", false).unwrap_err(),
        GraphError::EndpointsNotFound(_, _)
    ));
    assert!(matches!(
        commands::cmd_influencer(&graph, &engine, false),
        Ok(())
    ));
    assert!(matches!(
        commands::cmd_path(&graph, &engine, "Alice", "Ghost", false).unwrap_err(),
        GraphError::PersonNotFound(_)
    ));
}

#[test]
fn test_full_command_flow() {
    let mut graph = SocialGraph::new();
    let engine = QueryEngine::new();

    for name in ["Alice", "Bob", "Carol", "Dave"] {
        commands::cmd_add_person(&mut graph, name, false).unwrap();
    }
    commands::cmd_connect(&mut graph, "Alice", "Bob", false).unwrap();
    commands::cmd_connect(&mut graph, "Bob", "Carol", false).unwrap();

    commands::cmd_path(&graph, &engine, "Alice", "Carol", false).unwrap();
    commands::cmd_neighbors(&graph, &engine, "Bob", false).unwrap();
    commands::cmd_clusters(&graph, &engine, false).unwrap();
    commands::cmd_stats(&graph, &engine, false).unwrap();
    commands::cmd_export(&graph, false).unwrap();

    commands::cmd_disconnect(&mut graph, "Bob", "Carol", false).unwrap();
    commands::cmd_remove_person(&mut graph, "Alice", false).unwrap();

    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.edge_count(), 0);
}

// ==================== Invariant Sweep ====================

/// Apply a random operation, ignoring expected errors.
fn random_op(graph: &mut SocialGraph, rng: &mut StdRng, pool: &[&str]) {
    let a = pool[rng.gen_range(0..pool.len())];
    let b = pool[rng.gen_range(0..pool.len())];
    match rng.gen_range(0..4) {
        0 => {
            let _ = graph.add_person(a);
        }
        1 => {
            let _ = graph.remove_person(a);
        }
        2 => {
            let _ = graph.add_connection(a, b);
        }
        _ => {
            let _ = graph.remove_connection(a, b);
        }
    }
}

/// Check the full invariant set over the current state.
fn assert_invariants(graph: &SocialGraph) {
    // Every edge references two present nodes, and no self-loops
    for edge in graph.edges() {
        let (lo, hi) = edge.endpoints();
        assert_ne!(lo, hi, "self-loop slipped in");
        assert!(graph.person(lo).is_some(), "dangling edge endpoint {}", lo);
        assert!(graph.person(hi).is_some(), "dangling edge endpoint {}", hi);
    }

    // No duplicate pairs (edge list is kept sorted)
    for pair in graph.edges().windows(2) {
        assert_ne!(pair[0], pair[1], "duplicate edge slipped in");
    }

    // Identity table in lockstep with the node set
    for person in graph.people() {
        assert_eq!(graph.resolve(&person.name).unwrap(), person.id);
    }

    // Symmetry of the adjacency relation
    for person in graph.people() {
        for &neighbor in graph.neighbors(person.id) {
            assert!(
                graph.neighbors(neighbor).contains(&person.id),
                "asymmetric adjacency between {} and {}",
                person.id,
                neighbor
            );
        }
    }

    // Partition law
    let engine = QueryEngine::new();
    let clusters = engine.components(&graph.snapshot());
    let total: usize = clusters.iter().map(Vec::len).sum();
    assert_eq!(total, graph.node_count());
}

#[test]
fn test_random_operation_sweep_holds_invariants() {
    let pool = ["Ann", "Ben", "Cy", "Dee", "Eve", "Flo", "Gus", "Hal"];
    let mut rng = StdRng::seed_from_u64(42);
    let mut graph = SocialGraph::new();

    for step in 0..500 {
        random_op(&mut graph, &mut rng, &pool);
        if step % 25 == 0 {
            assert_invariants(&graph);
        }
    }
    assert_invariants(&graph);
}

#[test]
fn test_ids_stay_stable_through_churn() {
    let mut graph = SocialGraph::new();
    graph.add_person("Keeper").unwrap();
    let keeper = graph.resolve("Keeper").unwrap();

    let mut rng = StdRng::seed_from_u64(7);
    let pool = ["P1", "P2", "P3", "P4"];
    for _ in 0..200 {
        random_op(&mut graph, &mut rng, &pool);
        assert_eq!(graph.resolve("Keeper").unwrap(), keeper);
    }
}
