//! Criterion benchmarks for the social graph engine.

use std::collections::HashSet;

use criterion::{criterion_group, criterion_main, Criterion};
use rand::Rng;

use social_graph::engine::QueryEngine;
use social_graph::graph::{GraphBuilder, SocialGraph};

/// Build a random network using the builder for fast construction.
fn make_network(people: usize, connections_per_person: usize) -> SocialGraph {
    let mut rng = rand::thread_rng();
    let mut builder = GraphBuilder::new();

    let ids: Vec<_> = (0..people)
        .map(|i| builder.person(&format!("person_{}", i)))
        .collect();

    let mut seen = HashSet::new();
    for &id in &ids {
        for _ in 0..connections_per_person {
            let other = ids[rng.gen_range(0..ids.len())];
            if other != id {
                let key = if id < other { (id, other) } else { (other, id) };
                if seen.insert(key) {
                    builder.connect(id, other);
                }
            }
        }
    }

    builder.build().expect("generated network is valid")
}

fn bench_add_person(c: &mut Criterion) {
    let mut graph = make_network(10_000, 3);
    let mut counter = 0u64;

    c.bench_function("add_person_to_10k", |b| {
        b.iter(|| {
            counter += 1;
            let _ = graph.add_person(&format!("bench_{}", counter));
        })
    });
}

fn bench_add_connection(c: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let mut graph = make_network(10_000, 3);

    c.bench_function("add_connection_to_10k", |b| {
        b.iter(|| {
            let a = format!("person_{}", rng.gen_range(0..10_000));
            let b2 = format!("person_{}", rng.gen_range(0..10_000));
            let _ = graph.add_connection(&a, &b2);
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let graph = make_network(10_000, 3);

    c.bench_function("snapshot_10k", |b| b.iter(|| graph.snapshot()));
}

fn bench_shortest_path(c: &mut Criterion) {
    let graph = make_network(10_000, 3);
    let snapshot = graph.snapshot();
    let engine = QueryEngine::new();

    c.bench_function("shortest_path_10k", |b| {
        b.iter(|| {
            let _ = engine.shortest_path(&snapshot, "person_0", "person_9999");
        })
    });
}

fn bench_components(c: &mut Criterion) {
    let graph = make_network(10_000, 3);
    let snapshot = graph.snapshot();
    let engine = QueryEngine::new();

    c.bench_function("components_10k", |b| b.iter(|| engine.components(&snapshot)));
}

fn bench_max_degree(c: &mut Criterion) {
    let graph = make_network(10_000, 3);
    let snapshot = graph.snapshot();
    let engine = QueryEngine::new();

    c.bench_function("max_degree_10k", |b| {
        b.iter(|| engine.max_degree(&snapshot).unwrap())
    });
}

criterion_group!(
    benches,
    bench_add_person,
    bench_add_connection,
    bench_snapshot,
    bench_shortest_path,
    bench_components,
    bench_max_degree
);
criterion_main!(benches);
