#![allow(dead_code)]

use bellman_sssp::parser::load_edge_list;
use bellman_sssp::{DistanceTable, Graph, GraphBuilder};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::Path;

pub fn load_test_graph(name: &str) -> Graph<i64> {
    let path = Path::new("tests/test_data").join(name);
    load_edge_list(&path).unwrap()
}

/// `n` vertices `0..n` and `m` random edges with integral weights in
/// `min_weight..=max_weight`. Integral weights keep sums exact.
pub fn random_graph(n: u32, m: usize, min_weight: i32, max_weight: i32, seed: u64) -> Graph<u32> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut builder = GraphBuilder::new();
    for v in 0..n {
        builder.add_vertex(v);
    }

    for _ in 0..m {
        let from = rng.random_range(0..n);
        let to = rng.random_range(0..n);
        let weight = rng.random_range(min_weight..=max_weight) as f64;
        builder.add_edge(from, to, weight).unwrap();
    }

    builder.build()
}

/// Random edges that only go from lower to higher vertex ids, so no cycle
/// exists whatever the weights.
pub fn random_dag(n: u32, m: usize, seed: u64) -> Graph<u32> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut builder = GraphBuilder::new();
    for v in 0..n {
        builder.add_vertex(v);
    }

    for _ in 0..m {
        let a = rng.random_range(0..n);
        let b = rng.random_range(0..n);
        if a == b {
            continue;
        }
        let weight = rng.random_range(-10..=10) as f64;
        builder.add_edge(a.min(b), a.max(b), weight).unwrap();
    }

    builder.build()
}

/// Copy of `graph` with `0 -> 1 -> 2 -> 1` added, where the `1 <-> 2` loop
/// sums to -2. The result always has a negative cycle reachable from 0.
pub fn with_negative_cycle(graph: &Graph<u32>) -> Graph<u32> {
    let mut builder = GraphBuilder::new();
    for v in graph.vertices() {
        builder.add_vertex(*v);
    }
    for (u, v, w) in graph.edge_triples() {
        builder.add_edge(*u, *v, w).unwrap();
    }
    builder.add_edge(0, 1, 0.0).unwrap();
    builder.add_edge(1, 2, -1.0).unwrap();
    builder.add_edge(2, 1, -1.0).unwrap();
    builder.build()
}

/// Checks the postconditions every successful solve must satisfy.
pub fn assert_shortest_path_properties<V>(graph: &Graph<V>, table: &DistanceTable<V>)
where
    V: bellman_sssp::Vertex + std::fmt::Display,
{
    assert_eq!(table.len(), graph.vertex_count());
    assert_eq!(table.get(table.source()), Some(0.0));

    for (u, v, w) in graph.edge_triples() {
        let du = table.get(u).unwrap();
        let dv = table.get(v).unwrap();
        if du != bellman_sssp::INFINITY {
            assert!(dv <= du + w, "edge {} -> {} can still relax", u, v);
        }
    }
}
