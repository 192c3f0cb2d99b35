use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};

use log::{debug, trace};
use rayon::prelude::*;

use crate::config::SolverConfig;
use crate::distance::DistanceTable;
use crate::error::{Error, Result};
use crate::graph::{Edge, Graph, Vertex};
use crate::parallel::atomic_f64::AtomicF64;
use crate::sequential::{BellmanFord, find_relaxable_edge};
use crate::utils::{INFINITY, relax};

pub mod atomic_f64;

/// Below this many edges a pass is cheaper on one thread.
pub const MIN_EDGES_FOR_PARALLEL: usize = 4096;

/// Edges handed to a single rayon task at minimum.
const MIN_EDGES_PER_TASK: usize = 512;

/// Bellman-Ford with each relaxation pass spread over a rayon pool.
///
/// Every pass relaxes all edges concurrently. A destination is lowered with
/// an atomic compare-and-swap minimum, so writes to the same vertex never
/// race. Passes are separated by the join at the end of each `for_each`, so
/// pass k+1 sees every write of pass k. Results match [`BellmanFord`].
pub struct ParallelBellmanFord<'g, V> {
    graph: &'g Graph<V>,
    config: SolverConfig,
    pool: Option<rayon::ThreadPool>,
    sequential_cutoff: usize,
}

impl<'g, V: Vertex + Send + Sync> ParallelBellmanFord<'g, V> {
    pub fn new(graph: &'g Graph<V>, config: SolverConfig) -> Result<Self> {
        let pool = if config.num_threads > 0 {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(config.num_threads)
                .build()
                .map_err(|e| Error::ThreadPool(e.to_string()))?;
            Some(pool)
        } else {
            None
        };

        Ok(ParallelBellmanFord {
            graph,
            config,
            pool,
            sequential_cutoff: MIN_EDGES_FOR_PARALLEL,
        })
    }

    /// Graphs with fewer edges than `cutoff` are solved sequentially.
    pub fn with_sequential_cutoff(mut self, cutoff: usize) -> Self {
        self.sequential_cutoff = cutoff;
        self
    }

    pub fn solve(&self, source: &V) -> Result<DistanceTable<V>> {
        if self.graph.edge_count() < self.sequential_cutoff {
            return BellmanFord::with_config(self.graph, self.config).solve(source);
        }

        match &self.pool {
            Some(pool) => pool.install(|| self.solve_parallel(source)),
            None => self.solve_parallel(source),
        }
    }

    fn solve_parallel(&self, source: &V) -> Result<DistanceTable<V>> {
        let source_idx = self
            .graph
            .index_of(source)
            .ok_or_else(|| Error::unknown_source(source))?;

        let n = self.graph.vertex_count();
        let edges = self.graph.edges();
        let distances: Vec<AtomicF64> = (0..n).map(|_| AtomicF64::new(INFINITY)).collect();
        distances[source_idx].store(0.0, Ordering::Relaxed);

        debug!(
            "parallel bellman-ford from {:?}: {} vertices, {} edges, {} threads",
            source,
            n,
            edges.len(),
            rayon::current_num_threads()
        );

        for pass in 1..n {
            let updated = relax_pass_parallel(edges, &distances);
            trace!("pass {}/{}: {} relaxations", pass, n - 1, updated);

            if updated == 0 && self.config.early_exit {
                debug!("converged after {} passes", pass);
                break;
            }
        }

        let distances: Vec<f64> = distances.into_iter().map(AtomicF64::into_inner).collect();

        if find_relaxable_edge(edges, &distances).is_some() {
            debug!("negative cycle detected");
            return Err(Error::NegativeCycle);
        }

        let predecessors = shortest_path_tree(n, edges, source_idx, &distances);
        Ok(DistanceTable::new(
            self.graph,
            source_idx,
            distances,
            predecessors,
        ))
    }
}

fn relax_pass_parallel(edges: &[Edge], distances: &[AtomicF64]) -> usize {
    let updated = AtomicUsize::new(0);
    edges
        .par_iter()
        .with_min_len(MIN_EDGES_PER_TASK)
        .for_each(|edge| {
            let tail = distances[edge.from].load(Ordering::Relaxed);
            let head = distances[edge.to].load(Ordering::Relaxed);
            if let Some(new_dist) = relax(tail, edge.weight, head) {
                let previous = distances[edge.to].fetch_min(new_dist, Ordering::Relaxed);
                if new_dist < previous {
                    updated.fetch_add(1, Ordering::Relaxed);
                }
            }
        });
    updated.into_inner()
}

/// Rebuilds predecessors from final distances with a BFS over tight edges
/// (`dist[u] + w == dist[v]`). BFS discovery order keeps the result a tree
/// even when zero-weight cycles make several edges tight.
fn shortest_path_tree(
    n: usize,
    edges: &[Edge],
    source: usize,
    distances: &[f64],
) -> Vec<Option<usize>> {
    let mut outgoing: Vec<Vec<usize>> = vec![Vec::new(); n];
    for (i, edge) in edges.iter().enumerate() {
        outgoing[edge.from].push(i);
    }

    let mut predecessors = vec![None; n];
    let mut seen = vec![false; n];
    let mut queue = VecDeque::new();
    seen[source] = true;
    queue.push_back(source);

    while let Some(u) = queue.pop_front() {
        for &i in &outgoing[u] {
            let edge = &edges[i];
            if !seen[edge.to] && distances[u] + edge.weight == distances[edge.to] {
                seen[edge.to] = true;
                predecessors[edge.to] = Some(u);
                queue.push_back(edge.to);
            }
        }
    }

    predecessors
}
