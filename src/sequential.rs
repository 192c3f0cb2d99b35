use log::{debug, trace};

use crate::config::SolverConfig;
use crate::distance::DistanceTable;
use crate::error::{Error, Result};
use crate::graph::{Edge, Graph, Vertex};
use crate::utils::{INFINITY, relax};

/// Single-source shortest paths with negative weights (Bellman-Ford).
///
/// Runs `|V| - 1` relaxation passes over the edge list followed by one
/// verification scan. The graph is only borrowed, so one solver can answer
/// any number of sources.
pub struct BellmanFord<'g, V> {
    graph: &'g Graph<V>,
    config: SolverConfig,
}

impl<'g, V: Vertex> BellmanFord<'g, V> {
    pub fn new(graph: &'g Graph<V>) -> Self {
        Self::with_config(graph, SolverConfig::default())
    }

    pub fn with_config(graph: &'g Graph<V>, config: SolverConfig) -> Self {
        BellmanFord { graph, config }
    }

    pub fn config(&self) -> SolverConfig {
        self.config
    }

    /// Computes distances from `source` to every vertex.
    ///
    /// Fails with [`Error::UnknownSource`] before doing any work if `source`
    /// is not in the graph, and with [`Error::NegativeCycle`] if a
    /// negative-weight cycle is reachable from it.
    pub fn solve(&self, source: &V) -> Result<DistanceTable<V>> {
        let source_idx = self
            .graph
            .index_of(source)
            .ok_or_else(|| Error::unknown_source(source))?;

        let n = self.graph.vertex_count();
        let edges = self.graph.edges();
        let mut distances = vec![INFINITY; n];
        let mut predecessors = vec![None; n];
        distances[source_idx] = 0.0;

        debug!(
            "bellman-ford from {:?}: {} vertices, {} edges",
            source,
            n,
            edges.len()
        );

        for pass in 1..n {
            let updated = relax_pass(edges, &mut distances, &mut predecessors);
            trace!("pass {}/{}: {} relaxations", pass, n - 1, updated);

            if updated == 0 && self.config.early_exit {
                debug!("converged after {} passes", pass);
                break;
            }
        }

        if let Some(edge) = find_relaxable_edge(edges, &distances) {
            debug!(
                "negative cycle detected at edge {:?} -> {:?}",
                self.graph.vertices()[edge.from],
                self.graph.vertices()[edge.to]
            );
            return Err(Error::NegativeCycle);
        }

        Ok(DistanceTable::new(
            self.graph,
            source_idx,
            distances,
            predecessors,
        ))
    }
}

/// Shorthand for `BellmanFord::new(graph).solve(source)`.
pub fn bellman_ford<V: Vertex>(graph: &Graph<V>, source: &V) -> Result<DistanceTable<V>> {
    BellmanFord::new(graph).solve(source)
}

/// One in-order pass over `edges`. Returns how many relaxations happened.
fn relax_pass(edges: &[Edge], distances: &mut [f64], predecessors: &mut [Option<usize>]) -> usize {
    let mut updated = 0;
    for edge in edges {
        if let Some(new_dist) = relax(distances[edge.from], edge.weight, distances[edge.to]) {
            distances[edge.to] = new_dist;
            predecessors[edge.to] = Some(edge.from);
            updated += 1;
        }
    }
    updated
}

/// First edge that can still be relaxed, if any. After `|V| - 1` passes such
/// an edge proves a negative cycle reachable from the source.
pub(crate) fn find_relaxable_edge<'e>(edges: &'e [Edge], distances: &[f64]) -> Option<&'e Edge> {
    edges
        .iter()
        .find(|e| relax(distances[e.from], e.weight, distances[e.to]).is_some())
}
