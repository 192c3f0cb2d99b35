#[cfg(feature = "serde")]
use serde::Serialize;

use crate::graph::{Graph, Vertex};
use crate::utils::{HashMap, INFINITY, is_reachable};

/// Distance from the source to one vertex.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct DistanceEntry<V> {
    pub vertex: V,
    /// [`INFINITY`] when the vertex is unreachable.
    pub distance: f64,
    #[cfg_attr(feature = "serde", serde(skip))]
    predecessor: Option<usize>,
}

/// Shortest distances from one source to every vertex of a graph.
///
/// Holds exactly one entry per graph vertex, in the graph's vertex order.
/// Produced fresh by every solve and owned by the caller.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct DistanceTable<V> {
    source: V,
    entries: Vec<DistanceEntry<V>>,
    #[cfg_attr(feature = "serde", serde(skip))]
    index: HashMap<V, usize>,
}

impl<V: Vertex> DistanceTable<V> {
    pub(crate) fn new(
        graph: &Graph<V>,
        source: usize,
        distances: Vec<f64>,
        predecessors: Vec<Option<usize>>,
    ) -> Self {
        debug_assert_eq!(distances.len(), graph.vertex_count());
        debug_assert_eq!(predecessors.len(), graph.vertex_count());

        let mut index = HashMap::with_capacity(graph.vertex_count());
        let entries = graph
            .vertices()
            .iter()
            .zip(distances.into_iter().zip(predecessors))
            .enumerate()
            .map(|(i, (vertex, (distance, predecessor)))| {
                index.insert(vertex.clone(), i);
                DistanceEntry {
                    vertex: vertex.clone(),
                    distance,
                    predecessor,
                }
            })
            .collect();

        DistanceTable {
            source: graph.vertices()[source].clone(),
            entries,
            index,
        }
    }

    pub fn source(&self) -> &V {
        &self.source
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distance to `vertex`, [`INFINITY`] if unreachable, `None` if `vertex`
    /// is not in the graph.
    pub fn get(&self, vertex: &V) -> Option<f64> {
        self.index.get(vertex).map(|&i| self.entries[i].distance)
    }

    pub fn is_reachable(&self, vertex: &V) -> bool {
        self.get(vertex).is_some_and(is_reachable)
    }

    /// The vertex preceding `vertex` on a shortest path from the source.
    pub fn predecessor(&self, vertex: &V) -> Option<&V> {
        let i = *self.index.get(vertex)?;
        self.entries[i]
            .predecessor
            .map(|p| &self.entries[p].vertex)
    }

    /// Reconstructs a shortest path from the source to `goal`, both ends
    /// included. `None` when `goal` is unknown or unreachable.
    pub fn path_to(&self, goal: &V) -> Option<Vec<V>> {
        let goal = *self.index.get(goal)?;
        if !is_reachable(self.entries[goal].distance) {
            return None;
        }

        let mut path = Vec::new();
        let mut current = goal;
        // A predecessor chain never repeats a vertex, so it is at most len() long.
        for _ in 0..self.entries.len() {
            path.push(self.entries[current].vertex.clone());
            if self.entries[current].vertex == self.source {
                path.reverse();
                return Some(path);
            }
            current = self.entries[current].predecessor?;
        }
        None
    }

    pub fn entries(&self) -> &[DistanceEntry<V>] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = (&V, f64)> + '_ {
        self.entries.iter().map(|e| (&e.vertex, e.distance))
    }

    /// Vertices with a finite distance, in graph order.
    pub fn reachable(&self) -> impl Iterator<Item = (&V, f64)> + '_ {
        self.iter().filter(|&(_, d)| is_reachable(d))
    }

    pub fn unreachable_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.distance == INFINITY)
            .count()
    }

    pub fn to_map(&self) -> HashMap<V, f64> {
        self.iter().map(|(v, d)| (v.clone(), d)).collect()
    }
}

impl<V: PartialEq> PartialEq for DistanceTable<V> {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.entries == other.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // a -> b -> c, d isolated
    fn sample_table() -> DistanceTable<&'static str> {
        let mut builder = crate::graph::GraphBuilder::new();
        builder.add_edge("a", "b", 2.0).unwrap();
        builder.add_edge("b", "c", -1.0).unwrap();
        builder.add_vertex("d");
        let graph = builder.build();

        DistanceTable::new(
            &graph,
            0,
            vec![0.0, 2.0, 1.0, INFINITY],
            vec![None, Some(0), Some(1), None],
        )
    }

    #[test]
    fn lookups() {
        let table = sample_table();
        assert_eq!(table.source(), &"a");
        assert_eq!(table.len(), 4);
        assert_eq!(table.get(&"c"), Some(1.0));
        assert_eq!(table.get(&"d"), Some(INFINITY));
        assert_eq!(table.get(&"zz"), None);
        assert!(table.is_reachable(&"b"));
        assert!(!table.is_reachable(&"d"));
        assert!(!table.is_reachable(&"zz"));
        assert_eq!(table.unreachable_count(), 1);
    }

    #[test]
    fn predecessor_and_path() {
        let table = sample_table();
        assert_eq!(table.predecessor(&"c"), Some(&"b"));
        assert_eq!(table.predecessor(&"a"), None);
        assert_eq!(table.path_to(&"c"), Some(vec!["a", "b", "c"]));
        assert_eq!(table.path_to(&"a"), Some(vec!["a"]));
        assert_eq!(table.path_to(&"d"), None);
    }

    #[test]
    fn iteration_follows_graph_order() {
        let table = sample_table();
        let order: Vec<_> = table.iter().map(|(v, _)| *v).collect();
        assert_eq!(order, vec!["a", "b", "c", "d"]);

        let reachable: Vec<_> = table.reachable().map(|(v, _)| *v).collect();
        assert_eq!(reachable, vec!["a", "b", "c"]);

        let map = table.to_map();
        assert_eq!(map.len(), 4);
        assert_eq!(map[&"b"], 2.0);
    }

    #[cfg(feature = "serde_json")]
    #[test]
    fn json_encodes_unreachable_as_null() {
        let table = sample_table();
        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(json["source"], "a");
        assert_eq!(json["entries"][3]["vertex"], "d");
        assert!(json["entries"][3]["distance"].is_null());
    }
}
