#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::{Error, Result};
use crate::utils::HashMap;

/// Anything usable as a vertex identifier.
pub trait Vertex: Eq + Hash + Clone + Debug {}

impl<T: Eq + Hash + Clone + Debug> Vertex for T {}

/// A directed, weighted edge between two vertex indices of a [`Graph`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Edge {
    pub from: usize,
    pub to: usize,
    pub weight: f64,
}

/// An immutable directed graph with finite `f64` edge weights.
///
/// Vertices keep their insertion order; edges refer to them by index. Parallel
/// edges and self-loops are kept as they were added. Use [`GraphBuilder`] or
/// [`Graph::from_edges`] to construct one.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "RawGraph<V>",
        bound(deserialize = "V: Vertex + Deserialize<'de>")
    )
)]
pub struct Graph<V> {
    vertices: Vec<V>,
    edges: Vec<Edge>,
    #[cfg_attr(feature = "serde", serde(skip))]
    index: HashMap<V, usize>,
}

impl<V: Vertex> Graph<V> {
    pub fn from_edges<I>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (V, V, f64)>,
    {
        let mut builder = GraphBuilder::new();
        for (from, to, weight) in edges {
            builder.add_edge(from, to, weight)?;
        }
        Ok(builder.build())
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn vertex(&self, index: usize) -> Option<&V> {
        self.vertices.get(index)
    }

    pub fn index_of(&self, vertex: &V) -> Option<usize> {
        self.index.get(vertex).copied()
    }

    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.index.contains_key(vertex)
    }

    /// Iterates edges as `(from, to, weight)` with vertex identifiers resolved.
    pub fn edge_triples(&self) -> impl Iterator<Item = (&V, &V, f64)> + '_ {
        self.edges
            .iter()
            .map(|e| (&self.vertices[e.from], &self.vertices[e.to], e.weight))
    }

    #[cfg(feature = "bincode")]
    pub fn from_file(path: &std::path::Path) -> Result<Graph<V>>
    where
        V: for<'de> Deserialize<'de>,
    {
        let file = std::fs::File::open(path)?;
        let config = bincode::config::standard();
        let mut reader = std::io::BufReader::new(file);
        let graph: Graph<V> = bincode::serde::decode_from_std_read(&mut reader, config)
            .map_err(|e| Error::Bincode(e.to_string()))?;
        Ok(graph)
    }

    #[cfg(feature = "bincode")]
    pub fn to_file(&self, path: &std::path::Path) -> Result<()>
    where
        V: Serialize,
    {
        let file = std::fs::File::create(path)?;
        let config = bincode::config::standard();
        let mut writer = std::io::BufWriter::new(file);

        bincode::serde::encode_into_std_write(self, &mut writer, config)
            .map_err(|e| Error::Bincode(e.to_string()))?;

        Ok(())
    }

    #[cfg(feature = "petgraph")]
    pub fn to_petgraph(&self) -> petgraph::Graph<V, f64> {
        let mut pg_graph = petgraph::Graph::new();
        let nodes: Vec<_> = self
            .vertices
            .iter()
            .map(|v| pg_graph.add_node(v.clone()))
            .collect();

        for edge in &self.edges {
            pg_graph.add_edge(nodes[edge.from], nodes[edge.to], edge.weight);
        }
        pg_graph
    }
}

impl<V: PartialEq> PartialEq for Graph<V> {
    fn eq(&self, other: &Self) -> bool {
        self.vertices == other.vertices && self.edges == other.edges
    }
}

/// Collects vertices and edges, validating weights as they arrive.
#[derive(Debug, Clone)]
pub struct GraphBuilder<V> {
    vertices: Vec<V>,
    edges: Vec<Edge>,
    index: HashMap<V, usize>,
}

impl<V: Vertex> Default for GraphBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex> GraphBuilder<V> {
    pub fn new() -> Self {
        GraphBuilder {
            vertices: Vec::new(),
            edges: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Adds `vertex` if it is not present yet and returns its index.
    pub fn add_vertex(&mut self, vertex: V) -> usize {
        if let Some(&idx) = self.index.get(&vertex) {
            return idx;
        }
        let idx = self.vertices.len();
        self.index.insert(vertex.clone(), idx);
        self.vertices.push(vertex);
        idx
    }

    pub fn add_edge(&mut self, from: V, to: V, weight: f64) -> Result<()> {
        if !weight.is_finite() {
            return Err(Error::NonFiniteWeight { weight });
        }
        let from = self.add_vertex(from);
        let to = self.add_vertex(to);
        self.edges.push(Edge { from, to, weight });
        Ok(())
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn build(self) -> Graph<V> {
        Graph {
            vertices: self.vertices,
            edges: self.edges,
            index: self.index,
        }
    }
}

/// Wire shape of a [`Graph`]; re-validated on the way in.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawGraph<V> {
    vertices: Vec<V>,
    edges: Vec<Edge>,
}

#[cfg(feature = "serde")]
impl<V: Vertex> TryFrom<RawGraph<V>> for Graph<V> {
    type Error = Error;

    fn try_from(raw: RawGraph<V>) -> Result<Self> {
        let mut builder = GraphBuilder::new();
        for vertex in raw.vertices {
            let expected = builder.vertex_count();
            if builder.add_vertex(vertex.clone()) != expected {
                return Err(Error::DuplicateVertex {
                    vertex: format!("{vertex:?}"),
                });
            }
        }
        let vertices = builder.vertex_count();
        for edge in raw.edges {
            if edge.from >= vertices || edge.to >= vertices {
                return Err(Error::DanglingEdge {
                    from: edge.from,
                    to: edge.to,
                    vertices,
                });
            }
            if !edge.weight.is_finite() {
                return Err(Error::NonFiniteWeight {
                    weight: edge.weight,
                });
            }
            builder.edges.push(edge);
        }
        Ok(builder.build())
    }
}
