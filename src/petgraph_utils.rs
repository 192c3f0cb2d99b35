use crate::distance::DistanceTable;
use crate::error::Result;
use crate::graph::{GraphBuilder, Vertex};
use crate::sequential::BellmanFord;
use petgraph::visit::{EdgeRef, IntoEdgeReferences, IntoNodeIdentifiers};

/// Runs [`BellmanFord`] on any petgraph graph. Go the other way with
/// [`crate::Graph::to_petgraph`].
///
/// Every node becomes a vertex, isolated ones included, so the table has one
/// entry per node.
pub fn bellman_ford<G>(graph: G, start: G::NodeId) -> Result<DistanceTable<G::NodeId>>
where
    G: IntoEdgeReferences + IntoNodeIdentifiers,
    G::NodeId: Vertex,
    G::EdgeWeight: Into<f64> + Copy,
{
    let mut builder = GraphBuilder::new();
    for node in graph.node_identifiers() {
        builder.add_vertex(node);
    }

    for edge in graph.edge_references() {
        let weight: f64 = (*edge.weight()).into();
        builder.add_edge(edge.source(), edge.target(), weight)?;
    }

    let our_graph = builder.build();
    BellmanFord::new(&our_graph).solve(&start)
}
