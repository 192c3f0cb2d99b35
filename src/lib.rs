//! Single-source shortest paths on graphs with negative edge weights.
//!
//! [`BellmanFord`] relaxes every edge `|V| - 1` times, then makes one more
//! scan. An edge that still relaxes means a negative-weight cycle is
//! reachable from the source, reported as [`Error::NegativeCycle`].
//!
//! ```
//! use bellman_sssp::{Graph, bellman_ford};
//!
//! let graph = Graph::from_edges([(1, 2, 4.0), (1, 3, 1.0), (3, 2, 1.0)])?;
//! let distances = bellman_ford(&graph, &1)?;
//! assert_eq!(distances.get(&2), Some(2.0));
//! # Ok::<(), bellman_sssp::Error>(())
//! ```

pub mod config;
pub mod distance;
pub mod error;
pub mod graph;
pub mod parser;
pub mod report;
pub mod sequential;
pub mod utils;

#[cfg(feature = "parallel")]
pub mod parallel;

#[cfg(feature = "petgraph")]
pub mod petgraph_utils;

pub use config::SolverConfig;
pub use distance::{DistanceEntry, DistanceTable};
pub use error::{Error, Result};
pub use graph::{Edge, Graph, GraphBuilder, Vertex};
pub use sequential::{BellmanFord, bellman_ford};
pub use utils::INFINITY;

#[cfg(feature = "parallel")]
pub use parallel::ParallelBellmanFord;
