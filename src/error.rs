/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("source vertex {vertex} is not in the graph")]
    UnknownSource { vertex: String },

    #[error("graph contains a negative-weight cycle reachable from the source")]
    NegativeCycle,

    #[error("edge weight must be finite, got {weight}")]
    NonFiniteWeight { weight: f64 },

    #[error("edge {from} -> {to} references a vertex outside 0..{vertices}")]
    DanglingEdge {
        from: usize,
        to: usize,
        vertices: usize,
    },

    #[error("vertex {vertex} is listed more than once")]
    DuplicateVertex { vertex: String },

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "parallel")]
    #[error("failed to build thread pool: {0}")]
    ThreadPool(String),

    #[cfg(feature = "bincode")]
    #[error("bincode error: {0}")]
    Bincode(String),
}

impl Error {
    pub fn is_negative_cycle(&self) -> bool {
        matches!(self, Error::NegativeCycle)
    }

    pub fn is_unknown_source(&self) -> bool {
        matches!(self, Error::UnknownSource { .. })
    }

    pub(crate) fn unknown_source<V: std::fmt::Debug>(vertex: &V) -> Self {
        Error::UnknownSource {
            vertex: format!("{vertex:?}"),
        }
    }
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
