//! Errors raised by the layout core

use thiserror::Error;

/// Errors that can occur while building a graph or running a layout
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// An adjacency row references a vertex outside `[0, vertex_count)`
    #[error(
        "malformed graph: vertex {vertex} has an edge to {target}, but only {vertex_count} vertices exist"
    )]
    MalformedGraph {
        vertex: usize,
        target: usize,
        vertex_count: usize,
    },

    /// A geometric operation was asked to work with a zero-length vector
    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(&'static str),

    /// Layout parameters were rejected before any snapshot was produced
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A snapshot does not cover exactly the vertices of the graph
    #[error("snapshot has {actual} positions, graph has {expected} vertices")]
    SnapshotMismatch { expected: usize, actual: usize },
}

/// Result type for layout operations
pub type LayoutResult<T> = Result<T, LayoutError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_graph_display() {
        let err = LayoutError::MalformedGraph {
            vertex: 1,
            target: 7,
            vertex_count: 3,
        };
        assert_eq!(
            err.to_string(),
            "malformed graph: vertex 1 has an edge to 7, but only 3 vertices exist"
        );
    }

    #[test]
    fn invalid_configuration_display() {
        let err = LayoutError::InvalidConfiguration("optimum distance must be positive".into());
        assert_eq!(
            err.to_string(),
            "invalid configuration: optimum distance must be positive"
        );
    }
}
