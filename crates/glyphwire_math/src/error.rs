//! Geometry error types
//!
//! All errors here are construction-time validation failures. A render pass
//! over an already-validated shape never produces an error.

use std::fmt;

/// Error type for shape and rotation construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    /// A shape needs at least 2 coordinates per vertex
    UnsupportedDimension(usize),
    /// A vertex does not match the dimension of the first vertex
    DimensionMismatch { expected: usize, found: usize },
    /// An edge references a vertex index past the end of the vertex list
    EdgeOutOfRange {
        edge: usize,
        vertex: usize,
        vertex_count: usize,
    },
    /// An edge connects a vertex to itself
    DegenerateEdge { edge: usize, vertex: usize },
    /// A rotation plane named the same axis twice
    DegenerateAxisPair(usize),
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::UnsupportedDimension(dim) => {
                write!(f, "Unsupported shape dimension {} (need at least 2)", dim)
            }
            GeometryError::DimensionMismatch { expected, found } => {
                write!(f, "Vertex dimension mismatch: expected {}, found {}", expected, found)
            }
            GeometryError::EdgeOutOfRange { edge, vertex, vertex_count } => {
                write!(
                    f,
                    "Edge {} references vertex {} but the shape has {} vertices",
                    edge, vertex, vertex_count
                )
            }
            GeometryError::DegenerateEdge { edge, vertex } => {
                write!(f, "Edge {} connects vertex {} to itself", edge, vertex)
            }
            GeometryError::DegenerateAxisPair(axis) => {
                write!(f, "Rotation plane names axis {} twice", axis)
            }
        }
    }
}

impl std::error::Error for GeometryError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_out_of_range_display() {
        let err = GeometryError::EdgeOutOfRange { edge: 3, vertex: 9, vertex_count: 4 };
        let msg = format!("{}", err);
        assert!(msg.contains("Edge 3"));
        assert!(msg.contains("vertex 9"));
        assert!(msg.contains("4 vertices"));
    }

    #[test]
    fn test_degenerate_axis_pair_display() {
        let err = GeometryError::DegenerateAxisPair(2);
        assert!(format!("{}", err).contains("axis 2 twice"));
    }

    #[test]
    fn test_debug_format() {
        let err = GeometryError::UnsupportedDimension(1);
        assert!(format!("{:?}", err).contains("UnsupportedDimension"));
    }
}
