//! Wireframe shape definitions
//!
//! A shape is pure data: vertices in k-dimensional space plus undirected
//! edges between them. The hypercube family is generated by binary vertex
//! numbering: bit b of vertex index i picks +h or -h on axis b, and edges
//! connect indices differing in exactly one bit. A k-cube therefore has
//! 2^k vertices and k*2^(k-1) edges; k=2 and k=3 degenerate to the familiar
//! square and cube.

use crate::{GeometryError, VecN};
use serde::{Deserialize, Serialize};

/// An undirected edge between two vertex indices
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge(pub usize, pub usize);

/// A validated wireframe shape.
///
/// Immutable once constructed; rendering never mutates it. Construction
/// fails fast on any edge referencing a missing vertex, so a render pass
/// can index vertices without further checks. Deliberately not
/// deserializable: templates in the core crate are the serialized form,
/// and they resolve through this validating constructor.
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeDef {
    dimension: usize,
    vertices: Vec<VecN>,
    edges: Vec<Edge>,
}

impl ShapeDef {
    /// Build a shape from explicit vertex and edge lists.
    ///
    /// Validates that all vertices share one dimension (at least 2), that
    /// every edge index is in range, and that no edge is a self-loop.
    pub fn new(vertices: Vec<VecN>, edges: Vec<Edge>) -> Result<Self, GeometryError> {
        let dimension = vertices.first().map(VecN::dim).unwrap_or(0);
        if dimension < 2 {
            return Err(GeometryError::UnsupportedDimension(dimension));
        }
        for vertex in &vertices {
            if vertex.dim() != dimension {
                return Err(GeometryError::DimensionMismatch {
                    expected: dimension,
                    found: vertex.dim(),
                });
            }
        }
        for (index, edge) in edges.iter().enumerate() {
            for vertex in [edge.0, edge.1] {
                if vertex >= vertices.len() {
                    return Err(GeometryError::EdgeOutOfRange {
                        edge: index,
                        vertex,
                        vertex_count: vertices.len(),
                    });
                }
            }
            if edge.0 == edge.1 {
                return Err(GeometryError::DegenerateEdge {
                    edge: index,
                    vertex: edge.0,
                });
            }
        }
        Ok(Self { dimension, vertices, edges })
    }

    /// Generate the k-dimensional hypercube with the given full side length,
    /// centered at the origin.
    ///
    /// Vertex i sits at coordinates (±h, ..., ±h) with the sign on axis b
    /// taken from bit b of i; edge (i, j) exists exactly when i ^ j has a
    /// single set bit, kept once with i < j.
    pub fn hypercube(dimension: usize, size: f32) -> Result<Self, GeometryError> {
        if dimension < 2 {
            return Err(GeometryError::UnsupportedDimension(dimension));
        }
        let h = size * 0.5;
        let count = 1usize << dimension;

        let vertices = (0..count)
            .map(|i| {
                VecN::new(
                    (0..dimension)
                        .map(|bit| if i >> bit & 1 == 1 { h } else { -h })
                        .collect(),
                )
            })
            .collect();

        let mut edges = Vec::with_capacity(dimension * count / 2);
        for i in 0..count {
            for bit in 0..dimension {
                let j = i ^ (1 << bit);
                if i < j {
                    edges.push(Edge(i, j));
                }
            }
        }

        Self::new(vertices, edges)
    }

    /// Coordinate count per vertex
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn vertices(&self) -> &[VecN] {
        &self.vertices
    }

    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Largest vertex distance from the origin.
    ///
    /// Rotation-invariant, which makes it the right bound for fitting the
    /// projection: no rotated coordinate can exceed it.
    pub fn circumradius(&self) -> f32 {
        self.vertices
            .iter()
            .map(VecN::length)
            .fold(0.0, f32::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_counts() {
        let square = ShapeDef::hypercube(2, 21.0).unwrap();
        assert_eq!(square.vertex_count(), 4);
        assert_eq!(square.edge_count(), 4);
        assert_eq!(square.dimension(), 2);
    }

    #[test]
    fn test_cube_counts() {
        let cube = ShapeDef::hypercube(3, 2.0).unwrap();
        assert_eq!(cube.vertex_count(), 8);
        assert_eq!(cube.edge_count(), 12);
    }

    #[test]
    fn test_tesseract_counts() {
        let tesseract = ShapeDef::hypercube(4, 2.0).unwrap();
        assert_eq!(tesseract.vertex_count(), 16);
        assert_eq!(tesseract.edge_count(), 32);
    }

    #[test]
    fn test_hypercube_vertex_numbering() {
        let t = ShapeDef::hypercube(4, 2.0).unwrap();
        // Vertex 0 is all -h, vertex 15 all +h, vertex 5 = 0b0101 mixes
        assert_eq!(t.vertices()[0], VecN::new(vec![-1.0, -1.0, -1.0, -1.0]));
        assert_eq!(t.vertices()[15], VecN::new(vec![1.0, 1.0, 1.0, 1.0]));
        assert_eq!(t.vertices()[5], VecN::new(vec![1.0, -1.0, 1.0, -1.0]));
    }

    #[test]
    fn test_hypercube_edges_differ_in_one_bit() {
        let t = ShapeDef::hypercube(4, 2.0).unwrap();
        for edge in t.edges() {
            assert_eq!((edge.0 ^ edge.1).count_ones(), 1, "edge {:?}", edge);
            assert!(edge.0 < edge.1, "duplicate or reversed edge {:?}", edge);
        }
    }

    #[test]
    fn test_hypercube_rejects_low_dimension() {
        assert_eq!(
            ShapeDef::hypercube(1, 2.0),
            Err(GeometryError::UnsupportedDimension(1))
        );
    }

    #[test]
    fn test_explicit_shape() {
        // A plain 4-point outline built by hand rather than the generator
        let shape = ShapeDef::new(
            vec![
                VecN::new(vec![-1.0, -1.0]),
                VecN::new(vec![1.0, -1.0]),
                VecN::new(vec![1.0, 1.0]),
                VecN::new(vec![-1.0, 1.0]),
            ],
            vec![Edge(0, 1), Edge(1, 2), Edge(2, 3), Edge(3, 0)],
        )
        .unwrap();
        assert_eq!(shape.vertex_count(), 4);
        assert_eq!(shape.edge_count(), 4);
    }

    #[test]
    fn test_edge_out_of_range_rejected() {
        let result = ShapeDef::new(
            vec![VecN::new(vec![0.0, 0.0]), VecN::new(vec![1.0, 1.0])],
            vec![Edge(0, 2)],
        );
        assert_eq!(
            result,
            Err(GeometryError::EdgeOutOfRange { edge: 0, vertex: 2, vertex_count: 2 })
        );
    }

    #[test]
    fn test_self_loop_rejected() {
        let result = ShapeDef::new(
            vec![VecN::new(vec![0.0, 0.0]), VecN::new(vec![1.0, 1.0])],
            vec![Edge(1, 1)],
        );
        assert_eq!(result, Err(GeometryError::DegenerateEdge { edge: 0, vertex: 1 }));
    }

    #[test]
    fn test_mixed_dimensions_rejected() {
        let result = ShapeDef::new(
            vec![VecN::new(vec![0.0, 0.0]), VecN::new(vec![1.0, 1.0, 1.0])],
            vec![],
        );
        assert_eq!(
            result,
            Err(GeometryError::DimensionMismatch { expected: 2, found: 3 })
        );
    }

    #[test]
    fn test_circumradius() {
        let square = ShapeDef::hypercube(2, 21.0).unwrap();
        let expected = (10.5_f32 * 10.5 * 2.0).sqrt();
        assert!((square.circumradius() - expected).abs() < 0.0001);
    }
}
