use crate::math::{Point, Real, Vector};
use crate::mesh::Color;

/// An indexed triangle mesh with one color per vertex.
///
/// The buffers follow the standard indexed-triangle-mesh-with-vertex-colors
/// convention consumed by rendering engines: `vertices` and `colors` are
/// parallel, and each element of `indices` references three vertices
/// forming one triangle. All triangles share the same winding.
///
/// A mesh is built once per heightmap load and never mutated afterwards;
/// reloading a heightmap produces a fresh, independently owned mesh.
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Clone, Debug, PartialEq)]
pub struct TerrainMesh {
    vertices: Vec<Point>,
    colors: Vec<Color>,
    indices: Vec<[u32; 3]>,
    normals: Option<Vec<Vector>>,
}

impl TerrainMesh {
    pub(crate) fn new(
        vertices: Vec<Point>,
        colors: Vec<Color>,
        indices: Vec<[u32; 3]>,
        normals: Option<Vec<Vector>>,
    ) -> Self {
        Self {
            vertices,
            colors,
            indices,
            normals,
        }
    }

    /// The vertex positions, in row-major (z, then x) grid order.
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// The vertex colors, parallel to [`TerrainMesh::vertices`].
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// The triangle index buffer, two triangles per grid cell.
    pub fn indices(&self) -> &[[u32; 3]] {
        &self.indices
    }

    /// The smooth per-vertex normals, if their computation was requested
    /// through [`TerrainMeshFlags::COMPUTE_NORMALS`](crate::mesh::TerrainMeshFlags::COMPUTE_NORMALS).
    pub fn normals(&self) -> Option<&[Vector]> {
        self.normals.as_deref()
    }

    /// The number of vertices of this mesh.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// The number of triangles of this mesh.
    pub fn num_triangles(&self) -> usize {
        self.indices.len()
    }

    /// The vertex positions as a flat buffer of 3 floats per vertex.
    pub fn flat_positions(&self) -> Vec<Real> {
        self.vertices.iter().flat_map(|p| [p.x, p.y, p.z]).collect()
    }

    /// The vertex colors as a flat buffer of 4 floats per vertex.
    pub fn flat_colors(&self) -> Vec<Real> {
        self.colors.iter().flatten().copied().collect()
    }

    /// The triangle indices as a flat buffer of 3 indices per triangle.
    pub fn flat_indices(&self) -> Vec<u32> {
        self.indices.iter().flatten().copied().collect()
    }
}
