//! The boundary between terrain meshes and the host rendering engine.

use crate::mesh::TerrainMesh;

/// A consumer of finished terrain meshes, typically a rendering engine
/// uploading the buffers to the GPU.
///
/// This crate never implements a renderer itself. The host application
/// implements this trait over whatever engine it embeds, feeding it the
/// [`TerrainMesh::flat_positions`], [`TerrainMesh::flat_colors`] and
/// [`TerrainMesh::flat_indices`] buffers, and hands a mesh over once per
/// heightmap load.
pub trait MeshSink {
    /// The error produced when the sink rejects a mesh.
    type Error;

    /// Submits a freshly built mesh for display, replacing any terrain
    /// previously submitted by the same source.
    fn submit_mesh(&mut self, mesh: &TerrainMesh) -> Result<(), Self::Error>;
}
