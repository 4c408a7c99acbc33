/*!
terramesh
=========

**terramesh** converts heightmap elevation grids into indexed triangle
meshes with per-vertex color bands, ready for submission to a renderer.

The input is an [`ElevationGrid`]: a rectangular, row-major grid of
normalized elevation samples, typically decoded from the red channel of a
heightmap image. A [`TerrainMeshBuilder`] turns the grid into a
[`TerrainMesh`] (parallel vertex and color buffers plus a triangle index
buffer) in a single, pure, deterministic pass. The host application hands
the finished mesh to its rendering engine through the [`MeshSink`] trait.
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]

pub extern crate nalgebra as na;

pub mod grid;
pub mod math;
pub mod mesh;
pub mod render;

pub use crate::grid::{ElevationGrid, ElevationGridError};
pub use crate::mesh::{
    ColorRamp, ElevationBand, TerrainMesh, TerrainMeshBuilder, TerrainMeshBuilderError,
    TerrainMeshFlags,
};
pub use crate::render::MeshSink;
