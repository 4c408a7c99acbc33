//! Terrain mesh construction from elevation grids.

pub use self::builder::{
    TerrainMeshBuilder, TerrainMeshBuilderError, TerrainMeshFlags, DEFAULT_VERTICAL_SCALE,
};
pub use self::color_ramp::{Color, ColorRamp, ElevationBand, DEEP_MAX, HIGHLAND_MAX, LOWLAND_MAX};
pub use self::normals::vertex_normals;
pub use self::terrain_mesh::TerrainMesh;

mod builder;
mod color_ramp;
mod normals;
mod terrain_mesh;
