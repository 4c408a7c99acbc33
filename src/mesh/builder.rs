use crate::grid::ElevationGrid;
use crate::math::{Point, Real};
use crate::mesh::{vertex_normals, ColorRamp, TerrainMesh};

/// The vertical scale applied to normalized elevations when none is
/// specified.
pub const DEFAULT_VERTICAL_SCALE: Real = 5.0;

#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
/// Flags controlling optional steps of terrain mesh construction.
pub struct TerrainMeshFlags(u8);

bitflags::bitflags! {
    impl TerrainMeshFlags: u8 {
        /// If this bit is set, smooth per-vertex normals are computed once
        /// the vertex and index buffers have been generated.
        const COMPUTE_NORMALS = 1 << 0;
    }
}

/// An error produced when building a [`TerrainMesh`].
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum TerrainMeshBuilderError {
    /// A terrain mesh needs at least one full grid cell.
    #[error("a {width}x{height} elevation grid cannot produce a mesh; both dimensions must be at least 2.")]
    InvalidGrid {
        /// The width of the rejected grid.
        width: usize,
        /// The height of the rejected grid.
        height: usize,
    },
    /// The vertical scale must be a positive finite multiplier.
    #[error("the vertical scale {0} is not positive and finite.")]
    InvalidScale(Real),
}

/// A builder converting an [`ElevationGrid`] into a [`TerrainMesh`].
///
/// [`TerrainMeshBuilder::build`] is a pure function of the grid and the
/// builder's parameters: no I/O, no shared state, and bit-identical output
/// for identical input. Distinct builds are fully independent and may run
/// concurrently against different grids.
#[derive(Clone, Debug, PartialEq)]
pub struct TerrainMeshBuilder {
    vertical_scale: Real,
    ramp: ColorRamp,
    flags: TerrainMeshFlags,
}

impl Default for TerrainMeshBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_VERTICAL_SCALE)
    }
}

impl TerrainMeshBuilder {
    /// Initializes a builder applying the given vertical scale to
    /// normalized elevations, with the default color ramp and no optional
    /// steps.
    pub fn new(vertical_scale: Real) -> Self {
        Self {
            vertical_scale,
            ramp: ColorRamp::default(),
            flags: TerrainMeshFlags::empty(),
        }
    }

    /// Sets the color ramp used to band vertices by elevation.
    pub fn with_ramp(mut self, ramp: ColorRamp) -> Self {
        self.ramp = ramp;
        self
    }

    /// Sets the flags controlling optional construction steps.
    pub fn with_flags(mut self, flags: TerrainMeshFlags) -> Self {
        self.flags = flags;
        self
    }

    /// The vertical scale applied by this builder.
    pub fn vertical_scale(&self) -> Real {
        self.vertical_scale
    }

    /// Builds the terrain mesh for the given elevation grid.
    ///
    /// Vertices are emitted in row-major (z, then x) order, one per grid
    /// sample, at `(x - W/2, y * vertical_scale, z - H/2)`, each colored by
    /// the band containing its own elevation. Every grid cell yields two
    /// triangles with a fixed winding: `[j, j + W, j + 1]` then
    /// `[j + 1, j + W, j + 1 + W]`, where `j` is the cell's top-left vertex.
    ///
    /// Fails with [`TerrainMeshBuilderError::InvalidGrid`] if either grid
    /// dimension is smaller than 2; a degenerate mesh is never emitted.
    pub fn build(&self, grid: &ElevationGrid) -> Result<TerrainMesh, TerrainMeshBuilderError> {
        let (width, height) = (grid.width(), grid.height());

        if width < 2 || height < 2 {
            return Err(TerrainMeshBuilderError::InvalidGrid { width, height });
        }

        if !self.vertical_scale.is_finite() || self.vertical_scale <= 0.0 {
            return Err(TerrainMeshBuilderError::InvalidScale(self.vertical_scale));
        }

        let num_vertices = width * height;
        let mut vertices = Vec::with_capacity(num_vertices);
        let mut colors = Vec::with_capacity(num_vertices);

        let half_w = width as Real / 2.0;
        let half_h = height as Real / 2.0;

        for z in 0..height {
            for x in 0..width {
                let y = grid.sample(x, z);
                vertices.push(Point::new(
                    x as Real - half_w,
                    y * self.vertical_scale,
                    z as Real - half_h,
                ));
                colors.push(self.ramp.color_at(y));
            }
        }

        let w = width as u32;
        let mut indices = Vec::with_capacity((width - 1) * (height - 1) * 2);

        for i in 0..height as u32 - 1 {
            let offset = i * w;
            for j in offset..offset + w - 1 {
                indices.push([j, j + w, j + 1]);
                indices.push([j + 1, j + w, j + 1 + w]);
            }
        }

        let normals = self
            .flags
            .contains(TerrainMeshFlags::COMPUTE_NORMALS)
            .then(|| vertex_normals(&vertices, &indices));

        log::debug!(
            "built a {}x{} terrain mesh ({} vertices, {} triangles)",
            width,
            height,
            num_vertices,
            indices.len()
        );

        Ok(TerrainMesh::new(vertices, colors, indices, normals))
    }
}

impl ElevationGrid {
    /// Builds the terrain mesh for this grid with the given vertical scale,
    /// the default color ramp and no optional steps.
    pub fn to_terrain_mesh(
        &self,
        vertical_scale: Real,
    ) -> Result<TerrainMesh, TerrainMeshBuilderError> {
        TerrainMeshBuilder::new(vertical_scale).build(self)
    }
}
