use na::DMatrix;

use crate::math::Real;

/// An error produced when constructing an [`ElevationGrid`].
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum ElevationGridError {
    /// Found an elevation sample outside of the normalized `[0, 1]` domain.
    #[error("the elevation sample {index} has value {value} outside of [0, 1].")]
    OutOfRangeSample {
        /// The row-major index of the offending sample.
        index: usize,
        /// The offending value.
        value: Real,
    },
    /// The sample buffer length does not match the declared grid dimensions.
    #[error("the grid dimensions imply a buffer of {expected} elements, got {len}.")]
    DimensionMismatch {
        /// The buffer length implied by the grid dimensions.
        expected: usize,
        /// The actual buffer length.
        len: usize,
    },
}

/// A rectangular grid of normalized elevation samples.
///
/// Each sample maps a grid coordinate `(x, z)` to an elevation `y ∈ [0, 1]`,
/// typically decoded from the red channel of a heightmap image. The grid is
/// immutable once constructed; meshes are built from it with a
/// [`TerrainMeshBuilder`](crate::mesh::TerrainMeshBuilder) and are replaced,
/// never mutated, when a new heightmap is loaded.
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Clone, Debug, PartialEq)]
pub struct ElevationGrid {
    samples: DMatrix<Real>,
}

impl ElevationGrid {
    /// Initializes a grid from already-normalized elevation samples in
    /// row-major (z, then x) order.
    ///
    /// Fails with [`ElevationGridError::OutOfRangeSample`] if any sample
    /// lies outside of `[0, 1]` (NaN included). Use
    /// [`ElevationGrid::from_normalized_clamped`] to clamp instead.
    pub fn from_normalized(
        width: usize,
        height: usize,
        samples: Vec<Real>,
    ) -> Result<Self, ElevationGridError> {
        Self::check_len(width * height, samples.len())?;

        for (index, &value) in samples.iter().enumerate() {
            if !(0.0..=1.0).contains(&value) {
                return Err(ElevationGridError::OutOfRangeSample { index, value });
            }
        }

        Ok(Self {
            samples: DMatrix::from_row_iterator(height, width, samples),
        })
    }

    /// Initializes a grid from elevation samples in row-major order,
    /// clamping out-of-range values into `[0, 1]` instead of rejecting
    /// them.
    ///
    /// NaN samples have no meaningful clamp and are mapped to `0.0`. A
    /// warning is logged whenever at least one sample had to be adjusted.
    pub fn from_normalized_clamped(
        width: usize,
        height: usize,
        samples: Vec<Real>,
    ) -> Result<Self, ElevationGridError> {
        Self::check_len(width * height, samples.len())?;

        let mut num_clamped = 0;
        let samples = DMatrix::from_row_iterator(
            height,
            width,
            samples.into_iter().map(|value| {
                if (0.0..=1.0).contains(&value) {
                    value
                } else {
                    num_clamped += 1;
                    if value.is_nan() {
                        0.0
                    } else {
                        value.clamp(0.0, 1.0)
                    }
                }
            }),
        );

        if num_clamped > 0 {
            log::warn!("clamped {num_clamped} out-of-range elevation samples into [0, 1]");
        }

        Ok(Self { samples })
    }

    /// Initializes a grid from the red channel of a decoded RGBA image.
    ///
    /// The buffer holds 4 bytes per pixel; the sample at `(x, z)` is the
    /// byte at `x * 4 + z * width * 4`, normalized by `/ 255`.
    pub fn from_red_channel(
        width: usize,
        height: usize,
        rgba: &[u8],
    ) -> Result<Self, ElevationGridError> {
        Self::check_len(width * height * 4, rgba.len())?;

        Ok(Self {
            samples: DMatrix::from_fn(height, width, |z, x| {
                rgba[x * 4 + z * width * 4] as Real / 255.0
            }),
        })
    }

    /// Initializes a grid from a single-channel buffer of 8-bit elevation
    /// samples in row-major order, normalized by `/ 255`.
    pub fn from_raw_samples(
        width: usize,
        height: usize,
        bytes: &[u8],
    ) -> Result<Self, ElevationGridError> {
        Self::check_len(width * height, bytes.len())?;

        Ok(Self {
            samples: DMatrix::from_fn(height, width, |z, x| {
                bytes[x + z * width] as Real / 255.0
            }),
        })
    }

    fn check_len(expected: usize, len: usize) -> Result<(), ElevationGridError> {
        if expected != len {
            Err(ElevationGridError::DimensionMismatch { expected, len })
        } else {
            Ok(())
        }
    }

    /// The number of columns (samples along the `x` axis) of this grid.
    pub fn width(&self) -> usize {
        self.samples.ncols()
    }

    /// The number of rows (samples along the `z` axis) of this grid.
    pub fn height(&self) -> usize {
        self.samples.nrows()
    }

    /// The normalized elevation at the grid coordinate `(x, z)`.
    ///
    /// Panics if `x >= self.width()` or `z >= self.height()`.
    pub fn sample(&self, x: usize, z: usize) -> Real {
        self.samples[(z, x)]
    }

    /// The elevation samples of this grid, with one matrix row per grid row.
    pub fn samples(&self) -> &DMatrix<Real> {
        &self.samples
    }
}
