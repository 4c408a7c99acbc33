use crate::math::Real;

/// An RGBA color with all components in `[0, 1]`.
pub type Color = [Real; 4];

/// The highest elevation still belonging to [`ElevationBand::Deep`].
pub const DEEP_MAX: Real = 0.10;
/// The highest elevation still belonging to [`ElevationBand::Lowland`].
pub const LOWLAND_MAX: Real = 0.50;
/// The highest elevation still belonging to [`ElevationBand::Highland`].
pub const HIGHLAND_MAX: Real = 0.80;

/// One of the four contiguous elevation bands partitioning `[0, 1]`.
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
pub enum ElevationBand {
    /// Elevations in `[0, 0.10]` (water).
    Deep,
    /// Elevations in `(0.10, 0.50]`.
    Lowland,
    /// Elevations in `(0.50, 0.80]`.
    Highland,
    /// Elevations in `(0.80, 1.0]` (snow).
    Peak,
}

impl ElevationBand {
    /// Classifies a normalized elevation into its band.
    ///
    /// Boundary values belong to the lower band: `0.10` is still
    /// [`ElevationBand::Deep`], `0.50` is still [`ElevationBand::Lowland`]
    /// and `0.80` is still [`ElevationBand::Highland`]. Classification
    /// depends only on the value itself, never on neighboring samples.
    pub fn classify(y: Real) -> Self {
        if y <= DEEP_MAX {
            ElevationBand::Deep
        } else if y <= LOWLAND_MAX {
            ElevationBand::Lowland
        } else if y <= HIGHLAND_MAX {
            ElevationBand::Highland
        } else {
            ElevationBand::Peak
        }
    }
}

/// The flat color assigned to each elevation band.
///
/// The default palette is water blue, grass green, dry-grass yellow and
/// snow white; alpha is always `1.0`.
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ColorRamp {
    /// The color of [`ElevationBand::Deep`] vertices.
    pub deep: Color,
    /// The color of [`ElevationBand::Lowland`] vertices.
    pub lowland: Color,
    /// The color of [`ElevationBand::Highland`] vertices.
    pub highland: Color,
    /// The color of [`ElevationBand::Peak`] vertices.
    pub peak: Color,
}

impl Default for ColorRamp {
    fn default() -> Self {
        Self {
            deep: [0.2, 0.2, 0.5, 1.0],
            lowland: [0.38, 0.68, 0.30, 1.0],
            highland: [0.8, 0.8, 0.3, 1.0],
            peak: [0.99, 0.99, 0.99, 1.0],
        }
    }
}

impl ColorRamp {
    /// The color of the given band.
    pub fn color(&self, band: ElevationBand) -> Color {
        match band {
            ElevationBand::Deep => self.deep,
            ElevationBand::Lowland => self.lowland,
            ElevationBand::Highland => self.highland,
            ElevationBand::Peak => self.peak,
        }
    }

    /// The color of the band containing the given normalized elevation.
    pub fn color_at(&self, y: Real) -> Color {
        self.color(ElevationBand::classify(y))
    }
}
