//! Elevation grids sampled from heightmap images.

pub use self::elevation_grid::{ElevationGrid, ElevationGridError};

mod elevation_grid;
