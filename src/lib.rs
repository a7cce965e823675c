#![doc = include_str!("../README.md")]

pub mod config;
pub mod error;
pub mod grid;

// --- High-level re-exports -------------------------------------------------

pub use crate::error::GridError;
pub use crate::grid::PixelGrid;

/// Small prelude for quick experiments.
///
/// ```
/// use pixel_grid::prelude::*;
///
/// let mut grid = PixelGrid::new(3, 2);
/// grid.draw_edge();
/// assert_eq!(grid.get(2, 1), 255);
/// ```
pub mod prelude {
    pub use crate::{GridError, PixelGrid};
}
