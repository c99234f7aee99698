//! Rasters the engine reads from and draws into.

/// Drawing surface trait and the CPU implementation.
pub mod draw;
/// Read-only rasters: source images and frames.
pub mod raster;
