//! The pixelation animation engine.
//!
//! - [`mode`]: the seven modes and their declarative boundary table
//! - [`state`]: per-activation state and the pure per-frame transition
//! - [`animator`]: the engine that applies each transition to surfaces, view and scheduler

/// Engine lifecycle, activation and frame processing.
pub mod animator;
/// Modes and the per-mode behavior table.
pub mod mode;
/// Animation state and step constants.
pub mod state;
