//! Frame scheduling: the engine's request boundary, clocks, and a driver loop.

/// Clocks the driver waits on.
pub mod clock;
/// Run loop that feeds due requests back into an engine.
pub mod driver;
/// Scheduler trait and the deterministic single-slot queue.
pub mod queue;
