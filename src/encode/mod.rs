//! Encoding sinks.
//!
//! Sinks consume presented frames in order; the CLI feeds them from the run loop.

/// Frame sink trait and built-in sinks.
pub mod sink;
