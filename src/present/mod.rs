//! Offline presentation: what a viewer would see of an engine at a given moment.

/// Frame composition from the view model and the brush.
pub mod compose;
