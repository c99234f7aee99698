//! Options loading and normalization.

/// JSON options and the normalized engine config.
pub mod options;
