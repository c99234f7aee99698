//! Presentation boundary.
//!
//! The engine never touches an element directly; it emits [`adapter::ViewCommand`]s to a
//! [`adapter::ViewAdapter`].

/// View command vocabulary and adapter trait.
pub mod adapter;
/// In-memory element/surface view model.
pub mod element;
