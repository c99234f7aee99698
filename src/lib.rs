//! Pixelbrush animates images by pixelation.
//!
//! An [`Engine`] samples a source image into a low-resolution palette surface and scales that
//! back up onto a visible brush surface, frame by frame, changing the sampling ratio until the
//! image is fully resolved or fully pixelated. The engine is driven by a host:
//!
//! - Build an [`EngineConfig`] (directly or from [`PixelbrushOptions`] JSON)
//! - Create an [`Engine`] over a [`ViewAdapter`] and a [`FrameScheduler`]
//! - [`Engine::activate`] it and call [`Engine::advance_frame`] whenever a requested frame is due
//!   (or hand a [`FrameQueue`]-backed engine to [`run`])
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Image decoding.
pub mod assets;
/// Options parsing and the engine's activation config.
pub mod config;
/// Output sinks for presented frames.
pub mod encode;
/// Animation modes, per-frame state, and the engine.
pub mod engine;
/// Offline presentation.
pub mod present;
/// Frame scheduling and the run loop.
pub mod schedule;
/// Source images and drawing surfaces.
pub mod surface;
/// Host view boundary.
pub mod view;

pub use crate::foundation::core::{Canvas, FrameIndex, Rect};
pub use crate::foundation::error::{PixelbrushError, PixelbrushResult};

pub use crate::assets::decode::{decode_image, load_image};
pub use crate::config::options::{DEFAULT_INTERVAL_MS, EngineConfig, PixelbrushOptions};
pub use crate::encode::sink::{FrameSink, InMemorySink, PngSequenceSink, SinkConfig};
pub use crate::engine::animator::{CompletionSink, Engine, FrameOutcome, ImageSource, Phase};
pub use crate::engine::mode::Mode;
pub use crate::engine::state::AnimationState;
pub use crate::present::compose::compose_frame;
pub use crate::schedule::clock::{Clock, SystemClock, VirtualClock};
pub use crate::schedule::driver::{RunOpts, RunStats, run};
pub use crate::schedule::queue::{FrameQueue, FrameScheduler};
pub use crate::surface::draw::{DrawSurface, RasterSurface};
pub use crate::surface::raster::{FrameRGBA, Raster, SourceImage};
pub use crate::view::adapter::{SurfaceRole, ViewAdapter, ViewCommand};
pub use crate::view::element::ElementView;
