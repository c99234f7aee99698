use std::time::Duration;

use crate::config::options::EngineConfig;
use crate::engine::mode::{Finish, Reveal};
use crate::engine::state::AnimationState;
use crate::foundation::core::Rect;
use crate::schedule::queue::FrameScheduler;
use crate::surface::draw::{DrawSurface, RasterSurface};
use crate::surface::raster::{Raster, SourceImage};
use crate::view::adapter::{SurfaceRole, ViewAdapter, ViewCommand};

/// No-argument notification fired when an activation completes.
pub type CompletionSink = Box<dyn FnMut()>;

/// Lifecycle of an engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Constructed, not activated.
    Idle,
    /// Activated before the image was ready; waiting for [`Engine::image_loaded`].
    AwaitingImage,
    /// Frames are being processed.
    Running,
    /// Reached a terminal boundary.
    Finished,
    /// Explicitly destroyed.
    Destroyed,
}

/// Image handed to [`Engine::activate`].
#[derive(Clone, Debug)]
pub enum ImageSource {
    /// Decoded and ready to sample.
    Ready(SourceImage),
    /// Still loading; activation resumes on [`Engine::image_loaded`].
    Loading,
}

impl From<SourceImage> for ImageSource {
    fn from(img: SourceImage) -> Self {
        Self::Ready(img)
    }
}

/// Result of one [`Engine::advance_frame`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// The engine is not running; nothing changed.
    Skipped,
    /// A frame was rendered and the next one requested.
    Continued,
    /// The animation terminated in this frame.
    Finished,
}

/// Pixelation animation engine for one image.
///
/// The engine owns its palette and brush surfaces and its [`AnimationState`]. It reports every
/// presentation change to `V`, asks `S` for each following frame, and calls the completion sink
/// when the animation ends (or, when looping, the first time it reaches full resolution).
pub struct Engine<V, S, D = RasterSurface> {
    config: EngineConfig,
    phase: Phase,
    state: Option<AnimationState>,
    source: Option<SourceImage>,
    palette: D,
    brush: D,
    view: V,
    scheduler: S,
    on_complete: Option<CompletionSink>,
}

impl<V, S> Engine<V, S, RasterSurface>
where
    V: ViewAdapter,
    S: FrameScheduler,
{
    /// Engine with CPU raster surfaces.
    pub fn new(config: EngineConfig, view: V, scheduler: S) -> Self {
        Self::with_surfaces(
            config,
            view,
            scheduler,
            RasterSurface::new(),
            RasterSurface::new(),
        )
    }
}

impl<V, S, D> Engine<V, S, D>
where
    V: ViewAdapter,
    S: FrameScheduler,
    D: DrawSurface,
{
    /// Engine drawing into caller-provided surfaces.
    pub fn with_surfaces(
        config: EngineConfig,
        view: V,
        scheduler: S,
        palette: D,
        brush: D,
    ) -> Self {
        Self {
            config,
            phase: Phase::Idle,
            state: None,
            source: None,
            palette,
            brush,
            view,
            scheduler,
            on_complete: None,
        }
    }

    /// Register the completion sink.
    pub fn on_complete(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_complete = Some(Box::new(f));
        self
    }

    /// Start the animation on `source`.
    ///
    /// A [`ImageSource::Loading`] source defers activation until [`Engine::image_loaded`].
    /// Activating an engine that is already running, finished or destroyed does nothing.
    #[tracing::instrument(skip_all)]
    pub fn activate(&mut self, source: impl Into<ImageSource>) {
        if !matches!(self.phase, Phase::Idle | Phase::AwaitingImage) {
            tracing::warn!(phase = ?self.phase, mode = %self.config.mode, "activate ignored");
            return;
        }
        match source.into() {
            ImageSource::Ready(img) => self.start(img),
            ImageSource::Loading => {
                tracing::debug!("image not ready, deferring activation");
                self.phase = Phase::AwaitingImage;
            }
        }
    }

    /// Load notification for a deferred activation.
    pub fn image_loaded(&mut self, img: SourceImage) {
        if self.phase != Phase::AwaitingImage {
            tracing::debug!(phase = ?self.phase, "image_loaded ignored");
            return;
        }
        self.start(img);
    }

    fn start(&mut self, img: SourceImage) {
        let size = img.rendered_size();
        let mode = self.config.mode;

        if mode.spec().hides_source {
            self.view.apply(ViewCommand::HideSource);
        }
        self.view.apply(ViewCommand::ShowBrush);

        for surface in [&mut self.palette, &mut self.brush] {
            surface.set_size(size);
            surface.set_smoothing(false);
        }

        let state = AnimationState::new(mode, self.config.looping, size);
        tracing::debug!(
            %mode,
            width = size.width,
            height = size.height,
            ratio = state.ratio,
            low = state.low,
            "activated"
        );
        self.state = Some(state);
        self.source = Some(img);
        self.phase = Phase::Running;
        self.scheduler.request_frame(Duration::ZERO);
    }

    /// Process one frame. Called by whoever owns the scheduler when a request comes due.
    pub fn advance_frame(&mut self) -> FrameOutcome {
        if self.phase != Phase::Running {
            return FrameOutcome::Skipped;
        }
        let Some(state) = self.state.as_mut() else {
            return FrameOutcome::Skipped;
        };
        if state.destroyed {
            return FrameOutcome::Skipped;
        }

        let fx = state.advance();
        let ratio = state.ratio;
        let extent = state.sample_extent();
        tracing::trace!(frame = state.frame.0, mode = %state.mode, ratio, step = state.step);

        if fx.clear {
            let full = state.size.rect();
            self.palette.clear_rect(full);
            self.brush.clear_rect(full);
        }
        if let Some(opacity) = fx.opacity {
            self.view.apply(ViewCommand::SetBrushOpacity(opacity));
        }
        if fx.notify {
            self.notify_complete();
        }
        if let Some(finish) = fx.finish {
            return self.finish(finish);
        }

        self.render(extent);
        self.scheduler.request_frame(self.config.interval);
        tracing::trace!(ratio, "frame rendered");
        FrameOutcome::Continued
    }

    fn render(&mut self, extent: f64) {
        let Some(src) = self.source.as_ref() else {
            return;
        };
        let Some(state) = self.state.as_ref() else {
            return;
        };
        let region = Rect::new(0.0, 0.0, extent, extent);
        let (iw, ih) = src.size();
        self.palette.draw_region(
            src,
            Rect::new(0.0, 0.0, f64::from(iw), f64::from(ih)),
            region,
        );
        self.brush.draw_region(&self.palette, region, state.size.rect());
    }

    fn finish(&mut self, finish: Finish) -> FrameOutcome {
        tracing::debug!(?finish, "animation finished");
        if let Finish::Teardown(reveal) = finish {
            match reveal {
                Reveal::Restore => self.view.apply(ViewCommand::RestoreSource {
                    ignore_classes: self.config.ignore_classes.clone(),
                }),
                Reveal::HideKeepLayout => self.view.apply(ViewCommand::HideSourceKeepLayout),
            }
            self.remove_surfaces();
        }
        self.phase = Phase::Finished;
        self.notify_complete();
        FrameOutcome::Finished
    }

    fn remove_surfaces(&mut self) {
        self.view.apply(ViewCommand::RemoveSurface(SurfaceRole::Brush));
        self.view.apply(ViewCommand::RemoveSurface(SurfaceRole::Palette));
    }

    fn notify_complete(&mut self) {
        if let Some(cb) = self.on_complete.as_mut() {
            cb();
        }
    }

    /// Stop for good: cancel the pending frame and remove both surfaces. Repeat calls do nothing.
    pub fn destroy(&mut self) {
        if self.phase == Phase::Destroyed {
            return;
        }
        tracing::debug!(phase = ?self.phase, "destroy");
        self.phase = Phase::Destroyed;
        if let Some(state) = self.state.as_mut() {
            state.destroyed = true;
        }
        self.scheduler.cancel();
        self.remove_surfaces();
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Animation state, once activated.
    pub fn state(&self) -> Option<&AnimationState> {
        self.state.as_ref()
    }

    /// Activation config.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Source image, once activated.
    pub fn source(&self) -> Option<&SourceImage> {
        self.source.as_ref()
    }

    /// Low-resolution surface.
    pub fn palette(&self) -> &D {
        &self.palette
    }

    /// Visible surface.
    pub fn brush(&self) -> &D {
        &self.brush
    }

    /// View adapter.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Mutable view adapter.
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Scheduler.
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Mutable scheduler, for drivers that pop due requests.
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/animator.rs"]
mod tests;
