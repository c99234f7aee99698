use crate::engine::mode::{Edge, Fade, Finish, LowerRule, Mode};
use crate::foundation::core::{Canvas, FrameIndex};

/// Upper ratio bound (full source resolution).
pub const RATIO_HIGH: f64 = 1.0;
/// Initial step; the ratio shrinks.
pub const STEP_SHRINK: f64 = 0.95;
/// Step after a lower-boundary rebound; the ratio grows.
pub const STEP_GROW: f64 = 1.05;
/// Step after hitting the upper boundary.
pub const STEP_FROM_HIGH: f64 = 0.9;
/// Opacity change per frame in fade modes.
pub const OPACITY_STEP: f64 = 0.01;

/// Side effects of one [`AnimationState::advance`] call.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct FrameEffects {
    /// Deliver the loop completion.
    pub(crate) notify: bool,
    /// Clear both surfaces before drawing.
    pub(crate) clear: bool,
    /// Opacity to report for the brush.
    pub(crate) opacity: Option<f64>,
    /// Terminate instead of rendering.
    pub(crate) finish: Option<Finish>,
}

/// Per-activation animation state, owned by one engine.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationState {
    /// Current mode. Changes only through the mode table.
    pub mode: Mode,
    /// Current sampling ratio.
    pub ratio: f64,
    /// Lower ratio bound, fixed from the mode the engine was activated with.
    pub low: f64,
    /// Upper ratio bound.
    pub high: f64,
    /// Multiplier applied to `ratio` each frame.
    pub step: f64,
    /// Brush opacity (fade modes only).
    pub opacity: f64,
    /// Reverse at boundaries instead of finishing.
    pub looping: bool,
    /// Set once the loop completion has been delivered.
    pub loop_completion_fired: bool,
    /// Surface dimensions.
    pub size: Canvas,
    /// Frames processed since activation.
    pub frame: FrameIndex,
    /// Set by `destroy`; frames are ignored afterwards.
    pub destroyed: bool,
}

impl AnimationState {
    /// Initial state for an activation in `mode` over surfaces of `size`.
    pub fn new(mode: Mode, looping: bool, size: Canvas) -> Self {
        let spec = mode.spec();
        let ratio = match spec.start {
            Edge::Low => spec.low,
            Edge::High => RATIO_HIGH,
        };
        let opacity = match spec.fade {
            Some(Fade::In) => 0.0,
            _ => 1.0,
        };
        Self {
            mode,
            ratio,
            low: spec.low,
            high: RATIO_HIGH,
            step: STEP_SHRINK,
            opacity,
            looping,
            loop_completion_fired: false,
            size,
            frame: FrameIndex(0),
            destroyed: false,
        }
    }

    /// Move opacity one step along the current mode's fade, clamped to `[0, 1]`.
    pub(crate) fn step_opacity(&mut self) {
        match self.mode.spec().fade {
            Some(Fade::In) => self.opacity = (self.opacity + OPACITY_STEP).min(1.0),
            Some(Fade::Out) => self.opacity = (self.opacity - OPACITY_STEP).max(0.0),
            None => {}
        }
    }

    /// Advance one frame: scale the ratio, resolve boundaries through the mode table and move
    /// the opacity. Returns what the engine must do with the surfaces, view and completion sink.
    pub(crate) fn advance(&mut self) -> FrameEffects {
        let mut fx = FrameEffects::default();
        self.frame = FrameIndex(self.frame.0.saturating_add(1));
        self.ratio *= self.step;

        if self.ratio >= self.high {
            self.ratio = self.high;
            self.step = STEP_FROM_HIGH;
            if !self.looping {
                fx.finish = Some(self.mode.spec().upper_finish);
                return fx;
            }
            fx.notify = !self.loop_completion_fired;
            self.loop_completion_fired = true;
            let from = self.mode;
            self.mode = from.reversed();
            tracing::debug!(%from, to = %self.mode, "upper boundary, reversing");
        }

        fx.clear = self.ratio >= self.low || self.mode.spec().clears_below_low;

        if self.mode.spec().fade.is_some() {
            fx.opacity = Some(self.opacity);
            self.step_opacity();
        }

        if self.ratio < self.low {
            let rule = self.mode.lower_rule(self.looping);
            tracing::debug!(mode = %self.mode, ?rule, ratio = self.ratio, "lower boundary");
            match rule {
                LowerRule::Rebound => {
                    self.ratio = self.low;
                    self.step = STEP_GROW;
                }
                LowerRule::Swap(next) => self.mode = next,
                LowerRule::Restart(next) => {
                    self.ratio = self.low;
                    self.step = STEP_SHRINK;
                    self.mode = next;
                }
                LowerRule::Finish(finish) => fx.finish = Some(finish),
            }
        }

        fx
    }

    /// Edge length of the square region sampled into the palette. Both sides use the width.
    pub fn sample_extent(&self) -> f64 {
        f64::from(self.size.width) * self.ratio
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/state.rs"]
mod tests;
