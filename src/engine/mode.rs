use std::fmt;

use crate::config::options::Loose;

/// Named animation behavior.
///
/// Entry modes (`Focus`, `FocusIn`, `FadeIn`) start fully pixelated and sharpen; exit modes
/// (`Unfocus`, `UnfocusOut`, `FadeOut`, `Bounce`) start sharp and dissolve.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Sharpen from coarse blocks while fading the brush in.
    #[default]
    FadeIn,
    /// Dissolve into coarse blocks while fading the brush out.
    FadeOut,
    /// Sharpen from coarse blocks.
    Focus,
    /// Sharpen from (almost) a single block.
    FocusIn,
    /// Dissolve into coarse blocks, leaving the last frame on screen.
    Unfocus,
    /// Dissolve into (almost) a single block, then hide the element.
    UnfocusOut,
    /// Dissolve then sharpen again.
    Bounce,
}

/// Which end of the ratio range a mode starts from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    /// Start at the mode's `low` ratio.
    Low,
    /// Start at `high` (full resolution).
    High,
}

/// Opacity ramp applied to the brush surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fade {
    /// Opacity climbs toward 1.
    In,
    /// Opacity drops toward 0.
    Out,
}

/// How the source element is left when the animation finishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reveal {
    /// Restore the element's class list (minus ignored classes) and show it.
    Restore,
    /// Keep the element's layout slot but make it invisible.
    HideKeepLayout,
}

/// Terminal action taken at a boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Finish {
    /// Fire completion and stop; surfaces stay on screen with the last frame.
    InPlace,
    /// Apply the reveal, remove both surfaces, fire completion and stop.
    Teardown(Reveal),
}

/// What happens when `ratio` drops below `low`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LowerRule {
    /// Clamp to `low` and start growing.
    Rebound,
    /// Switch to another mode, leaving ratio and step untouched.
    Swap(Mode),
    /// Clamp to `low`, reset the step to shrinking and switch mode.
    Restart(Mode),
    /// Terminate.
    Finish(Finish),
}

/// Declarative per-mode behavior. One row per [`Mode`] in [`MODE_TABLE`].
#[derive(Clone, Copy, Debug)]
pub struct ModeSpec {
    /// Mode this row describes.
    pub mode: Mode,
    /// Lower ratio bound, fixed at activation from the initial mode.
    pub low: f64,
    /// Ratio the animation starts from.
    pub start: Edge,
    /// Whether activation hides the source element.
    pub hides_source: bool,
    /// Brush opacity ramp, if any.
    pub fade: Option<Fade>,
    /// Mode taken at the upper boundary when looping.
    pub upper_loop: Mode,
    /// Terminal action at the upper boundary when not looping.
    pub upper_finish: Finish,
    /// Lower boundary rule when looping.
    pub lower_loop: LowerRule,
    /// Lower boundary rule when not looping.
    pub lower_once: LowerRule,
    /// Whether surfaces are cleared on a frame whose ratio is already below `low`.
    pub clears_below_low: bool,
}

/// Lower bound shared by `Focus`, `FadeIn` and `Bounce`.
pub const LOW_DEFAULT: f64 = 0.009;
/// Lower bound for `Unfocus` and `FadeOut`.
pub const LOW_UNFOCUS: f64 = 0.019;
/// Lower bound for `FocusIn` and `UnfocusOut`.
pub const LOW_DEEP: f64 = 0.0001;

/// Behavior table indexed by `Mode as usize`.
pub const MODE_TABLE: [ModeSpec; 7] = [
    ModeSpec {
        mode: Mode::FadeIn,
        low: LOW_DEFAULT,
        start: Edge::Low,
        hides_source: false,
        fade: Some(Fade::In),
        upper_loop: Mode::FadeOut,
        upper_finish: Finish::Teardown(Reveal::Restore),
        lower_loop: LowerRule::Rebound,
        lower_once: LowerRule::Rebound,
        clears_below_low: true,
    },
    ModeSpec {
        mode: Mode::FadeOut,
        low: LOW_UNFOCUS,
        start: Edge::High,
        hides_source: true,
        fade: Some(Fade::Out),
        upper_loop: Mode::FadeIn,
        upper_finish: Finish::Teardown(Reveal::HideKeepLayout),
        lower_loop: LowerRule::Swap(Mode::FadeIn),
        lower_once: LowerRule::Finish(Finish::InPlace),
        clears_below_low: true,
    },
    ModeSpec {
        mode: Mode::Focus,
        low: LOW_DEFAULT,
        start: Edge::Low,
        hides_source: true,
        fade: None,
        upper_loop: Mode::Unfocus,
        upper_finish: Finish::Teardown(Reveal::Restore),
        lower_loop: LowerRule::Rebound,
        lower_once: LowerRule::Rebound,
        clears_below_low: true,
    },
    ModeSpec {
        mode: Mode::FocusIn,
        low: LOW_DEEP,
        start: Edge::Low,
        hides_source: true,
        fade: None,
        upper_loop: Mode::UnfocusOut,
        upper_finish: Finish::Teardown(Reveal::Restore),
        lower_loop: LowerRule::Rebound,
        lower_once: LowerRule::Rebound,
        clears_below_low: true,
    },
    ModeSpec {
        mode: Mode::Unfocus,
        low: LOW_UNFOCUS,
        start: Edge::High,
        hides_source: true,
        fade: None,
        upper_loop: Mode::Focus,
        upper_finish: Finish::InPlace,
        lower_loop: LowerRule::Swap(Mode::Focus),
        lower_once: LowerRule::Finish(Finish::InPlace),
        clears_below_low: false,
    },
    ModeSpec {
        mode: Mode::UnfocusOut,
        low: LOW_DEEP,
        start: Edge::High,
        hides_source: true,
        fade: None,
        upper_loop: Mode::FocusIn,
        upper_finish: Finish::Teardown(Reveal::Restore),
        lower_loop: LowerRule::Restart(Mode::FocusIn),
        lower_once: LowerRule::Finish(Finish::Teardown(Reveal::HideKeepLayout)),
        clears_below_low: true,
    },
    ModeSpec {
        mode: Mode::Bounce,
        low: LOW_DEFAULT,
        start: Edge::High,
        hides_source: true,
        fade: None,
        upper_loop: Mode::Bounce,
        upper_finish: Finish::Teardown(Reveal::Restore),
        lower_loop: LowerRule::Rebound,
        lower_once: LowerRule::Rebound,
        clears_below_low: true,
    },
];

impl Mode {
    /// Every mode, in table order.
    pub const ALL: [Mode; 7] = [
        Mode::FadeIn,
        Mode::FadeOut,
        Mode::Focus,
        Mode::FocusIn,
        Mode::Unfocus,
        Mode::UnfocusOut,
        Mode::Bounce,
    ];

    /// Table row for this mode.
    pub fn spec(self) -> &'static ModeSpec {
        &MODE_TABLE[self as usize]
    }

    /// Mode taken at the upper boundary while looping.
    pub fn reversed(self) -> Mode {
        self.spec().upper_loop
    }

    /// Lower boundary rule for the given loop flag.
    pub fn lower_rule(self, looping: bool) -> LowerRule {
        let spec = self.spec();
        if looping {
            spec.lower_loop
        } else {
            spec.lower_once
        }
    }

    /// Kebab-case name (`fade-in`, `unfocus-out`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::FadeIn => "fade-in",
            Mode::FadeOut => "fade-out",
            Mode::Focus => "focus",
            Mode::FocusIn => "focus-in",
            Mode::Unfocus => "unfocus",
            Mode::UnfocusOut => "unfocus-out",
            Mode::Bounce => "bounce",
        }
    }

    /// Parse a kebab-case name. Case and surrounding whitespace are ignored.
    pub fn parse(s: &str) -> Option<Mode> {
        let s = s.trim().to_ascii_lowercase();
        Mode::ALL.into_iter().find(|m| m.as_str() == s)
    }

    /// Parse a name, falling back to [`Mode::FadeIn`] for unknown values.
    pub fn parse_or_default(s: &str) -> Mode {
        Mode::parse(s).unwrap_or_else(|| {
            tracing::debug!(value = s, "unknown mode, falling back to fade-in");
            Mode::default()
        })
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl serde::Serialize for Mode {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::Deserialize<'de> for Mode {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match <Loose as serde::Deserialize>::deserialize(deserializer)? {
            Loose::Text(s) => Ok(Mode::parse_or_default(&s)),
            _ => {
                tracing::debug!("mode is not a string, falling back to fade-in");
                Ok(Mode::default())
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/mode.rs"]
mod tests;
