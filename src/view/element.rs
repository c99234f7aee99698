use crate::view::adapter::{SurfaceRole, ViewAdapter, ViewCommand};

/// CSS-like display state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Display {
    /// Default flow for images.
    Inline,
    /// Set by the engine when showing elements.
    InlineBlock,
    /// Out of layout.
    None,
}

/// CSS-like visibility state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    /// Painted.
    Visible,
    /// Occupies layout but is not painted.
    Hidden,
}

/// State of the source image element.
#[derive(Clone, Debug, PartialEq)]
pub struct ElementState {
    /// Display state.
    pub display: Display,
    /// Visibility state.
    pub visibility: Visibility,
    /// Class list, in order.
    pub classes: Vec<String>,
}

/// State of one engine surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceState {
    /// Whether the surface is part of the view.
    pub attached: bool,
    /// Display state.
    pub display: Display,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
}

/// In-memory view of one animated image: the element and the two surfaces.
///
/// Classes listed through [`ElementView::concealed_by`] count as hiding the element (the
/// stylesheet's job in a page), which is how an entry animation keeps the image out of sight
/// until it is restored.
#[derive(Clone, Debug)]
pub struct ElementView {
    source: ElementState,
    brush: SurfaceState,
    palette: SurfaceState,
    concealing: Vec<String>,
    log: Vec<ViewCommand>,
}

impl ElementView {
    /// View of an element carrying the space-separated `class_attr`.
    pub fn new(class_attr: &str) -> Self {
        Self {
            source: ElementState {
                display: Display::Inline,
                visibility: Visibility::Visible,
                classes: class_attr.split_whitespace().map(str::to_owned).collect(),
            },
            brush: SurfaceState {
                attached: true,
                display: Display::None,
                opacity: 1.0,
            },
            palette: SurfaceState {
                attached: false,
                display: Display::None,
                opacity: 1.0,
            },
            concealing: Vec::new(),
            log: Vec::new(),
        }
    }

    /// Treat these classes as hiding the element while present.
    pub fn concealed_by<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.concealing = classes.into_iter().map(Into::into).collect();
        self
    }

    /// Source element state.
    pub fn source(&self) -> &ElementState {
        &self.source
    }

    /// State of the given surface.
    pub fn surface(&self, role: SurfaceRole) -> &SurfaceState {
        match role {
            SurfaceRole::Palette => &self.palette,
            SurfaceRole::Brush => &self.brush,
        }
    }

    /// Whether the source element is painted.
    pub fn source_visible(&self) -> bool {
        self.source.display != Display::None
            && self.source.visibility == Visibility::Visible
            && !self.source.classes.iter().any(|c| {
                self.concealing
                    .iter()
                    .any(|hide| hide.eq_ignore_ascii_case(c))
            })
    }

    /// Whether the brush surface is painted.
    pub fn brush_visible(&self) -> bool {
        self.brush.attached && self.brush.display != Display::None
    }

    /// Commands received so far, in order.
    pub fn commands(&self) -> &[ViewCommand] {
        &self.log
    }
}

impl ViewAdapter for ElementView {
    fn apply(&mut self, cmd: ViewCommand) {
        tracing::trace!(?cmd, "view command");
        match &cmd {
            ViewCommand::HideSource => self.source.display = Display::None,
            ViewCommand::ShowBrush => self.brush.display = Display::InlineBlock,
            ViewCommand::SetBrushOpacity(v) => self.brush.opacity = v.clamp(0.0, 1.0),
            ViewCommand::RestoreSource { ignore_classes } => {
                self.source.classes.retain(|c| {
                    !ignore_classes
                        .iter()
                        .any(|ignored| ignored.eq_ignore_ascii_case(c))
                });
                self.source.display = Display::InlineBlock;
            }
            ViewCommand::HideSourceKeepLayout => {
                self.source.display = Display::InlineBlock;
                self.source.visibility = Visibility::Hidden;
            }
            ViewCommand::RemoveSurface(SurfaceRole::Brush) => self.brush.attached = false,
            ViewCommand::RemoveSurface(SurfaceRole::Palette) => self.palette.attached = false,
        }
        self.log.push(cmd);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/view/element.rs"]
mod tests;
