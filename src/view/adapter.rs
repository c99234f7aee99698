/// The two surfaces an engine owns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SurfaceRole {
    /// Low-resolution intermediate surface. Never displayed.
    Palette,
    /// Visible upscaled surface.
    Brush,
}

/// Presentation command emitted by the engine.
#[derive(Clone, Debug, PartialEq)]
pub enum ViewCommand {
    /// Take the source element out of layout (`display: none`).
    HideSource,
    /// Show the brush surface (`display: inline-block`).
    ShowBrush,
    /// Set the brush surface opacity.
    SetBrushOpacity(f64),
    /// Remove the ignored classes from the source element and show it again.
    RestoreSource {
        /// Classes to drop from the element's class list.
        ignore_classes: Vec<String>,
    },
    /// Show the source element's layout slot with `visibility: hidden`.
    HideSourceKeepLayout,
    /// Detach a surface from the display.
    RemoveSurface(SurfaceRole),
}

/// Receiver for the engine's presentation commands.
pub trait ViewAdapter {
    /// Apply one command.
    fn apply(&mut self, cmd: ViewCommand);
}

/// Records commands in order.
impl ViewAdapter for Vec<ViewCommand> {
    fn apply(&mut self, cmd: ViewCommand) {
        self.push(cmd);
    }
}

impl<T: ViewAdapter + ?Sized> ViewAdapter for &mut T {
    fn apply(&mut self, cmd: ViewCommand) {
        (**self).apply(cmd);
    }
}

impl<T: ViewAdapter + ?Sized> ViewAdapter for Box<T> {
    fn apply(&mut self, cmd: ViewCommand) {
        (**self).apply(cmd);
    }
}
