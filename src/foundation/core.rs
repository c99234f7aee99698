use crate::foundation::error::{PixelbrushError, PixelbrushResult};

pub use kurbo::Rect;

/// 0-based index of a frame processed by the engine since activation.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Pixel dimensions of a surface or of the rendered source element.
///
/// Deserialized values go through [`Canvas::new`], so a canvas read from JSON is always valid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "CanvasDims")]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Largest edge accepted for a raster surface.
    pub const MAX_EDGE: u32 = 16_384;

    /// Create validated dimensions: both edges non-zero and at most [`Canvas::MAX_EDGE`].
    pub fn new(width: u32, height: u32) -> PixelbrushResult<Self> {
        if width == 0 || height == 0 {
            return Err(PixelbrushError::validation(format!(
                "canvas must be non-empty, got {width}x{height}"
            )));
        }
        if width > Self::MAX_EDGE || height > Self::MAX_EDGE {
            return Err(PixelbrushError::validation(format!(
                "canvas {width}x{height} exceeds the {} px edge limit",
                Self::MAX_EDGE
            )));
        }
        Ok(Self { width, height })
    }

    /// Number of pixels covered.
    pub fn area(self) -> usize {
        (self.width as usize).saturating_mul(self.height as usize)
    }

    /// Full-canvas rectangle in pixel space.
    pub fn rect(self) -> Rect {
        Rect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height))
    }
}

#[derive(serde::Deserialize)]
struct CanvasDims {
    width: u32,
    height: u32,
}

impl TryFrom<CanvasDims> for Canvas {
    type Error = PixelbrushError;

    fn try_from(d: CanvasDims) -> PixelbrushResult<Self> {
        Canvas::new(d.width, d.height)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
