use std::sync::Arc;

use crate::foundation::core::Canvas;
use crate::foundation::error::{PixelbrushError, PixelbrushResult};
use crate::foundation::math::premultiply_rgba8_in_place;

/// Read access to a premultiplied RGBA8 pixel grid.
///
/// Both the source image and the drawing surfaces implement this, so a surface can be drawn
/// from either.
pub trait Raster {
    /// `(width, height)` in pixels.
    fn size(&self) -> (u32, u32);

    /// Premultiplied RGBA8 at `(x, y)`. Callers keep coordinates in bounds.
    fn texel(&self, x: u32, y: u32) -> [u8; 4];
}

/// Read a texel out of a tightly packed row-major RGBA8 buffer.
pub(crate) fn texel_at(data: &[u8], width: u32, x: u32, y: u32) -> [u8; 4] {
    let i = ((y as usize) * (width as usize) + (x as usize)) * 4;
    [data[i], data[i + 1], data[i + 2], data[i + 3]]
}

/// A rendered frame as RGBA8 pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Fully transparent premultiplied frame.
    pub fn transparent(size: Canvas) -> Self {
        Self {
            width: size.width,
            height: size.height,
            data: vec![0; size.area() * 4],
            premultiplied: true,
        }
    }

    /// Pixel at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(texel_at(&self.data, self.width, x, y))
    }
}

/// Decoded source image the engine samples from.
///
/// Pixels are stored premultiplied and shared, so clones are cheap. The rendered size is the
/// size the element occupies on screen; it drives the surface dimensions and defaults to the
/// intrinsic size.
#[derive(Clone, Debug)]
pub struct SourceImage {
    intrinsic: Canvas,
    rendered: Option<Canvas>,
    rgba8_premul: Arc<Vec<u8>>,
}

impl SourceImage {
    /// Wrap premultiplied RGBA8 bytes.
    pub fn from_premul_rgba8(width: u32, height: u32, data: Vec<u8>) -> PixelbrushResult<Self> {
        let intrinsic = Canvas::new(width, height)?;
        if data.len() != intrinsic.area() * 4 {
            return Err(PixelbrushError::validation(format!(
                "expected {} bytes for a {width}x{height} image, got {}",
                intrinsic.area() * 4,
                data.len()
            )));
        }
        Ok(Self {
            intrinsic,
            rendered: None,
            rgba8_premul: Arc::new(data),
        })
    }

    /// Convert a straight-alpha `image` buffer.
    pub fn from_rgba_image(img: image::RgbaImage) -> PixelbrushResult<Self> {
        let (width, height) = img.dimensions();
        let mut data = img.into_raw();
        premultiply_rgba8_in_place(&mut data);
        Self::from_premul_rgba8(width, height, data)
    }

    /// Override the on-screen size (what a stylesheet would scale the element to).
    ///
    /// Fails for sizes [`Canvas::new`] rejects.
    pub fn with_rendered_size(mut self, size: Canvas) -> PixelbrushResult<Self> {
        self.rendered = Some(Canvas::new(size.width, size.height)?);
        Ok(self)
    }

    /// Decoded pixel dimensions.
    pub fn intrinsic_size(&self) -> Canvas {
        self.intrinsic
    }

    /// On-screen dimensions used for the animation surfaces.
    pub fn rendered_size(&self) -> Canvas {
        self.rendered.unwrap_or(self.intrinsic)
    }

    /// Premultiplied pixel bytes.
    pub fn pixels(&self) -> &[u8] {
        &self.rgba8_premul
    }
}

impl Raster for SourceImage {
    fn size(&self) -> (u32, u32) {
        (self.intrinsic.width, self.intrinsic.height)
    }

    fn texel(&self, x: u32, y: u32) -> [u8; 4] {
        texel_at(&self.rgba8_premul, self.intrinsic.width, x, y)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/surface/raster.rs"]
mod tests;
