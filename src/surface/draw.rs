use crate::foundation::core::{Canvas, Rect};
use crate::foundation::math::src_over;
use crate::surface::raster::{FrameRGBA, Raster, texel_at};

/// Drawing target the engine renders into (palette and brush).
///
/// Semantics follow a 2D canvas context: resizing discards content, `draw_region` maps
/// `src_rect` of the source onto `dst_rect` of this surface and skips any part of the source
/// rectangle that falls outside the source raster.
pub trait DrawSurface: Raster {
    /// Resize the surface. Existing content is cleared. Edges are capped at
    /// [`Canvas::MAX_EDGE`].
    fn set_size(&mut self, size: Canvas);
    /// Toggle interpolation when scaling.
    fn set_smoothing(&mut self, enabled: bool);
    /// Reset every pixel whose center lies in `rect` to transparent.
    fn clear_rect(&mut self, rect: Rect);
    /// Draw `src_rect` of `src` scaled into `dst_rect`, compositing source-over.
    fn draw_region(&mut self, src: &dyn Raster, src_rect: Rect, dst_rect: Rect);
}

/// CPU surface backed by a premultiplied RGBA8 buffer.
#[derive(Clone, Debug)]
pub struct RasterSurface {
    width: u32,
    height: u32,
    data: Vec<u8>,
    smoothing: bool,
}

impl Default for RasterSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl RasterSurface {
    /// Empty 0x0 surface with smoothing enabled (a fresh canvas context's default).
    pub fn new() -> Self {
        Self {
            width: 0,
            height: 0,
            data: Vec::new(),
            smoothing: true,
        }
    }

    /// Create a surface already sized to `size`.
    pub fn with_size(size: Canvas) -> Self {
        let mut s = Self::new();
        s.set_size(size);
        s
    }

    /// Whether interpolation is enabled.
    pub fn smoothing(&self) -> bool {
        self.smoothing
    }

    /// Premultiplied pixel bytes.
    pub fn pixels(&self) -> &[u8] {
        &self.data
    }

    /// Copy the surface out as a frame.
    pub fn to_frame(&self) -> FrameRGBA {
        FrameRGBA {
            width: self.width,
            height: self.height,
            data: self.data.clone(),
            premultiplied: true,
        }
    }

    /// Pixel index span `[start, end)` whose centers fall in `[lo, hi)`, clipped to `limit`.
    fn covered(lo: f64, hi: f64, limit: u32) -> (u32, u32) {
        let start = (lo - 0.5).ceil().max(0.0);
        let end = (hi - 0.5).ceil().clamp(0.0, f64::from(limit));
        if start >= end {
            return (0, 0);
        }
        (start as u32, end as u32)
    }

    fn sample_bilinear(src: &dyn Raster, sx: f64, sy: f64) -> [u8; 4] {
        let (w, h) = src.size();
        let fx = (sx - 0.5).clamp(0.0, f64::from(w - 1));
        let fy = (sy - 0.5).clamp(0.0, f64::from(h - 1));
        let x0 = fx.floor() as u32;
        let y0 = fy.floor() as u32;
        let x1 = (x0 + 1).min(w - 1);
        let y1 = (y0 + 1).min(h - 1);
        let tx = fx - f64::from(x0);
        let ty = fy - f64::from(y0);

        let p00 = src.texel(x0, y0);
        let p10 = src.texel(x1, y0);
        let p01 = src.texel(x0, y1);
        let p11 = src.texel(x1, y1);

        let mut out = [0u8; 4];
        for i in 0..4 {
            let top = f64::from(p00[i]) + (f64::from(p10[i]) - f64::from(p00[i])) * tx;
            let bot = f64::from(p01[i]) + (f64::from(p11[i]) - f64::from(p01[i])) * tx;
            out[i] = (top + (bot - top) * ty).round().clamp(0.0, 255.0) as u8;
        }
        out
    }
}

impl Raster for RasterSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn texel(&self, x: u32, y: u32) -> [u8; 4] {
        texel_at(&self.data, self.width, x, y)
    }
}

impl DrawSurface for RasterSurface {
    fn set_size(&mut self, size: Canvas) {
        let width = size.width.min(Canvas::MAX_EDGE);
        let height = size.height.min(Canvas::MAX_EDGE);
        if (width, height) != (size.width, size.height) {
            tracing::warn!(
                width = size.width,
                height = size.height,
                max = Canvas::MAX_EDGE,
                "surface size capped"
            );
        }
        self.width = width;
        self.height = height;
        self.data.clear();
        self.data.resize(width as usize * height as usize * 4, 0);
    }

    fn set_smoothing(&mut self, enabled: bool) {
        self.smoothing = enabled;
    }

    fn clear_rect(&mut self, rect: Rect) {
        let (x_start, x_end) = Self::covered(rect.min_x(), rect.max_x(), self.width);
        let (y_start, y_end) = Self::covered(rect.min_y(), rect.max_y(), self.height);
        let stride = self.width as usize * 4;
        for y in y_start..y_end {
            let row = y as usize * stride;
            self.data[row + x_start as usize * 4..row + x_end as usize * 4].fill(0);
        }
    }

    fn draw_region(&mut self, src: &dyn Raster, src_rect: Rect, dst_rect: Rect) {
        let (sw, sh) = src.size();
        if sw == 0 || sh == 0 || self.width == 0 || self.height == 0 {
            return;
        }
        if src_rect.width() <= 0.0
            || src_rect.height() <= 0.0
            || dst_rect.width() <= 0.0
            || dst_rect.height() <= 0.0
        {
            return;
        }

        let scale_x = src_rect.width() / dst_rect.width();
        let scale_y = src_rect.height() / dst_rect.height();
        let (x_start, x_end) = Self::covered(dst_rect.x0, dst_rect.x1, self.width);
        let (y_start, y_end) = Self::covered(dst_rect.y0, dst_rect.y1, self.height);
        let src_w = f64::from(sw);
        let src_h = f64::from(sh);

        for y in y_start..y_end {
            let sy = src_rect.y0 + (f64::from(y) + 0.5 - dst_rect.y0) * scale_y;
            if !(0.0..src_h).contains(&sy) {
                continue;
            }
            for x in x_start..x_end {
                let sx = src_rect.x0 + (f64::from(x) + 0.5 - dst_rect.x0) * scale_x;
                if !(0.0..src_w).contains(&sx) {
                    continue;
                }
                let px = if self.smoothing {
                    Self::sample_bilinear(src, sx, sy)
                } else {
                    src.texel(sx as u32, sy as u32)
                };
                let i = (y as usize * self.width as usize + x as usize) * 4;
                src_over(&mut self.data[i..i + 4], px);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/surface/draw.rs"]
mod tests;
