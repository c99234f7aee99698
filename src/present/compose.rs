use crate::engine::animator::Engine;
use crate::foundation::core::Rect;
use crate::foundation::error::{PixelbrushError, PixelbrushResult};
use crate::foundation::math::{scale_alpha, src_over};
use crate::schedule::queue::FrameScheduler;
use crate::surface::draw::{DrawSurface, RasterSurface};
use crate::surface::raster::{FrameRGBA, Raster};
use crate::view::adapter::SurfaceRole;
use crate::view::element::ElementView;

/// Flatten what a viewer currently sees of `engine` into one frame.
///
/// The frame has the source's rendered size. The source image is drawn first when the view
/// shows it, then the brush at its current opacity when the brush is visible.
pub fn compose_frame<S, D>(engine: &Engine<ElementView, S, D>) -> PixelbrushResult<FrameRGBA>
where
    S: FrameScheduler,
    D: DrawSurface,
{
    let src = engine
        .source()
        .ok_or_else(|| PixelbrushError::render("engine has no source image to present"))?;
    let size = src.rendered_size();
    let view = engine.view();

    let mut out = RasterSurface::with_size(size);
    if view.source_visible() {
        let (iw, ih) = src.size();
        out.draw_region(
            src,
            Rect::new(0.0, 0.0, f64::from(iw), f64::from(ih)),
            size.rect(),
        );
    }
    let mut frame = out.to_frame();

    if view.brush_visible() {
        let opacity = view.surface(SurfaceRole::Brush).opacity;
        let brush = engine.brush();
        let (bw, bh) = brush.size();
        let w = bw.min(frame.width);
        let h = bh.min(frame.height);
        let stride = frame.width as usize * 4;
        for y in 0..h {
            for x in 0..w {
                let i = y as usize * stride + x as usize * 4;
                src_over(&mut frame.data[i..i + 4], scale_alpha(brush.texel(x, y), opacity));
            }
        }
    }
    Ok(frame)
}

#[cfg(test)]
#[path = "../../tests/unit/present/compose.rs"]
mod tests;
