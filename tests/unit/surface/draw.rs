use super::*;
use crate::surface::raster::SourceImage;

const RED: [u8; 4] = [255, 0, 0, 255];
const BLUE: [u8; 4] = [0, 0, 255, 255];

fn checker_2x2() -> SourceImage {
    let mut data = Vec::new();
    for px in [RED, BLUE, BLUE, RED] {
        data.extend_from_slice(&px);
    }
    SourceImage::from_premul_rgba8(2, 2, data).unwrap()
}

fn canvas(w: u32, h: u32) -> Canvas {
    Canvas::new(w, h).unwrap()
}

#[test]
fn nearest_upscale_produces_blocks() {
    let src = checker_2x2();
    let mut s = RasterSurface::with_size(canvas(4, 4));
    s.set_smoothing(false);
    s.draw_region(&src, Rect::new(0.0, 0.0, 2.0, 2.0), canvas(4, 4).rect());

    assert_eq!(s.texel(0, 0), RED);
    assert_eq!(s.texel(1, 1), RED);
    assert_eq!(s.texel(2, 0), BLUE);
    assert_eq!(s.texel(3, 1), BLUE);
    assert_eq!(s.texel(0, 3), BLUE);
    assert_eq!(s.texel(3, 3), RED);
}

#[test]
fn bilinear_upscale_blends_neighbours() {
    let src = checker_2x2();
    let mut s = RasterSurface::with_size(canvas(4, 4));
    assert!(s.smoothing());
    s.draw_region(&src, Rect::new(0.0, 0.0, 2.0, 2.0), canvas(4, 4).rect());

    let px = s.texel(1, 1);
    assert!(px[0] > 0 && px[0] < 255, "{px:?}");
    assert!(px[2] > 0 && px[2] < 255, "{px:?}");
}

#[test]
fn downscale_into_partial_region_leaves_rest_transparent() {
    let src = checker_2x2();
    let mut s = RasterSurface::with_size(canvas(4, 4));
    s.set_smoothing(false);
    s.draw_region(&src, Rect::new(0.0, 0.0, 2.0, 2.0), Rect::new(0.0, 0.0, 1.0, 1.0));

    assert_eq!(s.texel(0, 0)[3], 255);
    assert_eq!(s.texel(1, 0), [0, 0, 0, 0]);
    assert_eq!(s.texel(0, 1), [0, 0, 0, 0]);
}

#[test]
fn source_rect_outside_raster_is_skipped() {
    let src = checker_2x2();
    let mut s = RasterSurface::with_size(canvas(4, 2));
    s.set_smoothing(false);
    // Source rect twice as wide as the source: the right half maps to nothing.
    s.draw_region(&src, Rect::new(0.0, 0.0, 4.0, 2.0), canvas(4, 2).rect());

    assert_eq!(s.texel(0, 0), RED);
    assert_eq!(s.texel(1, 0), BLUE);
    assert_eq!(s.texel(2, 0), [0, 0, 0, 0]);
    assert_eq!(s.texel(3, 1), [0, 0, 0, 0]);
}

#[test]
fn sub_pixel_destination_draws_nothing() {
    let src = checker_2x2();
    let mut s = RasterSurface::with_size(canvas(4, 4));
    s.draw_region(&src, Rect::new(0.0, 0.0, 2.0, 2.0), Rect::new(0.0, 0.0, 0.4, 0.4));
    assert!(s.pixels().iter().all(|&b| b == 0));
}

#[test]
fn clear_rect_resets_covered_pixels_only() {
    let src = checker_2x2();
    let mut s = RasterSurface::with_size(canvas(2, 2));
    s.set_smoothing(false);
    s.draw_region(&src, Rect::new(0.0, 0.0, 2.0, 2.0), canvas(2, 2).rect());
    s.clear_rect(Rect::new(0.0, 0.0, 1.0, 2.0));

    assert_eq!(s.texel(0, 0), [0, 0, 0, 0]);
    assert_eq!(s.texel(0, 1), [0, 0, 0, 0]);
    assert_eq!(s.texel(1, 0), BLUE);

    s.clear_rect(Rect::new(-5.0, -5.0, 50.0, 50.0));
    assert!(s.pixels().iter().all(|&b| b == 0));
}

#[test]
fn resize_discards_content() {
    let src = checker_2x2();
    let mut s = RasterSurface::with_size(canvas(2, 2));
    s.draw_region(&src, Rect::new(0.0, 0.0, 2.0, 2.0), canvas(2, 2).rect());
    s.set_size(canvas(3, 1));
    assert_eq!(s.size(), (3, 1));
    assert_eq!(s.pixels().len(), 12);
    assert!(s.pixels().iter().all(|&b| b == 0));
}

#[test]
fn empty_surface_ignores_draws() {
    let src = checker_2x2();
    let mut s = RasterSurface::new();
    s.draw_region(&src, Rect::new(0.0, 0.0, 2.0, 2.0), Rect::new(0.0, 0.0, 2.0, 2.0));
    s.clear_rect(Rect::new(0.0, 0.0, 2.0, 2.0));
    assert!(s.to_frame().data.is_empty());
}

#[test]
fn oversized_resize_is_capped() {
    let mut s = RasterSurface::new();
    s.set_size(Canvas {
        width: Canvas::MAX_EDGE + 50_000,
        height: 1,
    });
    assert_eq!(s.size(), (Canvas::MAX_EDGE, 1));
    assert_eq!(s.pixels().len(), Canvas::MAX_EDGE as usize * 4);
}
