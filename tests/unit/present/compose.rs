use std::time::Duration;

use super::*;
use crate::config::options::EngineConfig;
use crate::engine::mode::Mode;
use crate::foundation::core::Canvas;
use crate::schedule::queue::FrameQueue;
use crate::surface::raster::SourceImage;
use crate::view::adapter::{ViewAdapter, ViewCommand};

const COLOR: [u8; 4] = [10, 200, 30, 255];

fn solid(w: u32, h: u32) -> SourceImage {
    SourceImage::from_premul_rgba8(w, h, COLOR.repeat((w * h) as usize)).unwrap()
}

fn engine(mode: Mode) -> Engine<ElementView, FrameQueue> {
    let cfg = EngineConfig::new(mode).interval(Duration::ZERO);
    Engine::new(cfg, ElementView::new("photo"), FrameQueue::new())
}

fn drain(e: &mut Engine<ElementView, FrameQueue>) {
    while e.scheduler_mut().take().is_some() {
        e.advance_frame();
    }
}

fn all_pixels(frame: &FrameRGBA) -> Vec<[u8; 4]> {
    frame
        .data
        .chunks_exact(4)
        .map(|c| [c[0], c[1], c[2], c[3]])
        .collect()
}

#[test]
fn inactive_engine_has_nothing_to_present() {
    let e = engine(Mode::Focus);
    let err = compose_frame(&e).unwrap_err();
    assert!(err.to_string().contains("render error:"));
}

#[test]
fn fade_in_shows_source_under_empty_brush() {
    let mut e = engine(Mode::FadeIn);
    e.activate(
        solid(2, 2)
            .with_rendered_size(Canvas::new(4, 4).unwrap())
            .unwrap(),
    );

    let frame = compose_frame(&e).unwrap();
    assert_eq!((frame.width, frame.height), (4, 4));
    assert!(frame.premultiplied);
    assert!(all_pixels(&frame).iter().all(|px| *px == COLOR));
}

#[test]
fn focus_hides_source_until_the_brush_paints() {
    let mut e = engine(Mode::Focus);
    e.activate(solid(6, 6));

    let frame = compose_frame(&e).unwrap();
    assert!(frame.data.iter().all(|b| *b == 0));
}

#[test]
fn finished_focus_presents_restored_source() {
    let mut e = engine(Mode::Focus);
    e.activate(solid(6, 6));
    drain(&mut e);

    let frame = compose_frame(&e).unwrap();
    assert!(all_pixels(&frame).iter().all(|px| *px == COLOR));
}

#[test]
fn brush_is_composited_at_its_opacity() {
    let mut e = engine(Mode::Unfocus);
    e.activate(solid(50, 50));
    drain(&mut e);

    let full = compose_frame(&e).unwrap();
    assert_eq!(full.pixel(25, 25), Some(COLOR));
    assert_eq!(full.pixel(49, 49), Some(COLOR));

    e.view_mut().apply(ViewCommand::SetBrushOpacity(0.5));
    let half = compose_frame(&e).unwrap();
    assert_eq!(half.pixel(25, 25), Some(scale_alpha(COLOR, 0.5)));
}
