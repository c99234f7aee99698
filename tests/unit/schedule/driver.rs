use super::*;
use crate::config::options::EngineConfig;
use crate::engine::animator::Phase;
use crate::engine::mode::Mode;
use crate::foundation::error::PixelbrushError;
use crate::schedule::clock::VirtualClock;
use crate::surface::raster::SourceImage;
use crate::view::adapter::ViewCommand;

fn image() -> SourceImage {
    SourceImage::from_premul_rgba8(4, 4, vec![255; 64]).unwrap()
}

#[test]
fn run_to_completion_counts_frames_and_time() {
    let cfg = EngineConfig::new(Mode::Focus).interval(Duration::from_millis(10));
    let mut engine = Engine::new(cfg, Vec::<ViewCommand>::new(), FrameQueue::new());
    engine.activate(image());

    let mut clock = VirtualClock::new();
    let mut seen = 0u64;
    let stats = run(&mut engine, &mut clock, RunOpts::default(), |_| {
        seen += 1;
        Ok(())
    })
    .unwrap();

    assert!(stats.finished);
    assert!(!stats.capped);
    assert_eq!(stats.frames, 98);
    assert_eq!(seen, 98);
    // First frame is due immediately, the rest after one interval each.
    assert_eq!(stats.elapsed, Duration::from_millis(10 * 97));
    assert_eq!(engine.phase(), Phase::Finished);
}

#[test]
fn looping_run_stops_at_cap() {
    let cfg = EngineConfig::new(Mode::Bounce)
        .looping(true)
        .interval(Duration::ZERO);
    let mut engine = Engine::new(cfg, Vec::<ViewCommand>::new(), FrameQueue::new());
    engine.activate(image());

    let stats = run(
        &mut engine,
        &mut VirtualClock::new(),
        RunOpts {
            max_frames: Some(50),
        },
        |_| Ok(()),
    )
    .unwrap();

    assert_eq!(stats.frames, 50);
    assert!(stats.capped);
    assert!(!stats.finished);
    assert_eq!(engine.phase(), Phase::Running);
}

#[test]
fn on_frame_error_aborts() {
    let mut engine = Engine::new(
        EngineConfig::new(Mode::Bounce),
        Vec::<ViewCommand>::new(),
        FrameQueue::new(),
    );
    engine.activate(image());

    let err = run(
        &mut engine,
        &mut VirtualClock::new(),
        RunOpts::default(),
        |_| Err(PixelbrushError::render("sink full")),
    )
    .unwrap_err();
    assert!(err.to_string().contains("sink full"));
}

#[test]
fn inactive_engine_runs_nothing() {
    let mut engine = Engine::new(
        EngineConfig::default(),
        Vec::<ViewCommand>::new(),
        FrameQueue::new(),
    );
    let stats = run(
        &mut engine,
        &mut VirtualClock::new(),
        RunOpts::default(),
        |_| Ok(()),
    )
    .unwrap();
    assert_eq!(stats, RunStats::default());
}
