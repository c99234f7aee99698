use std::time::Duration;

use pixelbrush::{ElementView, Engine, EngineConfig, FrameQueue, Mode, RunOpts, SourceImage};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let data = (0..64u32 * 48)
        .flat_map(|i| [(i % 64 * 4) as u8, (i / 64 * 5) as u8, 128, 255])
        .collect();
    let img = SourceImage::from_premul_rgba8(64, 48, data)?;

    for mode in Mode::ALL {
        let cfg = EngineConfig::new(mode).interval(Duration::from_millis(15));
        let mut engine = Engine::new(cfg, ElementView::new("photo"), FrameQueue::new());
        engine.activate(img.clone());
        let stats = pixelbrush::run(
            &mut engine,
            &mut pixelbrush::VirtualClock::new(),
            RunOpts {
                max_frames: Some(400),
            },
            |_| Ok(()),
        )?;
        println!(
            "{mode}: {} frames, {} ms, finished={} source_visible={}",
            stats.frames,
            stats.elapsed.as_millis(),
            stats.finished,
            engine.view().source_visible()
        );
    }

    Ok(())
}
