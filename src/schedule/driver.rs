use std::time::Duration;

use crate::engine::animator::{Engine, FrameOutcome};
use crate::foundation::error::PixelbrushResult;
use crate::schedule::clock::Clock;
use crate::schedule::queue::FrameQueue;
use crate::surface::draw::DrawSurface;
use crate::view::adapter::ViewAdapter;

/// Options for [`run`].
#[derive(Clone, Copy, Debug, Default)]
pub struct RunOpts {
    /// Stop after this many processed frames (looping animations never stop on their own).
    pub max_frames: Option<u64>,
}

/// Summary of a [`run`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Frames processed.
    pub frames: u64,
    /// Clock time spent waiting between frames.
    pub elapsed: Duration,
    /// The engine reached a terminal boundary.
    pub finished: bool,
    /// The frame cap stopped the run.
    pub capped: bool,
}

/// Drive `engine` until it stops requesting frames or `opts.max_frames` is reached.
///
/// Each due request waits on `clock`, then runs one frame and hands the engine to `on_frame`
/// (for presenting or recording it). Errors from `on_frame` abort the run.
#[tracing::instrument(skip_all)]
pub fn run<V, D, C, F>(
    engine: &mut Engine<V, FrameQueue, D>,
    clock: &mut C,
    opts: RunOpts,
    mut on_frame: F,
) -> PixelbrushResult<RunStats>
where
    V: ViewAdapter,
    D: DrawSurface,
    C: Clock + ?Sized,
    F: FnMut(&Engine<V, FrameQueue, D>) -> PixelbrushResult<()>,
{
    let mut stats = RunStats::default();
    let start = clock.elapsed();

    loop {
        if let Some(max) = opts.max_frames
            && stats.frames >= max
        {
            stats.capped = engine.scheduler().pending().is_some();
            break;
        }
        let Some(delay) = engine.scheduler_mut().take() else {
            break;
        };
        clock.wait(delay);

        match engine.advance_frame() {
            FrameOutcome::Skipped => continue,
            FrameOutcome::Continued => {
                stats.frames += 1;
                on_frame(engine)?;
            }
            FrameOutcome::Finished => {
                stats.frames += 1;
                stats.finished = true;
                on_frame(engine)?;
                break;
            }
        }
    }

    stats.elapsed = clock.elapsed().saturating_sub(start);
    tracing::debug!(
        frames = stats.frames,
        finished = stats.finished,
        capped = stats.capped,
        "run complete"
    );
    Ok(stats)
}

#[cfg(test)]
#[path = "../../tests/unit/schedule/driver.rs"]
mod tests;
