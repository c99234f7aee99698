use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::foundation::core::FrameIndex;
use crate::foundation::error::{PixelbrushError, PixelbrushResult};
use crate::foundation::math::unpremultiply_rgba8_in_place;
use crate::surface::raster::FrameRGBA;

/// Configuration provided to a [`FrameSink`] before the first frame.
#[derive(Debug, Clone, PartialEq)]
pub struct SinkConfig {
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Delay between consecutive frames.
    pub interval: Duration,
}

/// Sink contract for consuming presented frames in order.
///
/// Ordering contract: `push_frame` is called in strictly increasing `FrameIndex` order, with
/// frames matching the size given to `begin`.
pub trait FrameSink: Send {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> PixelbrushResult<()>;
    /// Push one frame.
    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> PixelbrushResult<()>;
    /// Called once after the last frame is pushed.
    fn end(&mut self) -> PixelbrushResult<()>;
}

fn check_push(
    cfg: Option<&SinkConfig>,
    last: Option<FrameIndex>,
    idx: FrameIndex,
    frame: &FrameRGBA,
) -> PixelbrushResult<()> {
    let cfg = cfg.ok_or_else(|| PixelbrushError::render("push_frame called before begin"))?;
    match last {
        Some(prev) if idx <= prev => {
            return Err(PixelbrushError::render(format!(
                "frame {} pushed after frame {}",
                idx.0, prev.0
            )));
        }
        _ => {}
    }
    if frame.width != cfg.width || frame.height != cfg.height {
        return Err(PixelbrushError::render(format!(
            "frame is {}x{}, sink expects {}x{}",
            frame.width, frame.height, cfg.width, cfg.height
        )));
    }
    Ok(())
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<(FrameIndex, FrameRGBA)>,
    ended: bool,
}

impl InMemorySink {
    /// Create a new in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg.clone()
    }

    /// Borrow the captured frames.
    pub fn frames(&self) -> &[(FrameIndex, FrameRGBA)] {
        &self.frames
    }

    /// Whether `end` was called.
    pub fn ended(&self) -> bool {
        self.ended
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> PixelbrushResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.ended = false;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> PixelbrushResult<()> {
        check_push(
            self.cfg.as_ref(),
            self.frames.last().map(|(i, _)| *i),
            idx,
            frame,
        )?;
        self.frames.push((idx, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> PixelbrushResult<()> {
        self.ended = true;
        Ok(())
    }
}

/// Writes each frame as `frame_<index>.png` (straight alpha) into a directory.
#[derive(Debug)]
pub struct PngSequenceSink {
    dir: PathBuf,
    cfg: Option<SinkConfig>,
    last: Option<FrameIndex>,
    written: Vec<PathBuf>,
}

impl PngSequenceSink {
    /// Sink writing into `dir`, created on `begin` if missing.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            cfg: None,
            last: None,
            written: Vec::new(),
        }
    }

    /// Output directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Paths written so far, in order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    /// File name used for frame `idx`.
    pub fn file_name(idx: FrameIndex) -> String {
        format!("frame_{:05}.png", idx.0)
    }
}

impl FrameSink for PngSequenceSink {
    fn begin(&mut self, cfg: SinkConfig) -> PixelbrushResult<()> {
        std::fs::create_dir_all(&self.dir).map_err(|e| {
            PixelbrushError::render(format!(
                "create output directory '{}': {e}",
                self.dir.display()
            ))
        })?;
        tracing::debug!(dir = %self.dir.display(), width = cfg.width, height = cfg.height, "png sequence begin");
        self.cfg = Some(cfg);
        self.last = None;
        self.written.clear();
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> PixelbrushResult<()> {
        check_push(self.cfg.as_ref(), self.last, idx, frame)?;

        let mut data = frame.data.clone();
        if frame.premultiplied {
            unpremultiply_rgba8_in_place(&mut data);
        }
        let path = self.dir.join(Self::file_name(idx));
        image::save_buffer_with_format(
            &path,
            &data,
            frame.width,
            frame.height,
            image::ExtendedColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .map_err(|e| PixelbrushError::render(format!("write '{}': {e}", path.display())))?;

        self.last = Some(idx);
        self.written.push(path);
        Ok(())
    }

    fn end(&mut self) -> PixelbrushResult<()> {
        tracing::info!(frames = self.written.len(), dir = %self.dir.display(), "png sequence written");
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
