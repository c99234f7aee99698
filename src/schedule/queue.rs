use std::time::Duration;

/// "Run the next frame after `delay`" requests issued by the engine.
///
/// The engine issues a fresh request after every frame it wants followed by another; there is no
/// persistent interval. Whoever owns the scheduler calls `Engine::advance_frame` when a request
/// comes due.
pub trait FrameScheduler {
    /// Ask for one more frame after `delay`.
    fn request_frame(&mut self, delay: Duration);
    /// Drop any pending request.
    fn cancel(&mut self);
}

impl<T: FrameScheduler + ?Sized> FrameScheduler for &mut T {
    fn request_frame(&mut self, delay: Duration) {
        (**self).request_frame(delay);
    }

    fn cancel(&mut self) {
        (**self).cancel();
    }
}

impl<T: FrameScheduler + ?Sized> FrameScheduler for Box<T> {
    fn request_frame(&mut self, delay: Duration) {
        (**self).request_frame(delay);
    }

    fn cancel(&mut self) {
        (**self).cancel();
    }
}

/// Single-slot deterministic scheduler.
///
/// Holds at most one pending request; the driver (or a test) takes it and runs the frame.
#[derive(Clone, Debug, Default)]
pub struct FrameQueue {
    pending: Option<Duration>,
    requested: u64,
    cancelled: u64,
}

impl FrameQueue {
    /// Empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Delay of the pending request, if any.
    pub fn pending(&self) -> Option<Duration> {
        self.pending
    }

    /// Remove and return the pending request.
    pub fn take(&mut self) -> Option<Duration> {
        self.pending.take()
    }

    /// Total requests received.
    pub fn requested(&self) -> u64 {
        self.requested
    }

    /// Requests dropped through [`FrameScheduler::cancel`].
    pub fn cancelled(&self) -> u64 {
        self.cancelled
    }
}

impl FrameScheduler for FrameQueue {
    fn request_frame(&mut self, delay: Duration) {
        if let Some(prev) = self.pending.replace(delay) {
            tracing::warn!(?prev, ?delay, "frame requested while one was pending; replacing");
        }
        self.requested = self.requested.saturating_add(1);
    }

    fn cancel(&mut self) {
        if self.pending.take().is_some() {
            self.cancelled = self.cancelled.saturating_add(1);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schedule/queue.rs"]
mod tests;
