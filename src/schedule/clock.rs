use std::time::Duration;

/// Time source the driver waits on between frames.
pub trait Clock {
    /// Let `delay` pass.
    fn wait(&mut self, delay: Duration);
    /// Time waited so far.
    fn elapsed(&self) -> Duration;
}

/// Clock that only counts; frames run back to back.
#[derive(Clone, Copy, Debug, Default)]
pub struct VirtualClock {
    elapsed: Duration,
}

impl VirtualClock {
    /// Clock at zero.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clock for VirtualClock {
    fn wait(&mut self, delay: Duration) {
        self.elapsed = self.elapsed.saturating_add(delay);
    }

    fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

/// Wall-clock time; blocks the calling thread.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock {
    elapsed: Duration,
}

impl Clock for SystemClock {
    fn wait(&mut self, delay: Duration) {
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
        self.elapsed = self.elapsed.saturating_add(delay);
    }

    fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schedule/clock.rs"]
mod tests;
