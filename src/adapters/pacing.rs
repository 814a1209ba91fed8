use crate::controllers::interactive::ports::frame_pacer::FramePacer;
use std::time::{Duration, Instant};

/// Sleeps so that ticks start at most once per `interval`.
///
/// A tick that overruns its slot is not made up for: the next deadline is
/// measured from when the late tick finished.
#[derive(Debug, Clone)]
pub struct FixedRatePacer {
    interval: Duration,
    next_deadline: Option<Instant>,
}

impl FixedRatePacer {
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_deadline: None,
        }
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl FramePacer for FixedRatePacer {
    fn wait_for_next_tick(&mut self) {
        let now = Instant::now();
        let deadline = self.next_deadline.unwrap_or(now + self.interval);

        if deadline > now {
            std::thread::sleep(deadline - now);
            self.next_deadline = Some(deadline + self.interval);
        } else {
            self.next_deadline = Some(now + self.interval);
        }
    }
}

/// Returns immediately; for headless runs and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPacing;

impl FramePacer for NoPacing {
    fn wait_for_next_tick(&mut self) {}
}
