//! Wall-clock pacing for fixed-interval frame stepping.

// absorbs rounding when wall time lands exactly on an interval boundary
const PACING_SLACK_SEC: f64 = 1e-9;

/// Fixed-interval stepper: turns elapsed wall time into a number of frames.
#[derive(Clone, Copy, Debug)]
pub struct FramePacer {
    interval_sec: f64,
    max_steps: u32,
    accum_sec: f64,
}

impl FramePacer {
    pub fn new(interval_ms: u64, max_steps: u32) -> Self {
        Self {
            interval_sec: interval_ms as f64 / 1000.0,
            max_steps: max_steps.max(1),
            accum_sec: 0.0,
        }
    }

    /// How many frames are due after `dt_sec` more seconds. Backlog beyond
    /// `max_steps` is dropped; less than one interval is carried over.
    pub fn due(&mut self, dt_sec: f64) -> u32 {
        if self.interval_sec <= 0.0 {
            return 1;
        }
        self.accum_sec += dt_sec.max(0.0);
        let mut steps = 0;
        while self.accum_sec + PACING_SLACK_SEC >= self.interval_sec && steps < self.max_steps {
            self.accum_sec -= self.interval_sec;
            steps += 1;
        }
        if steps == self.max_steps {
            self.accum_sec = self
                .accum_sec
                .min(self.interval_sec - 2.0 * PACING_SLACK_SEC);
        }
        steps
    }
}
