use std::time::Duration;

/// Fixed-timestep accumulator.
///
/// Frame time goes in, whole game ticks come out. Catch-up is capped so a
/// long stall (window drag, suspend) does not replay a burst of moves.
#[derive(Debug, Clone)]
pub struct FixedStep {
    interval: Duration,
    accumulator: Duration,
    max_catch_up: u32,
}

impl FixedStep {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(Duration::from_millis(1)),
            accumulator: Duration::ZERO,
            max_catch_up: 3,
        }
    }

    /// Feed elapsed frame time, returning how many ticks are due
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.accumulator += elapsed;

        let mut ticks = 0;
        while self.accumulator >= self.interval {
            self.accumulator -= self.interval;
            ticks += 1;

            if ticks == self.max_catch_up {
                self.accumulator = Duration::ZERO;
                break;
            }
        }

        ticks
    }

    /// Time left until the next tick is due
    pub fn until_next(&self) -> Duration {
        self.interval.saturating_sub(self.accumulator)
    }
}
