use std::time::Duration;

use lane_defence_core::tuning::TICK_DURATION;

use crate::Game;

/// Fixed-timestep driver turning elapsed real time into simulation ticks.
///
/// Elapsed time is scaled by the game's speed multiplier before it enters the
/// accumulator, so a faster multiplier runs more ticks per frame while every
/// individual tick stays identical.
#[derive(Clone, Debug)]
pub struct LoopDriver {
    accumulator: Duration,
    timestep: Duration,
}

impl LoopDriver {
    /// Creates a driver stepping at the standard simulation timestep.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            accumulator: Duration::ZERO,
            timestep: TICK_DURATION,
        }
    }

    /// Feeds elapsed real time into the driver and runs every whole tick it
    /// covers. Returns the number of ticks executed.
    pub fn advance(&mut self, game: &mut Game, real_elapsed: Duration) -> u32 {
        let scaled = real_elapsed
            .checked_mul(game.speed().factor())
            .unwrap_or(Duration::MAX);
        self.accumulator = self.accumulator.saturating_add(scaled);

        let mut ticks = 0;
        while self.accumulator >= self.timestep {
            self.accumulator -= self.timestep;
            game.tick();
            ticks += 1;
        }
        ticks
    }

    /// Simulated time waiting in the accumulator for the next tick.
    #[must_use]
    pub const fn pending(&self) -> Duration {
        self.accumulator
    }

    /// Drops any partially accumulated time.
    pub fn reset(&mut self) {
        self.accumulator = Duration::ZERO;
    }
}

impl Default for LoopDriver {
    fn default() -> Self {
        Self::new()
    }
}
