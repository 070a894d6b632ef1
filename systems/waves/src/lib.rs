#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Deterministic wave scheduler responsible for emitting attacker waves.
//!
//! The scheduler consumes [`Event::TimeAdvanced`] to drive its countdowns and
//! [`Event::WorldReset`] to start over, and answers with
//! [`Command::SpawnWave`]. Lane selection uses a seeded ChaCha stream so a
//! given seed always produces the same episode.

pub mod difficulty;

use std::time::Duration;

use lane_defence_core::{
    tuning::{LANES, OPENING_WAVE_SIZE, WAVES_PER_LEVEL},
    Command, Event,
};
use rand::{seq::SliceRandom, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

/// Configuration parameters required to construct the wave scheduler.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    rng_seed: u64,
}

impl Config {
    /// Creates a new configuration using the provided lane selection seed.
    #[must_use]
    pub const fn new(rng_seed: u64) -> Self {
        Self { rng_seed }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    /// The episode has not spawned anything yet.
    Opening,
    /// Waiting for the spawn interval or an empty field.
    Idle,
    /// A wave has been triggered and spawns once the countdown elapses.
    Pending { remaining: Duration },
}

/// Pure system that schedules waves of attackers with escalating difficulty.
#[derive(Debug)]
pub struct WaveScheduler {
    rng_seed: u64,
    rng: ChaCha8Rng,
    phase: Phase,
    level: u32,
    wave: u32,
    /// Time since the last trigger; keeps running through the countdown.
    since_trigger: Duration,
}

impl WaveScheduler {
    /// Creates a new wave scheduler using the supplied configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            rng_seed: config.rng_seed,
            rng: ChaCha8Rng::seed_from_u64(config.rng_seed),
            phase: Phase::Opening,
            level: 1,
            wave: 1,
            since_trigger: Duration::ZERO,
        }
    }

    /// Returns the scheduler to the start of an episode, cancelling any
    /// pending countdown.
    pub fn reset(&mut self) {
        *self = Self::new(Config::new(self.rng_seed));
    }

    /// Consumes world events and the live attacker count to emit wave commands.
    ///
    /// Nothing is scheduled once the episode is over.
    pub fn handle(
        &mut self,
        events: &[Event],
        active_attackers: usize,
        game_over: bool,
        out: &mut Vec<Command>,
    ) {
        let mut accumulated = Duration::ZERO;
        for event in events {
            match event {
                Event::TimeAdvanced { dt } => accumulated = accumulated.saturating_add(*dt),
                Event::WorldReset => {
                    self.reset();
                    accumulated = Duration::ZERO;
                }
                _ => {}
            }
        }

        if game_over || accumulated.is_zero() {
            return;
        }

        match self.phase {
            Phase::Opening => {
                let speed = self.speed();
                let lanes = self.select_lanes(OPENING_WAVE_SIZE);
                debug!(count = lanes.len(), "opening wave");
                out.push(Command::SpawnWave {
                    wave: self.wave,
                    level: self.level,
                    lanes,
                    speed,
                });
                self.phase = Phase::Idle;
                self.since_trigger = Duration::ZERO;
            }
            Phase::Idle => {
                self.since_trigger = self.since_trigger.saturating_add(accumulated);
                if active_attackers == 0
                    || self.since_trigger >= difficulty::spawn_interval(self.wave)
                {
                    let remaining = difficulty::wave_delay(self.wave);
                    debug!(wave = self.wave, delay_ms = remaining.as_millis() as u64, "wave triggered");
                    self.phase = Phase::Pending { remaining };
                    self.since_trigger = Duration::ZERO;
                }
            }
            Phase::Pending { remaining } => {
                self.since_trigger = self.since_trigger.saturating_add(accumulated);
                let remaining = remaining.saturating_sub(accumulated);
                if remaining.is_zero() {
                    self.spawn_next_wave(out);
                } else {
                    self.phase = Phase::Pending { remaining };
                }
            }
        }
    }

    fn spawn_next_wave(&mut self, out: &mut Vec<Command>) {
        if self.wave % WAVES_PER_LEVEL == 0 {
            self.level = self.level.saturating_add(1);
            info!(level = self.level, "level up");
        }
        self.wave = self.wave.saturating_add(1);

        let speed = self.speed();
        let lanes = self.select_lanes(self.attackers_per_wave());
        out.push(Command::SpawnWave {
            wave: self.wave,
            level: self.level,
            lanes,
            speed,
        });
        self.phase = Phase::Idle;
    }

    /// Shuffles the lanes and takes `count` of them, wrapping around when a
    /// wave has more attackers than there are lanes.
    fn select_lanes(&mut self, count: u32) -> Vec<u32> {
        let mut order: Vec<u32> = (0..LANES).collect();
        order.shuffle(&mut self.rng);
        order.iter().copied().cycle().take(count as usize).collect()
    }

    /// Current level, starting at one.
    #[must_use]
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Total number of waves in the episode so far, starting at one.
    #[must_use]
    pub fn wave(&self) -> u32 {
        self.wave
    }

    /// Position of the current wave within its level, starting at one.
    #[must_use]
    pub fn wave_in_level(&self) -> u32 {
        difficulty::wave_in_level(self.wave)
    }

    /// Number of attackers in a wave at the current difficulty.
    #[must_use]
    pub fn attackers_per_wave(&self) -> u32 {
        difficulty::wave_size(self.level, self.wave)
    }

    /// Attacker speed at the current difficulty.
    #[must_use]
    pub fn speed(&self) -> f32 {
        difficulty::attacker_speed(self.level, self.wave)
    }

    /// Attacker speed bonus over the base speed, in percent.
    #[must_use]
    pub fn speed_bonus_percent(&self) -> u32 {
        difficulty::speed_bonus_percent(self.level, self.wave)
    }

    /// Reports whether a triggered wave is waiting for its countdown.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self.phase, Phase::Pending { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lane_selection_wraps_around() {
        let mut scheduler = WaveScheduler::new(Config::new(7));
        let lanes = scheduler.select_lanes(7);

        assert_eq!(lanes.len(), 7);
        assert_eq!(lanes[0], lanes[5]);
        assert_eq!(lanes[1], lanes[6]);
        let mut distinct = lanes[..5].to_vec();
        distinct.sort_unstable();
        assert_eq!(distinct, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn reset_cancels_pending_countdown() {
        let mut scheduler = WaveScheduler::new(Config::new(7));
        scheduler.phase = Phase::Pending {
            remaining: Duration::from_millis(500),
        };
        scheduler.wave = 14;
        scheduler.level = 2;

        scheduler.reset();

        assert!(!scheduler.is_pending());
        assert_eq!(scheduler.phase, Phase::Opening);
        assert_eq!((scheduler.level(), scheduler.wave()), (1, 1));
    }
}
