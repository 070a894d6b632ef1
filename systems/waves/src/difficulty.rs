//! Difficulty curve shared by the scheduler and the snapshot readers.
//!
//! Waves are numbered from one for the whole episode. The position of a wave
//! within its level, `(wave - 1) % WAVES_PER_LEVEL`, drives the intra-level
//! ramp so the last wave of a level is never easier than the first.

use std::time::Duration;

use lane_defence_core::tuning::{
    ATTACKER_BASE_SPEED, BASE_WAVE_SIZE, BASE_WAVE_SIZE_CAP, LEVEL_SPEED_BONUS,
    SPAWN_INTERVAL_BASE, SPAWN_INTERVAL_DECREMENT, SPAWN_INTERVAL_FLOOR, WAVES_PER_LEVEL,
    WAVE_DELAY_BASE, WAVE_DELAY_DECREMENT, WAVE_DELAY_FLOOR, WAVE_SIZE_CAP, WAVE_SIZE_STEP,
    WAVE_SPEED_BONUS, WAVE_SPEED_BONUS_CAP, WAVE_SPEED_STEP,
};

fn index_in_level(wave: u32) -> u32 {
    wave.saturating_sub(1) % WAVES_PER_LEVEL
}

/// Position of the wave within its level, starting at one.
#[must_use]
pub fn wave_in_level(wave: u32) -> u32 {
    index_in_level(wave) + 1
}

/// Attacker speed in units per tick for the provided level and wave.
#[must_use]
pub fn attacker_speed(level: u32, wave: u32) -> f32 {
    let level_bonus = LEVEL_SPEED_BONUS * level.saturating_sub(1) as f32;
    let steps = index_in_level(wave) / WAVE_SPEED_STEP;
    let wave_bonus = (WAVE_SPEED_BONUS * steps as f32).min(WAVE_SPEED_BONUS_CAP);
    ATTACKER_BASE_SPEED * (1.0 + level_bonus + wave_bonus)
}

/// Speed bonus over the base attacker speed, rounded to whole percent.
#[must_use]
pub fn speed_bonus_percent(level: u32, wave: u32) -> u32 {
    let ratio = attacker_speed(level, wave) / ATTACKER_BASE_SPEED;
    ((ratio - 1.0) * 100.0).round().max(0.0) as u32
}

/// Number of attackers spawned by the provided wave.
#[must_use]
pub fn wave_size(level: u32, wave: u32) -> u32 {
    let base = BASE_WAVE_SIZE
        .saturating_add(level.saturating_sub(1))
        .min(BASE_WAVE_SIZE_CAP);
    base.saturating_add(index_in_level(wave) / WAVE_SIZE_STEP)
        .min(WAVE_SIZE_CAP)
}

/// Time after which the next wave is triggered even with attackers alive.
#[must_use]
pub fn spawn_interval(wave: u32) -> Duration {
    shrink(SPAWN_INTERVAL_BASE, SPAWN_INTERVAL_DECREMENT, wave, SPAWN_INTERVAL_FLOOR)
}

/// Countdown between triggering a wave and its attackers appearing.
#[must_use]
pub fn wave_delay(wave: u32) -> Duration {
    shrink(WAVE_DELAY_BASE, WAVE_DELAY_DECREMENT, wave, WAVE_DELAY_FLOOR)
}

fn shrink(base: Duration, step: Duration, wave: u32, floor: Duration) -> Duration {
    let reduction = step.checked_mul(wave).unwrap_or(Duration::MAX);
    base.saturating_sub(reduction).max(floor)
}
