//! Fixed gameplay constants shared by the world, the systems and adapters.
//!
//! Distances are expressed in playfield units, speeds in units per tick at
//! the 1x speed multiplier, and every duration in simulated time.

use std::time::Duration;

/// Length of a single fixed simulation step.
///
/// Sixty steps add up to marginally more than one second, so a timer of `n`
/// whole seconds always elapses within `60 * n` ticks.
pub const TICK_DURATION: Duration = Duration::from_micros(16_667);

/// Number of lanes, which is also the number of grid rows.
pub const LANES: u32 = 5;
/// Number of grid columns available for placement.
pub const COLUMNS: u32 = 9;
/// Width of a single grid cell.
pub const CELL_WIDTH: f32 = 80.0;
/// Total playfield width; attackers spawn on this edge.
pub const PLAYFIELD_WIDTH: f32 = 900.0;
/// Total playfield height.
pub const PLAYFIELD_HEIGHT: f32 = 500.0;
/// Height of a single lane.
pub const LANE_HEIGHT: f32 = PLAYFIELD_HEIGHT / LANES as f32;
/// Horizontal offset of the first grid column; also the boundary attackers
/// must not cross.
pub const GRID_LEFT: f32 = (PLAYFIELD_WIDTH - COLUMNS as f32 * CELL_WIDTH) / 2.0;

/// Resource available at the start of every episode.
pub const STARTING_RESOURCE: u32 = 500;
/// Duration of the hit-feedback flash window.
pub const FLASH_DURATION: Duration = Duration::from_millis(200);

/// Diameter of a defender body.
pub const DEFENDER_SIZE: f32 = 40.0;
/// Interval between two pickups emitted by a producer.
pub const PRODUCER_INTERVAL: Duration = Duration::from_secs(10);
/// Vertical offset of a freshly emitted pickup above its producer.
pub const PRODUCER_PICKUP_OFFSET: f32 = 20.0;
/// Cooldown between two shooter projectiles.
pub const SHOOTER_COOLDOWN: Duration = Duration::from_secs(2);
/// Horizontal offset of a projectile spawned by a shooter.
pub const SHOOTER_MUZZLE_OFFSET: f32 = 20.0;
/// Interval between two spikes pulses.
pub const SPIKES_INTERVAL: Duration = Duration::from_secs(1);
/// Damage dealt by a spikes pulse to each attacker in range.
pub const SPIKES_DAMAGE: i32 = 20;
/// Horizontal reach of a spikes pulse measured from the defender centre.
pub const SPIKES_RADIUS: f32 = 40.0;
/// Delay between placing a mine and the mine becoming armed.
pub const MINE_ARMING_DELAY: Duration = Duration::from_secs(15);
/// Damage dealt by a detonating mine.
pub const MINE_DAMAGE: i32 = 1_000;
/// Horizontal blast radius of a detonating mine.
pub const MINE_BLAST_RADIUS: f32 = 60.0;

/// Body size of an attacker.
pub const ATTACKER_SIZE: f32 = 40.0;
/// Health of a freshly spawned attacker.
pub const ATTACKER_HEALTH: i32 = 100;
/// Damage dealt per melee strike.
pub const ATTACKER_DAMAGE: i32 = 10;
/// Simulated time between two melee strikes of one attacker.
pub const ATTACKER_ATTACK_INTERVAL: Duration = Duration::from_secs(1);
/// Attacker speed before level and wave bonuses.
pub const ATTACKER_BASE_SPEED: f32 = 0.2;

/// Horizontal projectile speed.
pub const PROJECTILE_SPEED: f32 = 8.0;
/// Damage dealt by a projectile that did not pass an amplifier.
pub const PROJECTILE_DAMAGE: i32 = 20;
/// Damage multiplier applied once when a projectile passes an amplifier.
pub const AMPLIFIER_FACTOR: i32 = 2;

/// Resource granted by a single pickup.
pub const PICKUP_VALUE: u32 = 25;
/// Initial pickup size, also the collection hit radius.
pub const PICKUP_SIZE: f32 = 30.0;
/// Distance a pickup rises before hovering.
pub const PICKUP_RISE: f32 = 100.0;
/// Vertical pickup speed.
pub const PICKUP_SPEED: f32 = 1.0;
/// Time a pickup hovers at the top of its arc.
pub const PICKUP_HOVER: Duration = Duration::from_secs(1);
/// Upward drift per tick of a collected pickup.
pub const PICKUP_COLLECT_DRIFT: f32 = 2.0;
/// Size lost per tick by a collected pickup.
pub const PICKUP_COLLECT_SHRINK: f32 = 1.0;

/// Resting x coordinate of every sweeper.
pub const SWEEPER_START_X: f32 = 50.0;
/// Horizontal sweeper speed once active.
pub const SWEEPER_SPEED: f32 = 5.0;
/// Distance ahead of the sweeper centre that still removes attackers.
pub const SWEEPER_REACH: f32 = 20.0;

/// Number of waves that make up one level.
pub const WAVES_PER_LEVEL: u32 = 10;
/// Number of attackers in the opening wave of an episode.
pub const OPENING_WAVE_SIZE: u32 = 2;
/// Speed bonus gained per level above the first.
pub const LEVEL_SPEED_BONUS: f32 = 0.3;
/// Speed bonus gained per completed wave step within a level.
pub const WAVE_SPEED_BONUS: f32 = 0.2;
/// Number of waves that form one speed bonus step.
pub const WAVE_SPEED_STEP: u32 = 2;
/// Upper bound of the wave speed bonus.
pub const WAVE_SPEED_BONUS_CAP: f32 = 0.8;
/// Attackers per wave on the first level.
pub const BASE_WAVE_SIZE: u32 = 2;
/// Upper bound of the level-based part of the wave size.
pub const BASE_WAVE_SIZE_CAP: u32 = 4;
/// Number of waves that add one attacker to the wave size.
pub const WAVE_SIZE_STEP: u32 = 3;
/// Upper bound of the wave size.
pub const WAVE_SIZE_CAP: u32 = 7;
/// Inter-wave spawn interval before any reduction.
pub const SPAWN_INTERVAL_BASE: Duration = Duration::from_millis(8_000);
/// Reduction of the spawn interval per wave.
pub const SPAWN_INTERVAL_DECREMENT: Duration = Duration::from_millis(200);
/// Lower bound of the spawn interval.
pub const SPAWN_INTERVAL_FLOOR: Duration = Duration::from_millis(4_000);
/// Delay between triggering a wave and its attackers appearing.
pub const WAVE_DELAY_BASE: Duration = Duration::from_millis(2_000);
/// Reduction of the wave delay per wave.
pub const WAVE_DELAY_DECREMENT: Duration = Duration::from_millis(100);
/// Lower bound of the wave delay.
pub const WAVE_DELAY_FLOOR: Duration = Duration::from_millis(1_000);
