#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Lane Defence engine.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative world, and pure systems. Adapters submit [`Command`] values
//! describing desired mutations, the world executes those commands via its
//! `apply` entry point, and then broadcasts [`Event`] values for systems to
//! react to deterministically. Systems consume event streams, query immutable
//! snapshots, and respond exclusively with new command batches.

pub mod tuning;

use std::{fmt, str::FromStr, time::Duration};

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Canonical banner emitted when the experience boots.
pub const WELCOME_BANNER: &str = "Welcome to Lane Defence.";

/// Commands that express all permissible world mutations.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Advances the simulation clock by the provided delta time.
    Tick {
        /// Duration of simulated time that elapsed since the previous tick.
        dt: Duration,
    },
    /// Requests placement of a defender into a grid cell.
    PlaceDefender {
        /// Type of defender to construct.
        kind: DefenderKind,
        /// Cell that should hold the defender.
        cell: CellCoord,
    },
    /// Requests removal of the defender occupying a grid cell.
    RemoveDefender {
        /// Cell whose defender should be removed.
        cell: CellCoord,
    },
    /// Requests collection of a pickup.
    CollectPickup {
        /// Identifier of the pickup to collect.
        pickup: PickupId,
    },
    /// Toggles automatic collection of pickups returning to their origin.
    SetAutoCollect {
        /// Whether pickups are collected automatically.
        enabled: bool,
    },
    /// Requests that a wave of attackers enters the playfield.
    SpawnWave {
        /// Wave number the attackers belong to.
        wave: u32,
        /// Level the wave belongs to.
        level: u32,
        /// Lanes receiving one attacker each, in spawn order.
        lanes: Vec<u32>,
        /// Movement speed assigned to every attacker of the wave.
        speed: f32,
    },
    /// Discards the episode and restores the initial world state.
    Reset,
}

/// Events broadcast by the world after processing commands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// Indicates that the simulation clock advanced.
    TimeAdvanced {
        /// Duration of simulated time that elapsed in the tick.
        dt: Duration,
    },
    /// Confirms that a defender was placed.
    DefenderPlaced {
        /// Identifier assigned to the defender by the world.
        defender: DefenderId,
        /// Type of defender that was placed.
        kind: DefenderKind,
        /// Cell occupied by the defender.
        cell: CellCoord,
        /// Resource deducted for the placement.
        cost: u32,
    },
    /// Reports that a placement request was rejected.
    PlacementRejected {
        /// Type of defender requested for placement.
        kind: DefenderKind,
        /// Cell provided in the placement request.
        cell: CellCoord,
        /// Specific reason the placement failed.
        reason: PlacementError,
    },
    /// Confirms that a defender was removed with the removal tool.
    DefenderRemoved {
        /// Identifier of the removed defender.
        defender: DefenderId,
        /// Type of the removed defender.
        kind: DefenderKind,
        /// Cell the defender occupied.
        cell: CellCoord,
        /// Resource refunded for the removal.
        refund: u32,
    },
    /// Reports that a removal request was rejected.
    RemovalRejected {
        /// Cell provided in the removal request.
        cell: CellCoord,
        /// Specific reason the removal failed.
        reason: RemovalError,
    },
    /// Announces that a defender was destroyed by attackers.
    DefenderDestroyed {
        /// Identifier of the destroyed defender.
        defender: DefenderId,
        /// Type of the destroyed defender.
        kind: DefenderKind,
        /// Cell the defender occupied.
        cell: CellCoord,
    },
    /// Announces that an armed mine detonated.
    MineDetonated {
        /// Identifier of the consumed mine.
        defender: DefenderId,
        /// Cell the mine occupied.
        cell: CellCoord,
        /// Number of attackers caught in the blast.
        victims: u32,
    },
    /// Announces that a shooter fired a projectile.
    ProjectileFired {
        /// Identifier of the new projectile.
        projectile: ProjectileId,
        /// Lane the projectile travels along.
        lane: u32,
    },
    /// Announces that a pickup appeared above a producer.
    PickupSpawned {
        /// Identifier of the new pickup.
        pickup: PickupId,
    },
    /// Confirms that a pickup was collected.
    PickupCollected {
        /// Identifier of the collected pickup.
        pickup: PickupId,
        /// Resource granted by the pickup.
        value: u32,
    },
    /// Reports that a collection request was rejected.
    CollectRejected {
        /// Identifier provided in the request.
        pickup: PickupId,
        /// Specific reason the collection failed.
        reason: CollectError,
    },
    /// Confirms that an attacker entered the playfield.
    AttackerSpawned {
        /// Identifier assigned to the attacker.
        attacker: AttackerId,
        /// Lane the attacker travels along.
        lane: u32,
    },
    /// Announces that an attacker ran out of health.
    AttackerKilled {
        /// Identifier of the attacker.
        attacker: AttackerId,
        /// Lane the attacker travelled along.
        lane: u32,
    },
    /// Announces that a sweeper cleared an attacker.
    AttackerSwept {
        /// Identifier of the attacker.
        attacker: AttackerId,
        /// Lane the attacker travelled along.
        lane: u32,
    },
    /// Announces that a lane's sweeper started moving.
    SweeperActivated {
        /// Lane guarded by the sweeper.
        lane: u32,
    },
    /// Announces that a sweeper left the playfield and cannot be used again.
    SweeperSpent {
        /// Lane the sweeper guarded.
        lane: u32,
    },
    /// Confirms that a wave of attackers was spawned.
    WaveSpawned {
        /// Wave number.
        wave: u32,
        /// Level the wave belongs to.
        level: u32,
        /// Number of attackers spawned.
        count: u32,
    },
    /// Announces that an attacker reached an unguarded boundary.
    GameOver {
        /// Lane that was breached.
        lane: u32,
    },
    /// Announces that the world returned to its initial state.
    WorldReset,
}

/// Unique identifier assigned to a defender.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DefenderId(u32);

impl DefenderId {
    /// Creates a new defender identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Unique identifier assigned to an attacker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AttackerId(u32);

impl AttackerId {
    /// Creates a new attacker identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Unique identifier assigned to a projectile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProjectileId(u32);

impl ProjectileId {
    /// Creates a new projectile identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Unique identifier assigned to a pickup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PickupId(u32);

impl PickupId {
    /// Creates a new pickup identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Location of a single grid cell expressed as row and column indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellCoord {
    row: u32,
    column: u32,
}

impl CellCoord {
    /// Creates a new grid cell coordinate.
    #[must_use]
    pub const fn new(row: u32, column: u32) -> Self {
        Self { row, column }
    }

    /// Zero-based row index of the cell, which is also its lane.
    #[must_use]
    pub const fn row(&self) -> u32 {
        self.row
    }

    /// Zero-based column index of the cell.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }
}

impl fmt::Display for CellCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// Types of defenders that can be placed on the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DefenderKind {
    /// Periodically emits resource pickups.
    Producer,
    /// Fires projectiles along its lane.
    Shooter,
    /// Passive wall with a large health pool.
    Blocker,
    /// Damages attackers walking over it without stopping them.
    Spikes,
    /// Doubles the damage of projectiles passing through it.
    Amplifier,
    /// Arms after a delay and detonates on contact.
    Mine,
}

impl DefenderKind {
    /// Every defender kind in toolbar order.
    pub const ALL: [DefenderKind; 6] = [
        Self::Producer,
        Self::Shooter,
        Self::Blocker,
        Self::Spikes,
        Self::Amplifier,
        Self::Mine,
    ];

    /// Resource required to place the defender.
    #[must_use]
    pub const fn cost(self) -> u32 {
        match self {
            Self::Producer => 50,
            Self::Shooter => 100,
            Self::Blocker => 50,
            Self::Spikes => 100,
            Self::Amplifier => 175,
            Self::Mine => 25,
        }
    }

    /// Resource refunded when the defender is removed with the removal tool.
    #[must_use]
    pub const fn refund(self) -> u32 {
        self.cost() / 2
    }

    /// Health of a freshly placed defender.
    #[must_use]
    pub const fn max_health(self) -> i32 {
        match self {
            Self::Producer => 80,
            Self::Shooter => 100,
            Self::Blocker => 400,
            Self::Spikes => 100,
            Self::Amplifier => 100,
            Self::Mine => 50,
        }
    }

    /// Stable lowercase name used by adapters.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Producer => "producer",
            Self::Shooter => "shooter",
            Self::Blocker => "blocker",
            Self::Spikes => "spikes",
            Self::Amplifier => "amplifier",
            Self::Mine => "mine",
        }
    }
}

impl fmt::Display for DefenderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a defender kind name is not recognised.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown defender kind `{0}`")]
pub struct ParseDefenderKindError(String);

impl FromStr for DefenderKind {
    type Err = ParseDefenderKindError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == normalized)
            .ok_or_else(|| ParseDefenderKindError(value.to_owned()))
    }
}

/// Global simulation speed multiplier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpeedMultiplier {
    /// Real-time speed.
    #[default]
    X1,
    /// Twice as fast.
    X2,
    /// Four times as fast.
    X4,
    /// Eight times as fast.
    X8,
}

impl SpeedMultiplier {
    /// Integer factor applied to elapsed real time.
    #[must_use]
    pub const fn factor(self) -> u32 {
        match self {
            Self::X1 => 1,
            Self::X2 => 2,
            Self::X4 => 4,
            Self::X8 => 8,
        }
    }

    /// Multiplier that follows this one when cycling through the options.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::X1 => Self::X2,
            Self::X2 => Self::X4,
            Self::X4 => Self::X8,
            Self::X8 => Self::X1,
        }
    }
}

impl fmt::Display for SpeedMultiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x", self.factor())
    }
}

/// Error returned when a speed multiplier is not one of the supported values.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unsupported speed multiplier `{0}`, expected 1, 2, 4 or 8")]
pub struct ParseSpeedError(String);

impl FromStr for SpeedMultiplier {
    type Err = ParseSpeedError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().trim_end_matches(['x', 'X']) {
            "1" => Ok(Self::X1),
            "2" => Ok(Self::X2),
            "4" => Ok(Self::X4),
            "8" => Ok(Self::X8),
            _ => Err(ParseSpeedError(value.to_owned())),
        }
    }
}

/// Tool currently armed by the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tool {
    /// Places the given defender kind on click.
    Place(DefenderKind),
    /// Removes the clicked defender for a partial refund.
    Remove,
}

/// Reasons a placement request may be rejected by the world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlacementError {
    /// The requested cell lies outside the grid.
    OutOfBounds,
    /// The requested cell already holds a defender.
    Occupied,
    /// The resource total does not cover the defender's cost.
    InsufficientResource,
}

/// Reasons a removal request may be rejected by the world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RemovalError {
    /// The requested cell lies outside the grid.
    OutOfBounds,
    /// The requested cell holds no defender.
    Empty,
}

/// Reasons a collection request may be rejected by the world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CollectError {
    /// The pickup was already collected.
    AlreadyCollected,
    /// No pickup with the provided identifier exists.
    NotFound,
}

/// Result of a placement request as reported to input collaborators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlacementOutcome {
    /// The defender was placed and its cost deducted.
    Placed,
    /// The cell already holds a defender.
    Occupied,
    /// The resource total does not cover the cost.
    InsufficientResource,
    /// The cell lies outside the grid.
    InvalidCell,
}

impl From<PlacementError> for PlacementOutcome {
    fn from(error: PlacementError) -> Self {
        match error {
            PlacementError::OutOfBounds => Self::InvalidCell,
            PlacementError::Occupied => Self::Occupied,
            PlacementError::InsufficientResource => Self::InsufficientResource,
        }
    }
}

/// Result of a removal request as reported to input collaborators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RemovalOutcome {
    /// The defender was removed and half its cost refunded.
    Removed,
    /// The cell holds no defender.
    Empty,
    /// The cell lies outside the grid.
    InvalidCell,
}

impl From<RemovalError> for RemovalOutcome {
    fn from(error: RemovalError) -> Self {
        match error {
            RemovalError::OutOfBounds => Self::InvalidCell,
            RemovalError::Empty => Self::Empty,
        }
    }
}

/// Result of a collection request as reported to input collaborators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CollectOutcome {
    /// The pickup was collected and its value granted.
    Collected,
    /// The pickup had already been collected.
    AlreadyCollected,
    /// No matching pickup exists.
    NotFound,
}

impl From<CollectError> for CollectOutcome {
    fn from(error: CollectError) -> Self {
        match error {
            CollectError::AlreadyCollected => Self::AlreadyCollected,
            CollectError::NotFound => Self::NotFound,
        }
    }
}

/// Result of clicking a grid cell with the currently selected tool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClickOutcome {
    /// The click attempted a placement.
    Placement(PlacementOutcome),
    /// The click attempted a removal.
    Removal(RemovalOutcome),
    /// No tool was selected, so the click had no effect.
    NoTool,
}

/// Decorative state of a defender exposed to renderers.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum DefenderVisual {
    /// No kind-specific decoration.
    Plain,
    /// A mine that is still arming.
    Arming {
        /// Fraction of the arming delay that has elapsed, in `0.0..=1.0`.
        progress: f32,
    },
    /// A mine ready to detonate.
    Armed,
}

/// Immutable representation of a single defender used for queries.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DefenderSnapshot {
    /// Identifier allocated to the defender by the world.
    pub id: DefenderId,
    /// Kind of defender.
    pub kind: DefenderKind,
    /// Cell occupied by the defender.
    pub cell: CellCoord,
    /// Centre of the defender in playfield units.
    pub position: Vec2,
    /// Remaining health.
    pub health: i32,
    /// Health at placement.
    pub max_health: i32,
    /// Whether the hit-feedback window is open.
    pub flashing: bool,
    /// Kind-specific decoration.
    pub visual: DefenderVisual,
}

/// Immutable representation of a single attacker used for queries.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AttackerSnapshot {
    /// Identifier allocated to the attacker by the world.
    pub id: AttackerId,
    /// Lane the attacker travels along.
    pub lane: u32,
    /// Position of the attacker in playfield units.
    pub position: Vec2,
    /// Remaining health.
    pub health: i32,
    /// Health at spawn.
    pub max_health: i32,
    /// Movement speed in units per tick.
    pub speed: f32,
    /// Whether the hit-feedback window is open.
    pub flashing: bool,
    /// Whether a defender halted the attacker during the last tick.
    pub blocked: bool,
}

/// Immutable representation of a single projectile used for queries.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectileSnapshot {
    /// Identifier allocated to the projectile by the world.
    pub id: ProjectileId,
    /// Lane the projectile travels along.
    pub lane: u32,
    /// Position of the projectile in playfield units.
    pub position: Vec2,
    /// Damage the projectile deals on impact.
    pub damage: i32,
    /// Whether the projectile passed an amplifier.
    pub empowered: bool,
}

/// Vertical state machine of a pickup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PickupPhase {
    /// Moving up toward the top of its arc.
    Rising,
    /// Waiting at the top of its arc.
    Hovering,
    /// Moving back down toward its origin.
    Falling,
    /// Waiting at its origin until collected.
    Resting,
}

/// Immutable representation of a single pickup used for queries.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PickupSnapshot {
    /// Identifier allocated to the pickup by the world.
    pub id: PickupId,
    /// Centre of the pickup in playfield units.
    pub position: Vec2,
    /// Current diameter; shrinks to zero after collection.
    pub size: f32,
    /// Vertical state machine phase.
    pub phase: PickupPhase,
    /// Whether the pickup has been collected.
    pub collected: bool,
}

/// Lifecycle of a lane's sweeper.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SweeperState {
    /// Waiting at the left edge for an attacker to cross the boundary.
    Idle,
    /// Travelling right and clearing its lane.
    Active,
    /// Left the playfield; the lane is undefended from now on.
    Used,
}

/// Immutable representation of a single sweeper used for queries.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SweeperSnapshot {
    /// Lane guarded by the sweeper.
    pub lane: u32,
    /// Centre of the sweeper in playfield units.
    pub position: Vec2,
    /// Lifecycle state.
    pub state: SweeperState,
}

/// Read-only snapshot of the whole simulation for rendering and UI collaborators.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Simulated time elapsed in the current episode.
    pub elapsed: Duration,
    /// Spendable resource total.
    pub resource: u32,
    /// Current level, starting at one.
    pub level: u32,
    /// Total number of waves in the episode so far.
    pub wave: u32,
    /// Position of the current wave within its level, starting at one.
    pub wave_in_level: u32,
    /// Number of attackers per wave at the current difficulty.
    pub attackers_per_wave: u32,
    /// Attacker speed bonus over the base speed, in percent.
    pub speed_bonus_percent: u32,
    /// Whether a wave is waiting to spawn.
    pub wave_pending: bool,
    /// Whether the episode has ended.
    pub game_over: bool,
    /// Global speed multiplier.
    pub speed: SpeedMultiplier,
    /// Whether pickups are collected automatically.
    pub auto_collect: bool,
    /// Tool currently selected by the player.
    pub tool: Option<Tool>,
    /// Defenders on the grid in collection order.
    pub defenders: Vec<DefenderSnapshot>,
    /// Attackers on the playfield in collection order.
    pub attackers: Vec<AttackerSnapshot>,
    /// Projectiles in flight.
    pub projectiles: Vec<ProjectileSnapshot>,
    /// Pickups, including collected ones still shrinking.
    pub pickups: Vec<PickupSnapshot>,
    /// One sweeper per lane, ordered by lane.
    pub sweepers: Vec<SweeperSnapshot>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refund_is_half_of_cost_rounded_down() {
        for kind in DefenderKind::ALL {
            assert_eq!(kind.refund(), kind.cost() / 2);
        }
        assert_eq!(DefenderKind::Amplifier.refund(), 87);
    }

    #[test]
    fn defender_kind_parses_case_insensitively() {
        assert_eq!("Shooter".parse(), Ok(DefenderKind::Shooter));
        assert_eq!(" mine ".parse(), Ok(DefenderKind::Mine));
        assert!("cactus".parse::<DefenderKind>().is_err());
    }

    #[test]
    fn defender_kind_names_round_trip_through_display() {
        for kind in DefenderKind::ALL {
            assert_eq!(kind.to_string().parse(), Ok(kind));
        }
    }

    #[test]
    fn speed_multiplier_accepts_optional_suffix() {
        assert_eq!("4".parse(), Ok(SpeedMultiplier::X4));
        assert_eq!("8x".parse(), Ok(SpeedMultiplier::X8));
        assert!("3".parse::<SpeedMultiplier>().is_err());
    }

    #[test]
    fn speed_multiplier_cycles_back_to_real_time() {
        let mut speed = SpeedMultiplier::X1;
        for _ in 0..4 {
            speed = speed.next();
        }
        assert_eq!(speed, SpeedMultiplier::X1);
    }

    #[test]
    fn placement_errors_map_onto_outcomes() {
        assert_eq!(
            PlacementOutcome::from(PlacementError::OutOfBounds),
            PlacementOutcome::InvalidCell
        );
        assert_eq!(
            PlacementOutcome::from(PlacementError::InsufficientResource),
            PlacementOutcome::InsufficientResource
        );
        assert_eq!(RemovalOutcome::from(RemovalError::Empty), RemovalOutcome::Empty);
    }

    #[test]
    fn snapshot_serializes_to_json() {
        let snapshot = Snapshot {
            elapsed: Duration::from_secs(3),
            resource: 125,
            level: 1,
            wave: 2,
            wave_in_level: 2,
            attackers_per_wave: 2,
            speed_bonus_percent: 0,
            wave_pending: false,
            game_over: false,
            speed: SpeedMultiplier::X2,
            auto_collect: true,
            tool: Some(Tool::Place(DefenderKind::Shooter)),
            defenders: Vec::new(),
            attackers: Vec::new(),
            projectiles: Vec::new(),
            pickups: Vec::new(),
            sweepers: vec![SweeperSnapshot {
                lane: 0,
                position: Vec2::new(50.0, 50.0),
                state: SweeperState::Idle,
            }],
        };

        let json = serde_json::to_string(&snapshot).expect("serialize");
        let restored: Snapshot = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(restored, snapshot);
    }
}
