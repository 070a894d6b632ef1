#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Simulation controller wiring the world to its systems.
//!
//! [`Game`] is the single entry point input collaborators talk to: it turns
//! player intents into world commands, folds the resulting events back into
//! outcomes, and runs the wave scheduler after every tick. [`LoopDriver`]
//! converts elapsed real time into whole fixed ticks.

mod driver;

pub use driver::LoopDriver;

use glam::Vec2;
use lane_defence_core::{
    tuning::TICK_DURATION, CellCoord, ClickOutcome, CollectOutcome, Command, DefenderKind, Event,
    PickupId, PlacementOutcome, RemovalOutcome, Snapshot, SpeedMultiplier, Tool,
};
use lane_defence_system_tools::{ToolInput, Toolbelt};
use lane_defence_system_waves::{Config as WaveConfig, WaveScheduler};
use lane_defence_world::{self as world, query, World};
use tracing::{debug, info};

/// Seed used when the caller does not pick one.
pub const DEFAULT_SEED: u64 = 0x6c61_6e65_6465_6663;

/// Configuration parameters required to construct a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameConfig {
    seed: u64,
    record_events: bool,
}

impl GameConfig {
    /// Creates a configuration with the provided RNG seed. Events are not
    /// recorded.
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self {
            seed,
            record_events: false,
        }
    }

    /// Enables or disables the event log handed out by
    /// [`Game::drain_events`].
    #[must_use]
    pub const fn with_event_log(self, enabled: bool) -> Self {
        Self {
            record_events: enabled,
            ..self
        }
    }

    /// Seed driving every random choice of the episode.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Reports whether world events are kept for [`Game::drain_events`].
    #[must_use]
    pub const fn records_events(&self) -> bool {
        self.record_events
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

/// Simulation controller owning the world and its systems.
#[derive(Debug)]
pub struct Game {
    world: World,
    waves: WaveScheduler,
    toolbelt: Toolbelt,
    speed: SpeedMultiplier,
    record_events: bool,
    events: Vec<Event>,
}

impl Game {
    /// Creates a game at the start of an episode.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        info!(
            seed = config.seed(),
            record_events = config.records_events(),
            "starting lane defence"
        );
        Self {
            world: World::new(),
            waves: WaveScheduler::new(WaveConfig::new(config.seed())),
            toolbelt: Toolbelt::new(),
            speed: SpeedMultiplier::default(),
            record_events: config.records_events(),
            events: Vec::new(),
        }
    }

    fn execute(&mut self, command: Command) -> Vec<Event> {
        let mut events = Vec::new();
        world::apply(&mut self.world, command, &mut events);
        if self.record_events {
            self.events.extend(events.iter().cloned());
        }
        events
    }

    /// Places a defender of the given kind, deducting its cost on success.
    pub fn place_defender(&mut self, cell: CellCoord, kind: DefenderKind) -> PlacementOutcome {
        let events = self.execute(Command::PlaceDefender { kind, cell });
        let outcome = placement_outcome(&events);
        debug!(%cell, %kind, ?outcome, "placement");
        outcome
    }

    /// Removes the defender in the cell, refunding half its cost.
    pub fn remove_defender(&mut self, cell: CellCoord) -> RemovalOutcome {
        let events = self.execute(Command::RemoveDefender { cell });
        let outcome = removal_outcome(&events);
        debug!(%cell, ?outcome, "removal");
        outcome
    }

    /// Collects the pickup with the provided identifier.
    pub fn collect_pickup(&mut self, pickup: PickupId) -> CollectOutcome {
        let events = self.execute(Command::CollectPickup { pickup });
        collect_outcome(&events)
    }

    /// Collects the topmost uncollected pickup under a playfield point.
    pub fn collect_pickup_at(&mut self, point: Vec2) -> CollectOutcome {
        match query::pickup_at(&self.world, point) {
            Some(pickup) => self.collect_pickup(pickup),
            None => CollectOutcome::NotFound,
        }
    }

    /// Toggles the provided tool and returns the resulting selection.
    pub fn select_tool(&mut self, tool: Tool) -> Option<Tool> {
        self.toolbelt.select(tool)
    }

    /// Deselects any tool.
    pub fn clear_tool(&mut self) {
        self.toolbelt.clear();
    }

    /// Applies the selected tool to a grid cell.
    pub fn click_cell(&mut self, cell: CellCoord) -> ClickOutcome {
        let mut commands = Vec::new();
        self.toolbelt
            .handle(&[], ToolInput::click(cell), &mut commands);
        let Some(command) = commands.pop() else {
            return ClickOutcome::NoTool;
        };

        let removal = matches!(command, Command::RemoveDefender { .. });
        let events = self.execute(command);
        self.toolbelt
            .handle(&events, ToolInput::default(), &mut commands);

        if removal {
            ClickOutcome::Removal(removal_outcome(&events))
        } else {
            ClickOutcome::Placement(placement_outcome(&events))
        }
    }

    /// Sets the global speed multiplier used by the loop driver.
    pub fn set_speed(&mut self, speed: SpeedMultiplier) {
        self.speed = speed;
    }

    /// Current global speed multiplier.
    #[must_use]
    pub fn speed(&self) -> SpeedMultiplier {
        self.speed
    }

    /// Enables or disables automatic pickup collection.
    pub fn set_auto_collect(&mut self, enabled: bool) {
        let _ = self.execute(Command::SetAutoCollect { enabled });
    }

    /// Advances the simulation by one fixed timestep. Does nothing once the
    /// game is over.
    pub fn tick(&mut self) {
        if self.is_game_over() {
            return;
        }
        let events = self.execute(Command::Tick { dt: TICK_DURATION });

        let mut commands = Vec::new();
        self.waves.handle(
            &events,
            query::attacker_count(&self.world),
            query::is_game_over(&self.world),
            &mut commands,
        );
        for command in commands {
            let _ = self.execute(command);
        }
    }

    /// Returns to the start of a fresh episode. The speed multiplier and the
    /// auto-collect preference are kept.
    pub fn reset(&mut self) {
        let events = self.execute(Command::Reset);
        let mut commands = Vec::new();
        self.waves.handle(&events, 0, false, &mut commands);
        self.toolbelt
            .handle(&events, ToolInput::default(), &mut commands);
        debug_assert!(commands.is_empty(), "reset must not schedule commands");
    }

    /// Reports whether an attacker breached a lane without a sweeper.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        query::is_game_over(&self.world)
    }

    /// Provides read-only access to the authoritative world.
    #[must_use]
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Hands over every event emitted since the previous call. Always empty
    /// unless the game was configured with an event log; callers that enable
    /// it must drain regularly.
    pub fn drain_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    /// Captures the full read-only state for rendering and UI collaborators.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            elapsed: query::elapsed(&self.world),
            resource: query::resource(&self.world),
            level: self.waves.level(),
            wave: self.waves.wave(),
            wave_in_level: self.waves.wave_in_level(),
            attackers_per_wave: self.waves.attackers_per_wave(),
            speed_bonus_percent: self.waves.speed_bonus_percent(),
            wave_pending: self.waves.is_pending(),
            game_over: query::is_game_over(&self.world),
            speed: self.speed,
            auto_collect: query::auto_collect(&self.world),
            tool: self.toolbelt.selected(),
            defenders: query::defenders(&self.world),
            attackers: query::attackers(&self.world),
            projectiles: query::projectiles(&self.world),
            pickups: query::pickups(&self.world),
            sweepers: query::sweepers(&self.world),
        }
    }
}

fn placement_outcome(events: &[Event]) -> PlacementOutcome {
    events
        .iter()
        .find_map(|event| match event {
            Event::DefenderPlaced { .. } => Some(PlacementOutcome::Placed),
            Event::PlacementRejected { reason, .. } => Some(PlacementOutcome::from(*reason)),
            _ => None,
        })
        .unwrap_or(PlacementOutcome::InvalidCell)
}

fn removal_outcome(events: &[Event]) -> RemovalOutcome {
    events
        .iter()
        .find_map(|event| match event {
            Event::DefenderRemoved { .. } => Some(RemovalOutcome::Removed),
            Event::RemovalRejected { reason, .. } => Some(RemovalOutcome::from(*reason)),
            _ => None,
        })
        .unwrap_or(RemovalOutcome::InvalidCell)
}

fn collect_outcome(events: &[Event]) -> CollectOutcome {
    events
        .iter()
        .find_map(|event| match event {
            Event::PickupCollected { .. } => Some(CollectOutcome::Collected),
            Event::CollectRejected { reason, .. } => Some(CollectOutcome::from(*reason)),
            _ => None,
        })
        .unwrap_or(CollectOutcome::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lane_defence_core::{CollectError, DefenderId, PlacementError};

    #[test]
    fn outcomes_fold_from_world_events() {
        assert_eq!(
            placement_outcome(&[Event::PlacementRejected {
                kind: DefenderKind::Blocker,
                cell: CellCoord::new(9, 9),
                reason: PlacementError::OutOfBounds,
            }]),
            PlacementOutcome::InvalidCell
        );
        assert_eq!(
            removal_outcome(&[Event::DefenderRemoved {
                defender: DefenderId::new(1),
                kind: DefenderKind::Blocker,
                cell: CellCoord::new(0, 0),
                refund: 25,
            }]),
            RemovalOutcome::Removed
        );
        assert_eq!(
            collect_outcome(&[Event::CollectRejected {
                pickup: PickupId::new(4),
                reason: CollectError::AlreadyCollected,
            }]),
            CollectOutcome::AlreadyCollected
        );
    }

    #[test]
    fn drained_events_are_not_repeated() {
        let mut game = Game::new(GameConfig::default().with_event_log(true));
        game.tick();

        let first = game.drain_events();
        assert!(first.contains(&Event::TimeAdvanced { dt: TICK_DURATION }));
        assert!(game.drain_events().is_empty());
    }

    #[test]
    fn events_are_not_buffered_without_an_event_log() {
        let mut game = Game::new(GameConfig::default());

        for _ in 0..60 * 60 {
            game.tick();
        }

        assert!(game.events.is_empty());
        assert!(game.drain_events().is_empty());
    }
}
