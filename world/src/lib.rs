#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative world state management for Lane Defence.
//!
//! The world owns the placement grid and every entity collection. It only
//! changes in response to [`Command`] values passed to [`apply`], reports what
//! happened through [`Event`] values, and exposes read-only state through the
//! [`query`] module.

mod attackers;
mod combat;
mod defenders;
mod grid;
mod pickups;
mod projectiles;
mod sweepers;

use std::time::Duration;

use glam::Vec2;
use lane_defence_core::{
    tuning::{COLUMNS, LANES, PICKUP_VALUE, STARTING_RESOURCE},
    AttackerId, CellCoord, CollectError, Command, DefenderId, DefenderKind, Event, PickupId,
    PlacementError, ProjectileId, RemovalError,
};
use tracing::{debug, info, trace};

use attackers::Attacker;
use defenders::{Action, Defender, TickContext};
use grid::Grid;
use pickups::Pickup;
use projectiles::Projectile;
use sweepers::Sweeper;

/// Monotonic identifier source for every entity collection.
#[derive(Debug, Default)]
struct IdAllocator {
    defenders: u32,
    attackers: u32,
    projectiles: u32,
    pickups: u32,
}

impl IdAllocator {
    fn defender(&mut self) -> DefenderId {
        let id = DefenderId::new(self.defenders);
        self.defenders = self.defenders.wrapping_add(1);
        id
    }

    fn attacker(&mut self) -> AttackerId {
        let id = AttackerId::new(self.attackers);
        self.attackers = self.attackers.wrapping_add(1);
        id
    }

    fn projectile(&mut self) -> ProjectileId {
        let id = ProjectileId::new(self.projectiles);
        self.projectiles = self.projectiles.wrapping_add(1);
        id
    }

    fn pickup(&mut self) -> PickupId {
        let id = PickupId::new(self.pickups);
        self.pickups = self.pickups.wrapping_add(1);
        id
    }
}

/// Represents the authoritative Lane Defence world state.
#[derive(Debug)]
pub struct World {
    clock: Duration,
    resource: u32,
    grid: Grid,
    defenders: Vec<Defender>,
    attackers: Vec<Attacker>,
    projectiles: Vec<Projectile>,
    pickups: Vec<Pickup>,
    sweepers: Vec<Sweeper>,
    auto_collect: bool,
    game_over: bool,
    ids: IdAllocator,
}

impl World {
    /// Creates a new Lane Defence world with an empty grid and idle sweepers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            clock: Duration::ZERO,
            resource: STARTING_RESOURCE,
            grid: Grid::new(LANES, COLUMNS),
            defenders: Vec::new(),
            attackers: Vec::new(),
            projectiles: Vec::new(),
            pickups: Vec::new(),
            sweepers: (0..LANES).map(Sweeper::new).collect(),
            auto_collect: false,
            game_over: false,
            ids: IdAllocator::default(),
        }
    }

    fn advance(&mut self, dt: Duration, out_events: &mut Vec<Event>) {
        self.clock = self.clock.saturating_add(dt);
        out_events.push(Event::TimeAdvanced { dt });
        let now = self.clock;

        self.run_defenders(now, out_events);
        combat::resolve_projectiles(self, now, out_events);
        self.update_pickups(now, out_events);
        combat::resolve_melee(self, now, out_events);
        combat::resolve_boundary(self, out_events);
        combat::resolve_sweepers(self, out_events);

        trace!(
            defenders = self.defenders.len(),
            attackers = self.attackers.len(),
            projectiles = self.projectiles.len(),
            pickups = self.pickups.len(),
            "tick resolved"
        );
    }

    fn lane_fronts(&self) -> Vec<Option<f32>> {
        let mut fronts = vec![None; self.sweepers.len()];
        for attacker in &self.attackers {
            let Some(front) = usize::try_from(attacker.lane)
                .ok()
                .and_then(|lane| fronts.get_mut(lane))
            else {
                continue;
            };
            let x = attacker.position.x;
            *front = Some(front.map_or(x, |current: f32| current.max(x)));
        }
        fronts
    }

    fn run_defenders(&mut self, now: Duration, out_events: &mut Vec<Event>) {
        let fronts = self.lane_fronts();
        let context = TickContext {
            now,
            lane_fronts: &fronts,
        };

        let mut actions: Vec<(u32, Vec2, Action)> = Vec::new();
        for defender in self.defenders.iter_mut() {
            if let Some(action) = defender.tick(&context) {
                actions.push((defender.lane(), defender.position, action));
            }
        }

        for (lane, origin, action) in actions {
            match action {
                Action::EmitPickup { position } => {
                    let pickup = self.ids.pickup();
                    self.pickups.push(Pickup::new(pickup, position));
                    out_events.push(Event::PickupSpawned { pickup });
                }
                Action::Fire { position } => {
                    let projectile = self.ids.projectile();
                    self.projectiles
                        .push(Projectile::new(projectile, lane, position));
                    out_events.push(Event::ProjectileFired { projectile, lane });
                }
                Action::Pulse { damage, radius } => {
                    combat::pulse(self, lane, origin.x, damage, radius, now, out_events);
                }
            }
        }
    }

    fn update_pickups(&mut self, now: Duration, out_events: &mut Vec<Event>) {
        for pickup in self.pickups.iter_mut() {
            let landed = pickup.tick(now);
            if landed && self.auto_collect {
                pickup.collect();
                self.resource = self.resource.saturating_add(PICKUP_VALUE);
                out_events.push(Event::PickupCollected {
                    pickup: pickup.id,
                    value: PICKUP_VALUE,
                });
            }
        }
        self.pickups.retain(|pickup| !pickup.is_spent());
    }

    fn place_defender(&mut self, kind: DefenderKind, cell: CellCoord, out_events: &mut Vec<Event>) {
        let rejection = if !self.grid.contains(cell) {
            Some(PlacementError::OutOfBounds)
        } else if self.grid.occupant(cell).is_some() {
            Some(PlacementError::Occupied)
        } else if self.resource < kind.cost() {
            Some(PlacementError::InsufficientResource)
        } else {
            None
        };
        if let Some(reason) = rejection {
            out_events.push(Event::PlacementRejected { kind, cell, reason });
            return;
        }

        let id = self.ids.defender();
        if !self.grid.place(cell, id) {
            out_events.push(Event::PlacementRejected {
                kind,
                cell,
                reason: PlacementError::Occupied,
            });
            return;
        }
        self.defenders.push(Defender::new(
            id,
            kind,
            cell,
            grid::cell_center(cell),
            self.clock,
        ));
        self.resource -= kind.cost();
        out_events.push(Event::DefenderPlaced {
            defender: id,
            kind,
            cell,
            cost: kind.cost(),
        });
    }

    fn remove_defender(&mut self, cell: CellCoord, out_events: &mut Vec<Event>) {
        if !self.grid.contains(cell) {
            out_events.push(Event::RemovalRejected {
                cell,
                reason: RemovalError::OutOfBounds,
            });
            return;
        }
        let Some(index) = self
            .grid
            .occupant(cell)
            .and_then(|id| self.defenders.iter().position(|defender| defender.id == id))
        else {
            out_events.push(Event::RemovalRejected {
                cell,
                reason: RemovalError::Empty,
            });
            return;
        };

        let defender = self.defenders.remove(index);
        let _ = self.grid.remove(defender.id);
        let refund = defender.kind.refund();
        self.resource = self.resource.saturating_add(refund);
        out_events.push(Event::DefenderRemoved {
            defender: defender.id,
            kind: defender.kind,
            cell,
            refund,
        });
    }

    fn collect_pickup(&mut self, id: PickupId, out_events: &mut Vec<Event>) {
        let Some(pickup) = self.pickups.iter_mut().find(|pickup| pickup.id == id) else {
            out_events.push(Event::CollectRejected {
                pickup: id,
                reason: CollectError::NotFound,
            });
            return;
        };
        if pickup.is_collected() {
            out_events.push(Event::CollectRejected {
                pickup: id,
                reason: CollectError::AlreadyCollected,
            });
            return;
        }
        pickup.collect();
        self.resource = self.resource.saturating_add(PICKUP_VALUE);
        out_events.push(Event::PickupCollected {
            pickup: id,
            value: PICKUP_VALUE,
        });
    }

    fn spawn_wave(
        &mut self,
        wave: u32,
        level: u32,
        lanes: &[u32],
        speed: f32,
        out_events: &mut Vec<Event>,
    ) {
        let mut count = 0;
        for &lane in lanes {
            if lane >= LANES {
                continue;
            }
            let attacker = self.ids.attacker();
            self.attackers.push(Attacker::spawn(attacker, lane, speed));
            out_events.push(Event::AttackerSpawned { attacker, lane });
            count += 1;
        }
        debug!(wave, level, count, speed, "wave spawned");
        out_events.push(Event::WaveSpawned { wave, level, count });
    }

    fn reset(&mut self, out_events: &mut Vec<Event>) {
        let auto_collect = self.auto_collect;
        *self = Self::new();
        self.auto_collect = auto_collect;
        info!("world reset");
        out_events.push(Event::WorldReset);
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

/// Applies the provided command to the world, mutating state deterministically.
///
/// Time and wave commands are ignored once the episode is over; only
/// [`Command::Reset`] brings the world back.
pub fn apply(world: &mut World, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::Tick { dt } => {
            if !world.game_over {
                world.advance(dt, out_events);
            }
        }
        Command::PlaceDefender { kind, cell } => world.place_defender(kind, cell, out_events),
        Command::RemoveDefender { cell } => world.remove_defender(cell, out_events),
        Command::CollectPickup { pickup } => world.collect_pickup(pickup, out_events),
        Command::SetAutoCollect { enabled } => world.auto_collect = enabled,
        Command::SpawnWave {
            wave,
            level,
            lanes,
            speed,
        } => {
            if !world.game_over {
                world.spawn_wave(wave, level, &lanes, speed, out_events);
            }
        }
        Command::Reset => world.reset(out_events),
    }
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use std::time::Duration;

    use glam::Vec2;
    use lane_defence_core::{
        tuning::COLUMNS, AttackerSnapshot, CellCoord, DefenderId, DefenderSnapshot, PickupId,
        PickupSnapshot, ProjectileSnapshot, SweeperSnapshot,
    };

    use super::{grid, World};

    /// Simulated time elapsed since the world was created or reset.
    #[must_use]
    pub fn elapsed(world: &World) -> Duration {
        world.clock
    }

    /// Spendable resource total.
    #[must_use]
    pub fn resource(world: &World) -> u32 {
        world.resource
    }

    /// Reports whether an attacker breached a lane without a sweeper.
    #[must_use]
    pub fn is_game_over(world: &World) -> bool {
        world.game_over
    }

    /// Reports whether landed pickups are collected automatically.
    #[must_use]
    pub fn auto_collect(world: &World) -> bool {
        world.auto_collect
    }

    /// Number of attackers currently on the playfield.
    #[must_use]
    pub fn attacker_count(world: &World) -> usize {
        world.attackers.len()
    }

    /// Defender occupying the provided cell, if any.
    #[must_use]
    pub fn defender_at(world: &World, cell: CellCoord) -> Option<DefenderId> {
        world.grid.occupant(cell)
    }

    /// Uncollected pickup under the provided playfield point, if any.
    ///
    /// Later pickups are drawn on top, so they win the hit test.
    #[must_use]
    pub fn pickup_at(world: &World, point: Vec2) -> Option<PickupId> {
        world
            .pickups
            .iter()
            .rev()
            .find(|pickup| !pickup.is_collected() && pickup.contains(point))
            .map(|pickup| pickup.id)
    }

    /// Centre of the provided cell in playfield units.
    #[must_use]
    pub fn cell_center(cell: CellCoord) -> Vec2 {
        grid::cell_center(cell)
    }

    /// Cell under the provided playfield point, if it lies on the grid.
    #[must_use]
    pub fn cell_at(point: Vec2) -> Option<CellCoord> {
        grid::cell_at(point, COLUMNS)
    }

    /// Captures every defender in collection order.
    #[must_use]
    pub fn defenders(world: &World) -> Vec<DefenderSnapshot> {
        world
            .defenders
            .iter()
            .map(|defender| defender.snapshot(world.clock))
            .collect()
    }

    /// Captures every attacker in collection order.
    #[must_use]
    pub fn attackers(world: &World) -> Vec<AttackerSnapshot> {
        world
            .attackers
            .iter()
            .map(|attacker| attacker.snapshot(world.clock))
            .collect()
    }

    /// Captures every projectile in flight.
    #[must_use]
    pub fn projectiles(world: &World) -> Vec<ProjectileSnapshot> {
        world
            .projectiles
            .iter()
            .map(|projectile| projectile.snapshot())
            .collect()
    }

    /// Captures every pickup, including collected ones still shrinking.
    #[must_use]
    pub fn pickups(world: &World) -> Vec<PickupSnapshot> {
        world.pickups.iter().map(|pickup| pickup.snapshot()).collect()
    }

    /// Captures the sweeper of every lane, ordered by lane.
    #[must_use]
    pub fn sweepers(world: &World) -> Vec<SweeperSnapshot> {
        world
            .sweepers
            .iter()
            .map(|sweeper| sweeper.snapshot())
            .collect()
    }
}
