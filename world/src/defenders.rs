//! Defender models and the per-kind behaviours they run every tick.

use std::time::Duration;

use glam::Vec2;
use lane_defence_core::{
    tuning::{
        FLASH_DURATION, LANE_HEIGHT, MINE_ARMING_DELAY, PRODUCER_INTERVAL, PRODUCER_PICKUP_OFFSET,
        SHOOTER_COOLDOWN, SHOOTER_MUZZLE_OFFSET, SPIKES_DAMAGE, SPIKES_INTERVAL, SPIKES_RADIUS,
    },
    CellCoord, DefenderId, DefenderKind, DefenderSnapshot, DefenderVisual,
};

/// Half the horizontal span within which a projectile counts as passing an
/// amplifier.
const AMPLIFIER_HALF_WIDTH: f32 = 20.0;

/// Per-tick inputs shared by every defender behaviour.
#[derive(Clone, Copy, Debug)]
pub(crate) struct TickContext<'a> {
    /// Simulated time at the end of the current tick.
    pub(crate) now: Duration,
    /// Largest attacker x coordinate per lane, `None` for empty lanes.
    pub(crate) lane_fronts: &'a [Option<f32>],
}

impl TickContext<'_> {
    fn attacker_ahead(&self, lane: u32, x: f32) -> bool {
        usize::try_from(lane)
            .ok()
            .and_then(|index| self.lane_fronts.get(index).copied().flatten())
            .is_some_and(|front| front > x)
    }
}

/// Side effect requested by a defender behaviour for the world to carry out.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Action {
    /// Spawn a pickup at the provided position.
    EmitPickup { position: Vec2 },
    /// Spawn a projectile at the provided position.
    Fire { position: Vec2 },
    /// Damage every attacker in the lane within `radius` of the defender.
    Pulse { damage: i32, radius: f32 },
}

/// How a defender reacts to an attacker overlapping it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Engagement {
    /// The attacker walks over the defender.
    PassThrough,
    /// The attacker halts and strikes the defender.
    Block,
    /// The defender explodes.
    Detonate,
}

/// Capability implemented by every defender behaviour.
trait Behave {
    fn tick(&mut self, origin: Vec2, lane: u32, context: &TickContext<'_>) -> Option<Action>;

    fn engagement(&self, _now: Duration) -> Engagement {
        Engagement::Block
    }

    fn amplifies(&self) -> bool {
        false
    }

    fn visual(&self, _now: Duration) -> DefenderVisual {
        DefenderVisual::Plain
    }
}

#[derive(Clone, Debug)]
struct Producer {
    next_pickup_at: Duration,
}

impl Behave for Producer {
    fn tick(&mut self, origin: Vec2, _lane: u32, context: &TickContext<'_>) -> Option<Action> {
        if context.now < self.next_pickup_at {
            return None;
        }
        self.next_pickup_at = context.now + PRODUCER_INTERVAL;
        Some(Action::EmitPickup {
            position: origin - Vec2::new(0.0, PRODUCER_PICKUP_OFFSET),
        })
    }
}

#[derive(Clone, Debug)]
struct Shooter {
    ready_at: Duration,
}

impl Behave for Shooter {
    fn tick(&mut self, origin: Vec2, lane: u32, context: &TickContext<'_>) -> Option<Action> {
        if context.now < self.ready_at || !context.attacker_ahead(lane, origin.x) {
            return None;
        }
        self.ready_at = context.now + SHOOTER_COOLDOWN;
        Some(Action::Fire {
            position: origin + Vec2::new(SHOOTER_MUZZLE_OFFSET, 0.0),
        })
    }
}

#[derive(Clone, Debug)]
struct Blocker;

impl Behave for Blocker {
    fn tick(&mut self, _origin: Vec2, _lane: u32, _context: &TickContext<'_>) -> Option<Action> {
        None
    }
}

#[derive(Clone, Debug)]
struct Spikes {
    next_pulse_at: Duration,
}

impl Behave for Spikes {
    fn tick(&mut self, _origin: Vec2, _lane: u32, context: &TickContext<'_>) -> Option<Action> {
        if context.now < self.next_pulse_at {
            return None;
        }
        self.next_pulse_at = context.now + SPIKES_INTERVAL;
        Some(Action::Pulse {
            damage: SPIKES_DAMAGE,
            radius: SPIKES_RADIUS,
        })
    }

    fn engagement(&self, _now: Duration) -> Engagement {
        Engagement::PassThrough
    }
}

#[derive(Clone, Debug)]
struct Amplifier;

impl Behave for Amplifier {
    fn tick(&mut self, _origin: Vec2, _lane: u32, _context: &TickContext<'_>) -> Option<Action> {
        None
    }

    fn amplifies(&self) -> bool {
        true
    }
}

#[derive(Clone, Debug)]
struct Mine {
    placed_at: Duration,
    armed_at: Duration,
}

impl Mine {
    fn is_armed(&self, now: Duration) -> bool {
        now >= self.armed_at
    }
}

impl Behave for Mine {
    fn tick(&mut self, _origin: Vec2, _lane: u32, _context: &TickContext<'_>) -> Option<Action> {
        None
    }

    fn engagement(&self, now: Duration) -> Engagement {
        if self.is_armed(now) {
            Engagement::Detonate
        } else {
            Engagement::Block
        }
    }

    fn visual(&self, now: Duration) -> DefenderVisual {
        if self.is_armed(now) {
            return DefenderVisual::Armed;
        }
        let total = self.armed_at.saturating_sub(self.placed_at).as_secs_f32();
        let elapsed = now.saturating_sub(self.placed_at).as_secs_f32();
        let progress = if total > 0.0 {
            (elapsed / total).clamp(0.0, 1.0)
        } else {
            1.0
        };
        DefenderVisual::Arming { progress }
    }
}

#[derive(Clone, Debug)]
enum Behavior {
    Producer(Producer),
    Shooter(Shooter),
    Blocker(Blocker),
    Spikes(Spikes),
    Amplifier(Amplifier),
    Mine(Mine),
}

impl Behavior {
    fn for_kind(kind: DefenderKind, placed_at: Duration) -> Self {
        match kind {
            DefenderKind::Producer => Self::Producer(Producer {
                next_pickup_at: placed_at + PRODUCER_INTERVAL,
            }),
            DefenderKind::Shooter => Self::Shooter(Shooter {
                ready_at: placed_at,
            }),
            DefenderKind::Blocker => Self::Blocker(Blocker),
            DefenderKind::Spikes => Self::Spikes(Spikes {
                next_pulse_at: placed_at + SPIKES_INTERVAL,
            }),
            DefenderKind::Amplifier => Self::Amplifier(Amplifier),
            DefenderKind::Mine => Self::Mine(Mine {
                placed_at,
                armed_at: placed_at + MINE_ARMING_DELAY,
            }),
        }
    }

    fn as_behave(&self) -> &dyn Behave {
        match self {
            Self::Producer(inner) => inner,
            Self::Shooter(inner) => inner,
            Self::Blocker(inner) => inner,
            Self::Spikes(inner) => inner,
            Self::Amplifier(inner) => inner,
            Self::Mine(inner) => inner,
        }
    }

    fn as_behave_mut(&mut self) -> &mut dyn Behave {
        match self {
            Self::Producer(inner) => inner,
            Self::Shooter(inner) => inner,
            Self::Blocker(inner) => inner,
            Self::Spikes(inner) => inner,
            Self::Amplifier(inner) => inner,
            Self::Mine(inner) => inner,
        }
    }
}

/// Stationary unit occupying one grid cell.
#[derive(Clone, Debug)]
pub(crate) struct Defender {
    pub(crate) id: DefenderId,
    pub(crate) kind: DefenderKind,
    pub(crate) cell: CellCoord,
    pub(crate) position: Vec2,
    health: i32,
    max_health: i32,
    flash_until: Duration,
    behavior: Behavior,
}

impl Defender {
    pub(crate) fn new(
        id: DefenderId,
        kind: DefenderKind,
        cell: CellCoord,
        position: Vec2,
        placed_at: Duration,
    ) -> Self {
        Self {
            id,
            kind,
            cell,
            position,
            health: kind.max_health(),
            max_health: kind.max_health(),
            flash_until: Duration::ZERO,
            behavior: Behavior::for_kind(kind, placed_at),
        }
    }

    pub(crate) fn lane(&self) -> u32 {
        self.cell.row()
    }

    pub(crate) fn tick(&mut self, context: &TickContext<'_>) -> Option<Action> {
        let origin = self.position;
        let lane = self.lane();
        self.behavior.as_behave_mut().tick(origin, lane, context)
    }

    pub(crate) fn engagement(&self, now: Duration) -> Engagement {
        self.behavior.as_behave().engagement(now)
    }

    /// Whether a projectile at `point` is passing through this amplifier.
    pub(crate) fn amplifies_at(&self, point: Vec2) -> bool {
        self.behavior.as_behave().amplifies()
            && (point.y - self.position.y).abs() < LANE_HEIGHT / 2.0
            && (point.x - self.position.x).abs() < AMPLIFIER_HALF_WIDTH
    }

    pub(crate) fn apply_damage(&mut self, amount: i32, now: Duration) {
        self.health -= amount;
        self.flash_until = now + FLASH_DURATION;
    }

    pub(crate) fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub(crate) fn snapshot(&self, now: Duration) -> DefenderSnapshot {
        DefenderSnapshot {
            id: self.id,
            kind: self.kind,
            cell: self.cell,
            position: self.position,
            health: self.health,
            max_health: self.max_health,
            flashing: now < self.flash_until,
            visual: self.behavior.as_behave().visual(now),
        }
    }
}
