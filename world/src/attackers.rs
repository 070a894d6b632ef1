//! Attacker model advancing along a lane toward the boundary.

use std::time::Duration;

use glam::Vec2;
use lane_defence_core::{
    tuning::{
        ATTACKER_ATTACK_INTERVAL, ATTACKER_DAMAGE, ATTACKER_HEALTH, ATTACKER_SIZE, FLASH_DURATION,
        LANE_HEIGHT, PLAYFIELD_WIDTH,
    },
    AttackerId, AttackerSnapshot,
};

use crate::grid;

#[derive(Clone, Debug)]
pub(crate) struct Attacker {
    pub(crate) id: AttackerId,
    pub(crate) lane: u32,
    pub(crate) position: Vec2,
    health: i32,
    max_health: i32,
    speed: f32,
    next_attack_at: Duration,
    flash_until: Duration,
    blocked: bool,
}

impl Attacker {
    /// Creates an attacker on the right edge of the lane.
    pub(crate) fn spawn(id: AttackerId, lane: u32, speed: f32) -> Self {
        Self {
            id,
            lane,
            position: Vec2::new(PLAYFIELD_WIDTH, grid::lane_center(lane)),
            health: ATTACKER_HEALTH,
            max_health: ATTACKER_HEALTH,
            speed,
            next_attack_at: Duration::ZERO,
            flash_until: Duration::ZERO,
            blocked: false,
        }
    }

    pub(crate) fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub(crate) fn apply_damage(&mut self, amount: i32, now: Duration) {
        self.health -= amount;
        self.flash_until = now + FLASH_DURATION;
    }

    /// Projectile hit test against the body span `[x, x + size]`.
    pub(crate) fn body_contains(&self, point: Vec2) -> bool {
        (point.y - self.position.y).abs() < LANE_HEIGHT / 2.0
            && point.x >= self.position.x
            && point.x <= self.position.x + ATTACKER_SIZE
    }

    /// Melee overlap test against `(x - size, x + size)`.
    pub(crate) fn reaches(&self, x: f32) -> bool {
        (x - self.position.x).abs() < ATTACKER_SIZE
    }

    /// Returns the damage of a strike if the attack interval has elapsed.
    pub(crate) fn strike(&mut self, now: Duration) -> Option<i32> {
        if now < self.next_attack_at {
            return None;
        }
        self.next_attack_at = now + ATTACKER_ATTACK_INTERVAL;
        Some(ATTACKER_DAMAGE)
    }

    /// Records whether a defender held the attacker this tick and moves it
    /// otherwise.
    pub(crate) fn settle(&mut self, blocked: bool) {
        self.blocked = blocked;
        if !blocked {
            self.position.x -= self.speed;
        }
    }

    pub(crate) fn snapshot(&self, now: Duration) -> AttackerSnapshot {
        AttackerSnapshot {
            id: self.id,
            lane: self.lane,
            position: self.position,
            health: self.health,
            max_health: self.max_health,
            speed: self.speed,
            flashing: now < self.flash_until,
            blocked: self.blocked,
        }
    }
}
