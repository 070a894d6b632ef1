//! Collectible resource pickups emitted by producers.

use std::time::Duration;

use glam::Vec2;
use lane_defence_core::{
    tuning::{
        PICKUP_COLLECT_DRIFT, PICKUP_COLLECT_SHRINK, PICKUP_HOVER, PICKUP_RISE, PICKUP_SIZE,
        PICKUP_SPEED,
    },
    PickupId, PickupPhase, PickupSnapshot,
};

#[derive(Clone, Debug)]
pub(crate) struct Pickup {
    pub(crate) id: PickupId,
    position: Vec2,
    origin_y: f32,
    size: f32,
    phase: PickupPhase,
    hover_until: Duration,
    collected: bool,
}

impl Pickup {
    pub(crate) fn new(id: PickupId, position: Vec2) -> Self {
        Self {
            id,
            position,
            origin_y: position.y,
            size: PICKUP_SIZE,
            phase: PickupPhase::Rising,
            hover_until: Duration::ZERO,
            collected: false,
        }
    }

    /// Advances the vertical state machine and reports whether the pickup is
    /// at rest on its origin and still uncollected.
    pub(crate) fn tick(&mut self, now: Duration) -> bool {
        if self.collected {
            self.position.y -= PICKUP_COLLECT_DRIFT;
            self.size = (self.size - PICKUP_COLLECT_SHRINK).max(0.0);
            return false;
        }

        match self.phase {
            PickupPhase::Rising => {
                let top = self.origin_y - PICKUP_RISE;
                self.position.y -= PICKUP_SPEED;
                if self.position.y <= top {
                    self.position.y = top;
                    self.phase = PickupPhase::Hovering;
                    self.hover_until = now + PICKUP_HOVER;
                }
                false
            }
            PickupPhase::Hovering => {
                if now >= self.hover_until {
                    self.phase = PickupPhase::Falling;
                }
                false
            }
            PickupPhase::Falling => {
                self.position.y += PICKUP_SPEED;
                if self.position.y >= self.origin_y {
                    self.position.y = self.origin_y;
                    self.phase = PickupPhase::Resting;
                    true
                } else {
                    false
                }
            }
            PickupPhase::Resting => true,
        }
    }

    pub(crate) fn is_collected(&self) -> bool {
        self.collected
    }

    pub(crate) fn collect(&mut self) {
        self.collected = true;
    }

    /// Collected pickups are purged once they have shrunk away.
    pub(crate) fn is_spent(&self) -> bool {
        self.collected && self.size <= 0.0
    }

    /// Circular hit test used by pointer collaborators.
    pub(crate) fn contains(&self, point: Vec2) -> bool {
        self.position.distance_squared(point) < self.size * self.size
    }

    pub(crate) fn snapshot(&self) -> PickupSnapshot {
        PickupSnapshot {
            id: self.id,
            position: self.position,
            size: self.size,
            phase: self.phase,
            collected: self.collected,
        }
    }
}
