//! Projectiles fired by shooters.

use glam::Vec2;
use lane_defence_core::{
    tuning::{AMPLIFIER_FACTOR, PLAYFIELD_WIDTH, PROJECTILE_DAMAGE, PROJECTILE_SPEED},
    ProjectileId, ProjectileSnapshot,
};

#[derive(Clone, Debug)]
pub(crate) struct Projectile {
    pub(crate) id: ProjectileId,
    pub(crate) lane: u32,
    pub(crate) position: Vec2,
    pub(crate) damage: i32,
    empowered: bool,
}

impl Projectile {
    pub(crate) fn new(id: ProjectileId, lane: u32, position: Vec2) -> Self {
        Self {
            id,
            lane,
            position,
            damage: PROJECTILE_DAMAGE,
            empowered: false,
        }
    }

    pub(crate) fn advance(&mut self) {
        self.position.x += PROJECTILE_SPEED;
    }

    /// Multiplies the damage the first time the projectile passes an
    /// amplifier.
    pub(crate) fn empower(&mut self) {
        if !self.empowered {
            self.empowered = true;
            self.damage *= AMPLIFIER_FACTOR;
        }
    }

    pub(crate) fn has_left_playfield(&self) -> bool {
        self.position.x >= PLAYFIELD_WIDTH
    }

    pub(crate) fn snapshot(&self) -> ProjectileSnapshot {
        ProjectileSnapshot {
            id: self.id,
            lane: self.lane,
            position: self.position,
            damage: self.damage,
            empowered: self.empowered,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empowering_applies_once() {
        let mut projectile = Projectile::new(ProjectileId::new(0), 0, Vec2::new(100.0, 50.0));
        projectile.empower();
        projectile.empower();
        assert_eq!(projectile.damage, 40);
        assert!(projectile.snapshot().empowered);
    }

    #[test]
    fn leaves_playfield_at_right_edge() {
        let mut projectile = Projectile::new(ProjectileId::new(0), 0, Vec2::new(884.0, 50.0));
        projectile.advance();
        assert!(!projectile.has_left_playfield());
        projectile.advance();
        assert!(projectile.has_left_playfield());
    }
}
