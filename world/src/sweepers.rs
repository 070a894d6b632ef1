//! Single-use lane sweepers guarding the left boundary.

use glam::Vec2;
use lane_defence_core::{
    tuning::{PLAYFIELD_WIDTH, SWEEPER_REACH, SWEEPER_SPEED, SWEEPER_START_X},
    SweeperSnapshot, SweeperState,
};

use crate::grid;

#[derive(Clone, Debug)]
pub(crate) struct Sweeper {
    pub(crate) lane: u32,
    position: Vec2,
    state: SweeperState,
}

impl Sweeper {
    pub(crate) fn new(lane: u32) -> Self {
        Self {
            lane,
            position: Vec2::new(SWEEPER_START_X, grid::lane_center(lane)),
            state: SweeperState::Idle,
        }
    }

    pub(crate) fn state(&self) -> SweeperState {
        self.state
    }

    /// Starts an idle sweeper. Active and used sweepers are unaffected.
    pub(crate) fn activate(&mut self) -> bool {
        if self.state == SweeperState::Idle {
            self.state = SweeperState::Active;
            true
        } else {
            false
        }
    }

    /// Moves an active sweeper and returns `true` on the tick it leaves the
    /// playfield.
    pub(crate) fn advance(&mut self) -> bool {
        if self.state != SweeperState::Active {
            return false;
        }
        self.position.x += SWEEPER_SPEED;
        if self.position.x > PLAYFIELD_WIDTH {
            self.state = SweeperState::Used;
            return true;
        }
        false
    }

    /// Rightmost x coordinate the sweeper clears.
    pub(crate) fn reach(&self) -> f32 {
        self.position.x + SWEEPER_REACH
    }

    pub(crate) fn snapshot(&self) -> SweeperSnapshot {
        SweeperSnapshot {
            lane: self.lane,
            position: self.position,
            state: self.state,
        }
    }
}
