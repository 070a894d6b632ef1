//! Dense placement grid and the playfield coordinate transforms.

use glam::Vec2;
use lane_defence_core::{
    tuning::{CELL_WIDTH, GRID_LEFT, LANE_HEIGHT, LANES},
    CellCoord, DefenderId,
};

/// Row-major occupancy grid where each cell holds at most one defender.
#[derive(Clone, Debug)]
pub(crate) struct Grid {
    rows: u32,
    columns: u32,
    cells: Vec<Option<DefenderId>>,
}

impl Grid {
    pub(crate) fn new(rows: u32, columns: u32) -> Self {
        let capacity_u64 = u64::from(rows) * u64::from(columns);
        let capacity = usize::try_from(capacity_u64).unwrap_or(0);
        Self {
            rows,
            columns,
            cells: vec![None; capacity],
        }
    }

    pub(crate) fn contains(&self, cell: CellCoord) -> bool {
        self.index(cell).is_some()
    }

    pub(crate) fn occupant(&self, cell: CellCoord) -> Option<DefenderId> {
        self.index(cell)
            .and_then(|index| self.cells.get(index).copied().flatten())
    }

    /// Stores the defender in the cell, refusing occupied or out-of-range cells.
    pub(crate) fn place(&mut self, cell: CellCoord, defender: DefenderId) -> bool {
        let Some(index) = self.index(cell) else {
            return false;
        };
        match self.cells.get_mut(index) {
            Some(slot @ None) => {
                *slot = Some(defender);
                true
            }
            _ => false,
        }
    }

    /// Clears whichever cell references the defender. Removing an unknown
    /// defender is a no-op.
    pub(crate) fn remove(&mut self, defender: DefenderId) -> Option<CellCoord> {
        let index = self
            .cells
            .iter()
            .position(|slot| *slot == Some(defender))?;
        self.cells[index] = None;
        let width = usize::try_from(self.columns).ok()?;
        let row = u32::try_from(index / width).ok()?;
        let column = u32::try_from(index % width).ok()?;
        Some(CellCoord::new(row, column))
    }

    fn index(&self, cell: CellCoord) -> Option<usize> {
        if cell.row() < self.rows && cell.column() < self.columns {
            let row = usize::try_from(cell.row()).ok()?;
            let column = usize::try_from(cell.column()).ok()?;
            let width = usize::try_from(self.columns).ok()?;
            Some(row * width + column)
        } else {
            None
        }
    }
}

/// Centre of a grid cell in playfield units.
pub(crate) fn cell_center(cell: CellCoord) -> Vec2 {
    Vec2::new(
        GRID_LEFT + (cell.column() as f32 + 0.5) * CELL_WIDTH,
        lane_center(cell.row()),
    )
}

/// Vertical centre of a lane in playfield units.
pub(crate) fn lane_center(lane: u32) -> f32 {
    (lane as f32 + 0.5) * LANE_HEIGHT
}

/// Lane containing the provided y coordinate.
pub(crate) fn lane_of(y: f32) -> Option<u32> {
    if y < 0.0 {
        return None;
    }
    let lane = (y / LANE_HEIGHT).floor() as u32;
    (lane < LANES).then_some(lane)
}

/// Grid cell under a playfield point, if the point lies on the grid.
pub(crate) fn cell_at(point: Vec2, columns: u32) -> Option<CellCoord> {
    let relative_x = point.x - GRID_LEFT;
    if relative_x < 0.0 {
        return None;
    }
    let column = (relative_x / CELL_WIDTH).floor() as u32;
    let row = lane_of(point.y)?;
    (column < columns).then(|| CellCoord::new(row, column))
}
