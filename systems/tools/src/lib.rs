#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure tool-selection system translating grid clicks into placement and
//! removal commands.

use lane_defence_core::{CellCoord, Command, Event, Tool};

/// Input snapshot distilled from adapter-provided pointer data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ToolInput {
    /// Grid cell the player clicked on this frame, if any.
    pub clicked_cell: Option<CellCoord>,
}

impl ToolInput {
    /// Creates an input descriptor for a click on the provided cell.
    #[must_use]
    pub const fn click(cell: CellCoord) -> Self {
        Self {
            clicked_cell: Some(cell),
        }
    }
}

/// Tracks the tool selected by the player.
///
/// Selecting the active tool again deselects it. A successful placement
/// returns the belt to its empty state, while the removal tool stays selected
/// until toggled off.
#[derive(Clone, Debug, Default)]
pub struct Toolbelt {
    selected: Option<Tool>,
}

impl Toolbelt {
    /// Creates an empty toolbelt.
    #[must_use]
    pub const fn new() -> Self {
        Self { selected: None }
    }

    /// Toggles the provided tool and returns the resulting selection.
    pub fn select(&mut self, tool: Tool) -> Option<Tool> {
        self.selected = if self.selected == Some(tool) {
            None
        } else {
            Some(tool)
        };
        self.selected
    }

    /// Deselects any tool.
    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Currently selected tool.
    #[must_use]
    pub const fn selected(&self) -> Option<Tool> {
        self.selected
    }

    /// Consumes world events and pointer input to emit tool commands.
    pub fn handle(&mut self, events: &[Event], input: ToolInput, out: &mut Vec<Command>) {
        for event in events {
            match event {
                Event::DefenderPlaced { .. } => {
                    if matches!(self.selected, Some(Tool::Place(_))) {
                        self.selected = None;
                    }
                }
                Event::WorldReset => self.selected = None,
                _ => {}
            }
        }

        let Some(cell) = input.clicked_cell else {
            return;
        };
        match self.selected {
            Some(Tool::Place(kind)) => out.push(Command::PlaceDefender { kind, cell }),
            Some(Tool::Remove) => out.push(Command::RemoveDefender { cell }),
            None => {}
        }
    }
}
