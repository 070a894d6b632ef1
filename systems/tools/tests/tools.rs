use lane_defence_core::{CellCoord, Command, DefenderId, DefenderKind, Event, Tool};
use lane_defence_system_tools::{ToolInput, Toolbelt};

#[test]
fn click_with_place_tool_emits_placement() {
    let mut toolbelt = Toolbelt::new();
    let _ = toolbelt.select(Tool::Place(DefenderKind::Shooter));
    let mut commands = Vec::new();

    toolbelt.handle(&[], ToolInput::click(CellCoord::new(1, 4)), &mut commands);

    assert_eq!(
        commands,
        vec![Command::PlaceDefender {
            kind: DefenderKind::Shooter,
            cell: CellCoord::new(1, 4),
        }],
        "a selected defender should be placed on click",
    );
}

#[test]
fn click_without_tool_is_ignored() {
    let mut toolbelt = Toolbelt::default();
    let mut commands = Vec::new();

    toolbelt.handle(&[], ToolInput::click(CellCoord::new(0, 0)), &mut commands);

    assert!(commands.is_empty());
}

#[test]
fn reselecting_a_tool_clears_it() {
    let mut toolbelt = Toolbelt::new();

    assert_eq!(
        toolbelt.select(Tool::Place(DefenderKind::Mine)),
        Some(Tool::Place(DefenderKind::Mine))
    );
    assert_eq!(toolbelt.select(Tool::Place(DefenderKind::Mine)), None);
    assert_eq!(toolbelt.select(Tool::Remove), Some(Tool::Remove));
    assert_eq!(
        toolbelt.select(Tool::Place(DefenderKind::Blocker)),
        Some(Tool::Place(DefenderKind::Blocker)),
        "selecting another tool replaces the current one",
    );
    assert_eq!(toolbelt.select(Tool::Remove), Some(Tool::Remove));
    assert_eq!(toolbelt.select(Tool::Remove), None);
}

#[test]
fn successful_placement_clears_the_selection() {
    let mut toolbelt = Toolbelt::new();
    let _ = toolbelt.select(Tool::Place(DefenderKind::Producer));
    let mut commands = Vec::new();

    toolbelt.handle(
        &[Event::DefenderPlaced {
            defender: DefenderId::new(3),
            kind: DefenderKind::Producer,
            cell: CellCoord::new(2, 2),
            cost: 50,
        }],
        ToolInput::default(),
        &mut commands,
    );

    assert_eq!(toolbelt.selected(), None);
    assert!(commands.is_empty());
}

#[test]
fn removal_tool_survives_placements_and_removals() {
    let mut toolbelt = Toolbelt::new();
    let _ = toolbelt.select(Tool::Remove);
    let mut commands = Vec::new();

    toolbelt.handle(
        &[Event::DefenderPlaced {
            defender: DefenderId::new(0),
            kind: DefenderKind::Blocker,
            cell: CellCoord::new(0, 0),
            cost: 50,
        }],
        ToolInput::click(CellCoord::new(0, 0)),
        &mut commands,
    );

    assert_eq!(toolbelt.selected(), Some(Tool::Remove));
    assert_eq!(
        commands,
        vec![Command::RemoveDefender {
            cell: CellCoord::new(0, 0),
        }]
    );
}

#[test]
fn world_reset_clears_the_selection() {
    let mut toolbelt = Toolbelt::new();
    let _ = toolbelt.select(Tool::Remove);

    toolbelt.handle(&[Event::WorldReset], ToolInput::default(), &mut Vec::new());

    assert_eq!(toolbelt.selected(), None);
}
