use std::time::Duration;

use lane_defence_core::{
    tuning::{STARTING_RESOURCE, TICK_DURATION},
    CellCoord, ClickOutcome, CollectOutcome, DefenderKind, PlacementOutcome, RemovalOutcome,
    Snapshot, SpeedMultiplier, SweeperState, Tool,
};
use lane_defence_simulation::{Game, GameConfig, LoopDriver};
use lane_defence_world::query;

fn game() -> Game {
    Game::new(GameConfig::new(0x1d_ea5e))
}

fn run(game: &mut Game, ticks: u32) {
    for _ in 0..ticks {
        game.tick();
    }
}

fn run_until_game_over(game: &mut Game) {
    for _ in 0..60 * 60 * 10 {
        game.tick();
        if game.is_game_over() {
            return;
        }
    }
    panic!("an undefended field should eventually be overrun");
}

#[test]
fn placing_with_exactly_enough_resource_succeeds() {
    let mut game = game();
    for column in 0..9 {
        assert_eq!(
            game.place_defender(CellCoord::new(0, column), DefenderKind::Producer),
            PlacementOutcome::Placed
        );
    }
    assert_eq!(game.snapshot().resource, 50);

    let outcome = game.place_defender(CellCoord::new(2, 3), DefenderKind::Blocker);

    assert_eq!(outcome, PlacementOutcome::Placed);
    let snapshot = game.snapshot();
    assert_eq!(snapshot.resource, 0);
    let placed = snapshot
        .defenders
        .iter()
        .find(|defender| defender.cell == CellCoord::new(2, 3))
        .expect("placed defender should be visible");
    assert_eq!(
        query::defender_at(game.world(), CellCoord::new(2, 3)),
        Some(placed.id)
    );
}

#[test]
fn unaffordable_placement_changes_nothing() {
    let mut game = game();
    for column in 0..5 {
        let _ = game.place_defender(CellCoord::new(1, column), DefenderKind::Shooter);
    }
    let before = game.snapshot();
    assert_eq!(before.resource, 0);

    let outcome = game.place_defender(CellCoord::new(3, 3), DefenderKind::Mine);

    assert_eq!(outcome, PlacementOutcome::InsufficientResource);
    assert_eq!(game.snapshot(), before);
}

#[test]
fn invalid_and_occupied_cells_are_reported() {
    let mut game = game();
    assert_eq!(
        game.place_defender(CellCoord::new(5, 0), DefenderKind::Blocker),
        PlacementOutcome::InvalidCell
    );
    assert_eq!(
        game.place_defender(CellCoord::new(4, 8), DefenderKind::Blocker),
        PlacementOutcome::Placed
    );
    assert_eq!(
        game.place_defender(CellCoord::new(4, 8), DefenderKind::Mine),
        PlacementOutcome::Occupied
    );
    assert_eq!(
        game.remove_defender(CellCoord::new(0, 40)),
        RemovalOutcome::InvalidCell
    );
}

#[test]
fn removal_refunds_half_and_cell_is_reusable() {
    let mut game = game();
    let _ = game.place_defender(CellCoord::new(3, 1), DefenderKind::Shooter);

    assert_eq!(game.remove_defender(CellCoord::new(3, 1)), RemovalOutcome::Removed);
    assert_eq!(game.snapshot().resource, STARTING_RESOURCE - 100 + 50);
    assert_eq!(game.remove_defender(CellCoord::new(3, 1)), RemovalOutcome::Empty);
    assert_eq!(
        game.place_defender(CellCoord::new(3, 1), DefenderKind::Producer),
        PlacementOutcome::Placed
    );
}

#[test]
fn clicking_cells_follows_the_selected_tool() {
    let mut game = game();
    assert_eq!(game.click_cell(CellCoord::new(0, 0)), ClickOutcome::NoTool);

    let _ = game.select_tool(Tool::Place(DefenderKind::Producer));
    assert_eq!(
        game.click_cell(CellCoord::new(0, 0)),
        ClickOutcome::Placement(PlacementOutcome::Placed)
    );
    assert_eq!(game.snapshot().tool, None, "placement clears the selection");
    assert_eq!(game.click_cell(CellCoord::new(0, 1)), ClickOutcome::NoTool);

    let _ = game.select_tool(Tool::Place(DefenderKind::Blocker));
    assert_eq!(
        game.click_cell(CellCoord::new(0, 0)),
        ClickOutcome::Placement(PlacementOutcome::Occupied)
    );
    assert_eq!(
        game.snapshot().tool,
        Some(Tool::Place(DefenderKind::Blocker)),
        "a failed placement keeps the selection"
    );

    let _ = game.select_tool(Tool::Remove);
    assert_eq!(
        game.click_cell(CellCoord::new(0, 0)),
        ClickOutcome::Removal(RemovalOutcome::Removed)
    );
    assert_eq!(
        game.click_cell(CellCoord::new(0, 0)),
        ClickOutcome::Removal(RemovalOutcome::Empty)
    );
    assert_eq!(game.select_tool(Tool::Remove), None);

    let _ = game.select_tool(Tool::Remove);
    game.clear_tool();
    assert_eq!(game.snapshot().tool, None);
}

#[test]
fn pickups_can_be_collected_by_point_or_id() {
    let mut game = game();
    let _ = game.place_defender(CellCoord::new(2, 2), DefenderKind::Producer);
    run(&mut game, 60 * 10);

    let pickup = game.snapshot().pickups[0].clone();
    let resource = game.snapshot().resource;

    assert_eq!(game.collect_pickup_at(pickup.position), CollectOutcome::Collected);
    assert_eq!(game.snapshot().resource, resource + 25);
    assert_eq!(
        game.collect_pickup_at(pickup.position),
        CollectOutcome::NotFound,
        "collected pickups no longer answer hit tests"
    );
    assert_eq!(game.collect_pickup(pickup.id), CollectOutcome::AlreadyCollected);
}

#[test]
fn auto_collect_survives_reset() {
    let mut game = game();
    game.set_auto_collect(true);
    game.set_speed(SpeedMultiplier::X4);

    game.reset();

    let snapshot = game.snapshot();
    assert!(snapshot.auto_collect);
    assert_eq!(snapshot.speed, SpeedMultiplier::X4);
}

#[test]
fn first_tick_spawns_the_opening_wave() {
    let mut game = game();
    assert!(game.snapshot().attackers.is_empty());

    game.tick();

    let snapshot = game.snapshot();
    assert_eq!(snapshot.attackers.len(), 2);
    assert_eq!((snapshot.level, snapshot.wave), (1, 1));
    assert_eq!(snapshot.speed_bonus_percent, 0);
}

#[test]
fn wave_counter_is_monotonic_and_sizes_stay_capped() {
    let mut game = game();
    let mut previous = game.snapshot();

    for _ in 0..60 * 120 {
        game.tick();
        let snapshot = game.snapshot();
        assert!(snapshot.wave >= previous.wave);
        assert!(snapshot.level >= previous.level);
        assert!(snapshot.attackers_per_wave <= 7);
        assert!((1..=10).contains(&snapshot.wave_in_level));
        if snapshot.level == previous.level {
            assert!(snapshot.attackers_per_wave >= previous.attackers_per_wave);
        }
        if snapshot.game_over {
            break;
        }
        previous = snapshot;
    }
    assert!(game.snapshot().wave > 1);
}

#[test]
fn health_stays_positive_for_everything_on_the_field() {
    let mut game = game();
    for row in 0..5 {
        let _ = game.place_defender(CellCoord::new(row, 0), DefenderKind::Producer);
    }
    game.set_auto_collect(true);
    let mut resource_spent = false;

    for tick in 0..60 * 180 {
        game.tick();
        if tick % 600 == 0 {
            for row in 0..5 {
                let outcome = game.place_defender(
                    CellCoord::new(row, 1 + (tick / 600) % 8),
                    DefenderKind::Shooter,
                );
                resource_spent |= outcome == PlacementOutcome::Placed;
            }
        }
        let snapshot = game.snapshot();
        assert!(snapshot.defenders.iter().all(|defender| defender.health > 0));
        assert!(snapshot.attackers.iter().all(|attacker| attacker.health > 0));
        if snapshot.game_over {
            break;
        }
    }
    assert!(resource_spent);
}

#[test]
fn overrun_field_ends_the_game_and_freezes_time() {
    let mut game = game();
    run_until_game_over(&mut game);

    let snapshot = game.snapshot();
    assert!(snapshot.game_over);
    assert!(snapshot
        .sweepers
        .iter()
        .any(|sweeper| sweeper.state == SweeperState::Used));

    let frozen = game.snapshot();
    let mut driver = LoopDriver::new();
    let _ = driver.advance(&mut game, Duration::from_secs(5));
    assert_eq!(game.snapshot(), frozen);
}

#[test]
fn reset_after_game_over_starts_a_fresh_episode() {
    let mut game = game();
    let _ = game.select_tool(Tool::Remove);
    run_until_game_over(&mut game);

    game.reset();

    let snapshot = game.snapshot();
    assert!(!snapshot.game_over);
    assert_eq!(snapshot.resource, STARTING_RESOURCE);
    assert_eq!((snapshot.level, snapshot.wave), (1, 1));
    assert_eq!(snapshot.elapsed, Duration::ZERO);
    assert_eq!(snapshot.tool, None);
    assert!(!snapshot.wave_pending);
    assert!(snapshot.defenders.is_empty());
    assert!(snapshot.attackers.is_empty());
    assert!(snapshot.projectiles.is_empty());
    assert!(snapshot.pickups.is_empty());
    assert_eq!(snapshot.sweepers.len(), 5);
    assert!(snapshot
        .sweepers
        .iter()
        .all(|sweeper| sweeper.state == SweeperState::Idle));

    game.tick();
    assert_eq!(game.snapshot().attackers.len(), 2);
}

#[test]
fn faster_multiplier_reaches_the_same_state_in_less_real_time() {
    let script = |game: &mut Game| {
        let _ = game.place_defender(CellCoord::new(0, 0), DefenderKind::Producer);
        let _ = game.place_defender(CellCoord::new(1, 1), DefenderKind::Shooter);
        let _ = game.place_defender(CellCoord::new(2, 4), DefenderKind::Blocker);
        game.set_auto_collect(true);
    };

    let mut fast = game();
    script(&mut fast);
    fast.set_speed(SpeedMultiplier::X4);
    let mut fast_driver = LoopDriver::new();
    let mut fast_ticks = 0;
    for _ in 0..60 * 15 {
        fast_ticks += fast_driver.advance(&mut fast, TICK_DURATION);
    }

    let mut slow = game();
    script(&mut slow);
    let mut slow_driver = LoopDriver::new();
    let mut slow_ticks = 0;
    for _ in 0..60 * 60 {
        slow_ticks += slow_driver.advance(&mut slow, TICK_DURATION);
    }

    assert_eq!(fast_ticks, 4 * 60 * 15);
    assert_eq!(slow_ticks, fast_ticks);
    let normalise = |mut snapshot: Snapshot| {
        snapshot.speed = SpeedMultiplier::X1;
        snapshot
    };
    assert_eq!(normalise(fast.snapshot()), normalise(slow.snapshot()));
}
