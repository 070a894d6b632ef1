#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that plays a headless Lane Defence episode.

mod placement;
mod report;

use anyhow::{Context, Result};
use clap::Parser;
use lane_defence_core::{tuning::TICK_DURATION, PlacementOutcome, SpeedMultiplier, WELCOME_BANNER};
use lane_defence_simulation::{Game, GameConfig, LoopDriver, DEFAULT_SEED};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::{placement::PlacementSpec, report::EventTally};

/// Frames rendered per real second by the headless loop.
const FRAMES_PER_SECOND: u64 = 60;

#[derive(Parser, Debug)]
#[command(
    name = "lane-defence",
    about = "Runs a headless Lane Defence episode and reports the final state"
)]
struct Args {
    /// Real seconds to play before reporting.
    #[arg(long, default_value_t = 60)]
    seconds: u64,

    /// Global speed multiplier (1, 2, 4 or 8).
    #[arg(long, default_value = "1")]
    speed: SpeedMultiplier,

    /// Seed driving wave lane selection.
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Defender placed before the first tick, as ROW,COL,KIND. May be repeated.
    #[arg(long = "place", value_name = "ROW,COL,KIND")]
    placements: Vec<PlacementSpec>,

    /// Collect pickups as soon as they come to rest.
    #[arg(long)]
    auto_collect: bool,

    /// Print the final snapshot as JSON instead of text.
    #[arg(long)]
    json: bool,

    /// Log filter used when RUST_LOG is not set.
    #[arg(long, default_value = "info")]
    log_level: String,
}

/// Entry point for the Lane Defence command-line interface.
fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level)?;
    println!("{WELCOME_BANNER}");

    let mut game = Game::new(GameConfig::new(args.seed).with_event_log(true));
    game.set_speed(args.speed);
    game.set_auto_collect(args.auto_collect);
    for spec in &args.placements {
        let outcome = game.place_defender(spec.cell(), spec.kind());
        if outcome != PlacementOutcome::Placed {
            warn!(cell = %spec.cell(), kind = %spec.kind(), ?outcome, "placement skipped");
        }
    }

    let mut driver = LoopDriver::new();
    let mut tally = EventTally::default();
    let mut ticks = 0_u64;
    for _ in 0..args.seconds.saturating_mul(FRAMES_PER_SECOND) {
        ticks += u64::from(driver.advance(&mut game, TICK_DURATION));
        tally.record(&game.drain_events());
        if game.is_game_over() {
            break;
        }
    }

    let snapshot = game.snapshot();
    info!(ticks, game_over = snapshot.game_over, "run finished");
    if args.json {
        let json = report::to_json(&snapshot, &tally).context("failed to serialise the report")?;
        println!("{json}");
    } else {
        print!("{}", report::render_text(&snapshot, &tally));
    }
    Ok(())
}

fn init_tracing(default_filter: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .with_context(|| format!("invalid log filter `{default_filter}`"))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}
