use std::fmt::Write as _;

use lane_defence_core::{Event, Snapshot, SweeperState};
use serde::Serialize;

/// Running totals of the notable events observed during a run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub(crate) struct EventTally {
    waves: u32,
    attackers_spawned: u32,
    attackers_killed: u32,
    attackers_swept: u32,
    defenders_lost: u32,
    mines_detonated: u32,
    projectiles_fired: u32,
    pickups_collected: u32,
    resource_collected: u32,
}

impl EventTally {
    /// Folds a batch of drained events into the totals.
    pub(crate) fn record(&mut self, events: &[Event]) {
        for event in events {
            match event {
                Event::WaveSpawned { .. } => self.waves += 1,
                Event::AttackerSpawned { .. } => self.attackers_spawned += 1,
                Event::AttackerKilled { .. } => self.attackers_killed += 1,
                Event::AttackerSwept { .. } => self.attackers_swept += 1,
                Event::DefenderDestroyed { .. } => self.defenders_lost += 1,
                Event::MineDetonated { .. } => self.mines_detonated += 1,
                Event::ProjectileFired { .. } => self.projectiles_fired += 1,
                Event::PickupCollected { value, .. } => {
                    self.pickups_collected += 1;
                    self.resource_collected += value;
                }
                _ => {}
            }
        }
    }
}

#[derive(Serialize)]
struct Report<'a> {
    snapshot: &'a Snapshot,
    tally: &'a EventTally,
}

/// Serialises the final snapshot together with the tally.
pub(crate) fn to_json(snapshot: &Snapshot, tally: &EventTally) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&Report { snapshot, tally })
}

/// Renders a human readable summary of the final state.
pub(crate) fn render_text(snapshot: &Snapshot, tally: &EventTally) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "elapsed {:.1}s at {} | level {} wave {} ({}/10) | resource {}",
        snapshot.elapsed.as_secs_f32(),
        snapshot.speed,
        snapshot.level,
        snapshot.wave,
        snapshot.wave_in_level,
        snapshot.resource,
    );
    let _ = writeln!(
        out,
        "next wave: {} attackers, +{}% speed{}",
        snapshot.attackers_per_wave,
        snapshot.speed_bonus_percent,
        if snapshot.wave_pending { " (pending)" } else { "" },
    );
    if snapshot.game_over {
        let _ = writeln!(out, "GAME OVER");
    }

    let _ = writeln!(out, "defenders ({}):", snapshot.defenders.len());
    for defender in &snapshot.defenders {
        let _ = writeln!(
            out,
            "  {} at {} {}/{}",
            defender.kind, defender.cell, defender.health, defender.max_health
        );
    }

    let lanes: String = snapshot
        .sweepers
        .iter()
        .map(|sweeper| match sweeper.state {
            SweeperState::Idle => 'I',
            SweeperState::Active => 'A',
            SweeperState::Used => '-',
        })
        .collect();
    let _ = writeln!(
        out,
        "attackers on field {} | sweepers [{lanes}]",
        snapshot.attackers.len()
    );
    let _ = writeln!(
        out,
        "waves {} | spawned {} killed {} swept {} | defenders lost {} | mines {} | shots {} | pickups {} (+{})",
        tally.waves,
        tally.attackers_spawned,
        tally.attackers_killed,
        tally.attackers_swept,
        tally.defenders_lost,
        tally.mines_detonated,
        tally.projectiles_fired,
        tally.pickups_collected,
        tally.resource_collected,
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use lane_defence_core::{AttackerId, PickupId};

    #[test]
    fn tally_counts_relevant_events() {
        let mut tally = EventTally::default();

        tally.record(&[
            Event::WaveSpawned {
                wave: 1,
                level: 1,
                count: 2,
            },
            Event::AttackerKilled {
                attacker: AttackerId::new(0),
                lane: 1,
            },
            Event::PickupCollected {
                pickup: PickupId::new(3),
                value: 25,
            },
            Event::PickupCollected {
                pickup: PickupId::new(4),
                value: 25,
            },
            Event::WorldReset,
        ]);

        assert_eq!(tally.waves, 1);
        assert_eq!(tally.attackers_killed, 1);
        assert_eq!(tally.pickups_collected, 2);
        assert_eq!(tally.resource_collected, 50);
        assert_eq!(tally.defenders_lost, 0);
    }
}
