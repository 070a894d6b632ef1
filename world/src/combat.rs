//! Per-tick collision and combat resolution.
//!
//! The phases run in a fixed order after defender behaviours: projectiles,
//! melee, boundary checks and finally sweepers. Every phase leaves the
//! attacker collection free of dead attackers.

use std::time::Duration;

use lane_defence_core::{
    tuning::{GRID_LEFT, MINE_BLAST_RADIUS, MINE_DAMAGE},
    DefenderId, Event, SweeperState,
};
use tracing::{debug, info};

use crate::{defenders::Engagement, World};

/// Moves projectiles, empowers those passing amplifiers and lands hits.
///
/// A projectile damages the first live attacker whose body contains it and is
/// consumed; later projectiles in the same tick never see attackers killed by
/// earlier ones.
pub(crate) fn resolve_projectiles(world: &mut World, now: Duration, out_events: &mut Vec<Event>) {
    let mut index = 0;
    while index < world.projectiles.len() {
        let projectile = &mut world.projectiles[index];
        projectile.advance();
        if world
            .defenders
            .iter()
            .any(|defender| defender.amplifies_at(projectile.position))
        {
            projectile.empower();
        }

        let position = projectile.position;
        let damage = projectile.damage;
        let target = world
            .attackers
            .iter_mut()
            .find(|attacker| attacker.is_alive() && attacker.body_contains(position));
        let consumed = match target {
            Some(attacker) => {
                attacker.apply_damage(damage, now);
                true
            }
            None => projectile.has_left_playfield(),
        };

        if consumed {
            let _ = world.projectiles.remove(index);
        } else {
            index += 1;
        }
    }
    purge_dead_attackers(world, out_events);
}

/// Resolves attackers against defenders in their lane and moves every
/// attacker that ends the tick unblocked.
pub(crate) fn resolve_melee(world: &mut World, now: Duration, out_events: &mut Vec<Event>) {
    let mut detonations: Vec<DefenderId> = Vec::new();

    for attacker in world.attackers.iter_mut() {
        let mut blocked = false;
        let mut index = 0;
        while index < world.defenders.len() {
            let defender = &mut world.defenders[index];
            if defender.lane() != attacker.lane || !attacker.reaches(defender.position.x) {
                index += 1;
                continue;
            }

            match defender.engagement(now) {
                Engagement::PassThrough => {}
                Engagement::Detonate => {
                    if !detonations.contains(&defender.id) {
                        detonations.push(defender.id);
                    }
                }
                Engagement::Block => {
                    blocked = true;
                    if let Some(damage) = attacker.strike(now) {
                        defender.apply_damage(damage, now);
                        if !defender.is_alive() {
                            let destroyed = world.defenders.remove(index);
                            let _ = world.grid.remove(destroyed.id);
                            out_events.push(Event::DefenderDestroyed {
                                defender: destroyed.id,
                                kind: destroyed.kind,
                                cell: destroyed.cell,
                            });
                            blocked = false;
                            continue;
                        }
                    }
                }
            }
            index += 1;
        }
        attacker.settle(blocked);
    }

    for mine in detonations {
        detonate(world, mine, now, out_events);
    }
    purge_dead_attackers(world, out_events);
}

fn detonate(world: &mut World, mine: DefenderId, now: Duration, out_events: &mut Vec<Event>) {
    let Some(index) = world.defenders.iter().position(|defender| defender.id == mine) else {
        return;
    };
    let defender = world.defenders.remove(index);
    let _ = world.grid.remove(defender.id);

    let mut victims = 0;
    for attacker in world.attackers.iter_mut() {
        if attacker.lane == defender.lane()
            && (attacker.position.x - defender.position.x).abs() <= MINE_BLAST_RADIUS
        {
            attacker.apply_damage(MINE_DAMAGE, now);
            victims += 1;
        }
    }

    debug!(cell = %defender.cell, victims, "mine detonated");
    out_events.push(Event::MineDetonated {
        defender: defender.id,
        cell: defender.cell,
        victims,
    });
}

/// Activates sweepers for attackers that crossed the grid edge and ends the
/// episode when a lane has no sweeper left.
pub(crate) fn resolve_boundary(world: &mut World, out_events: &mut Vec<Event>) {
    for attacker in &world.attackers {
        if attacker.position.x > GRID_LEFT {
            continue;
        }
        let Some(sweeper) = usize::try_from(attacker.lane)
            .ok()
            .and_then(|lane| world.sweepers.get_mut(lane))
        else {
            continue;
        };

        match sweeper.state() {
            SweeperState::Idle => {
                if sweeper.activate() {
                    debug!(lane = sweeper.lane, "sweeper activated");
                    out_events.push(Event::SweeperActivated { lane: sweeper.lane });
                }
            }
            SweeperState::Active => {}
            SweeperState::Used => {
                if !world.game_over {
                    world.game_over = true;
                    info!(lane = attacker.lane, "boundary breached, game over");
                    out_events.push(Event::GameOver {
                        lane: attacker.lane,
                    });
                }
            }
        }
    }
}

/// Moves active sweepers and removes every attacker they reach.
pub(crate) fn resolve_sweepers(world: &mut World, out_events: &mut Vec<Event>) {
    for sweeper in world.sweepers.iter_mut() {
        if sweeper.state() != SweeperState::Active {
            continue;
        }
        let spent = sweeper.advance();
        let reach = sweeper.reach();

        let mut index = 0;
        while index < world.attackers.len() {
            let attacker = &world.attackers[index];
            if attacker.lane == sweeper.lane && attacker.position.x <= reach {
                let swept = world.attackers.remove(index);
                out_events.push(Event::AttackerSwept {
                    attacker: swept.id,
                    lane: swept.lane,
                });
            } else {
                index += 1;
            }
        }

        if spent {
            debug!(lane = sweeper.lane, "sweeper spent");
            out_events.push(Event::SweeperSpent { lane: sweeper.lane });
        }
    }
}

/// Damages every attacker in `lane` within `radius` of `x`.
pub(crate) fn pulse(
    world: &mut World,
    lane: u32,
    x: f32,
    damage: i32,
    radius: f32,
    now: Duration,
    out_events: &mut Vec<Event>,
) {
    for attacker in world.attackers.iter_mut() {
        if attacker.lane == lane && (attacker.position.x - x).abs() <= radius {
            attacker.apply_damage(damage, now);
        }
    }
    purge_dead_attackers(world, out_events);
}

fn purge_dead_attackers(world: &mut World, out_events: &mut Vec<Event>) {
    let mut index = 0;
    while index < world.attackers.len() {
        if world.attackers[index].is_alive() {
            index += 1;
            continue;
        }
        let attacker = world.attackers.remove(index);
        out_events.push(Event::AttackerKilled {
            attacker: attacker.id,
            lane: attacker.lane,
        });
    }
}
