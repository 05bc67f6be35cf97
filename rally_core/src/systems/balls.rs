use hecs::{Entity, World};

use super::{apply_power_up, bounce_paddle, bounce_walls, move_ball, scorer_for};
use crate::{
    active_power_up, ball_count, ball_entities, paddle_of, Ball, Config, Effects, Events, Field,
    Score, Side, Time,
};

/// One ordered pass over a snapshot of the active balls.
///
/// Per ball: integrate, wall bounce, pickup, player paddle, opponent paddle,
/// scoring. A ball that leaves the field while another is still live is marked
/// and despawned after the pass; the last ball is re-served instead, so the
/// field is never empty. Balls spawned mid-pass start moving next tick.
pub fn update_balls(
    world: &mut World,
    time: &Time,
    field: &Field,
    config: &Config,
    score: &mut Score,
    effects: &mut Effects,
    events: &mut Events,
) {
    let mut removed: Vec<Entity> = Vec::new();

    for entity in ball_entities(world) {
        let Some(mut ball) = world.get::<&Ball>(entity).ok().map(|b| *b) else {
            continue;
        };

        move_ball(&mut ball, time.dt);
        if bounce_walls(&mut ball, field) {
            events.wall_hit = true;
        }
        // Persist before pickups so a duplicate clones the moved ball
        store(world, entity, ball);

        if let Some((power_up_entity, power_up)) = active_power_up(world) {
            if power_up.touches(&ball) {
                let _ = world.despawn(power_up_entity);
                apply_power_up(world, power_up.kind, time, field, config, effects, events);
            }
        }

        if let Some(player) = paddle_of(world, Side::Player) {
            if bounce_paddle(&mut ball, &player) {
                events.player_paddle_hit = true;
            }
        }
        if let Some(opponent) = paddle_of(world, Side::Opponent) {
            if bounce_paddle(&mut ball, &opponent) {
                events.opponent_paddle_hit = true;
            }
        }

        if let Some(scorer) = scorer_for(&ball, field) {
            score.increment(scorer);
            events.record_score(scorer);
            log::debug!(
                "{scorer:?} scored ({} - {})",
                score.player,
                score.opponent
            );

            let live = ball_count(world) - removed.len();
            if live > 1 {
                removed.push(entity);
                continue;
            }
            ball.reset(field.center(), config.reset_speedup, scorer);
        }

        store(world, entity, ball);
    }

    for entity in removed {
        let _ = world.despawn(entity);
    }
}

fn store(world: &mut World, entity: Entity, ball: Ball) {
    if let Ok(mut slot) = world.get::<&mut Ball>(entity) {
        *slot = ball;
    }
}
