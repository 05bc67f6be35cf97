use hecs::World;

use crate::{ball_entities, Ball, Config, Effects, Field, GameRng, Paddle, Side, Time};

/// Proportional tracker for the computer paddle.
///
/// One Bernoulli trial per tick: on success the paddle closes `lerp` of the
/// gap to the ball per frame unit, otherwise it holds still this tick.
/// Returns whether the paddle tracked.
pub fn track(
    paddle: &mut Paddle,
    target: &Ball,
    chance: f32,
    dt: f32,
    lerp: f32,
    rng: &mut GameRng,
) -> bool {
    if !rng.chance(chance) {
        return false;
    }
    let target_y = target.pos.y - paddle.height / 2.0;
    paddle.y += (target_y - paddle.y) * lerp * dt;
    true
}

/// Drive the opponent paddle toward the first ball, then clamp it.
///
/// Skipped entirely while the freeze effect is active.
pub fn control_opponent(
    world: &mut World,
    time: &Time,
    field: &Field,
    config: &Config,
    effects: &Effects,
    track_chance: f32,
    rng: &mut GameRng,
) {
    let frozen = effects.is_frozen(time.now);
    let target = ball_entities(world)
        .first()
        .and_then(|e| world.get::<&Ball>(*e).ok().map(|b| *b));

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side != Side::Opponent {
            continue;
        }
        if !frozen {
            if let Some(ball) = &target {
                track(paddle, ball, track_chance, time.dt, config.opponent_lerp, rng);
            }
        }
        paddle.y = field.clamp_paddle_y(paddle.y, paddle.height);
    }
}
