use hecs::World;

use crate::input::Direction;
use crate::{Config, Field, Paddle, PaddleInput, Side, Time};

/// Move the player paddle from held up/down intents
pub fn apply_player_input(
    world: &mut World,
    input: PaddleInput,
    time: &Time,
    field: &Field,
    config: &Config,
) {
    let delta = config.player_speed * time.dt * field.height_scale();

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side != Side::Player {
            continue;
        }
        if input.up && paddle.y > 0.0 {
            paddle.y -= delta;
        }
        if input.down && paddle.bottom() < field.height {
            paddle.y += delta;
        }

        // Clamp to field bounds
        paddle.y = field.clamp_paddle_y(paddle.y, paddle.height);
    }
}

/// Discrete on-screen button steps, `config.paddle_step` each
pub fn nudge_player(
    world: &mut World,
    direction: Direction,
    steps: u32,
    field: &Field,
    config: &Config,
) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side != Side::Player {
            continue;
        }
        for _ in 0..steps {
            match direction {
                Direction::Up if paddle.y > 0.0 => paddle.y -= config.paddle_step,
                Direction::Down if paddle.bottom() < field.height => paddle.y += config.paddle_step,
                _ => break,
            }
        }
        paddle.y = field.clamp_paddle_y(paddle.y, paddle.height);
    }
}
