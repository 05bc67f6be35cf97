pub mod audio;
pub mod backdrop;
pub mod components;
pub mod config;
pub mod difficulty;
pub mod error;
pub mod field;
pub mod fsm;
pub mod game;
pub mod input;
pub mod params;
pub mod resources;
pub mod session;
pub mod settings;
pub mod systems;

pub use audio::*;
pub use backdrop::*;
pub use components::*;
pub use config::*;
pub use difficulty::*;
pub use error::GameError;
pub use field::*;
pub use fsm::*;
pub use game::*;
pub use input::*;
pub use params::*;
pub use resources::*;
pub use session::*;
pub use settings::*;

use glam::Vec2;
use hecs::{Entity, World};
use systems::*;

/// Run one simulation tick over the match entities.
///
/// Order matters: effect expiry and spawning first, then the player paddle,
/// then the opponent, then every ball in a single ordered pass.
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    time: &Time,
    field: &Field,
    config: &Config,
    score: &mut Score,
    effects: &mut Effects,
    events: &mut Events,
    rng: &mut GameRng,
    input: PaddleInput,
    track_chance: f32,
) {
    // 0. Resolve expired effects, maybe spawn a pickup
    expire_effects(world, time, effects);
    maybe_spawn(world, time, field, config, effects, rng, events);

    // 1. Player paddle
    apply_player_input(world, input, time, field, config);

    // 2-3. Opponent paddle
    control_opponent(world, time, field, config, effects, track_chance, rng);

    // 4. Balls: move, bounce, pickups, paddles, scoring
    update_balls(world, time, field, config, score, effects, events);
}

/// Helper to create a paddle entity centred on its side
pub fn create_paddle(world: &mut World, field: &Field, side: Side) -> Entity {
    let height = field.paddle_height();
    let paddle = Paddle::new(
        side,
        field.paddle_x(side),
        field.paddle_spawn_y(height),
        field.paddle_width(),
        height,
    );
    world.spawn((paddle,))
}

/// Helper to create a ball entity sized for the field
pub fn create_ball(
    world: &mut World,
    field: &Field,
    config: &Config,
    pos: Vec2,
    vel: Vec2,
) -> Entity {
    let base_speed = config.ball_speed * field.width_scale();
    spawn_ball(world, Ball::new(pos, vel, field.ball_radius(), base_speed))
}

/// Spawn `ball` behind every ball already in play
pub fn spawn_ball(world: &mut World, ball: Ball) -> Entity {
    let order = world
        .query::<&SpawnOrder>()
        .iter()
        .map(|(_e, order)| order.0 + 1)
        .max()
        .unwrap_or(0);
    world.spawn((ball, SpawnOrder(order)))
}

/// Helper to place a power-up entity
pub fn create_power_up(
    world: &mut World,
    field: &Field,
    pos: Vec2,
    kind: PowerUpKind,
) -> Entity {
    world.spawn((PowerUp::new(pos, field.power_up_radius(), kind),))
}

/// Ball entities oldest first
pub fn ball_entities(world: &World) -> Vec<Entity> {
    let mut entities: Vec<_> = world
        .query::<(&Ball, &SpawnOrder)>()
        .iter()
        .map(|(e, (_ball, order))| (*order, e))
        .collect();
    entities.sort_unstable_by_key(|(order, e)| (*order, e.id()));
    entities.into_iter().map(|(_order, e)| e).collect()
}

pub fn ball_count(world: &World) -> usize {
    world.query::<&Ball>().iter().count()
}

/// Copy of the paddle on `side`
pub fn paddle_of(world: &World, side: Side) -> Option<Paddle> {
    world
        .query::<&Paddle>()
        .iter()
        .find(|(_e, p)| p.side == side)
        .map(|(_e, p)| *p)
}

pub fn active_power_up(world: &World) -> Option<(Entity, PowerUp)> {
    world
        .query::<&PowerUp>()
        .iter()
        .next()
        .map(|(e, p)| (e, *p))
}
