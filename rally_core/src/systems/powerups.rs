use glam::Vec2;
use hecs::World;

use crate::{
    active_power_up, ball_entities, spawn_ball, Ball, Config, Effects, Events, Field, GameRng,
    Paddle, PowerUp, PowerUpKind, Side, Time,
};

/// Spawn a pickup once the interval since the last spawn-or-pickup has passed
pub fn maybe_spawn(
    world: &mut World,
    time: &Time,
    field: &Field,
    config: &Config,
    effects: &mut Effects,
    rng: &mut GameRng,
    events: &mut Events,
) {
    if active_power_up(world).is_some() {
        return;
    }
    if time.now - effects.last_spawn <= config.power_up_spawn_interval {
        return;
    }

    let (min, max) = field.spawn_region();
    let pos = Vec2::new(rng.gen_range(min.x, max.x), rng.gen_range(min.y, max.y));
    let kind = PowerUpKind::random(rng);
    world.spawn((PowerUp::new(pos, field.power_up_radius(), kind),));

    effects.last_spawn = time.now;
    events.power_up_spawned = Some(kind);
    log::debug!("Spawned {kind:?} at ({:.0}, {:.0})", pos.x, pos.y);
}

/// Revert effects whose deadline has passed
pub fn expire_effects(world: &mut World, time: &Time, effects: &mut Effects) {
    if effects.widen_until.is_some_and(|until| time.now >= until) {
        effects.widen_until = None;
        for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
            if paddle.side == Side::Player {
                paddle.height = paddle.original_height;
            }
        }
        log::debug!("Widen expired");
    }

    if effects.freeze_until.is_some_and(|until| time.now >= until) {
        effects.freeze_until = None;
        log::debug!("Freeze expired");
    }
}

/// Apply a collected pickup. Timed effects replace their deadline rather
/// than stacking, and widening always starts from the original height.
pub fn apply_power_up(
    world: &mut World,
    kind: PowerUpKind,
    time: &Time,
    field: &Field,
    config: &Config,
    effects: &mut Effects,
    events: &mut Events,
) {
    match kind {
        PowerUpKind::WidenPaddle => {
            for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
                if paddle.side == Side::Player {
                    paddle.height = paddle.original_height * config.widen_factor;
                    paddle.y = field.clamp_paddle_y(paddle.y, paddle.height);
                }
            }
            effects.widen_until = Some(time.now + config.widen_duration);
        }
        PowerUpKind::FreezeOpponent => {
            effects.freeze_until = Some(time.now + config.freeze_duration);
        }
        PowerUpKind::DuplicateBall => {
            let balls = ball_entities(world);
            if balls.len() < config.max_balls {
                let first = balls
                    .first()
                    .and_then(|e| world.get::<&Ball>(*e).ok().map(|b| *b));
                if let Some(first) = first {
                    spawn_ball(world, first.mirrored());
                }
            }
        }
    }

    effects.last_spawn = time.now;
    events.power_up_taken = Some(kind);
    log::debug!("Collected {kind:?}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ball_count, create_ball, create_paddle, create_power_up, paddle_of};

    struct Setup {
        world: World,
        field: Field,
        config: Config,
        effects: Effects,
        events: Events,
        rng: GameRng,
    }

    fn setup() -> Setup {
        let mut world = World::new();
        let field = Field::default();
        let config = Config::new();
        create_paddle(&mut world, &field, Side::Player);
        create_paddle(&mut world, &field, Side::Opponent);
        create_ball(&mut world, &field, &config, field.center(), Vec2::new(5.0, 5.0));
        Setup {
            world,
            field,
            config,
            effects: Effects::new(0.0),
            events: Events::new(),
            rng: GameRng::new(5),
        }
    }

    impl Setup {
        fn apply(&mut self, kind: PowerUpKind, now: f32) {
            apply_power_up(
                &mut self.world,
                kind,
                &Time::new(1.0, now),
                &self.field,
                &self.config,
                &mut self.effects,
                &mut self.events,
            );
        }

        fn spawn(&mut self, now: f32) {
            maybe_spawn(
                &mut self.world,
                &Time::new(1.0, now),
                &self.field,
                &self.config,
                &mut self.effects,
                &mut self.rng,
                &mut self.events,
            );
        }
    }

    #[test]
    fn test_no_spawn_before_interval() {
        let mut s = setup();
        s.spawn(9.9);
        assert!(active_power_up(&s.world).is_none());
        assert_eq!(s.events.power_up_spawned, None);
    }

    #[test]
    fn test_spawn_inside_central_region() {
        let mut s = setup();
        for i in 0..20 {
            let now = 10.5 + i as f32 * 11.0;
            s.spawn(now);
            let (entity, power_up) = active_power_up(&s.world).expect("spawned");
            let (min, max) = s.field.spawn_region();
            assert!(power_up.pos.cmpge(min).all() && power_up.pos.cmple(max).all());
            assert_eq!(power_up.radius, s.field.power_up_radius());
            assert_eq!(s.effects.last_spawn, now);
            s.world.despawn(entity).unwrap();
        }
    }

    #[test]
    fn test_at_most_one_power_up() {
        let mut s = setup();
        s.spawn(11.0);
        s.spawn(30.0);
        assert_eq!(s.world.query::<&PowerUp>().iter().count(), 1);
    }

    #[test]
    fn test_spawn_measured_from_pickup() {
        let mut s = setup();
        create_power_up(&mut s.world, &s.field, s.field.center(), PowerUpKind::FreezeOpponent);
        let (entity, _) = active_power_up(&s.world).unwrap();
        s.world.despawn(entity).unwrap();
        s.apply(PowerUpKind::FreezeOpponent, 25.0);

        s.spawn(30.0);
        assert!(active_power_up(&s.world).is_none(), "only 5s since pickup");
        s.spawn(35.5);
        assert!(active_power_up(&s.world).is_some());
    }

    #[test]
    fn test_widen_does_not_compound() {
        let mut s = setup();
        let original = paddle_of(&s.world, Side::Player).unwrap().height;

        s.apply(PowerUpKind::WidenPaddle, 1.0);
        s.apply(PowerUpKind::WidenPaddle, 2.0);
        s.apply(PowerUpKind::WidenPaddle, 3.0);

        let paddle = paddle_of(&s.world, Side::Player).unwrap();
        assert_eq!(paddle.height, original * 1.5);
        assert_eq!(s.effects.widen_until, Some(13.0), "deadline reset, not stacked");
        assert!(paddle.bottom() <= s.field.height);
    }

    #[test]
    fn test_widen_reverts_to_original_height() {
        let mut s = setup();
        let original = paddle_of(&s.world, Side::Player).unwrap().height;
        s.apply(PowerUpKind::WidenPaddle, 1.0);

        expire_effects(&mut s.world, &Time::new(1.0, 10.9), &mut s.effects);
        assert_eq!(paddle_of(&s.world, Side::Player).unwrap().height, original * 1.5);

        expire_effects(&mut s.world, &Time::new(1.0, 11.0), &mut s.effects);
        assert_eq!(paddle_of(&s.world, Side::Player).unwrap().height, original);
        assert_eq!(s.effects.widen_until, None);
    }

    #[test]
    fn test_refreeze_extends_deadline() {
        let mut s = setup();
        s.apply(PowerUpKind::FreezeOpponent, 1.0);
        s.apply(PowerUpKind::FreezeOpponent, 4.0);

        // The first pickup's expiry must not unfreeze early
        expire_effects(&mut s.world, &Time::new(1.0, 6.5), &mut s.effects);
        assert!(s.effects.is_frozen(6.5));

        expire_effects(&mut s.world, &Time::new(1.0, 9.0), &mut s.effects);
        assert!(!s.effects.is_frozen(9.0));
        assert_eq!(s.effects.freeze_until, None);
    }

    #[test]
    fn test_duplicate_ball_mirrors_first() {
        let mut s = setup();
        s.apply(PowerUpKind::DuplicateBall, 1.0);

        let balls: Vec<Ball> = ball_entities(&s.world)
            .into_iter()
            .map(|e| *s.world.get::<&Ball>(e).unwrap())
            .collect();
        assert_eq!(balls.len(), 2);
        assert_eq!(balls[1].pos, balls[0].pos);
        assert_eq!(balls[1].vel, -balls[0].vel);
        assert_eq!(s.events.power_up_taken, Some(PowerUpKind::DuplicateBall));
    }

    #[test]
    fn test_duplicate_ball_respects_cap() {
        let mut s = setup();
        s.apply(PowerUpKind::DuplicateBall, 1.0);
        s.apply(PowerUpKind::DuplicateBall, 2.0);
        assert_eq!(ball_count(&s.world), 2);
    }

    #[test]
    fn test_duplicate_mirrors_oldest_after_id_reuse() {
        let mut s = setup();
        s.apply(PowerUpKind::DuplicateBall, 1.0);
        let balls = ball_entities(&s.world);
        let (original, clone) = (balls[0], balls[1]);
        s.world.get::<&mut Ball>(clone).unwrap().pos = Vec2::new(100.0, 100.0);
        s.world.despawn(original).unwrap();

        s.apply(PowerUpKind::DuplicateBall, 2.0);

        let order = ball_entities(&s.world);
        assert_eq!(order[0], clone);
        let newest = *s.world.get::<&Ball>(order[1]).unwrap();
        assert_eq!(newest.pos, Vec2::new(100.0, 100.0), "copied the older ball");
    }
}
