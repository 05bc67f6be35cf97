use glam::Vec2;
use hecs::World;

use crate::input::Direction;
use crate::systems::nudge_player;
use crate::{
    active_power_up, ball_entities, create_ball, create_paddle, paddle_of, step, Backdrop, Ball,
    Config, Difficulty, Effects, Events, Field, GameRng, MatchAction, MatchFsm, MatchState,
    Paddle, PaddleInput, PowerUp, Score, Settings, Side, Time, TransitionResult,
};

/// The whole match context. Every piece of game state lives here and is
/// passed explicitly to the systems; there are no globals.
pub struct Match {
    pub world: World,
    pub time: Time,
    pub field: Field,
    pub config: Config,
    pub score: Score,
    pub events: Events,
    pub effects: Effects,
    pub rng: GameRng,
    pub settings: Settings,
    pub backdrop: Backdrop,
    fsm: MatchFsm,
    difficulty: Difficulty,
}

impl Match {
    pub fn new(seed: u64) -> Self {
        Self::with_config(Field::default(), Config::new(), seed)
    }

    pub fn with_config(field: Field, config: Config, seed: u64) -> Self {
        let mut game = Self {
            world: World::new(),
            time: Time::default(),
            field,
            config,
            score: Score::new(),
            events: Events::new(),
            effects: Effects::new(0.0),
            rng: GameRng::new(seed),
            settings: Settings::new(),
            backdrop: Backdrop::default(),
            fsm: MatchFsm::new(),
            difficulty: Difficulty::default(),
        };
        game.reset_entities();
        game
    }

    pub fn state(&self) -> MatchState {
        self.fsm.state()
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Per-tick opponent tracking chance in effect
    pub fn track_chance(&self) -> f32 {
        self.config
            .opponent_track_chance
            .unwrap_or_else(|| self.difficulty.track_chance())
    }

    /// Begin a fresh match at `difficulty`
    pub fn start(&mut self, difficulty: Difficulty) -> TransitionResult {
        self.difficulty = difficulty;
        self.reset_entities();
        let result = self.fsm.transition(MatchAction::Start);
        log::info!(
            "Match started: {difficulty:?}, track chance {:.2}",
            self.track_chance()
        );
        result
    }

    pub fn pause(&mut self) -> TransitionResult {
        self.fsm.transition(MatchAction::Pause)
    }

    pub fn resume(&mut self) -> TransitionResult {
        self.fsm.transition(MatchAction::Resume)
    }

    pub fn toggle_pause(&mut self) -> TransitionResult {
        match self.state() {
            MatchState::Running => self.pause(),
            _ => self.resume(),
        }
    }

    /// Opening the settings panel always pauses
    pub fn open_settings(&mut self) -> TransitionResult {
        self.pause()
    }

    /// Tear down and return to the pre-match menu
    pub fn restart(&mut self) -> TransitionResult {
        self.reset_entities();
        log::info!("Match restarted");
        self.fsm.transition(MatchAction::Restart)
    }

    /// Advance one tick of `dt` frame units.
    ///
    /// Only a running match moves. The win condition is checked before any
    /// physics, and reaching it latches GameOver.
    pub fn tick(&mut self, dt: f32, input: PaddleInput) -> &Events {
        self.events.clear();
        if !self.fsm.is_running() {
            return &self.events;
        }

        if let Some(winner) = self.score.has_winner(self.config.win_score) {
            self.fsm.transition(MatchAction::Finish);
            self.events.outcome = Some(winner);
            log::info!(
                "Game over, {winner:?} wins {} - {}",
                self.score.player,
                self.score.opponent
            );
            return &self.events;
        }

        self.time.advance(dt.max(0.0));
        self.backdrop
            .drift(self.settings.theme, &self.field, self.time.dt, &mut self.rng);

        let track_chance = self.track_chance();
        step(
            &mut self.world,
            &self.time,
            &self.field,
            &self.config,
            &mut self.score,
            &mut self.effects,
            &mut self.events,
            &mut self.rng,
            input,
            track_chance,
        );
        &self.events
    }

    /// On-screen button steps; ignored unless the match is running
    pub fn nudge_player(&mut self, direction: Direction, steps: u32) {
        if self.fsm.is_running() {
            nudge_player(&mut self.world, direction, steps, &self.field, &self.config);
        }
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        paddle_of(&self.world, side)
    }

    /// Active balls in stable order
    pub fn balls(&self) -> Vec<Ball> {
        ball_entities(&self.world)
            .into_iter()
            .filter_map(|e| self.world.get::<&Ball>(e).ok().map(|b| *b))
            .collect()
    }

    pub fn power_up(&self) -> Option<PowerUp> {
        active_power_up(&self.world).map(|(_e, p)| p)
    }

    pub fn is_opponent_frozen(&self) -> bool {
        self.effects.is_frozen(self.time.now)
    }

    /// Winner once the match is over
    pub fn outcome(&self) -> Option<Side> {
        if self.fsm.is_game_over() {
            self.score.has_winner(self.config.win_score)
        } else {
            None
        }
    }

    /// Fresh paddles, one served ball, zeroed score, timers and decorations
    fn reset_entities(&mut self) {
        self.world.clear();
        self.time = Time::default();
        self.score = Score::new();
        self.events.clear();
        self.effects = Effects::new(self.time.now);

        create_paddle(&mut self.world, &self.field, Side::Player);
        create_paddle(&mut self.world, &self.field, Side::Opponent);

        let serve = Vec2::new(
            self.config.ball_speed * self.field.width_scale(),
            self.config.ball_speed * self.field.height_scale(),
        );
        create_ball(&mut self.world, &self.field, &self.config, self.field.center(), serve);

        self.backdrop = Backdrop::generate(&self.field, &mut self.rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_match_is_paused_with_entities() {
        let game = Match::new(1);
        assert_eq!(game.state(), MatchState::Paused);
        assert_eq!(game.balls().len(), 1);
        assert!(game.paddle(Side::Player).is_some());
        assert!(game.paddle(Side::Opponent).is_some());
        assert!(game.power_up().is_none());
    }

    #[test]
    fn test_start_sets_difficulty_and_runs() {
        let mut game = Match::new(1);
        assert!(game.start(Difficulty::Hard).success());
        assert_eq!(game.state(), MatchState::Running);
        assert_eq!(game.track_chance(), 0.8);
    }

    #[test]
    fn test_config_override_beats_difficulty() {
        let config = Config::new().with_track_chance(1.0);
        let mut game = Match::with_config(Field::default(), config, 1);
        game.start(Difficulty::Easy);
        assert_eq!(game.track_chance(), 1.0);
    }

    #[test]
    fn test_serve_moves_ball_each_tick() {
        let mut game = Match::new(1);
        game.start(Difficulty::Medium);
        game.tick(1.0, PaddleInput::idle());
        assert_eq!(game.balls()[0].pos, Vec2::new(405.0, 255.0));
    }

    #[test]
    fn test_toggle_pause() {
        let mut game = Match::new(1);
        game.start(Difficulty::Easy);
        game.toggle_pause();
        assert_eq!(game.state(), MatchState::Paused);
        game.toggle_pause();
        assert_eq!(game.state(), MatchState::Running);
        game.open_settings();
        assert_eq!(game.state(), MatchState::Paused);
    }

    #[test]
    fn test_restart_zeroes_score_and_pauses() {
        let mut game = Match::new(1);
        game.start(Difficulty::Easy);
        game.score.increment(Side::Opponent);
        game.tick(1.0, PaddleInput::idle());

        game.restart();

        assert_eq!(game.state(), MatchState::Paused);
        assert_eq!(game.score, Score::new());
        assert_eq!(game.balls()[0].pos, game.field.center());
        assert_eq!(game.time.now, 0.0);
    }

    #[test]
    fn test_nudge_ignored_while_paused() {
        let mut game = Match::new(1);
        let before = game.paddle(Side::Player).unwrap();
        game.nudge_player(Direction::Up, 3);
        assert_eq!(game.paddle(Side::Player).unwrap(), before);

        game.start(Difficulty::Easy);
        game.nudge_player(Direction::Up, 1);
        assert!(game.paddle(Side::Player).unwrap().y < before.y);
    }
}
