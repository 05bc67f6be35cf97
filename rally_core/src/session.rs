//! Frame driver: one tick and one render per display frame, plus the
//! collaborator seams (clock, input, renderer, audio).

use crate::audio::{AudioSink, Cue, Volume};
use crate::error::{GameError, Result};
use crate::input::{Direction, HoldRepeater};
use crate::{
    Backdrop, Ball, Difficulty, Events, Field, Match, MatchState, Paddle, PaddleInput, Params,
    PowerUp, Rgb, Score, Settings, Side, TransitionResult,
};

/// Monotonic timestamps in milliseconds
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// Current player intent
pub trait InputSource {
    fn intent(&self) -> PaddleInput;
}

impl InputSource for crate::input::InputState {
    fn intent(&self) -> PaddleInput {
        crate::input::InputState::intent(self)
    }
}

impl InputSource for PaddleInput {
    fn intent(&self) -> PaddleInput {
        *self
    }
}

/// Draws a snapshot onto some 2D surface
pub trait Renderer {
    fn draw(&mut self, frame: &Frame<'_>) -> Result<()>;
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone)]
pub struct Frame<'a> {
    pub state: MatchState,
    pub field: Field,
    pub player: Option<Paddle>,
    pub opponent: Option<Paddle>,
    pub balls: Vec<Ball>,
    pub power_up: Option<PowerUp>,
    /// Color tag of the active power-up's kind
    pub power_up_tint: Option<Rgb>,
    pub score: Score,
    pub opponent_frozen: bool,
    pub outcome: Option<Side>,
    pub settings: &'a Settings,
    pub backdrop: &'a Backdrop,
    /// Win banner animation progress in `[0, 1]`
    pub banner: f32,
}

impl<'a> Frame<'a> {
    pub fn capture(game: &'a Match, banner: f32) -> Self {
        Self {
            state: game.state(),
            field: game.field,
            player: game.paddle(Side::Player),
            opponent: game.paddle(Side::Opponent),
            balls: game.balls(),
            power_up: game.power_up(),
            power_up_tint: game.power_up().map(|p| p.kind.tint()),
            score: game.score,
            opponent_frozen: game.is_opponent_frozen(),
            outcome: game.outcome(),
            settings: &game.settings,
            backdrop: &game.backdrop,
            banner,
        }
    }
}

/// Convert the gap between two clock readings into frame units
pub fn frame_units(last_ms: Option<f64>, now_ms: f64) -> f32 {
    match last_ms {
        None => 1.0,
        Some(last) => {
            let units = ((now_ms - last) / Params::FRAME_MS) as f32;
            units.clamp(0.0, Params::MAX_DT_UNITS)
        }
    }
}

/// Owns the match and its collaborators
pub struct Session {
    game: Match,
    renderer: Option<Box<dyn Renderer>>,
    audio: Option<Box<dyn AudioSink>>,
    volume: Volume,
    hold: HoldRepeater,
    last_ms: Option<f64>,
    banner: f32,
    warned_renderer: bool,
    warned_audio: bool,
}

impl Session {
    pub fn new(game: Match) -> Self {
        let hold = HoldRepeater::new(game.config.hold_repeat_ms);
        Self {
            game,
            renderer: None,
            audio: None,
            volume: Volume::default(),
            hold,
            last_ms: None,
            banner: 0.0,
            warned_renderer: false,
            warned_audio: false,
        }
    }

    pub fn with_renderer(mut self, renderer: Box<dyn Renderer>) -> Self {
        self.renderer = Some(renderer);
        self
    }

    pub fn with_audio(mut self, mut audio: Box<dyn AudioSink>) -> Self {
        audio.set_volume(self.volume);
        self.audio = Some(audio);
        self
    }

    pub fn game(&self) -> &Match {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut Match {
        &mut self.game
    }

    pub fn volume(&self) -> Volume {
        self.volume
    }

    /// Read the clock and run one frame
    pub fn frame_with_clock(&mut self, clock: &dyn Clock, input: &dyn InputSource) {
        self.frame(clock.now_ms(), input);
    }

    /// One display frame at timestamp `now_ms`: at most one tick, then one render
    pub fn frame(&mut self, now_ms: f64, input: &dyn InputSource) {
        let dt = frame_units(self.last_ms, now_ms);
        self.last_ms = Some(now_ms);

        if let Some((direction, steps)) = self.hold.poll(dt * Params::FRAME_MS as f32) {
            self.game.nudge_player(direction, steps);
        }

        let events = self.game.tick(dt, input.intent()).clone();
        self.announce(&events);

        if events.outcome.is_some() {
            self.banner = 0.0;
        } else if self.game.outcome() == Some(Side::Player) {
            self.banner = (self.banner + Params::BANNER_GROWTH * dt).min(1.0);
        }

        self.render();
    }

    pub fn start(&mut self, difficulty: Difficulty) -> TransitionResult {
        self.click();
        self.banner = 0.0;
        self.game.start(difficulty)
    }

    pub fn pause(&mut self) -> TransitionResult {
        self.click();
        self.game.pause()
    }

    pub fn resume(&mut self) -> TransitionResult {
        self.click();
        self.game.resume()
    }

    pub fn toggle_pause(&mut self) -> TransitionResult {
        self.click();
        self.game.toggle_pause()
    }

    pub fn open_settings(&mut self) -> TransitionResult {
        self.click();
        self.game.open_settings()
    }

    pub fn restart(&mut self) -> TransitionResult {
        self.click();
        self.banner = 0.0;
        self.hold.release();
        self.game.restart()
    }

    /// Single tap on an on-screen arrow button
    pub fn press_button(&mut self, direction: Direction) {
        self.game.nudge_player(direction, 1);
    }

    /// Arrow button held down; repeats until released
    pub fn hold_button(&mut self, direction: Direction) {
        self.hold.press(direction);
    }

    pub fn release_button(&mut self) {
        self.hold.release();
    }

    /// Raw slider value; malformed input mutes
    pub fn set_volume(&mut self, raw: &str) {
        let volume = Volume::parse(raw);
        let changed = volume != self.volume;
        self.volume = volume;
        if let Some(audio) = self.audio.as_mut() {
            audio.set_volume(volume);
        }
        if changed {
            self.click();
        }
    }

    fn click(&mut self) {
        self.play(Cue::UiClick);
    }

    fn announce(&mut self, events: &Events) {
        if events.paddle_hit() {
            self.play(Cue::PaddleHit);
        }
        if events.scored() {
            self.play(Cue::Score);
        }
        match events.outcome {
            Some(Side::Player) => self.play(Cue::Win),
            Some(Side::Opponent) => self.play(Cue::Lose),
            None => {}
        }
    }

    fn play(&mut self, cue: Cue) {
        match self.audio.as_mut() {
            Some(audio) => {
                if let Err(e) = audio.play(cue) {
                    log::warn!("Could not play {cue:?}: {e}");
                }
            }
            None if !self.warned_audio => {
                log::debug!("{}, sounds disabled", GameError::MissingCollaborator("audio sink"));
                self.warned_audio = true;
            }
            None => {}
        }
    }

    fn render(&mut self) {
        let Some(renderer) = self.renderer.as_mut() else {
            if !self.warned_renderer {
                log::warn!("{}, frames are not drawn", GameError::MissingCollaborator("renderer"));
                self.warned_renderer = true;
            }
            return;
        };
        let frame = Frame::capture(&self.game, self.banner);
        if let Err(e) = renderer.draw(&frame) {
            log::warn!("Frame dropped: {e}");
        }
    }
}
