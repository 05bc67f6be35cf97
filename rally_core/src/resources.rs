use rand::Rng;

use crate::components::{PowerUpKind, Side};
use crate::params::Params;

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,  // Frame units for this tick (1.0 ~ 16.67 ms)
    pub now: f32, // Simulated seconds since the match began
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }

    /// Advance by `dt` frame units
    pub fn advance(&mut self, dt: f32) {
        self.dt = dt;
        self.now += dt * (Params::FRAME_MS / 1000.0) as f32;
    }
}

impl Default for Time {
    fn default() -> Self {
        Self { dt: 1.0, now: 0.0 }
    }
}

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub player: u8,
    pub opponent: u8,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Player => self.player = self.player.saturating_add(1),
            Side::Opponent => self.opponent = self.opponent.saturating_add(1),
        }
    }

    pub fn get(&self, side: Side) -> u8 {
        match side {
            Side::Player => self.player,
            Side::Opponent => self.opponent,
        }
    }

    pub fn has_winner(&self, win_score: u8) -> Option<Side> {
        if self.player >= win_score {
            Some(Side::Player)
        } else if self.opponent >= win_score {
            Some(Side::Opponent)
        } else {
            None
        }
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    /// Bernoulli trial; `chance` of 0 never fires, 1 always does
    pub fn chance(&mut self, chance: f32) -> bool {
        self.0.gen::<f32>() < chance
    }

    pub fn gen_range(&mut self, min: f32, max: f32) -> f32 {
        if max <= min {
            return min;
        }
        self.0.gen_range(min..max)
    }

    pub fn index(&mut self, len: usize) -> usize {
        self.0.gen_range(0..len.max(1))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Events {
    pub player_paddle_hit: bool,
    pub opponent_paddle_hit: bool,
    pub wall_hit: bool,
    pub player_scored: bool,
    pub opponent_scored: bool,
    pub power_up_spawned: Option<PowerUpKind>,
    pub power_up_taken: Option<PowerUpKind>,
    /// Set on the single tick the match ends
    pub outcome: Option<Side>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn paddle_hit(&self) -> bool {
        self.player_paddle_hit || self.opponent_paddle_hit
    }

    pub fn scored(&self) -> bool {
        self.player_scored || self.opponent_scored
    }

    pub fn record_score(&mut self, scorer: Side) {
        match scorer {
            Side::Player => self.player_scored = true,
            Side::Opponent => self.opponent_scored = true,
        }
    }
}

/// Power-up timing: spawn reference plus one expiry deadline per timed effect.
///
/// Re-triggering an effect replaces its deadline, so there is never more than
/// one pending reversal per kind.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Effects {
    /// Last spawn or pickup, in simulated seconds
    pub last_spawn: f32,
    pub widen_until: Option<f32>,
    pub freeze_until: Option<f32>,
}

impl Effects {
    pub fn new(now: f32) -> Self {
        Self {
            last_spawn: now,
            ..Self::default()
        }
    }

    pub fn is_frozen(&self, now: f32) -> bool {
        self.freeze_until.is_some_and(|until| now < until)
    }

    pub fn is_widened(&self, now: f32) -> bool {
        self.widen_until.is_some_and(|until| now < until)
    }
}

/// Current "move up" / "move down" intent for the player paddle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleInput {
    pub up: bool,
    pub down: bool,
}

impl PaddleInput {
    pub fn new(up: bool, down: bool) -> Self {
        Self { up, down }
    }

    pub fn idle() -> Self {
        Self::default()
    }
}
