use crate::params::Params;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub player_speed: f32,
    pub paddle_step: f32,
    pub hold_repeat_ms: f32,
    pub ball_speed: f32,
    pub reset_speedup: f32,
    pub max_balls: usize,
    pub opponent_lerp: f32,
    /// Overrides the difficulty table when set (tests, demo modes)
    pub opponent_track_chance: Option<f32>,
    pub power_up_spawn_interval: f32,
    pub widen_factor: f32,
    pub widen_duration: f32,
    pub freeze_duration: f32,
    pub win_score: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            player_speed: Params::PLAYER_SPEED,
            paddle_step: Params::PADDLE_STEP,
            hold_repeat_ms: Params::HOLD_REPEAT_MS,
            ball_speed: Params::BALL_SPEED,
            reset_speedup: Params::RESET_SPEEDUP,
            max_balls: Params::MAX_BALLS,
            opponent_lerp: Params::OPPONENT_LERP,
            opponent_track_chance: None,
            power_up_spawn_interval: Params::POWER_UP_SPAWN_INTERVAL,
            widen_factor: Params::WIDEN_FACTOR,
            widen_duration: Params::WIDEN_DURATION,
            freeze_duration: Params::FREEZE_DURATION,
            win_score: Params::WIN_SCORE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin the opponent's per-tick tracking chance, ignoring difficulty
    pub fn with_track_chance(mut self, chance: f32) -> Self {
        self.opponent_track_chance = Some(chance.clamp(0.0, 1.0));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults_match_params() {
        let config = Config::new();
        assert_eq!(config.win_score, 3);
        assert_eq!(config.max_balls, 2);
        assert_eq!(config.widen_duration, 10.0);
        assert_eq!(config.freeze_duration, 5.0);
        assert!(config.opponent_track_chance.is_none());
    }

    #[test]
    fn test_track_chance_is_clamped() {
        assert_eq!(Config::new().with_track_chance(4.0).opponent_track_chance, Some(1.0));
        assert_eq!(Config::new().with_track_chance(-1.0).opponent_track_chance, Some(0.0));
    }
}
