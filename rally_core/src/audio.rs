//! Audio notifier boundary. Playback, mixing and muting belong to the
//! collaborator; the core only says what happened.

use crate::error::Result;

/// Sound cues the core can request
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    PaddleHit,
    Score,
    Win,
    Lose,
    UiClick,
}

/// Fire-and-forget sound output
pub trait AudioSink {
    fn play(&mut self, cue: Cue) -> Result<()>;

    fn set_volume(&mut self, _volume: Volume) {}
}

/// User-controlled level in `[0, 1]`; zero means muted
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Volume(f32);

impl Default for Volume {
    fn default() -> Self {
        Self(0.5)
    }
}

impl Volume {
    pub fn new(level: f32) -> Self {
        if level.is_finite() {
            Self(level.clamp(0.0, 1.0))
        } else {
            Self(0.0)
        }
    }

    /// Coerce raw slider text; anything non-numeric becomes 0
    pub fn parse(raw: &str) -> Self {
        match raw.trim().parse::<f32>() {
            Ok(level) => Self::new(level),
            Err(_) => {
                log::warn!("Ignoring malformed volume {raw:?}");
                Self(0.0)
            }
        }
    }

    pub fn level(self) -> f32 {
        self.0
    }

    pub fn is_muted(self) -> bool {
        self.0 <= 0.0
    }
}
