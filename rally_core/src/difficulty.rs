use std::str::FromStr;

use crate::error::GameError;

/// Opponent skill, selected from the level menu
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Per-tick chance that the opponent tracks the ball. On the remaining
    /// ticks it holds still, which is where its mistakes come from.
    pub fn track_chance(self) -> f32 {
        match self {
            Difficulty::Easy => 0.2,
            Difficulty::Medium => 0.5,
            Difficulty::Hard => 0.8,
        }
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(GameError::UnknownDifficulty(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_chance_increases_with_difficulty() {
        assert!(Difficulty::Easy.track_chance() < Difficulty::Medium.track_chance());
        assert!(Difficulty::Medium.track_chance() < Difficulty::Hard.track_chance());
    }

    #[test]
    fn test_parse() {
        assert_eq!("HARD".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert_eq!(
            "nightmare".parse::<Difficulty>(),
            Err(GameError::UnknownDifficulty("nightmare".into()))
        );
    }
}
