//! Error types for the game core

use thiserror::Error;

/// Errors surfaced at the collaborator and input-parsing boundaries.
///
/// The simulation itself never fails; these are logged or coerced by callers.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GameError {
    #[error("Missing collaborator: {0}")]
    MissingCollaborator(&'static str),

    #[error("Render error: {0}")]
    Render(String),

    #[error("Audio error: {0}")]
    Audio(String),

    #[error("Invalid color: {0:?}")]
    InvalidColor(String),

    #[error("Unknown difficulty: {0:?}")]
    UnknownDifficulty(String),

    #[error("Unknown theme: {0:?}")]
    UnknownTheme(String),
}

pub type Result<T> = std::result::Result<T, GameError>;
