//! Match State Machine
//!
//! Governs whether the simulation advances. GameOver latches until an explicit
//! start or restart.

/// Match states
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchState {
    #[default]
    Paused,
    Running,
    GameOver,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchAction {
    Start,
    Pause,
    Resume,
    Finish,
    Restart,
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    success: bool,
    from_state: MatchState,
    to_state: MatchState,
    action: MatchAction,
}

impl TransitionResult {
    pub fn success(&self) -> bool {
        self.success
    }

    #[allow(clippy::wrong_self_convention)]
    pub fn from_state(&self) -> MatchState {
        self.from_state
    }

    pub fn to_state(&self) -> MatchState {
        self.to_state
    }

    pub fn action(&self) -> MatchAction {
        self.action
    }
}

/// Match Finite State Machine
#[derive(Debug, Clone, Default)]
pub struct MatchFsm {
    state: MatchState,
}

impl MatchFsm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get current state
    pub fn state(&self) -> MatchState {
        self.state
    }

    /// Check if a transition is valid
    pub fn can_transition(&self, action: MatchAction) -> bool {
        self.get_next_state(action).is_some()
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: MatchAction) -> TransitionResult {
        let from_state = self.state;

        if let Some(next_state) = self.get_next_state(action) {
            self.state = next_state;
            TransitionResult {
                success: true,
                from_state,
                to_state: next_state,
                action,
            }
        } else {
            log::debug!("Rejected {action:?} in {from_state:?}");
            TransitionResult {
                success: false,
                from_state,
                to_state: from_state,
                action,
            }
        }
    }

    /// Get next state for a given action (if valid)
    fn get_next_state(&self, action: MatchAction) -> Option<MatchState> {
        match (self.state, action) {
            // A new match can begin from anywhere
            (_, MatchAction::Start) => Some(MatchState::Running),
            (_, MatchAction::Restart) => Some(MatchState::Paused),

            (MatchState::Paused, MatchAction::Resume) => Some(MatchState::Running),

            (MatchState::Running, MatchAction::Pause) => Some(MatchState::Paused),
            (MatchState::Running, MatchAction::Finish) => Some(MatchState::GameOver),

            // Invalid transition
            _ => None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.state == MatchState::Running
    }

    pub fn is_game_over(&self) -> bool {
        self.state == MatchState::GameOver
    }
}
