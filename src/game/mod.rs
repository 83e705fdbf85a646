pub mod card;
pub mod config;
pub mod deck;
pub mod resolver;
pub mod round;
pub mod selection;

pub use card::{Card, CardState, DisplayKind, GridPos};
pub use config::{GameConfig, ScoringPolicy};
pub use resolver::Verdict;
pub use round::{EndReason, Phase, Round};
pub use selection::{SelectionStatus, SelectionTracker};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("configuration error: {message}")]
    Configuration { message: String },

    #[error("invalid transition: {action} on a {state:?} card")]
    InvalidState {
        action: &'static str,
        state: CardState,
    },
}

/// Abstract sound cues emitted by the round; playback belongs to the frontend
/// and may be silent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cue {
    Tap,
    Match,
    Mismatch,
}
