// ABOUTME: Error types for the hog library.
// ABOUTME: Covers contract violations in the game rules and empty test dice.

use crate::turn::{GOAL_SCORE, MAX_ROLLS};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Contract violation: cannot roll {0} dice (at most {max} allowed)", max = MAX_ROLLS)]
    InvalidRollCount(u32),

    #[error("Contract violation: must roll at least once")]
    NoDice,

    #[error("Contract violation: score {score} has reached the goal of {goal}, the game should be over")]
    GameOver { score: u32, goal: u32 },

    #[error("Contract violation: goal must be between 1 and {max}, got {0}", max = GOAL_SCORE)]
    InvalidGoal(u32),

    #[error("Contract violation: dice must have at least one side, got {0}")]
    InvalidSides(u32),

    #[error("Contract violation: total of {0} points does not fit in a score")]
    ScoreOverflow(u64),

    #[error("Contract violation: unknown strategy '{0}'")]
    InvalidStrategy(String),

    #[error("Test dice need at least one face value")]
    ExhaustedSequence,
}

impl Error {
    /// Whether this error is a violated precondition rather than a bad fixture.
    pub fn is_contract_violation(&self) -> bool {
        !matches!(self, Error::ExhaustedSequence)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
