//! # BoardError
//!
//! Centralized error handling for Overboard.
//! Both rule violations are expected, recoverable outcomes: they are raised
//! before any mutation, so a failed action leaves the board untouched.

use thiserror::Error;

use crate::ids::QuestionId;

/// Canonical text for every self-vote rejection, whatever the direction or
/// the kind of content.
pub const SELF_VOTE_MESSAGE: &str = "You cannot vote for yourself!";

/// A user tried to vote on content they own.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VotingError {
    #[error("You cannot vote for yourself!")]
    SelfVote,
}

/// A user tried to accept an answer they are not entitled to accept.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AcceptanceError {
    /// Only the asker of the parent question may accept; `owner` is that
    /// asker's name, not the caller's.
    #[error("Only {owner} can accept this answer as it is their question")]
    NotQuestionOwner { owner: String },

    /// A question carries at most one accepted answer.
    #[error("question {question} already has an accepted answer")]
    AlreadyAccepted { question: QuestionId },
}

/// The primary error type for all board operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error(transparent)]
    Voting(#[from] VotingError),

    #[error(transparent)]
    Acceptance(#[from] AcceptanceError),

    /// Entity unknown to this board (e.g., an id minted by another board)
    #[error("{0} not found with ID {1}")]
    NotFound(&'static str, String),
}

/// A specialized Result type for board logic.
pub type Result<T> = std::result::Result<T, BoardError>;
