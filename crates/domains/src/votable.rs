//! # Votable
//!
//! The capability shared by Questions and Answers: they receive votes and
//! expose the user who owns them.

use serde::{Deserialize, Serialize};

use crate::ids::{AnswerId, QuestionId, UserId};
use crate::reputation::{ReputationAction, Vote};

pub trait Votable {
    /// The user whose reputation moves when this content is voted on.
    fn owner(&self) -> UserId;

    /// Net vote tally.
    fn votes(&self) -> i64;

    /// Maps a vote on this kind of content to its policy action.
    fn action_for(&self, vote: Vote) -> ReputationAction;

    /// Moves the tally only.
    fn record_vote(&mut self, vote: Vote);

    /// Records the vote and returns the reputation delta owed to the owner.
    fn receive_vote(&mut self, vote: Vote) -> i64 {
        self.record_vote(vote);
        self.action_for(vote).delta()
    }
}

/// Names a piece of votable content on a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum VoteTarget {
    Question(QuestionId),
    Answer(AnswerId),
}

impl From<QuestionId> for VoteTarget {
    fn from(id: QuestionId) -> Self {
        VoteTarget::Question(id)
    }
}

impl From<AnswerId> for VoteTarget {
    fn from(id: AnswerId) -> Self {
        VoteTarget::Answer(id)
    }
}
