//! # Reputation Policy
//!
//! Pure mapping from a board action to the reputation delta applied to the
//! owner of the content acted upon. The acting user's own reputation is
//! never touched.

use serde::{Deserialize, Serialize};

pub const QUESTION_UPVOTE_DELTA: i64 = 5;
pub const QUESTION_DOWNVOTE_DELTA: i64 = 0;
pub const ANSWER_UPVOTE_DELTA: i64 = 10;
pub const ANSWER_DOWNVOTE_DELTA: i64 = -1;
pub const ACCEPTANCE_DELTA: i64 = 15;

/// Direction of a single vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Vote {
    Up,
    Down,
}

impl Vote {
    /// Contribution of this vote to a content's net tally.
    pub fn tally(self) -> i64 {
        match self {
            Vote::Up => 1,
            Vote::Down => -1,
        }
    }
}

/// Every action that can move a user's reputation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReputationAction {
    UpVoteQuestion,
    DownVoteQuestion,
    UpVoteAnswer,
    DownVoteAnswer,
    AcceptAnswer,
}

impl ReputationAction {
    /// Points credited (or debited) to the content owner.
    pub const fn delta(self) -> i64 {
        match self {
            ReputationAction::UpVoteQuestion => QUESTION_UPVOTE_DELTA,
            ReputationAction::DownVoteQuestion => QUESTION_DOWNVOTE_DELTA,
            ReputationAction::UpVoteAnswer => ANSWER_UPVOTE_DELTA,
            ReputationAction::DownVoteAnswer => ANSWER_DOWNVOTE_DELTA,
            ReputationAction::AcceptAnswer => ACCEPTANCE_DELTA,
        }
    }
}
