//! # Domain Models
//!
//! These structs represent the core entities of a question-and-answer board.
//! They hold ids to each other rather than references; the `Board` aggregate
//! owns all of them and is the only place they are mutated.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{AnswerId, QuestionId, UserId};
use crate::reputation::{ReputationAction, Vote};
use crate::votable::Votable;

/// A registered member of a board.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    name: String,
    reputation: i64,
    created_at: DateTime<Utc>,
}

impl User {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: UserId::new(),
            name: name.into(),
            reputation: 0,
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn reputation(&self) -> i64 {
        self.reputation
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Applies a policy delta. May take reputation below zero.
    ///
    /// Reserved for the board's rules engine; boards only hand out shared
    /// references, so callers outside it cannot reach this on live users.
    #[doc(hidden)]
    pub fn credit(&mut self, delta: i64) {
        self.reputation += delta;
    }
}

/// A question asked on a board.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    id: QuestionId,
    owner: UserId,
    title: String,
    votes: i64,
    accepted_answer: Option<AnswerId>,
    created_at: DateTime<Utc>,
}

impl Question {
    pub fn new(owner: UserId, title: impl Into<String>) -> Self {
        Self {
            id: QuestionId::new(),
            owner,
            title: title.into(),
            votes: 0,
            accepted_answer: None,
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> QuestionId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// The answer its asker accepted, if any.
    pub fn accepted_answer(&self) -> Option<AnswerId> {
        self.accepted_answer
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Records which answer was accepted. Returns `false` if one already was.
    ///
    /// Reserved for the board's rules engine.
    #[doc(hidden)]
    pub fn record_acceptance(&mut self, answer: AnswerId) -> bool {
        if self.accepted_answer.is_some() {
            return false;
        }
        self.accepted_answer = Some(answer);
        true
    }
}

impl Votable for Question {
    fn owner(&self) -> UserId {
        self.owner
    }

    fn votes(&self) -> i64 {
        self.votes
    }

    fn action_for(&self, vote: Vote) -> ReputationAction {
        match vote {
            Vote::Up => ReputationAction::UpVoteQuestion,
            Vote::Down => ReputationAction::DownVoteQuestion,
        }
    }

    fn record_vote(&mut self, vote: Vote) {
        self.votes += vote.tally();
    }
}

/// An answer to exactly one question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Answer {
    id: AnswerId,
    question: QuestionId,
    owner: UserId,
    body: String,
    votes: i64,
    accepted: bool,
    created_at: DateTime<Utc>,
}

impl Answer {
    pub fn new(question: QuestionId, owner: UserId, body: impl Into<String>) -> Self {
        Self {
            id: AnswerId::new(),
            question,
            owner,
            body: body.into(),
            votes: 0,
            accepted: false,
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> AnswerId {
        self.id
    }

    /// The parent question.
    pub fn question(&self) -> QuestionId {
        self.question
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// One-way: there is no way back to unaccepted.
    ///
    /// Reserved for the board's rules engine, which checks question
    /// ownership first.
    #[doc(hidden)]
    pub fn mark_accepted(&mut self) {
        self.accepted = true;
    }
}

impl Votable for Answer {
    fn owner(&self) -> UserId {
        self.owner
    }

    fn votes(&self) -> i64 {
        self.votes
    }

    fn action_for(&self, vote: Vote) -> ReputationAction {
        match vote {
            Vote::Up => ReputationAction::UpVoteAnswer,
            Vote::Down => ReputationAction::DownVoteAnswer,
        }
    }

    fn record_vote(&mut self, vote: Vote) {
        self.votes += vote.tally();
    }
}
