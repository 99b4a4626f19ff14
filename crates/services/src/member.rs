//! # Member
//!
//! A user acting on their board. Every action a user can take (ask, answer,
//! vote, accept) goes through this handle, which pins the caller so the
//! rules always know who is acting.

use domains::{AnswerId, QuestionId, Result, User, UserId, Vote, VoteTarget};

use crate::board::Board;

pub struct Member<'a> {
    board: &'a mut Board,
    slot: usize,
}

impl<'a> Member<'a> {
    pub(crate) fn new(board: &'a mut Board, slot: usize) -> Self {
        Self { board, slot }
    }

    fn user(&self) -> &User {
        self.board.users.at(self.slot)
    }

    pub fn id(&self) -> UserId {
        self.user().id()
    }

    pub fn name(&self) -> &str {
        self.user().name()
    }

    pub fn reputation(&self) -> i64 {
        self.user().reputation()
    }

    /// Asks a new question owned by this member.
    pub fn ask_question(&mut self, title: impl Into<String>) -> QuestionId {
        self.board.insert_question(self.slot, title.into())
    }

    /// Posts an answer to `question`. Answering one's own question, or
    /// answering the same question more than once, is allowed.
    pub fn answer_question(
        &mut self,
        question: QuestionId,
        body: impl Into<String>,
    ) -> Result<AnswerId> {
        self.board.insert_answer(self.slot, question, body.into())
    }

    /// Up-votes content owned by someone else.
    ///
    /// # Errors
    /// `VotingError::SelfVote` if this member owns the target.
    pub fn up_vote(&mut self, target: impl Into<VoteTarget>) -> Result<()> {
        self.board.cast_vote(self.slot, target.into(), Vote::Up)
    }

    /// Down-votes content owned by someone else.
    ///
    /// # Errors
    /// `VotingError::SelfVote` if this member owns the target.
    pub fn down_vote(&mut self, target: impl Into<VoteTarget>) -> Result<()> {
        self.board.cast_vote(self.slot, target.into(), Vote::Down)
    }

    /// Accepts `answer` as the best answer to this member's question.
    ///
    /// # Errors
    /// `AcceptanceError::NotQuestionOwner` naming the real asker when this
    /// member did not ask the question, and
    /// `AcceptanceError::AlreadyAccepted` when the question already has an
    /// accepted answer.
    pub fn accept_answer(&mut self, answer: AnswerId) -> Result<()> {
        self.board.accept(self.slot, answer)
    }
}
