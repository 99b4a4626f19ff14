//! # Rules Engine
//!
//! Voting, acceptance and content creation on a [`Board`]. Callers reach
//! these through [`crate::Member`], which fixes the acting user.
//!
//! Every check (existence, self-vote, question ownership, prior
//! acceptance) runs before the first mutation, so a rejected action leaves
//! tallies, flags and reputations exactly as they were.

use domains::{
    AcceptanceError, Answer, AnswerId, BoardError, Question, QuestionId, ReputationAction, Result,
    Votable, Vote, VoteTarget, VotingError,
};

use crate::board::Board;

impl Board {
    pub(crate) fn insert_question(&mut self, asker: usize, title: String) -> QuestionId {
        let owner = self.users.at(asker).id();
        let question = Question::new(owner, title);
        let id = question.id();
        tracing::debug!(board = %self.name(), %owner, question = %id, "question asked");
        self.questions.insert(id, question);
        id
    }

    pub(crate) fn insert_answer(
        &mut self,
        answerer: usize,
        question: QuestionId,
        body: String,
    ) -> Result<AnswerId> {
        if let Err(err) = self.question_slot(question) {
            self.warn_unknown("answer", &err);
            return Err(err);
        }
        let owner = self.users.at(answerer).id();
        let answer = Answer::new(question, owner, body);
        let id = answer.id();
        tracing::debug!(board = %self.name(), %owner, %question, answer = %id, "answer posted");
        self.answers.insert(id, answer);
        Ok(id)
    }

    pub(crate) fn cast_vote(&mut self, voter: usize, target: VoteTarget, vote: Vote) -> Result<()> {
        let result = self.apply_vote(voter, target, vote);
        if let Err(err) = &result {
            self.warn_unknown("vote", err);
        }
        result
    }

    pub(crate) fn accept(&mut self, acceptor: usize, answer: AnswerId) -> Result<()> {
        let result = self.apply_acceptance(acceptor, answer);
        if let Err(err) = &result {
            self.warn_unknown("accept", err);
        }
        result
    }

    /// Logs lookups that failed because the id belongs to no entity on this
    /// board. Rule violations log at their own call site.
    fn warn_unknown(&self, action: &'static str, err: &BoardError) {
        if let BoardError::NotFound(entity, id) = err {
            tracing::warn!(board = %self.name(), action, entity = *entity, %id, "unknown id rejected");
        }
    }

    fn apply_vote(&mut self, voter: usize, target: VoteTarget, vote: Vote) -> Result<()> {
        let voter = self.users.at(voter).id();

        let owner = match target {
            VoteTarget::Question(id) => self.question(id)?.owner(),
            VoteTarget::Answer(id) => self.answer(id)?.owner(),
        };
        if owner == voter {
            tracing::warn!(board = %self.name(), %voter, ?target, ?vote, "self-vote rejected");
            return Err(VotingError::SelfVote.into());
        }
        let owner_slot = self.user_slot(owner)?;

        let content: &mut dyn Votable = match target {
            VoteTarget::Question(id) => {
                let slot = self.question_slot(id)?;
                self.questions.at_mut(slot)
            }
            VoteTarget::Answer(id) => {
                let slot = self.answer_slot(id)?;
                self.answers.at_mut(slot)
            }
        };
        let delta = content.receive_vote(vote);
        let tally = content.votes();
        self.users.at_mut(owner_slot).credit(delta);

        tracing::debug!(
            board = %self.name(),
            %voter,
            %owner,
            ?target,
            ?vote,
            delta,
            tally,
            "vote applied"
        );
        Ok(())
    }

    fn apply_acceptance(&mut self, acceptor: usize, answer: AnswerId) -> Result<()> {
        let acceptor = self.users.at(acceptor).id();
        let answer_slot = self.answer_slot(answer)?;
        let (question_id, answerer) = {
            let answer = self.answers.at(answer_slot);
            (answer.question(), answer.owner())
        };
        let question_slot = self.question_slot(question_id)?;

        let question = self.questions.at(question_slot);
        if question.owner() != acceptor {
            let owner = self.user(question.owner())?.name().to_owned();
            tracing::warn!(board = %self.name(), %acceptor, %answer, %owner, "acceptance by non-owner rejected");
            return Err(AcceptanceError::NotQuestionOwner { owner }.into());
        }
        if question.accepted_answer().is_some() {
            tracing::warn!(board = %self.name(), question = %question_id, %answer, "question already has an accepted answer");
            return Err(AcceptanceError::AlreadyAccepted {
                question: question_id,
            }
            .into());
        }
        let answerer_slot = self.user_slot(answerer)?;

        self.questions.at_mut(question_slot).record_acceptance(answer);
        self.answers.at_mut(answer_slot).mark_accepted();
        let delta = ReputationAction::AcceptAnswer.delta();
        self.users.at_mut(answerer_slot).credit(delta);

        tracing::info!(
            board = %self.name(),
            question = %question_id,
            %answer,
            %answerer,
            delta,
            "answer accepted"
        );
        Ok(())
    }
}
