//! # Board
//!
//! The registry and construction root of one question-and-answer board.
//! A `Board` owns every user, question and answer created on it; entities
//! refer to each other by id and are only ever handed out by shared
//! reference, so reputation and acceptance can change only through the
//! rules in [`crate::rules`].

use chrono::{DateTime, Utc};
use domains::{
    Answer, AnswerId, BoardError, BoardId, Question, QuestionId, Result, User, UserId,
};

use crate::member::Member;
use crate::store::Store;

pub struct Board {
    id: BoardId,
    name: String,
    created_at: DateTime<Utc>,
    pub(crate) users: Store<UserId, User>,
    pub(crate) questions: Store<QuestionId, Question>,
    pub(crate) answers: Store<AnswerId, Answer>,
}

impl Board {
    pub fn new(name: impl Into<String>) -> Self {
        let board = Self {
            id: BoardId::new(),
            name: name.into(),
            created_at: Utc::now(),
            users: Store::default(),
            questions: Store::default(),
            answers: Store::default(),
        };
        tracing::debug!(board = %board.name, id = %board.id, "board created");
        board
    }

    pub fn id(&self) -> BoardId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Registers a new user and returns a handle acting as them.
    ///
    /// Names are not required to be unique; two users sharing a name are
    /// still two distinct identities.
    pub fn create_user(&mut self, name: impl Into<String>) -> Member<'_> {
        let user = User::new(name);
        let id = user.id();
        tracing::debug!(board = %self.name, user = %user.name(), %id, "user created");
        let slot = self.users.insert(id, user);
        Member::new(self, slot)
    }

    /// Re-enters the board as an existing user.
    pub fn member(&mut self, id: UserId) -> Result<Member<'_>> {
        let slot = self.user_slot(id)?;
        Ok(Member::new(self, slot))
    }

    pub fn user(&self, id: UserId) -> Result<&User> {
        self.users
            .get(&id)
            .ok_or_else(|| BoardError::NotFound("user", id.to_string()))
    }

    pub fn question(&self, id: QuestionId) -> Result<&Question> {
        self.questions
            .get(&id)
            .ok_or_else(|| BoardError::NotFound("question", id.to_string()))
    }

    pub fn answer(&self, id: AnswerId) -> Result<&Answer> {
        self.answers
            .get(&id)
            .ok_or_else(|| BoardError::NotFound("answer", id.to_string()))
    }

    pub fn reputation_of(&self, id: UserId) -> Result<i64> {
        self.user(id).map(User::reputation)
    }

    /// Users in registration order.
    pub fn users(&self) -> impl Iterator<Item = &User> {
        self.users.iter()
    }

    /// Questions in the order they were asked.
    pub fn questions(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }

    /// Answers to `question` in the order they were posted.
    pub fn answers_to(&self, question: QuestionId) -> impl Iterator<Item = &Answer> {
        self.answers
            .iter()
            .filter(move |answer| answer.question() == question)
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    pub(crate) fn user_slot(&self, id: UserId) -> Result<usize> {
        self.users
            .slot(&id)
            .ok_or_else(|| BoardError::NotFound("user", id.to_string()))
    }

    pub(crate) fn question_slot(&self, id: QuestionId) -> Result<usize> {
        self.questions
            .slot(&id)
            .ok_or_else(|| BoardError::NotFound("question", id.to_string()))
    }

    pub(crate) fn answer_slot(&self, id: AnswerId) -> Result<usize> {
        self.answers
            .slot(&id)
            .ok_or_else(|| BoardError::NotFound("answer", id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_user_registers_on_board() {
        let mut board = Board::new("Java");
        let id = board.create_user("Questioner").id();

        assert_eq!(board.name(), "Java");
        assert_eq!(board.user(id).unwrap().name(), "Questioner");
        assert_eq!(board.reputation_of(id).unwrap(), 0);
        assert_eq!(board.user_count(), 1);
    }

    #[test]
    fn boards_have_their_own_identity() {
        let before = Utc::now();
        let java = Board::new("Java");
        let rust = Board::new("Rust");

        assert_ne!(java.id(), rust.id());
        assert!(java.created_at() >= before);
        assert!(rust.created_at() >= java.created_at());
    }

    #[test]
    fn duplicate_names_are_distinct_users() {
        let mut board = Board::new("Java");
        let first = board.create_user("Sam").id();
        let second = board.create_user("Sam").id();

        assert_ne!(first, second);
        let names: Vec<_> = board.users().map(User::name).collect();
        assert_eq!(names, ["Sam", "Sam"]);
    }

    #[test]
    fn ids_from_another_board_are_not_found() {
        let mut java = Board::new("Java");
        let mut rust = Board::new("Rust");
        let stranger = rust.create_user("Ferris").id();
        java.create_user("Duke");

        assert_eq!(
            java.user(stranger).unwrap_err(),
            BoardError::NotFound("user", stranger.to_string())
        );
        assert!(java.member(stranger).is_err());
    }
}
