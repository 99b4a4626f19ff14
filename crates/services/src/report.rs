//! # Board Report
//!
//! A read-only, serialisable summary of a board: who has what reputation,
//! and how each question and answer has fared.

use domains::{UserId, Votable};
use serde::Serialize;

use crate::board::Board;

#[derive(Debug, Clone, Serialize)]
pub struct BoardReport {
    pub board: String,
    pub users: Vec<UserReport>,
    pub questions: Vec<QuestionReport>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UserReport {
    pub name: String,
    pub reputation: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionReport {
    pub title: String,
    pub asked_by: String,
    pub votes: i64,
    pub answers: Vec<AnswerReport>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnswerReport {
    pub body: String,
    pub answered_by: String,
    pub votes: i64,
    pub accepted: bool,
}

impl Board {
    pub fn report(&self) -> BoardReport {
        let name_of = |id: UserId| {
            self.user(id)
                .map(|user| user.name().to_owned())
                .unwrap_or_default()
        };

        BoardReport {
            board: self.name().to_owned(),
            users: self
                .users()
                .map(|user| UserReport {
                    name: user.name().to_owned(),
                    reputation: user.reputation(),
                })
                .collect(),
            questions: self
                .questions()
                .map(|question| QuestionReport {
                    title: question.title().to_owned(),
                    asked_by: name_of(question.owner()),
                    votes: question.votes(),
                    answers: self
                        .answers_to(question.id())
                        .map(|answer| AnswerReport {
                            body: answer.body().to_owned(),
                            answered_by: name_of(answer.owner()),
                            votes: answer.votes(),
                            accepted: answer.is_accepted(),
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}
