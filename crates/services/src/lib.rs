//! overboard/crates/services/src/lib.rs
//!
//! The board aggregate and the rules engine that keeps votes, acceptances
//! and reputation consistent.

pub mod board;
pub mod member;
pub mod report;
mod rules;
mod store;

pub use board::Board;
pub use member::Member;
pub use report::{AnswerReport, BoardReport, QuestionReport, UserReport};
