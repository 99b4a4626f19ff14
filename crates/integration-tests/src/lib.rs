//! Shared fixtures for the board integration tests.

use domains::UserId;
use services::Board;

/// The three-member board most scenarios start from.
pub struct Fixture {
    pub board: Board,
    pub questioner: UserId,
    pub answerer: UserId,
    pub board_user: UserId,
}

impl Fixture {
    pub fn java() -> Self {
        let mut board = Board::new("Java");
        let questioner = board.create_user("Questioner").id();
        let answerer = board.create_user("Answerer").id();
        let board_user = board.create_user("BoardUser").id();
        Self {
            board,
            questioner,
            answerer,
            board_user,
        }
    }

    /// Panics if `user` is not on the fixture board.
    pub fn reputation(&self, user: UserId) -> i64 {
        self.board.reputation_of(user).unwrap()
    }
}
