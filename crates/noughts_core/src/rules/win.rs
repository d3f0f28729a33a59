//! Win detection logic for tic-tac-toe.

use super::lines;
use crate::{Board, Cell, PlayerId};
use tracing::instrument;

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if every cell of some line is marked by that
/// player, `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<PlayerId> {
    lines().into_iter().find_map(|line| {
        let [(row, col), rest @ ..] = line;
        match board.cell(row, col)? {
            Cell::Marked(owner) => rest
                .iter()
                .all(|&(r, c)| board.cell(r, c) == Some(Cell::Marked(owner)))
                .then_some(owner),
            Cell::Empty => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(PlayerId, usize, usize)]) -> Board {
        let mut board = Board::new();
        for &(player, row, col) in marks {
            board.place(player, row, col).unwrap();
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(&[
            (PlayerId::First, 0, 0),
            (PlayerId::Second, 1, 0),
            (PlayerId::First, 0, 1),
            (PlayerId::Second, 1, 1),
            (PlayerId::First, 0, 2),
        ]);
        assert_eq!(check_winner(&board), Some(PlayerId::First));
    }

    #[test]
    fn test_winner_column() {
        let board = board_with(&[
            (PlayerId::First, 0, 0),
            (PlayerId::Second, 0, 2),
            (PlayerId::First, 1, 1),
            (PlayerId::Second, 1, 2),
            (PlayerId::First, 2, 0),
            (PlayerId::Second, 2, 2),
        ]);
        assert_eq!(check_winner(&board), Some(PlayerId::Second));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_with(&[
            (PlayerId::First, 0, 2),
            (PlayerId::Second, 0, 0),
            (PlayerId::First, 1, 1),
            (PlayerId::Second, 0, 1),
            (PlayerId::First, 2, 0),
        ]);
        assert_eq!(check_winner(&board), Some(PlayerId::First));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_with(&[
            (PlayerId::First, 0, 0),
            (PlayerId::Second, 0, 1),
            (PlayerId::First, 0, 2),
        ]);
        assert_eq!(check_winner(&board), None);
    }
}
