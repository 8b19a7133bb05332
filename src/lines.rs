//! Winning line analysis

use std::collections::BTreeSet;

use crate::board::{Action, Board, Cell, Player};

/// The 8 winning lines as (row, column) triples, in the order the winner
/// scan walks them: rows, then columns, then the two diagonals.
pub const WINNING_LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)], // rows
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)], // columns
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)], // diagonals
];

/// Owner of the first complete line in enumeration order, if any.
///
/// A reachable board has at most one winning player, so the order only
/// determines which answer a malformed board gets.
pub(crate) fn winner(board: &Board) -> Option<Player> {
    for line in &WINNING_LINES {
        let [(ar, ac), (br, bc), (cr, cc)] = *line;
        let first = board.get(ar, ac);
        if first != Cell::Empty && first == board.get(br, bc) && first == board.get(cr, cc) {
            return first.to_player();
        }
    }
    None
}

/// Check if a player has a complete line
pub(crate) fn has_line(board: &Board, player: Player) -> bool {
    let target = player.to_cell();
    WINNING_LINES
        .iter()
        .any(|line| line.iter().all(|&(r, c)| board.get(r, c) == target))
}

/// All actions that complete a line for `player` immediately (two own marks
/// plus one empty cell), in ascending (row, column) order.
pub fn winning_moves(board: &Board, player: Player) -> Vec<Action> {
    let mut moves = BTreeSet::new();
    for line in &WINNING_LINES {
        if let Some(action) = winning_move_in_line(board, player, line) {
            moves.insert(action);
        }
    }
    moves.into_iter().collect()
}

/// The completing move in a specific line, if one exists
fn winning_move_in_line(
    board: &Board,
    player: Player,
    line: &[(usize, usize); 3],
) -> Option<Action> {
    let target = player.to_cell();
    let mut count = 0;
    let mut empty = None;

    for &(row, col) in line {
        match board.get(row, col) {
            Cell::Empty => {
                if empty.is_some() {
                    // More than one empty cell, not a winning move
                    return None;
                }
                empty = Some(Action { row, col });
            }
            c if c == target => count += 1,
            _ => return None, // Opponent mark in the line
        }
    }

    if count == 2 { empty } else { None }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_winner_horizontal() {
        let board: Board = "XXX.OO...".parse().unwrap();
        assert_eq!(winner(&board), Some(Player::X));
    }

    #[test]
    fn test_winner_vertical() {
        let board: Board = "OX.OX.O..".parse().unwrap();
        assert_eq!(winner(&board), Some(Player::O));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board: Board = "O.XOX.X..".parse().unwrap();
        assert_eq!(winner(&board), Some(Player::X));
    }

    #[test]
    fn test_no_winner() {
        let board: Board = "XO.OX....".parse().unwrap();
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_winning_moves_single() {
        // X . X on the top row completes at (0, 1)
        let board: Board = "X.X.OO...".parse().unwrap();
        let moves = winning_moves(&board, Player::X);
        assert_eq!(moves, vec![Action::new(0, 1)]);
    }

    #[test]
    fn test_winning_moves_multiple() {
        // X X .
        // X O .
        // . O .
        let board: Board = "XX.XO..O.".parse().unwrap();
        let moves = winning_moves(&board, Player::X);
        assert_eq!(moves, vec![Action::new(0, 2), Action::new(2, 0)]);
    }

    #[test]
    fn test_winning_moves_none_for_opponent() {
        let board: Board = "X.X.OO...".parse().unwrap();
        // O has a pair on row 1 with one empty cell: (1, 0) completes it
        assert_eq!(winning_moves(&board, Player::O), vec![Action::new(1, 0)]);
        let quiet: Board = "X........".parse().unwrap();
        assert!(winning_moves(&quiet, Player::O).is_empty());
    }
}
