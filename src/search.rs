//! Exhaustive minimax move selection with alpha-beta pruning

use crate::board::{Action, Board, Player};

/// The optimal action for the player to move, or `None` when the game is
/// already over.
///
/// The search is exact: it walks the full game tree below `board`, maximizing
/// terminal utility when X is to move and minimizing it when O is. Among
/// equally good actions the first in ascending (row, column) order wins, so
/// repeated calls on the same board return the same action.
///
/// This is a synchronous call that only returns once the traversal finishes.
/// On a 3x3 board that is at most 9! move sequences before pruning, so it
/// stays cheap, but there is no incremental or cancellable interface.
///
/// Boards that violate the move-count invariant do not crash the search; the
/// returned action is simply not meaningful for them.
pub fn minimax(board: &Board) -> Option<Action> {
    if board.is_terminal() {
        return None;
    }
    let (_, action) = match board.to_move() {
        Player::X => max_value(board, i32::MIN, i32::MAX),
        Player::O => min_value(board, i32::MIN, i32::MAX),
    };
    action
}

/// Value of the position when both sides play perfectly: +1 for an X win,
/// -1 for an O win, 0 for a draw.
///
/// Terminal boards return their utility directly.
pub fn game_value(board: &Board) -> i32 {
    if board.is_terminal() {
        return board.utility();
    }
    let (value, _) = match board.to_move() {
        Player::X => max_value(board, i32::MIN, i32::MAX),
        Player::O => min_value(board, i32::MIN, i32::MAX),
    };
    value
}

fn max_value(board: &Board, mut alpha: i32, beta: i32) -> (i32, Option<Action>) {
    if board.is_terminal() {
        return (board.utility(), None);
    }

    let mut best = i32::MIN;
    let mut best_action = None;

    // legal_actions yields ascending (row, column) order; replacing only on
    // strict improvement keeps the first of equally good actions.
    for action in board.legal_actions() {
        let next = board
            .make_move(action)
            .expect("legal action application should not fail");
        let (value, _) = min_value(&next, alpha, beta);
        if value > best {
            best = value;
            best_action = Some(action);
            alpha = alpha.max(best);
        }
        if best == 1 {
            break; // forced win, no action can improve on it
        }
        if alpha >= beta {
            break;
        }
    }

    (best, best_action)
}

fn min_value(board: &Board, alpha: i32, mut beta: i32) -> (i32, Option<Action>) {
    if board.is_terminal() {
        return (board.utility(), None);
    }

    let mut best = i32::MAX;
    let mut best_action = None;

    for action in board.legal_actions() {
        let next = board
            .make_move(action)
            .expect("legal action application should not fail");
        let (value, _) = max_value(&next, alpha, beta);
        if value < best {
            best = value;
            best_action = Some(action);
            beta = beta.min(best);
        }
        if best == -1 {
            break; // forced win for O
        }
        if alpha >= beta {
            break;
        }
    }

    (best, best_action)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_board_has_no_move() {
        let won: Board = "XXX.OO...".parse().unwrap();
        assert_eq!(minimax(&won), None);

        let drawn: Board = "XXOOOXXXO".parse().unwrap();
        assert_eq!(minimax(&drawn), None);
    }

    #[test]
    fn test_takes_immediate_win() {
        // . X X
        // . O .
        // . . O   X to move, (0, 0) completes the top row
        let board: Board = ".XX.O...O".parse().unwrap();
        assert_eq!(board.to_move(), Player::X);
        assert_eq!(minimax(&board), Some(Action::new(0, 0)));
    }

    #[test]
    fn test_value_of_decided_positions() {
        let won: Board = "XXX.OO...".parse().unwrap();
        assert_eq!(game_value(&won), 1);

        // O to move completes the top row
        let board: Board = "OO.XX..X.".parse().unwrap();
        assert_eq!(board.to_move(), Player::O);
        assert_eq!(game_value(&board), -1);
    }

    #[test]
    fn test_malformed_board_does_not_crash() {
        // Two X and no O violates the move-count invariant
        let board: Board = "XX.......".parse().unwrap();
        assert!(!board.is_consistent());
        assert!(minimax(&board).is_some());
        let _ = game_value(&board);
    }
}
