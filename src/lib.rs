//! Tic-Tac-Toe rules engine with exhaustive minimax move selection
//!
//! This crate provides:
//! - A pure game-state algebra: board representation with the turn derived
//!   from piece counts, legal-move enumeration, copy-on-move transitions,
//!   win and terminal detection, terminal utility
//! - Exact optimal-move search via minimax with alpha-beta pruning and a
//!   deterministic ascending (row, column) tie-break
//!
//! Boards are plain values; every transition returns a fresh board and never
//! mutates its input. A caller driving a game holds the current board, asks
//! [`Board::legal_actions`] or [`minimax`] for a move, and applies it with
//! [`Board::make_move`].

pub mod board;
pub mod error;
pub mod lines;
pub mod search;

pub use board::{Action, Board, Cell, Outcome, Player};
pub use error::{Error, Result};
pub use lines::{winning_moves, WINNING_LINES};
pub use search::{game_value, minimax};
