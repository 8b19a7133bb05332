//! Error types for the oxo crate

use thiserror::Error;

/// Main error type for the oxo crate
///
/// Only [`Board::make_move`](crate::Board::make_move) and the board string
/// codec can fail. Every query over a board is total, including on boards
/// that violate the move-count invariant.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("action ({row}, {col}) is out of bounds (row and column must be 0-2)")]
    InvalidAction { row: usize, col: usize },

    #[error("cell ({row}, {col}) is already occupied")]
    OccupiedCell { row: usize, col: usize },

    #[error("board string too short: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
