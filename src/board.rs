//! Board state representation and the game-state algebra

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{error::Error, lines};

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    /// The player owning this cell, if it is marked.
    pub fn to_player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Player::X => "X",
            Player::O => "O",
        })
    }
}

/// A (row, column) move on the board, valid when both coordinates are in 0-2
/// and the referenced cell is empty.
///
/// The derived `Ord` is row-major, so sorting actions yields the ascending
/// (row, column) order the search uses for tie-breaking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Action {
    pub row: usize,
    pub col: usize,
}

impl Action {
    pub fn new(row: usize, col: usize) -> Self {
        Action { row, col }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Derived game status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win(Player),
    Draw,
    InProgress,
}

/// Complete state of a game: a 3x3 grid of cells and nothing else.
///
/// Whose turn it is is always derived from the piece counts (X moves first
/// and players alternate), never stored, so every board reached through
/// [`make_move`](Board::make_move) keeps the turn consistent by construction.
///
/// This type implements `Copy` since it is only 9 bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; 3]; 3],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create a new empty board (the initial state, X to move)
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; 3]; 3],
        }
    }

    /// Get cell at (row, col), both in 0-2
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    fn counts(&self) -> (usize, usize) {
        let mut x = 0;
        let mut o = 0;
        for row in &self.cells {
            for cell in row {
                match cell {
                    Cell::X => x += 1,
                    Cell::O => o += 1,
                    Cell::Empty => {}
                }
            }
        }
        (x, o)
    }

    /// The player who moves next, derived from the piece counts: X when the
    /// counts are equal, O otherwise.
    ///
    /// On a terminal board the answer is not meaningful; by convention this
    /// still returns a deterministic value (X on a drawn full board with equal
    /// counts), but callers must not rely on it once the game has ended.
    pub fn to_move(&self) -> Player {
        let (x, o) = self.counts();
        if x == o { Player::X } else { Player::O }
    }

    /// All actions available to the player to move, in ascending (row, column)
    /// order.
    ///
    /// A terminal board returns the empty vector. That is a modeling
    /// convenience (the game admits no further moves), not a claim about the
    /// cells themselves.
    pub fn legal_actions(&self) -> Vec<Action> {
        if self.is_terminal() {
            return Vec::new();
        }
        let mut actions = Vec::new();
        for row in 0..3 {
            for col in 0..3 {
                if self.cells[row][col] == Cell::Empty {
                    actions.push(Action { row, col });
                }
            }
        }
        actions
    }

    /// Apply an action for the player to move and return the resulting board.
    ///
    /// This is the sole state-transition primitive; turn alternation follows
    /// from the derived counts rather than any stored flag.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAction`] when a coordinate is outside 0-2 and
    /// [`Error::OccupiedCell`] when the target cell is already marked. Both
    /// indicate caller errors; validate user input before calling.
    #[must_use = "make_move returns a new board; the original is unchanged"]
    pub fn make_move(&self, action: Action) -> crate::Result<Board> {
        let Action { row, col } = action;
        if row > 2 || col > 2 {
            return Err(Error::InvalidAction { row, col });
        }
        if self.cells[row][col] != Cell::Empty {
            return Err(Error::OccupiedCell { row, col });
        }

        let mut next = *self;
        next.cells[row][col] = self.to_move().to_cell();
        Ok(next)
    }

    /// The winner, if a line is complete.
    ///
    /// Lines are scanned rows first, then columns, then the two diagonals. At
    /// most one player can have a line on a reachable board, so the order only
    /// fixes which answer a malformed board gets.
    pub fn winner(&self) -> Option<Player> {
        lines::winner(self)
    }

    fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&c| c != Cell::Empty))
    }

    /// Check if the game is over (win or full board)
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    /// Check if the position is a draw (all cells filled, no winner)
    pub fn is_draw(&self) -> bool {
        self.is_full() && self.winner().is_none()
    }

    /// Terminal utility: +1 when X has won, -1 when O has won, 0 otherwise.
    ///
    /// Total on every board; non-terminal boards score 0.
    pub fn utility(&self) -> i32 {
        match self.winner() {
            Some(Player::X) => 1,
            Some(Player::O) => -1,
            None => 0,
        }
    }

    /// Derived status of the game
    pub fn outcome(&self) -> Outcome {
        if let Some(winner) = self.winner() {
            Outcome::Win(winner)
        } else if self.is_full() {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }

    /// Check whether the board is reachable under the rules: X moved first,
    /// players alternated, and at most one player has a winning line.
    ///
    /// Advisory only. Every query on this type stays total on inconsistent
    /// boards; this exists so callers accepting external positions can reject
    /// them up front.
    pub fn is_consistent(&self) -> bool {
        let (x, o) = self.counts();
        if !(x == o || x == o + 1) {
            return false;
        }
        let x_wins = lines::has_line(self, Player::X);
        let o_wins = lines::has_line(self, Player::O);
        !(x_wins && o_wins)
    }

    /// Compact nine-character row-major encoding, parseable by `FromStr`
    pub fn encode(&self) -> String {
        self.cells
            .iter()
            .flat_map(|row| row.iter().map(|&c| c.to_char()))
            .collect()
    }
}

impl From<[[Cell; 3]; 3]> for Board {
    /// Wrap raw cells without any consistency check. Boards violating the
    /// move-count invariant are representable on purpose; all queries remain
    /// total on them.
    fn from(cells: [[Cell; 3]; 3]) -> Self {
        Board { cells }
    }
}

impl FromStr for Board {
    type Err = Error;

    /// Parse a board from nine cell characters in row-major order.
    ///
    /// Whitespace is filtered out, so multi-line renderings parse back.
    /// Piece counts are not checked; use [`Board::is_consistent`] to reject
    /// unreachable positions.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() < 9 {
            return Err(Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [[Cell::Empty; 3]; 3];
        for (i, &c) in chars.iter().take(9).enumerate() {
            cells[i / 3][i % 3] = Cell::from_char(c).ok_or_else(|| Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        Ok(Board { cells })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            for &cell in row {
                write!(f, "{}", cell.to_char())?;
            }
            if i < 2 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
