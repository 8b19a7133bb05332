//! oxo CLI - one-shot Tic-Tac-Toe position analyzer
//!
//! Reads a position as nine cells in row-major order and reports the side to
//! move, the game status, immediate threats, and the optimal move. This is a
//! non-interactive caller of the engine; it never prompts.

use anyhow::Result;
use clap::Parser;
use oxo::{game_value, minimax, winning_moves, Board, Outcome, Player};

#[derive(Parser)]
#[command(name = "oxo")]
#[command(version, about = "Tic-Tac-Toe position analyzer", long_about = None)]
struct Cli {
    /// Position as nine cells in row-major order: 'X', 'O' and '.' for empty,
    /// e.g. "XOX.O...."
    board: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let board: Board = cli.board.parse()?;

    println!("{board}");
    if !board.is_consistent() {
        println!("note: position is not reachable under the rules");
    }

    match board.outcome() {
        Outcome::Win(player) => println!("game over: {player} wins"),
        Outcome::Draw => println!("game over: draw"),
        Outcome::InProgress => {
            println!("to move: {}", board.to_move());
            for player in [Player::X, Player::O] {
                let wins = winning_moves(&board, player);
                if !wins.is_empty() {
                    let cells: Vec<String> = wins.iter().map(|a| a.to_string()).collect();
                    println!("{player} completes a line at: {}", cells.join(", "));
                }
            }
            println!("value under perfect play: {}", game_value(&board));
            if let Some(action) = minimax(&board) {
                println!("optimal move: {action}");
            }
        }
    }

    Ok(())
}
