//! Interactive move entry over the console.

use super::MoveSource;
use itertools::Itertools;
use othello_engine::{Game, Location, Move};
use std::io::{self, Write};

/// Prompts the active player on stdout and reads a move from stdin in letter
/// notation ("C D" is row C, column D). `?` lists the legal placements.
/// Malformed or illegal entries re-prompt without touching the board.
pub struct HumanInput;

impl MoveSource for HumanInput {
    fn propose_move(&mut self, game: &Game) -> Move {
        let legal = game.legal_moves();
        if legal.is_empty() {
            return Move::Pass;
        }

        loop {
            print!(
                "{} to move. Enter a move (e.g. A B) or '?' to list moves: ",
                game.active_player
            );
            io::stdout().flush().unwrap();

            let mut line = String::new();
            if io::stdin().read_line(&mut line).is_err() {
                continue;
            }
            let entry = line.trim();

            if entry == "?" {
                println!("Legal moves: {}", legal.iter().join(", "));
                continue;
            }

            match entry.parse::<Location>() {
                Ok(loc) if legal.contains(&loc) => return Move::Place(loc),
                Ok(_) => println!("Illegal move. Try again."),
                Err(_) => println!("Cannot parse move. Enter two letters, like A B."),
            }
        }
    }

    fn is_interactive(&self) -> bool {
        true
    }
}
