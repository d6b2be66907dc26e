//! Console Othello: play any combination of human, random, and heuristic
//! players against each other.

use othello_player::display::{ConsoleDisplay, DisplaySink, GlyphSet};
use othello_player::referee::{Contestant, Referee};
use othello_player::sources::{HeuristicAi, HumanInput, MoveSource, RandomChoice};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::env;
use std::process;

const USAGE: &str = "usage: play [BLACK] [WHITE] [--size N] [--emoji]

  BLACK, WHITE  one of 'human', 'random', 'ai' (default: human ai)
  --size N      board edge length, even and at least 2 (default: 8)
  --emoji       draw the board with emoji discs instead of ASCII";

fn source_for(kind: &str) -> Option<Box<dyn MoveSource>> {
    match kind {
        "human" => Some(Box::new(HumanInput)),
        "random" => Some(Box::new(RandomChoice::new(StdRng::from_entropy()))),
        "ai" => Some(Box::new(HeuristicAi::new(StdRng::from_entropy()))),
        _ => None,
    }
}

fn usage_exit() -> ! {
    eprintln!("{}", USAGE);
    process::exit(2);
}

fn main() {
    let mut size: usize = 8;
    let mut glyphs = GlyphSet::Ascii;
    let mut positional: Vec<String> = Vec::new();

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--size" => {
                size = args
                    .next()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or_else(|| usage_exit());
            }
            "--emoji" => glyphs = GlyphSet::Emoji,
            "--help" | "-h" => {
                println!("{}", USAGE);
                return;
            }
            _ => positional.push(arg),
        }
    }
    if positional.len() > 2 {
        usage_exit();
    }

    let black_kind = positional.get(0).map(String::as_str).unwrap_or("human");
    let white_kind = positional.get(1).map(String::as_str).unwrap_or("ai");
    let black_source = source_for(black_kind).unwrap_or_else(|| usage_exit());
    let white_source = source_for(white_kind).unwrap_or_else(|| usage_exit());

    let black = Contestant::new(&format!("Player 1 ({})", black_kind), black_source);
    let white = Contestant::new(&format!("Player 2 ({})", white_kind), white_source);
    let display: Box<dyn DisplaySink> = Box::new(ConsoleDisplay::new(glyphs));

    let mut referee = match Referee::new(black, white, display, size) {
        Ok(referee) => referee,
        Err(err) => {
            eprintln!("{}", err);
            process::exit(2);
        }
    };

    match referee.run() {
        Ok(outcome) => println!("\n{}", outcome),
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1);
        }
    }
}
