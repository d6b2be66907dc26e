//! Display sinks receive the board after every change and render it somewhere.

use othello_engine::{index_letter, Board, Location, Player};

/// Where a match reports its board states and progress notes.
/// Rendering style is entirely the sink's concern.
pub trait DisplaySink {
    /// Render the full board state.
    fn show_board(&mut self, board: &Board);

    /// Report a line of match progress (turns, passes).
    fn note(&mut self, message: &str);
}

/// Which glyphs the console display draws cells with.
/// Resolved once when the display is built, never mid-game.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GlyphSet {
    Ascii,
    Emoji,
}

impl GlyphSet {
    fn cell(self, piece: Option<Player>) -> &'static str {
        // Emoji discs sit on a green background, like a felt board.
        match (self, piece) {
            (GlyphSet::Ascii, None) => " .",
            (GlyphSet::Ascii, Some(Player::Black)) => " #",
            (GlyphSet::Ascii, Some(Player::White)) => " O",
            (GlyphSet::Emoji, None) => concat!("\x1b[42m", "\u{1f7e9}", "\x1b[0m"),
            (GlyphSet::Emoji, Some(Player::Black)) => concat!("\x1b[42m", "\u{26ab}", "\x1b[0m"),
            (GlyphSet::Emoji, Some(Player::White)) => concat!("\x1b[42m", "\u{26aa}", "\x1b[0m"),
        }
    }
}

/// Renders boards to stdout with lettered row and column headers.
pub struct ConsoleDisplay {
    glyphs: GlyphSet,
}

impl ConsoleDisplay {
    pub fn new(glyphs: GlyphSet) -> Self {
        Self { glyphs }
    }
}

impl DisplaySink for ConsoleDisplay {
    fn show_board(&mut self, board: &Board) {
        let size = board.size();

        print!("  ");
        for col in 0..size {
            print!(" {}", index_letter(col).unwrap_or('?'));
        }
        println!();

        for row in 0..size {
            print!(" {}", index_letter(row).unwrap_or('?'));
            for col in 0..size {
                print!("{}", self.glyphs.cell(board.piece_at(Location::new(row, col))));
            }
            println!();
        }
    }

    fn note(&mut self, message: &str) {
        println!("{}", message);
    }
}

/// Swallows everything; for tests and headless runs.
pub struct NullDisplay;

impl DisplaySink for NullDisplay {
    fn show_board(&mut self, _board: &Board) {}

    fn note(&mut self, _message: &str) {}
}
