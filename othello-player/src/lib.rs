//! Players for `othello-engine`: move sources deciding where to play,
//! display sinks receiving every board change, and the referee running a
//! full match between two contestants.

pub mod display;
pub mod referee;
pub mod sources;
