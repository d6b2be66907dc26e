//! Utilities shared by integration tests and benchmarks.
//! Not intended for use in engine or player code.

pub mod perft;
