//! A word-game move finder for Rust.
//! <br>
//! Given a board with premium squares and tiles, a rack of letters, a dictionary and a table
//! of letter values, this crate finds every legal placement of a dictionary word and groups
//! the placements by score.
//! A search can be cancelled or given a deadline, and can be split over several workers,
//! each searching a slice of the dictionary. With the `rayon` feature (on by default) the
//! slices are searched in parallel.
//!
//! # How to use `wordgrid_solver`
//! Create a [`Board`], either empty without premiums ([`Board::new`]) or with the standard
//! 15x15 premium layout ([`Board::standard`]), and put tiles on it with
//! [`with_state_from_strings`](Board::with_state_from_strings).
//! Build a [`Dictionary`] from words or read one from a file with one word per line.
//! A [`Rack`] is parsed from text, `*` is a blank.
//!
//! # Basic usage
//! ```
//! use wordgrid_solver::{find_highest_score_playables, Board, Dictionary, LetterValues, Rack};
//!
//! let board = Board::standard();
//! let rack: Rack = "RUST*".parse()?;
//! let dictionary = Dictionary::from_words(&["rust", "rest", "trust"])?;
//! let values = LetterValues::standard();
//! let playables = find_highest_score_playables(&board, &rack, &dictionary, &values);
//! for (score, playable) in playables.best().take(5) {
//!     println!("{} {}", score, playable);
//! }
//! # Ok::<(), wordgrid_solver::Error>(())
//! ```
//!
//! # About implementation
//! A search tries every dictionary word at every square, in both directions. The
//! [`Evaluator`] rejects a placement as soon as a check fails: the word must fit, must
//! not touch tiles before or after it, must match the tiles it covers, and every crossing
//! word it forms must be in the dictionary. The rack is deducted from a small copy of
//! letter counts, so evaluating a placement does not allocate unless it forms crossing words.
mod board;
mod control;
mod dictionary;
mod error;
mod evaluate;
pub mod grid;
mod job;
mod scan;
mod search;
mod tiles;
mod transfer;

pub use board::{Board, Cell};
pub use control::{CancelToken, Checkpoint, Deadline, Unbounded, Yield};
pub use dictionary::Dictionary;
pub use error::Error;
pub use evaluate::{Evaluation, Evaluator, Rules};
pub use grid::Premium;
pub use job::{Coordinator, JobRequest, LocalWorker, Worker};
pub use scan::{Orientation, Run, Step, Walk};
pub use search::{find_highest_score_playables, Playable, Playables, Search};
pub use tiles::{Letter, LetterValues, Occupant, Rack, Tally, Tile};
