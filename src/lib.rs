#![warn(missing_docs)]

//! # `slitherlink`
//!
//! The puzzle-state engine behind an interactive [Slitherlink](https://en.wikipedia.org/wiki/Slitherlink) board.
//! A rectangular grid holds clues in `0..=3`; the player draws lines along cell sides until a single closed loop runs
//! past every clued cell exactly as many times as its clue says.
//!
//! Begin with a [`Game`]: load clue text with [`Game::load_numbers`], then feed it user actions through
//! [`Game::try_add_edge`], [`Game::try_add_cross`] or, for raw pointer positions, [`Game::click`].
//! Every mutating call reports a [`MoveOutcome`], the first one completing the puzzle being
//! [`MoveOutcome::Finished`]. [`Game::undo`] and [`Game::redo`] walk the history in both directions.
//!
//! This crate does not render anything and does not solve or generate puzzles.
//!
//! # Internals
//! A [`Board`] keeps one mark per boundary in a flat arena; cells are views computed from it. Two neighboring cells
//! therefore cannot disagree about the boundary between them.
//!
//! After every mutation, two checks run over the whole board:
//! 1. each clued cell is tested for being satisfied and for being infeasible, i.e. unable to reach its clue any more;
//! 2. the drawn lines are turned into a graph over lattice points (see [`LoopGraph`]) and walked to decide whether
//!    they form exactly one loop.
//!
//! The puzzle is finished when both hold.

pub use board::{Board, BoundaryId};
pub use builder::{BuilderInvalidReason, ClueBuilder};
pub use cell::{Cell, Clue, Mark, SideSet};
pub use config::Config;
pub use error::{Error, Result};
pub use game::{Game, MoveOutcome};
pub use graph::LoopGraph;
pub use history::History;
pub use location::{Dims, Location, Point, MAX_DIMENSION};
pub use side::Side;
pub use step::{Action, Step};
pub use validate::Conflicts;

pub(crate) mod board;
pub mod builder;
pub(crate) mod cell;
pub(crate) mod config;
pub(crate) mod error;
pub(crate) mod game;
pub(crate) mod graph;
pub(crate) mod history;
pub mod hit;
pub(crate) mod location;
pub mod notation;
pub mod save;
pub(crate) mod side;
pub(crate) mod step;
mod tests;
pub(crate) mod validate;
#[cfg(feature = "wasm")]
pub mod wasm;
