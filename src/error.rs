use thiserror::Error;

use crate::location::{Coord, Location};

/// Failures surfaced to the caller. The board is left unchanged whenever one of these is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Requested dimensions are zero or above [`MAX_DIMENSION`](crate::MAX_DIMENSION).
    #[error("invalid board size {columns}x{rows}")]
    #[allow(missing_docs)]
    InvalidBoardSize { columns: Coord, rows: Coord },

    /// Clue text matches neither the plain grid nor the compact format.
    #[error("malformed clue text: {0}")]
    MalformedClueText(String),

    /// A cell location outside the grid was passed to a board primitive.
    #[error("location {0:?} is outside the board")]
    OutOfBounds(Location),

    /// Bytes handed to the save decoder are not a board snapshot.
    #[error("corrupt save: {0}")]
    CorruptSave(String),
}

/// Shorthand for results carrying an [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
