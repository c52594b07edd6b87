//! Clue text formats.
//!
//! Two formats are read:
//! - the plain grid, one row per line with rows separated by `\r`, `\n` or `,`. Digits `0` to `3` are clues and
//!   any other non-digit is an empty cell, e.g. `3.2,..0`;
//! - the compact run-length form `{W}x{H}t0:{payload}`, where payload digits are clues and a letter encodes a run of
//!   empty cells, `a` being one, `b` two and so on, e.g. `3x2t0:3a2b0`.
//!
//! Only the plain grid is written, by [`board_string`].

use itertools::Itertools;
use tracing::{info, warn};

use crate::board::Board;
use crate::builder::{BuilderInvalidReason, ClueBuilder};
use crate::cell::Clue;
use crate::error::{Error, Result};
use crate::location::{Coord, Dims};

/// Which format a piece of clue text was read as.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Format {
    /// Rows of clue characters.
    Plain,
    /// `{W}x{H}t0:` followed by a run-length payload.
    Compact,
}

const COMPACT_MARKER: &str = "t0:";

fn malformed(reason: impl Into<String>) -> Error {
    let reason = reason.into();
    warn!(%reason, "rejected clue text");
    Error::MalformedClueText(reason)
}

/// Parse clue text in either format into a board without marks.
pub fn parse_clues(text: &str) -> Result<Board> {
    if text.trim().is_empty() {
        return Err(malformed("text is empty"));
    }

    let format = detect(text);
    let board = match format {
        Format::Compact => parse_compact(text)?,
        Format::Plain => parse_plain(text)?,
    };

    info!(columns = board.dims().columns(), rows = board.dims().rows(), ?format, "loaded clues");
    Ok(board)
}

/// Compact text carries `{1,2 digits}x{1,2 digits}t0:` somewhere; everything else is read as a plain grid.
pub fn detect(text: &str) -> Format {
    let bytes = text.as_bytes();
    let found = text.match_indices(COMPACT_MARKER).any(|(at, _)| {
        let height = bytes[..at].iter().rev().take_while(|b| b.is_ascii_digit()).count();
        if !(1..=2).contains(&height) || at < height + 1 || bytes[at - height - 1] != b'x' {
            return false;
        }

        let width = bytes[..at - height - 1].iter().rev().take_while(|b| b.is_ascii_digit()).count();
        width >= 1
    });

    if found { Format::Compact } else { Format::Plain }
}

fn parse_dimension(text: &str, what: &str) -> Result<Coord> {
    text.parse::<Coord>().map_err(|_| malformed(format!("{what} {text:?} is not a number")))
}

fn parse_compact(text: &str) -> Result<Board> {
    let (width, rest) = text.split_once('x').ok_or_else(|| malformed("missing 'x' in size"))?;
    let (height, payload) = rest.split_once(COMPACT_MARKER).ok_or_else(|| malformed("missing size terminator"))?;
    let dims = Dims::new(parse_dimension(width.trim(), "width")?, parse_dimension(height, "height")?)?;

    let mut builder = ClueBuilder::with_dims(dims);
    for c in payload.trim_end().chars() {
        match c {
            '0'..='9' => {
                let clue = Clue::from_char(c).ok_or_else(|| malformed(format!("clue {c} out of range")))?;
                builder.push(Some(clue));
            }
            'a'..='z' => {
                builder.skip((c as u8 - b'a') as usize + 1);
            }
            _ => return Err(malformed(format!("unexpected {c:?} in payload"))),
        }
    }

    if builder.is_valid().is_some_and(|reasons| reasons.contains(&BuilderInvalidReason::TooManyClues)) {
        return Err(malformed(format!("payload describes more than {} cells", dims.area())));
    }
    if builder.pushed() != dims.area() {
        return Err(malformed(format!("payload describes {} of {} cells", builder.pushed(), dims.area())));
    }

    builder.build().map_err(|reasons| malformed(format!("{reasons:?}")))
}

fn parse_plain(text: &str) -> Result<Board> {
    let lines = text.split(['\r', '\n', ','])
        .filter(|line| !line.is_empty())
        .map(|line| line.chars().collect_vec())
        .collect_vec();

    let Some(columns) = lines.first().map(Vec::len) else {
        return Err(malformed("no rows"));
    };
    if let Some((row, line)) = lines.iter().find_position(|line| line.len() != columns) {
        return Err(malformed(format!("row {row} has {} cells, expected {columns}", line.len())));
    }

    let dims = Dims::new(columns, lines.len())?;
    let mut builder = ClueBuilder::with_dims(dims);
    for c in lines.iter().flatten() {
        if c.is_ascii_digit() {
            let clue = Clue::from_char(*c).ok_or_else(|| malformed(format!("clue {c} out of range")))?;
            builder.push(Some(clue));
        } else {
            builder.push(None);
        }
    }

    builder.build().map_err(|reasons| malformed(format!("{reasons:?}")))
}

/// The clue-only board string: one row per line, `.` for cells without a clue.
///
/// Feeding the result back into [`parse_clues`] yields the same clues.
pub fn board_string(board: &Board) -> String {
    board.to_string()
}
