//! Binary board snapshots.
//!
//! Layout, all single bytes:
//! `S L K` magic, format version, columns, rows, one clue per cell in row-major order (`0..=3`, or
//! [`NO_CLUE`] for none), then one mark per boundary in arena order (`0` empty, `1` line, `2` cross).

use ndarray::Array2;
use tracing::warn;

use crate::board::Board;
use crate::cell::{Clue, Mark};
use crate::error::{Error, Result};
use crate::location::Dims;

const MAGIC: &[u8; 3] = b"SLK";
const VERSION: u8 = 1;
const HEADER_LEN: usize = MAGIC.len() + 3;
/// Clue byte for a cell without a clue.
pub const NO_CLUE: u8 = 0xFF;

fn corrupt(reason: impl Into<String>) -> Error {
    let reason = reason.into();
    warn!(%reason, "rejected save");
    Error::CorruptSave(reason)
}

fn mark_byte(mark: Mark) -> u8 {
    match mark {
        Mark::Empty => 0,
        Mark::Line => 1,
        Mark::Cross => 2,
    }
}

fn byte_mark(byte: u8) -> Option<Mark> {
    match byte {
        0 => Some(Mark::Empty),
        1 => Some(Mark::Line),
        2 => Some(Mark::Cross),
        _ => None,
    }
}

/// Snapshot the clues and marks of `board`.
pub fn serialize(board: &Board) -> Vec<u8> {
    let dims = board.dims();
    let mut out = Vec::with_capacity(HEADER_LEN + dims.area() + board.marks.len());

    out.extend_from_slice(MAGIC);
    // dimensions never exceed MAX_DIMENSION, so they fit a byte
    out.extend([VERSION, dims.columns() as u8, dims.rows() as u8]);
    out.extend(board.clues.iter().map(|clue| clue.map_or(NO_CLUE, u8::from)));
    out.extend(board.marks.iter().copied().map(mark_byte));

    out
}

/// Rebuild a board from [`serialize`]d bytes.
pub fn deserialize(bytes: &[u8]) -> Result<Board> {
    if bytes.len() < HEADER_LEN || &bytes[..MAGIC.len()] != MAGIC {
        return Err(corrupt("not a board snapshot"));
    }

    let [version, columns, rows] = [bytes[3], bytes[4], bytes[5]];
    if version != VERSION {
        return Err(corrupt(format!("unsupported version {version}")));
    }

    let dims = Dims::new(columns as usize, rows as usize).map_err(|e| corrupt(e.to_string()))?;
    let body = &bytes[HEADER_LEN..];
    let boundary_count = Board::boundary_count(dims);
    if body.len() != dims.area() + boundary_count {
        return Err(corrupt(format!("expected {} bytes after the header, found {}", dims.area() + boundary_count, body.len())));
    }

    let (clue_bytes, mark_bytes) = body.split_at(dims.area());
    let clues = clue_bytes.iter()
        .map(|byte| match *byte {
            NO_CLUE => Ok(None),
            other => Clue::new(other).map(Some).ok_or_else(|| corrupt(format!("bad clue byte {other}"))),
        })
        .collect::<Result<Vec<_>>>()?;
    let marks = mark_bytes.iter()
        .map(|byte| byte_mark(*byte).ok_or_else(|| corrupt(format!("bad mark byte {byte}"))))
        .collect::<Result<Vec<_>>>()?;

    let clues = Array2::from_shape_vec(dims.shape(), clues).map_err(|e| corrupt(e.to_string()))?;
    let mut board = Board::with_clues(dims, clues);
    board.marks = marks;

    Ok(board)
}
