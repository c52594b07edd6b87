//! Pointer to boundary mapping.
//!
//! A cell is split by its diagonals into four triangles, one per side. A click only counts when it lands within the
//! click region of some side; the diagonals then decide which side it belongs to. Bands are tried left, right, top,
//! bottom, so a corner is always decided by the left or right band, and a click exactly on a diagonal there goes to
//! that band's own side: `(0.1, 0.1)` selects [`Side::Left`] and `(0.9, 0.1)` selects [`Side::Right`].

use crate::location::Location;
use crate::side::Side;

/// Map fractional offsets `(fx, fy)` within a cell to the side they select, if any.
pub fn hit_side(fx: f64, fy: f64, click_region: f64) -> Option<Side> {
    if fx < click_region {
        // left band
        Some(if fy < fx {
            Side::Top
        } else if fy + fx > 1.0 {
            Side::Bottom
        } else {
            Side::Left
        })
    } else if fx + click_region > 1.0 {
        // right band
        Some(if fy + fx < 1.0 {
            Side::Top
        } else if fy > fx {
            Side::Bottom
        } else {
            Side::Right
        })
    } else if fy < click_region {
        // top band
        Some(if fx < fy {
            Side::Left
        } else if fy + fx > 1.0 {
            Side::Right
        } else {
            Side::Top
        })
    } else if fy + click_region > 1.0 {
        // bottom band
        Some(if fx + fy < 1.0 {
            Side::Left
        } else if fx > fy {
            Side::Right
        } else {
            Side::Bottom
        })
    } else {
        None
    }
}

/// A canvas position resolved to a cell and the offsets within it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellHit {
    /// The cell under the position. May lie off the board.
    pub location: Location,
    /// Offset from the cell's left edge, in `[0, 1)`.
    pub fx: f64,
    /// Offset from the cell's top edge, in `[0, 1)`.
    pub fy: f64,
}

/// Resolve an absolute canvas position, with cells `unit_size` wide, to a cell.
///
/// Returns [`None`] for positions left of or above the board, or for a non-positive `unit_size`.
/// Positions right of or below the board resolve to locations the board will ignore.
pub fn locate(x: f64, y: f64, unit_size: f64) -> Option<CellHit> {
    if !(unit_size > 0.0) {
        return None;
    }

    let (unit_x, unit_y) = (x / unit_size, y / unit_size);
    if !(unit_x >= 0.0 && unit_y >= 0.0) || !unit_x.is_finite() || !unit_y.is_finite() {
        return None;
    }

    let (cell_x, cell_y) = (unit_x.floor(), unit_y.floor());
    Some(CellHit {
        location: Location(cell_x as usize, cell_y as usize),
        fx: unit_x - cell_x,
        fy: unit_y - cell_y,
    })
}

/// Side length of square cells that fit `columns` by `rows` into a `width` by `height` viewport.
pub fn unit_size(width: f64, height: f64, columns: usize, rows: usize) -> f64 {
    (width / columns as f64).min(height / rows as f64)
}
