use std::num::NonZero;

use serde::Serialize;

use crate::error::Error;

pub(crate) type Coord = usize;
pub(crate) type Dimension = NonZero<Coord>;

/// Largest supported number of columns or rows.
pub const MAX_DIMENSION: Coord = 50;

#[derive(Clone, Eq, Hash, Copy, PartialEq, Ord, PartialOrd, Debug, Serialize)]
/// A cell location `(x, y)` on a board. The top left cell is `Location(0, 0)`.
pub struct Location(pub Coord, pub Coord);

impl Location {
    pub(crate) fn as_index(&self) -> (Coord, Coord) {
        (self.1, self.0)
    }

    /// Step by `rhs`, returning [`None`] if either coordinate would become negative.
    pub(crate) fn checked_offset(self, rhs: (isize, isize)) -> Option<Self> {
        Some(Self(self.0.checked_add_signed(rhs.0)?, self.1.checked_add_signed(rhs.1)?))
    }
}

/// A lattice point, i.e. a corner shared by up to four cells.
///
/// Point `(x, y)` is the top left corner of cell `Location(x, y)`, so a board of `columns` by `rows`
/// cells has `(columns + 1) * (rows + 1)` points.
#[derive(Clone, Eq, Hash, Copy, PartialEq, Ord, PartialOrd, Debug)]
pub struct Point(pub Coord, pub Coord);

/// The fixed size of a board, in cells.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct Dims {
    columns: Dimension,
    rows: Dimension,
}

impl Dims {
    /// Validate `columns` and `rows` against `1..=`[`MAX_DIMENSION`].
    pub fn new(columns: Coord, rows: Coord) -> Result<Self, Error> {
        let invalid = || Error::InvalidBoardSize { columns, rows };
        if columns > MAX_DIMENSION || rows > MAX_DIMENSION {
            return Err(invalid());
        }

        Ok(Self {
            columns: NonZero::new(columns).ok_or_else(invalid)?,
            rows: NonZero::new(rows).ok_or_else(invalid)?,
        })
    }

    /// Number of columns, i.e. the board width.
    #[inline]
    pub fn columns(&self) -> Coord {
        self.columns.get()
    }

    /// Number of rows, i.e. the board height.
    #[inline]
    pub fn rows(&self) -> Coord {
        self.rows.get()
    }

    /// Number of cells.
    #[inline]
    pub fn area(&self) -> usize {
        self.columns() * self.rows()
    }

    #[inline]
    pub(crate) fn contains(&self, location: Location) -> bool {
        location.0 < self.columns() && location.1 < self.rows()
    }

    /// Shape in `ndarray` order, `(rows, columns)`.
    #[inline]
    pub(crate) fn shape(&self) -> (Coord, Coord) {
        (self.rows(), self.columns())
    }

    /// Iterate every location in row-major order.
    pub fn locations(&self) -> impl Iterator<Item = Location> {
        let columns = self.columns();
        (0..self.area()).map(move |i| Location(i % columns, i / columns))
    }
}
