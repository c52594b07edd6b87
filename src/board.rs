use std::fmt::{Display, Formatter};

use itertools::Itertools;
use ndarray::Array2;
use strum::VariantArray;
use unordered_pair::UnorderedPair;

use crate::cell::{clue_char, Cell, Clue, Mark, SideSet};
use crate::error::{Error, Result};
use crate::location::{Dims, Location, Point};
use crate::side::Side;

/// Index of a boundary in the board's arena.
///
/// Horizontal boundaries come first, `(rows + 1) * columns` of them in row-major order, followed by
/// `rows * (columns + 1)` vertical boundaries, also row-major.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct BoundaryId(pub(crate) usize);

/// A board of clues with a single shared mark per boundary.
///
/// Cells never own edge state. Both cells adjacent to a boundary resolve to the same [`BoundaryId`],
/// so marking the right side of `(x, y)` is the same write as marking the left side of `(x + 1, y)`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Board {
    pub(crate) dims: Dims,
    pub(crate) clues: Array2<Option<Clue>>,
    pub(crate) marks: Vec<Mark>,
}

impl Board {
    /// An empty board without any clues.
    pub fn empty(dims: Dims) -> Self {
        Self::with_clues(dims, Array2::from_elem(dims.shape(), None))
    }

    pub(crate) fn with_clues(dims: Dims, clues: Array2<Option<Clue>>) -> Self {
        debug_assert_eq!(clues.dim(), dims.shape());
        Self {
            dims,
            clues,
            marks: vec![Mark::Empty; Self::boundary_count(dims)],
        }
    }

    pub(crate) fn boundary_count(dims: Dims) -> usize {
        (dims.rows() + 1) * dims.columns() + dims.rows() * (dims.columns() + 1)
    }

    #[inline]
    fn horizontal_count(&self) -> usize {
        (self.dims.rows() + 1) * self.dims.columns()
    }

    /// The board size.
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// The clue at `location`, [`None`] for a cell without one or a location off the board.
    pub fn clue(&self, location: Location) -> Option<Clue> {
        self.clues.get(location.as_index()).copied().flatten()
    }

    /// Resolve a side of a cell to its boundary.
    pub fn boundary(&self, location: Location, side: Side) -> Result<BoundaryId> {
        if !self.dims.contains(location) {
            return Err(Error::OutOfBounds(location));
        }

        let Location(x, y) = location;
        let columns = self.dims.columns();
        Ok(BoundaryId(match side {
            Side::Top => y * columns + x,
            Side::Bottom => (y + 1) * columns + x,
            Side::Left => self.horizontal_count() + y * (columns + 1) + x,
            Side::Right => self.horizontal_count() + y * (columns + 1) + x + 1,
        }))
    }

    /// The lattice points a boundary joins.
    pub fn endpoints(&self, id: BoundaryId) -> UnorderedPair<Point> {
        let columns = self.dims.columns();
        let (a, b) = if id.0 < self.horizontal_count() {
            let (x, y) = (id.0 % columns, id.0 / columns);
            (Point(x, y), Point(x + 1, y))
        } else {
            let i = id.0 - self.horizontal_count();
            let (x, y) = (i % (columns + 1), i / (columns + 1));
            (Point(x, y), Point(x, y + 1))
        };

        UnorderedPair(a, b)
    }

    /// The mark on `side` of `location`.
    pub fn mark(&self, location: Location, side: Side) -> Result<Mark> {
        Ok(self.mark_of(self.boundary(location, side)?))
    }

    #[inline]
    pub(crate) fn mark_of(&self, id: BoundaryId) -> Mark {
        self.marks[id.0]
    }

    /// Every boundary with its mark, in arena order.
    pub fn boundaries(&self) -> impl Iterator<Item = (BoundaryId, Mark)> + '_ {
        self.marks.iter().enumerate().map(|(i, mark)| (BoundaryId(i), *mark))
    }

    /// Boundaries currently drawn as loop segments.
    pub fn lines(&self) -> impl Iterator<Item = BoundaryId> + '_ {
        self.boundaries().filter(|(_, mark)| *mark == Mark::Line).map(|(id, _)| id)
    }

    /// Set or clear the line on `side` of `location`. The neighbor sharing that boundary sees the change too.
    ///
    /// Clearing leaves a cross in place. Drawing over a cross is the caller's responsibility to avoid.
    pub fn set_edge(&mut self, location: Location, side: Side, present: bool) -> Result<()> {
        self.set_mark(location, side, Mark::Line, present)
    }

    /// Set or clear the cross on `side` of `location`, with the same sharing rule as [`set_edge`](Self::set_edge).
    pub fn set_cross(&mut self, location: Location, side: Side, present: bool) -> Result<()> {
        self.set_mark(location, side, Mark::Cross, present)
    }

    fn set_mark(&mut self, location: Location, side: Side, kind: Mark, present: bool) -> Result<()> {
        let id = self.boundary(location, side)?;
        let current = &mut self.marks[id.0];
        if present {
            debug_assert!(*current == Mark::Empty || *current == kind, "{location:?} {side} already holds {current:?}");
            *current = kind;
        } else if *current == kind {
            *current = Mark::Empty;
        }

        Ok(())
    }

    /// A view of the cell at `location`.
    pub fn cell(&self, location: Location) -> Result<Cell> {
        let mut lines = SideSet::default();
        let mut crosses = SideSet::default();
        for side in Side::VARIANTS {
            match self.mark(location, *side)? {
                Mark::Line => lines.insert(*side),
                Mark::Cross => crosses.insert(*side),
                Mark::Empty => {}
            }
        }

        Ok(Cell {
            clue: self.clue(location),
            lines,
            crosses,
        })
    }

    /// Every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Location, Cell)> + '_ {
        self.dims.locations().filter_map(|location| Some((location, self.cell(location).ok()?)))
    }

    /// Draw the board with `+` at lattice points, `-` and `|` for lines, `x` for crosses and clue digits in cells.
    pub fn render(&self) -> String {
        let (columns, rows) = (self.dims.columns(), self.dims.rows());
        let mut out = String::with_capacity((2 * rows + 1) * (2 * columns + 2));

        for y in 0..=rows {
            out.push('+');
            for x in 0..columns {
                // the bottom row of points borders the last row of cells from below
                let (location, side) = if y < rows { (Location(x, y), Side::Top) } else { (Location(x, y - 1), Side::Bottom) };
                out.push(match self.mark(location, side).unwrap_or_default() {
                    Mark::Line => '-',
                    Mark::Cross => 'x',
                    Mark::Empty => ' ',
                });
                out.push('+');
            }
            out.push('\n');

            if y == rows {
                break;
            }

            for x in 0..=columns {
                let (location, side) = if x < columns { (Location(x, y), Side::Left) } else { (Location(x - 1, y), Side::Right) };
                out.push(match self.mark(location, side).unwrap_or_default() {
                    Mark::Line => '|',
                    Mark::Cross => 'x',
                    Mark::Empty => ' ',
                });
                if x < columns {
                    out.push(self.clue(Location(x, y)).map_or(' ', |clue| clue_char(Some(clue))));
                }
            }
            out.push('\n');
        }

        out
    }
}

impl Display for Board {
    /// The clue-only board string: one row per line, `.` for cells without a clue.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let rows = self.clues.rows().into_iter()
            .map(|row| row.iter().map(|clue| clue_char(*clue)).collect::<String>())
            .collect_vec();

        for row in rows {
            writeln!(f, "{row}")?;
        }

        Ok(())
    }
}
