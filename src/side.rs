use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::Serialize;
use strum::VariantArray;

use crate::location::{Location, Point};

/// One of the four sides of a square cell.
///
/// A side names a boundary from the point of view of one cell; the neighbor across that boundary sees the
/// same boundary as its [`invert`](Side::invert)ed side.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd, Serialize)]
pub enum Side {
    /// The upper boundary.
    Top,
    /// The lower boundary.
    Bottom,
    /// The boundary on the left.
    Left,
    /// The boundary on the right.
    Right,
}

impl Side {
    /// The cell across this side of `location`, or [`None`] if that would leave the top or left of the grid.
    ///
    /// The result is not checked against the bottom or right of any grid.
    pub fn attempt_from(&self, location: Location) -> Option<Location> {
        location.checked_offset(match self {
            Self::Top => (0, -1),
            Self::Bottom => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        })
    }

    /// The same boundary, seen from the other side.
    pub fn invert(&self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// The two lattice points this side of `location` joins.
    pub fn endpoints(&self, location: Location) -> (Point, Point) {
        let Location(x, y) = location;
        match self {
            Self::Top => (Point(x, y), Point(x + 1, y)),
            Self::Bottom => (Point(x, y + 1), Point(x + 1, y + 1)),
            Self::Left => (Point(x, y), Point(x, y + 1)),
            Self::Right => (Point(x + 1, y), Point(x + 1, y + 1)),
        }
    }

    pub(crate) fn bit(&self) -> u8 {
        match self {
            Self::Top => 1,
            Self::Bottom => 2,
            Self::Left => 4,
            Self::Right => 8,
        }
    }
}

impl Display for Side {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
        })
    }
}

impl FromStr for Side {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "t" | "top" | "up" => Ok(Self::Top),
            "b" | "bottom" | "down" => Ok(Self::Bottom),
            "l" | "left" => Ok(Self::Left),
            "r" | "right" => Ok(Self::Right),
            other => Err(format!("unknown side {other:?}")),
        }
    }
}
