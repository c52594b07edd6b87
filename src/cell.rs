use std::fmt::{Display, Formatter};

use strum::VariantArray;

use crate::side::Side;

/// Character shown for a cell without a clue.
pub const NO_CLUE_CHAR: char = '.';

/// The number of loop segments required around a cell, always in `0..=3`.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Clue(u8);

impl Clue {
    /// Largest clue a cell can carry.
    pub const MAX: u8 = 3;

    /// Make a clue, or [`None`] if `value` exceeds [`Clue::MAX`].
    pub fn new(value: u8) -> Option<Self> {
        (value <= Self::MAX).then_some(Self(value))
    }

    /// Parse a single clue digit.
    pub fn from_char(c: char) -> Option<Self> {
        c.to_digit(10).and_then(|d| Self::new(d as u8))
    }

    /// The clue as a number.
    #[inline]
    pub fn get(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Clue {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("clue {value} out of range"))
    }
}

impl From<Clue> for u8 {
    fn from(value: Clue) -> Self {
        value.0
    }
}

impl Display for Clue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// State of a single boundary.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Mark {
    /// Undecided.
    #[default]
    Empty,
    /// Drawn as part of the loop.
    Line,
    /// Marked as definitely not part of the loop.
    Cross,
}

/// A set of [`Side`]s packed into four bits.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct SideSet(u8);

impl SideSet {
    /// Whether `side` is in the set.
    pub fn contains(&self, side: Side) -> bool {
        self.0 & side.bit() != 0
    }

    /// Add `side`.
    pub fn insert(&mut self, side: Side) {
        self.0 |= side.bit();
    }

    /// Number of sides in the set.
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Whether no side is in the set.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Sides in the set, in [`Side::VARIANTS`] order.
    pub fn iter(&self) -> impl Iterator<Item = Side> + '_ {
        Side::VARIANTS.iter().copied().filter(|side| self.contains(*side))
    }
}

impl FromIterator<Side> for SideSet {
    fn from_iter<T: IntoIterator<Item = Side>>(iter: T) -> Self {
        let mut set = Self::default();
        iter.into_iter().for_each(|side| set.insert(side));
        set
    }
}

/// A read-only view of one cell: its clue and the marks on its four sides.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Cell {
    /// Required number of lines, if any.
    pub clue: Option<Clue>,
    /// Sides drawn as lines.
    pub lines: SideSet,
    /// Sides marked with a cross.
    pub crosses: SideSet,
}

impl Cell {
    /// The clue digit, or [`NO_CLUE_CHAR`].
    pub fn clue_char(&self) -> char {
        clue_char(self.clue)
    }
}

pub(crate) fn clue_char(clue: Option<Clue>) -> char {
    match clue {
        Some(clue) => char::from(b'0' + clue.get()),
        None => NO_CLUE_CHAR,
    }
}
