//! Assembling clue grids cell by cell.

use std::ops::IndexMut;

use ndarray::{Array2, AssignElem};

use crate::board::Board;
use crate::cell::Clue;
use crate::location::{Dims, Location};

/// Reasons a builder may become invalid while building.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BuilderInvalidReason {
    /// A clue was placed outside the bounds specified by `dims` on the builder.
    ClueOutOfBounds,
    /// More cells were appended with [`push`](ClueBuilder::push) than the board has.
    TooManyClues,
}

/// Collects clues for a board of fixed dimensions.
///
/// Builders mutate themselves while building but can be [`Clone`]d to save their state at some point.
/// Clues can be placed at a [`Location`] or appended in row-major order, the way clue text is read.
#[derive(Clone)]
pub struct ClueBuilder {
    dims: Dims,
    clues: Array2<Option<Clue>>,
    // next cell for push, row-major
    cursor: usize,
    invalid_reasons: Vec<BuilderInvalidReason>,
}

impl ClueBuilder {
    /// Construct a new [`Self`] with every cell empty.
    pub fn with_dims(dims: Dims) -> Self {
        Self {
            dims,
            clues: Array2::from_elem(dims.shape(), None),
            cursor: 0,
            invalid_reasons: Default::default(),
        }
    }

    /// Set or clear the clue at `location`.
    ///
    /// May cause the builder to enter a [`ClueOutOfBounds`](BuilderInvalidReason::ClueOutOfBounds) invalid state if `location` is out of bounds.
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn set_clue(&mut self, location: Location, clue: Option<Clue>) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        if !self.dims.contains(location) {
            self.invalid_reasons.push(BuilderInvalidReason::ClueOutOfBounds);
            return self;
        }

        self.clues.index_mut(location.as_index()).assign_elem(clue);
        self
    }

    /// Fill the next cell in row-major order.
    ///
    /// May cause the builder to enter a [`TooManyClues`](BuilderInvalidReason::TooManyClues) invalid state once every cell is filled.
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn push(&mut self, clue: Option<Clue>) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        if self.cursor >= self.dims.area() {
            self.invalid_reasons.push(BuilderInvalidReason::TooManyClues);
            return self;
        }

        let location = Location(self.cursor % self.dims.columns(), self.cursor / self.dims.columns());
        self.cursor += 1;
        self.set_clue(location, clue)
    }

    /// Shorthand for `count` calls to [`Self::push`] with no clue.
    pub fn skip(&mut self, count: usize) -> &mut Self {
        for _ in 0..count {
            self.push(None);
        }

        self
    }

    /// Number of cells filled by [`Self::push`] so far.
    pub fn pushed(&self) -> usize {
        self.cursor
    }

    /// Check the validity of this builder, ensuring no [`BuilderInvalidReason`] condition has arisen.
    ///
    /// Returns `None` if the builder is valid, `Some(&Vec<BuilderInvalidReason>)` otherwise.
    pub fn is_valid(&self) -> Option<&Vec<BuilderInvalidReason>> {
        if self.invalid_reasons.is_empty() {
            None
        } else {
            Some(&self.invalid_reasons)
        }
    }

    /// Convert the state of this builder into a [`Board`] with no marks.
    /// If the builder is invalid for any reason, a reference to a [`Vec`] of [`BuilderInvalidReason`] will indicate why.
    pub fn build(&self) -> Result<Board, &Vec<BuilderInvalidReason>> {
        if !self.invalid_reasons.is_empty() {
            return Err(&self.invalid_reasons);
        }

        Ok(Board::with_clues(self.dims, self.clues.clone()))
    }
}
