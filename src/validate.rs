use itertools::Itertools;
use strum::VariantArray;
use tracing::trace;

use crate::board::{Board, BoundaryId};
use crate::cell::Cell;
use crate::graph::LoopGraph;
use crate::location::Location;
use crate::side::Side;

impl Cell {
    /// Whether the clue, if any, is met exactly.
    pub fn is_satisfied(&self) -> bool {
        self.clue.map_or(true, |clue| self.lines.len() == clue.get() as usize)
    }

    /// Whether the clue can no longer be met: too many lines, or too few lines with too many sides already crossed.
    pub fn is_infeasible(&self) -> bool {
        let Some(clue) = self.clue else {
            return false;
        };

        let (lines, clue) = (self.lines.len(), clue.get() as usize);
        if lines < clue {
            self.crosses.len() + clue > Side::VARIANTS.len()
        } else {
            lines > clue
        }
    }
}

/// Everything worth highlighting as an error after a move.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Conflicts {
    /// Cells whose clue can no longer be met.
    pub cells: Vec<Location>,
    /// Line segments touching a lattice point where more than two lines meet.
    pub branches: Vec<BoundaryId>,
}

impl Conflicts {
    /// Whether there is nothing to highlight.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty() && self.branches.is_empty()
    }
}

impl Board {
    /// Whether every clue on the board is met exactly.
    pub fn all_satisfied(&self) -> bool {
        self.cells().all(|(_, cell)| cell.is_satisfied())
    }

    /// Cells whose clue can no longer be met.
    pub fn infeasible_cells(&self) -> Vec<Location> {
        self.cells()
            .filter(|(_, cell)| cell.is_infeasible())
            .map(|(location, _)| location)
            .collect_vec()
    }

    /// Whether every clue is met and the lines form a single loop.
    pub fn is_solved(&self) -> bool {
        self.all_satisfied() && LoopGraph::from(self).is_single_loop()
    }

    /// Recompute the full error overlay.
    pub fn conflicts(&self) -> Conflicts {
        let conflicts = Conflicts {
            cells: self.infeasible_cells(),
            branches: LoopGraph::from(self).branching_segments(),
        };
        trace!(cells = conflicts.cells.len(), branches = conflicts.branches.len(), "validated board");

        conflicts
    }
}
