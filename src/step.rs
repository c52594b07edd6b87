use serde::Serialize;

use crate::board::Board;
use crate::cell::Mark;
use crate::error::Result;
use crate::location::Location;
use crate::side::Side;

/// What a user action asks for at a boundary.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Action {
    /// Toggle a line, usually the primary button.
    Line,
    /// Toggle a cross, usually the secondary button.
    Cross,
}

impl Action {
    fn mark(&self) -> Mark {
        match self {
            Self::Line => Mark::Line,
            Self::Cross => Mark::Cross,
        }
    }
}

/// One atomic change to one boundary, as recorded in the history.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize)]
pub struct Step {
    /// The cell the action was made on.
    pub location: Location,
    /// The side of that cell.
    pub side: Side,
    /// `true` if the mark was added, `false` if it was removed.
    pub is_addition: bool,
    /// `true` for a line, `false` for a cross.
    pub is_line: bool,
}

impl Step {
    /// Decide the single step `action` causes at `side` of `location`.
    ///
    /// A mark of the other kind is removed first and nothing else happens; a mark of the same kind is toggled
    /// off; an empty boundary receives the requested mark.
    pub fn plan(board: &Board, location: Location, side: Side, action: Action) -> Result<Self> {
        let current = board.mark(location, side)?;
        let (is_addition, is_line) = match (current, action) {
            (Mark::Empty, action) => (true, action == Action::Line),
            (current, action) if current == action.mark() => (false, action == Action::Line),
            (Mark::Cross, Action::Line) => (false, false),
            (_, _) => (false, true),
        };

        Ok(Self { location, side, is_addition, is_line })
    }

    /// The step undoing this one.
    pub fn inverse(&self) -> Self {
        Self { is_addition: !self.is_addition, ..*self }
    }

    /// Write this step to `board`.
    pub fn apply(&self, board: &mut Board) -> Result<()> {
        if self.is_line {
            board.set_edge(self.location, self.side, self.is_addition)
        } else {
            board.set_cross(self.location, self.side, self.is_addition)
        }
    }
}
