use ndarray::Array2;
use tracing::{debug, info};

use crate::board::Board;
use crate::builder::ClueBuilder;
use crate::cell::Clue;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::history::History;
use crate::hit::{hit_side, locate};
use crate::location::{Coord, Dims, Location};
use crate::notation::{board_string, parse_clues};
use crate::save;
use crate::side::Side;
use crate::step::{Action, Step};
use crate::validate::Conflicts;

const DEFAULT_SIZE: Coord = 10;

/// What a mutating call did.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MoveOutcome {
    /// Nothing changed: the location was off the board, the click missed every side, or there was nothing to undo or redo.
    Ignored,
    /// The step was applied.
    Applied(Step),
    /// The step was applied and completed the puzzle. Reported once per loaded puzzle.
    Finished(Step),
}

impl MoveOutcome {
    /// The step that was applied, if any.
    pub fn step(&self) -> Option<Step> {
        match self {
            Self::Ignored => None,
            Self::Applied(step) | Self::Finished(step) => Some(*step),
        }
    }
}

/// One play session: the board, its history and whether the puzzle has been completed.
///
/// All mutation goes through [`try_add_edge`](Self::try_add_edge), [`try_add_cross`](Self::try_add_cross),
/// [`click`](Self::click), [`undo`](Self::undo) and [`redo`](Self::redo), each of which runs validation to
/// completion before returning.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    history: History,
    config: Config,
    finished: bool,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Game {
    /// A session on an empty 10x10 board.
    pub fn new(config: Config) -> Self {
        let dims = Dims::new(DEFAULT_SIZE, DEFAULT_SIZE).expect("default size is within bounds");
        Self {
            board: Board::empty(dims),
            history: History::default(),
            config,
            finished: false,
        }
    }

    /// The current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Steps available to undo and redo.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Session settings.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Replace the session settings. The board is untouched.
    pub fn set_config(&mut self, config: Config) {
        self.config = config;
    }

    /// Whether the puzzle has been completed since it was loaded.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    fn replace_board(&mut self, board: Board) {
        self.board = board;
        self.history.clear();
        self.finished = false;
    }

    /// Start over on an empty board of `columns` by `rows`, dropping clues, marks and history.
    pub fn set_board_size(&mut self, columns: Coord, rows: Coord) -> Result<()> {
        let dims = Dims::new(columns, rows)?;
        self.replace_board(Board::empty(dims));
        Ok(())
    }

    /// [`set_board_size`](Self::set_board_size) for a square board.
    pub fn set_square_board_size(&mut self, size: Coord) -> Result<()> {
        self.set_board_size(size, size)
    }

    /// Load clue text in the plain or compact format. On error the current board is kept.
    pub fn load_numbers(&mut self, text: &str) -> Result<()> {
        let board = parse_clues(text)?;
        self.replace_board(board);
        Ok(())
    }

    /// Load clues from a `(row, column)` indexed array.
    pub fn load_clues(&mut self, clues: &Array2<Option<Clue>>) -> Result<()> {
        let (rows, columns) = clues.dim();
        let mut builder = ClueBuilder::with_dims(Dims::new(columns, rows)?);
        for clue in clues.iter() {
            builder.push(*clue);
        }

        let board = builder.build().map_err(|reasons| Error::MalformedClueText(format!("{reasons:?}")))?;
        info!(columns, rows, "loaded clue array");
        self.replace_board(board);
        Ok(())
    }

    /// The clue-only board string, suitable for [`load_numbers`](Self::load_numbers).
    pub fn board_string(&self) -> String {
        board_string(&self.board)
    }

    /// Snapshot the board for saving.
    pub fn save(&self) -> Vec<u8> {
        save::serialize(&self.board)
    }

    /// Restore a board from [`save`](Self::save)d bytes, dropping history. On error the current board is kept.
    pub fn load_save(&mut self, bytes: &[u8]) -> Result<()> {
        let board = save::deserialize(bytes)?;
        info!(columns = board.dims().columns(), rows = board.dims().rows(), "loaded save");
        self.replace_board(board);
        // a finished save is finished without any further move
        self.finished = self.board.is_solved();
        Ok(())
    }

    /// Toggle a line at `side` of `location`, removing a cross there instead if one is present.
    pub fn try_add_edge(&mut self, location: Location, side: Side) -> MoveOutcome {
        self.try_mark(location, side, Action::Line)
    }

    /// Toggle a cross at `side` of `location`, removing a line there instead if one is present.
    pub fn try_add_cross(&mut self, location: Location, side: Side) -> MoveOutcome {
        self.try_mark(location, side, Action::Cross)
    }

    /// Apply `action` to the side a canvas position selects, with cells `unit_size` wide.
    pub fn click(&mut self, x: f64, y: f64, unit_size: f64, action: Action) -> MoveOutcome {
        let Some(hit) = locate(x, y, unit_size) else {
            return MoveOutcome::Ignored;
        };

        match hit_side(hit.fx, hit.fy, self.config.click_region_percent()) {
            Some(side) => self.try_mark(hit.location, side, action),
            None => MoveOutcome::Ignored,
        }
    }

    /// Apply one user action. Locations off the board are ignored.
    pub fn try_mark(&mut self, location: Location, side: Side, action: Action) -> MoveOutcome {
        let Ok(step) = Step::plan(&self.board, location, side, action) else {
            return MoveOutcome::Ignored;
        };

        if step.apply(&mut self.board).is_err() {
            return MoveOutcome::Ignored;
        }

        debug!(?location, %side, is_line = step.is_line, is_addition = step.is_addition, "step");
        self.history.record(step);
        self.settle(step)
    }

    /// Revert the latest step.
    pub fn undo(&mut self) -> MoveOutcome {
        let Some(step) = self.history.undo() else {
            return MoveOutcome::Ignored;
        };

        let reverted = step.inverse().apply(&mut self.board);
        debug_assert!(reverted.is_ok(), "recorded step {step:?} does not fit the board");
        debug!(location = ?step.location, side = %step.side, "undo");
        self.settle(step)
    }

    /// Re-apply the latest undone step.
    pub fn redo(&mut self) -> MoveOutcome {
        let Some(step) = self.history.redo() else {
            return MoveOutcome::Ignored;
        };

        let reapplied = step.apply(&mut self.board);
        debug_assert!(reapplied.is_ok(), "recorded step {step:?} does not fit the board");
        debug!(location = ?step.location, side = %step.side, "redo");
        self.settle(step)
    }

    /// The current error overlay.
    pub fn conflicts(&self) -> Conflicts {
        self.board.conflicts()
    }

    fn settle(&mut self, step: Step) -> MoveOutcome {
        if self.finished || !self.board.conflicts().is_empty() || !self.board.is_solved() {
            return MoveOutcome::Applied(step);
        }

        self.finished = true;
        info!(columns = self.board.dims().columns(), rows = self.board.dims().rows(), "puzzle finished");
        MoveOutcome::Finished(step)
    }
}
