//! JavaScript bindings over [`Game`], for a canvas front end.

use js_sys::Uint8Array;
use wasm_bindgen::prelude::*;

use crate::config::Config;
use crate::game::{Game, MoveOutcome};
use crate::location::Location;
use crate::side::Side;
use crate::step::Action;

/// Result codes handed back to JavaScript after a mutation.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Outcome {
    /// Nothing changed.
    Ignored = 0,
    /// A step was applied.
    Applied = 1,
    /// A step was applied and completed the puzzle.
    Finished = 2,
}

impl From<MoveOutcome> for Outcome {
    fn from(value: MoveOutcome) -> Self {
        match value {
            MoveOutcome::Ignored => Self::Ignored,
            MoveOutcome::Applied(_) => Self::Applied,
            MoveOutcome::Finished(_) => Self::Finished,
        }
    }
}

/// A [`Game`] owned by JavaScript.
#[wasm_bindgen]
pub struct WasmGame {
    inner: Game,
}

#[wasm_bindgen]
impl WasmGame {
    /// A session on an empty 10x10 board.
    #[wasm_bindgen(constructor)]
    pub fn new(click_region_percent: f64) -> WasmGame {
        WasmGame {
            inner: Game::new(Config::default().with_click_region_percent(click_region_percent)),
        }
    }

    #[allow(missing_docs)]
    pub fn columns(&self) -> usize {
        self.inner.board().dims().columns()
    }

    #[allow(missing_docs)]
    pub fn rows(&self) -> usize {
        self.inner.board().dims().rows()
    }

    /// Change the click region; see [`Config::with_click_region_percent`].
    #[wasm_bindgen(js_name = setClickRegion)]
    pub fn set_click_region(&mut self, click_region_percent: f64) {
        self.inner.set_config(Config::default().with_click_region_percent(click_region_percent));
    }

    /// See [`Game::load_numbers`].
    #[wasm_bindgen(js_name = loadNumbers)]
    pub fn load_numbers(&mut self, text: &str) -> Result<(), JsError> {
        Ok(self.inner.load_numbers(text)?)
    }

    /// See [`Game::set_board_size`].
    #[wasm_bindgen(js_name = setBoardSize)]
    pub fn set_board_size(&mut self, columns: usize, rows: usize) -> Result<(), JsError> {
        Ok(self.inner.set_board_size(columns, rows)?)
    }

    /// `side` is one of `top`, `bottom`, `left` or `right`.
    #[wasm_bindgen(js_name = tryAddEdge)]
    pub fn try_add_edge(&mut self, x: usize, y: usize, side: &str) -> Result<Outcome, JsError> {
        let side = side.parse::<Side>().map_err(|e| JsError::new(&e))?;
        Ok(self.inner.try_add_edge(Location(x, y), side).into())
    }

    /// Same as `tryAddEdge` for crosses.
    #[wasm_bindgen(js_name = tryAddCross)]
    pub fn try_add_cross(&mut self, x: usize, y: usize, side: &str) -> Result<Outcome, JsError> {
        let side = side.parse::<Side>().map_err(|e| JsError::new(&e))?;
        Ok(self.inner.try_add_cross(Location(x, y), side).into())
    }

    /// Primary button draws lines, any other button crosses.
    pub fn click(&mut self, x: f64, y: f64, unit_size: f64, primary: bool) -> Outcome {
        let action = if primary { Action::Line } else { Action::Cross };
        self.inner.click(x, y, unit_size, action).into()
    }

    /// See [`Game::undo`].
    pub fn undo(&mut self) -> Outcome {
        self.inner.undo().into()
    }

    /// See [`Game::redo`].
    pub fn redo(&mut self) -> Outcome {
        self.inner.redo().into()
    }

    #[allow(missing_docs)]
    #[wasm_bindgen(js_name = isFinished)]
    pub fn is_finished(&self) -> bool {
        self.inner.is_finished()
    }

    /// See [`Game::board_string`].
    #[wasm_bindgen(js_name = boardString)]
    pub fn board_string(&self) -> String {
        self.inner.board_string()
    }

    /// ASCII drawing of the board, for debugging.
    pub fn render(&self) -> String {
        self.inner.board().render()
    }

    /// Row-major flags of cells whose clue can no longer be met.
    #[wasm_bindgen(js_name = infeasibleCells)]
    pub fn infeasible_cells(&self) -> Vec<u8> {
        let board = self.inner.board();
        let mut flags = vec![0; board.dims().area()];
        for Location(x, y) in self.inner.conflicts().cells {
            flags[y * board.dims().columns() + x] = 1;
        }

        flags
    }

    /// See [`Game::save`].
    pub fn save(&self) -> Uint8Array {
        Uint8Array::from(self.inner.save().as_slice())
    }

    /// See [`Game::load_save`].
    pub fn load(&mut self, bytes: &[u8]) -> Result<(), JsError> {
        Ok(self.inner.load_save(bytes)?)
    }
}
