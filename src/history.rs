use serde::Serialize;

use crate::step::Step;

/// Linear undo/redo log over [`Step`]s.
///
/// `past` holds applied steps, most recent last; `future` holds undone steps, most recently undone last.
/// Recording a fresh step discards `future`.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct History {
    past: Vec<Step>,
    future: Vec<Step>,
}

impl History {
    /// Record a step the user just made, dropping the redo branch.
    pub fn record(&mut self, step: Step) {
        self.past.push(step);
        self.future.clear();
    }

    /// Move the latest applied step to the redo stack and return it. The caller applies its inverse.
    pub fn undo(&mut self) -> Option<Step> {
        let step = self.past.pop()?;
        self.future.push(step);
        Some(step)
    }

    /// Move the latest undone step back to the applied stack and return it. The caller re-applies it.
    pub fn redo(&mut self) -> Option<Step> {
        let step = self.future.pop()?;
        self.past.push(step);
        Some(step)
    }

    /// Forget everything.
    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }

    /// Whether [`undo`](Self::undo) has a step to return.
    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    /// Whether [`redo`](Self::redo) has a step to return.
    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Applied steps, oldest first.
    pub fn past(&self) -> &[Step] {
        &self.past
    }

    /// Undone steps, the next one to redo last.
    pub fn future(&self) -> &[Step] {
        &self.future
    }
}
