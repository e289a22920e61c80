//! Level navigation stack
//!
//! Only the top level is visible. The root level is pushed once and can
//! never be popped; leaving the menu goes through the dispatcher instead.

use crate::error::{Error, Result};
use crate::tui::level::Level;
use tracing::debug;

/// Drill-down / go-back structure over levels
#[derive(Debug, Default)]
pub struct NavigationStack {
    levels: Vec<Level>,
}

impl NavigationStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `level` on top, hiding the current top
    pub fn push(&mut self, level: Level) {
        self.levels.push(level);
        debug!(depth = self.levels.len(), "Level pushed");
    }

    /// Remove the top level and show the one beneath it
    ///
    /// Fails with `EmptyStack` when only the root level is left.
    pub fn pop(&mut self) -> Result<Level> {
        if self.levels.len() <= 1 {
            return Err(Error::EmptyStack);
        }
        let level = self.levels.pop().ok_or(Error::EmptyStack)?;
        debug!(depth = self.levels.len(), "Level popped");
        Ok(level)
    }

    /// The visible level
    pub fn active(&self) -> Result<&Level> {
        self.levels.last().ok_or(Error::EmptyStack)
    }

    /// The visible level, mutably
    pub fn active_mut(&mut self) -> Result<&mut Level> {
        self.levels.last_mut().ok_or(Error::EmptyStack)
    }

    /// Number of stacked levels
    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}
