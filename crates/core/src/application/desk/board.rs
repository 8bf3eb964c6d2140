// Board Snapshot - renderable view of every line

use crate::domain::{DisplayWindow, LineIndex};
use crate::error::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineView {
    pub line: LineIndex,
    /// Full line length, not just the visible part
    pub waiting: usize,
    pub window: DisplayWindow,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub lines: Vec<LineView>,
}

impl Board {
    pub fn total_waiting(&self) -> usize {
        self.lines.iter().map(|view| view.waiting).sum()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
