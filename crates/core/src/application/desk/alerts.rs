// Desk Alerts - transient, caller-visible view state

use crate::domain::LineIndex;
use serde::{Deserialize, Serialize};

/// Inline guidance after a rejected submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "warning", content = "name", rename_all = "snake_case")]
pub enum InputWarning {
    EmptyName,
    DuplicateName(String),
}

/// Service was requested on a line with nothing to remove
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmptyLineNotice {
    pub line: LineIndex,
}

/// Pending warning and notice. Neither touches queue contents.
///
/// The warning lasts until the next submission or service request (or an
/// explicit clear). The notice lasts until it is dismissed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alerts {
    pub warning: Option<InputWarning>,
    pub notice: Option<EmptyLineNotice>,
}

impl Alerts {
    pub fn is_clear(&self) -> bool {
        self.warning.is_none() && self.notice.is_none()
    }
}
