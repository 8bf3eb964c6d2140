// Deletion Guard - classifies service-completion requests

use super::entry::{Entry, LineIndex};
use serde::{Deserialize, Serialize};

/// Guard verdict for a dequeue attempt, decided from the pre-dequeue size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardVerdict {
    /// Line has a head entry to remove
    Proceed,
    /// Nothing to remove; caller must be told which line was empty
    EmptyLine(LineIndex),
}

/// Result of a service completion
///
/// `NoticeEmptyLine` is an expected, non-mutating condition, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DequeueOutcome {
    Removed { entry: Entry },
    NoticeEmptyLine { line: LineIndex },
}

impl DequeueOutcome {
    pub fn removed(&self) -> Option<&Entry> {
        match self {
            DequeueOutcome::Removed { entry } => Some(entry),
            DequeueOutcome::NoticeEmptyLine { .. } => None,
        }
    }

    pub fn into_removed(self) -> Option<Entry> {
        match self {
            DequeueOutcome::Removed { entry } => Some(entry),
            DequeueOutcome::NoticeEmptyLine { .. } => None,
        }
    }

    pub fn is_notice(&self) -> bool {
        matches!(self, DequeueOutcome::NoticeEmptyLine { .. })
    }
}

/// Stateless: holds no view of the queue, only inspects what it is given
pub struct DeletionGuard;

impl DeletionGuard {
    pub fn inspect(line: LineIndex, pre_size: usize) -> GuardVerdict {
        if pre_size == 0 {
            GuardVerdict::EmptyLine(line)
        } else {
            GuardVerdict::Proceed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_line_reports_index() {
        assert_eq!(DeletionGuard::inspect(2, 0), GuardVerdict::EmptyLine(2));
    }

    #[test]
    fn test_non_empty_line_proceeds() {
        assert_eq!(DeletionGuard::inspect(0, 1), GuardVerdict::Proceed);
        assert_eq!(DeletionGuard::inspect(1, 40), GuardVerdict::Proceed);
    }

    #[test]
    fn test_outcome_serialization() {
        let outcome = DequeueOutcome::NoticeEmptyLine { line: 1 };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["outcome"], "notice_empty_line");
        assert_eq!(json["line"], 1);
        assert!(outcome.is_notice());
        assert!(outcome.removed().is_none());
    }
}
