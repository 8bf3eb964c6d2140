// Entry Domain Model

use serde::{Deserialize, Serialize};

/// Entry ID (issued by an IdProvider, never reused)
pub type EntryId = String;

/// Line index (0-based, always below `LINE_COUNT`)
pub type LineIndex = usize;

/// A registered name waiting in (or just removed from) a line.
///
/// Entries are immutable once created. Identity is the `id`, not the name:
/// a name may come back after its previous holder was served, but it will
/// carry a fresh id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    pub name: String,
    pub enqueued_at: i64, // epoch ms
}

impl Entry {
    /// Create a new Entry
    ///
    /// # Arguments
    ///
    /// * `id` - Unique entry ID (injected, not generated)
    /// * `name` - Already trimmed, non-empty name
    /// * `enqueued_at` - Enqueue timestamp in epoch ms (injected, not system time)
    pub fn new(id: impl Into<EntryId>, name: impl Into<String>, enqueued_at: i64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            enqueued_at,
        }
    }
}
