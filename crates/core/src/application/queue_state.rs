//! Queue State - the authoritative collection of service lines
//!
//! Single writer: every mutation of a `Line` happens here, after validation.
//! Failed operations leave every line untouched.

use crate::domain::{
    DeletionGuard, DequeueOutcome, DomainError, Entry, EntryId, GuardVerdict, Line, LineIndex,
    NameUniquenessIndex, Result,
};
use crate::port::{IdProvider, LineSelector, SequentialIdProvider, SystemTimeProvider, TimeProvider};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Number of service lines. Fixed for the lifetime of the system.
pub const LINE_COUNT: usize = 3;

/// Where an accepted entry landed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub id: EntryId,
    pub line: LineIndex,
}

pub struct QueueState {
    lines: [Line; LINE_COUNT],
    selector: Arc<dyn LineSelector>,
    id_provider: Arc<dyn IdProvider>,
    time_provider: Arc<dyn TimeProvider>,
}

impl QueueState {
    /// Create an empty queue state
    ///
    /// # Arguments
    /// * `selector` - Line selection policy
    /// * `id_provider` - ID generator (injected for determinism)
    /// * `time_provider` - Time provider (injected for determinism)
    pub fn new(
        selector: Arc<dyn LineSelector>,
        id_provider: Arc<dyn IdProvider>,
        time_provider: Arc<dyn TimeProvider>,
    ) -> Self {
        Self {
            lines: Default::default(),
            selector,
            id_provider,
            time_provider,
        }
    }

    /// Sequential ids and system time, custom selector
    pub fn with_selector(selector: Arc<dyn LineSelector>) -> Self {
        Self::new(
            selector,
            Arc::new(SequentialIdProvider::new()),
            Arc::new(SystemTimeProvider),
        )
    }

    /// Register a name and append it to the tail of the selected line.
    ///
    /// The name is trimmed first, including any byte-order mark. Uniqueness is checked against the union
    /// of all lines as they are right now, so a name is free again as soon
    /// as its holder has been served.
    pub fn enqueue(&mut self, raw_name: &str) -> Result<Placement> {
        let name = trim_name(raw_name);
        if name.is_empty() {
            debug!("Rejected enqueue: empty name");
            return Err(DomainError::EmptyName);
        }

        if self.names().contains(name) {
            debug!(name = %name, "Rejected enqueue: duplicate name");
            return Err(DomainError::DuplicateName(name.to_string()));
        }

        let line = self.selector.select(LINE_COUNT);
        if line >= LINE_COUNT {
            warn!(
                line = line,
                line_count = LINE_COUNT,
                "Line selector returned an index out of range"
            );
            return Err(DomainError::LineOutOfRange {
                index: line,
                line_count: LINE_COUNT,
            });
        }

        let entry = Entry::new(
            self.id_provider.generate_id(),
            name,
            self.time_provider.now_millis(),
        );
        let id = entry.id.clone();
        let target = &mut self.lines[line];

        info!(
            entry_id = %id,
            name = %name,
            line = line,
            position = target.len(),
            "Entry enqueued"
        );

        target.push_back(entry);
        Ok(Placement { id, line })
    }

    /// Serve the head of a line, or report that the line was empty.
    pub fn complete_service(&mut self, line: LineIndex) -> Result<DequeueOutcome> {
        let target = self.line_mut(line)?;

        match DeletionGuard::inspect(line, target.len()) {
            GuardVerdict::EmptyLine(line) => {
                warn!(line = line, "Service completion requested on empty line");
                Ok(DequeueOutcome::NoticeEmptyLine { line })
            }
            GuardVerdict::Proceed => match target.pop_front() {
                Some(entry) => {
                    info!(
                        entry_id = %entry.id,
                        name = %entry.name,
                        line = line,
                        remaining = target.len(),
                        "Entry served"
                    );
                    Ok(DequeueOutcome::Removed { entry })
                }
                None => Ok(DequeueOutcome::NoticeEmptyLine { line }),
            },
        }
    }

    /// Remove and return the head entry; `None` when the line is empty
    pub fn dequeue(&mut self, line: LineIndex) -> Result<Option<Entry>> {
        Ok(self.complete_service(line)?.into_removed())
    }

    pub fn line(&self, index: LineIndex) -> Result<&Line> {
        self.lines.get(index).ok_or(DomainError::LineOutOfRange {
            index,
            line_count: LINE_COUNT,
        })
    }

    fn line_mut(&mut self, index: LineIndex) -> Result<&mut Line> {
        self.lines.get_mut(index).ok_or(DomainError::LineOutOfRange {
            index,
            line_count: LINE_COUNT,
        })
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn names(&self) -> NameUniquenessIndex<'_> {
        NameUniquenessIndex::new(&self.lines)
    }

    /// Line and head-relative position of a waiting name
    pub fn locate(&self, name: &str) -> Option<(LineIndex, usize)> {
        self.lines
            .iter()
            .enumerate()
            .find_map(|(index, line)| line.position_of(name).map(|pos| (index, pos)))
    }

    /// Total entries waiting across all lines
    pub fn len(&self) -> usize {
        self.lines.iter().map(Line::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.iter().all(Line::is_empty)
    }
}

/// Strip surrounding whitespace and U+FEFF, which `str::trim` keeps
fn trim_name(raw: &str) -> &str {
    raw.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

impl std::fmt::Debug for QueueState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueueState")
            .field("lines", &self.lines)
            .finish_non_exhaustive()
    }
}
