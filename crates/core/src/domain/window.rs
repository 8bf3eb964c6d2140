//! Window Projector - bounded, renderable prefix of a line
//!
//! Pure read-side derivation. Never mutates the line it is given.

use super::entry::Entry;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

/// Visible prefix of a line plus the count of entries beyond it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayWindow {
    pub visible: Vec<Entry>,
    pub overflow_count: usize,
}

impl DisplayWindow {
    /// Overflow as an optional badge value: `None` when nothing overflows,
    /// so a zero count can never be rendered as "+0 more".
    pub fn overflow(&self) -> Option<NonZeroUsize> {
        NonZeroUsize::new(self.overflow_count)
    }

    /// Total entries the window was projected from
    pub fn line_len(&self) -> usize {
        self.visible.len() + self.overflow_count
    }

    pub fn visible_names(&self) -> Vec<&str> {
        self.visible.iter().map(|entry| entry.name.as_str()).collect()
    }
}

pub struct WindowProjector;

impl WindowProjector {
    /// Project the first `capacity` entries of `line`, in FIFO order.
    ///
    /// `capacity = 0` puts every entry into the overflow count.
    pub fn project<'a, I>(line: I, capacity: usize) -> DisplayWindow
    where
        I: IntoIterator<Item = &'a Entry>,
    {
        let mut entries = line.into_iter();
        let visible: Vec<Entry> = entries.by_ref().take(capacity).cloned().collect();
        let overflow_count = entries.count();

        tracing::debug!(
            capacity = capacity,
            visible = visible.len(),
            overflow_count = overflow_count,
            "Projected display window"
        );

        DisplayWindow {
            visible,
            overflow_count,
        }
    }
}
