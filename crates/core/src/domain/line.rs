// Line Domain Model - FIFO sequence of entries

use super::entry::Entry;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// One service line. Append at the tail, remove from the head.
///
/// Only `QueueState` hands out mutable access, so every mutation goes
/// through its validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    entries: VecDeque<Entry>,
}

impl Line {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Oldest entry, next to be served
    pub fn head(&self) -> Option<&Entry> {
        self.entries.front()
    }

    /// Most recently enqueued entry
    pub fn tail(&self) -> Option<&Entry> {
        self.entries.back()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Entry> + '_ {
        self.entries.iter()
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.entries.iter().any(|entry| entry.name == name)
    }

    /// Position of `name` counted from the head
    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.name == name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|entry| entry.name.as_str()).collect()
    }

    pub(crate) fn push_back(&mut self, entry: Entry) {
        self.entries.push_back(entry);
    }

    pub(crate) fn pop_front(&mut self) -> Option<Entry> {
        self.entries.pop_front()
    }
}

impl<'a> IntoIterator for &'a Line {
    type Item = &'a Entry;
    type IntoIter = std::collections::vec_deque::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
