// Name Uniqueness Index - read-only view over every line

use super::line::Line;

/// Answers whether a name is already waiting in any line.
///
/// Borrows the live lines, so the answer always reflects the latest
/// mutation. Names are compared exactly; trimming is the caller's job.
#[derive(Debug, Clone, Copy)]
pub struct NameUniquenessIndex<'a> {
    lines: &'a [Line],
}

impl<'a> NameUniquenessIndex<'a> {
    pub fn new(lines: &'a [Line]) -> Self {
        Self { lines }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lines.iter().any(|line| line.contains_name(name))
    }
}
