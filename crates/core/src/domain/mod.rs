// Domain Layer - Pure queue logic and entities

pub mod deletion_guard;
pub mod entry;
pub mod error;
pub mod line;
pub mod uniqueness;
pub mod window;

// Re-exports
pub use deletion_guard::{DeletionGuard, DequeueOutcome, GuardVerdict};
pub use entry::{Entry, EntryId, LineIndex};
pub use error::{DomainError, Result};
pub use line::Line;
pub use uniqueness::NameUniquenessIndex;
pub use window::{DisplayWindow, WindowProjector};
