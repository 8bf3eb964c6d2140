// ID Provider Port (for deterministic testing)

use std::sync::atomic::{AtomicU64, Ordering};

/// ID provider interface (allows deterministic IDs in tests)
pub trait IdProvider: Send + Sync {
    /// Generate a new unique entry ID
    fn generate_id(&self) -> String;
}

/// Monotonic counter provider (default): entry-1, entry-2, ...
///
/// Rapid successive submissions can never collide, unlike ids derived
/// from the wall clock.
pub struct SequentialIdProvider {
    next: AtomicU64,
}

impl SequentialIdProvider {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }
}

impl Default for SequentialIdProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl IdProvider for SequentialIdProvider {
    fn generate_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::SeqCst);
        format!("entry-{}", n)
    }
}

/// UUID v4 provider
pub struct UuidProvider;

impl IdProvider for UuidProvider {
    fn generate_id(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sequential_ids_are_monotonic() {
        let provider = SequentialIdProvider::new();
        assert_eq!(provider.generate_id(), "entry-1");
        assert_eq!(provider.generate_id(), "entry-2");

        let provider = SequentialIdProvider::starting_at(100);
        assert_eq!(provider.generate_id(), "entry-100");
    }

    #[test]
    fn test_uuid_ids_are_distinct() {
        let provider = UuidProvider;
        let ids: HashSet<String> = (0..50).map(|_| provider.generate_id()).collect();
        assert_eq!(ids.len(), 50);
    }
}
