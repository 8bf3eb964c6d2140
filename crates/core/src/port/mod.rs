// Port Layer - Interfaces for external dependencies

pub mod id_provider; // For deterministic testing
pub mod line_selector;
pub mod time_provider;

// Re-exports
pub use id_provider::{IdProvider, SequentialIdProvider, UuidProvider};
pub use line_selector::{LineSelector, RandomLineSelector, SeededLineSelector};
pub use time_provider::{SystemTimeProvider, TimeProvider};
