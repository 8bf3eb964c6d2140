// Application Layer - Queue state and the caller-facing façade

pub mod desk;
pub mod queue_state;

// Re-exports
pub use desk::{Alerts, Board, EmptyLineNotice, EnqueueOutcome, InputWarning, LineDesk, LineView};
pub use queue_state::{Placement, QueueState, LINE_COUNT};
