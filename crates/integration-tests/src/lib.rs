//! Shared fixtures for the integration tests

use std::sync::Arc;

use lineup_core::application::{LineDesk, QueueState};
use lineup_core::config::DeskConfig;
use lineup_core::domain::LineIndex;
use lineup_core::port::line_selector::mocks::ScriptedLineSelector;
use lineup_core::port::time_provider::mocks::FixedTimeProvider;
use lineup_core::port::{SeededLineSelector, SequentialIdProvider};

/// Clock value stamped on every entry created through these fixtures
pub const FIXED_NOW_MS: i64 = 1_700_000_000_000;

/// Desk whose line assignments follow `script`, with sequential ids and a
/// frozen clock
pub fn scripted_desk(script: &[LineIndex]) -> LineDesk {
    let state = QueueState::new(
        Arc::new(ScriptedLineSelector::new(script.to_vec())),
        Arc::new(SequentialIdProvider::new()),
        Arc::new(FixedTimeProvider::new(FIXED_NOW_MS)),
    );
    desk(state)
}

/// Desk with uniform, seeded line assignment
pub fn seeded_desk(seed: u64) -> LineDesk {
    desk(QueueState::with_selector(Arc::new(SeededLineSelector::new(seed))))
}

fn desk(state: QueueState) -> LineDesk {
    LineDesk::new(state, DeskConfig::default()).expect("default config is valid")
}

/// Names per line, head first
pub fn snapshot(desk: &LineDesk) -> Vec<Vec<String>> {
    desk.state()
        .lines()
        .iter()
        .map(|line| line.iter().map(|e| e.name.clone()).collect())
        .collect()
}
