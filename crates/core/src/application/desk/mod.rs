//! Line Desk - the façade the presentation layer talks to
//!
//! Wraps `QueueState` and turns its results into outcome values the caller
//! can render directly. Validation rejections become outcomes, the
//! empty-line case becomes a notice, and only broken preconditions
//! (line index out of range) come back as errors.

pub mod alerts;
pub mod board;

pub use alerts::{Alerts, EmptyLineNotice, InputWarning};
pub use board::{Board, LineView};

use crate::application::queue_state::{Placement, QueueState};
use crate::config::DeskConfig;
use crate::domain::{DequeueOutcome, DisplayWindow, DomainError, EntryId, LineIndex, WindowProjector};
use crate::error::Result;
use crate::port::SystemTimeProvider;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Result of a submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum EnqueueOutcome {
    Accepted { id: EntryId, line: LineIndex },
    RejectedEmpty,
    RejectedDuplicate { name: String },
}

impl EnqueueOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, EnqueueOutcome::Accepted { .. })
    }
}

pub struct LineDesk {
    state: QueueState,
    config: DeskConfig,
    alerts: Alerts,
}

impl LineDesk {
    pub fn new(state: QueueState, config: DeskConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            state,
            config,
            alerts: Alerts::default(),
        })
    }

    /// Wire providers from configuration (system clock)
    pub fn from_config(config: DeskConfig) -> Result<Self> {
        let state = QueueState::new(
            config.line_selector(),
            config.id_provider(),
            Arc::new(SystemTimeProvider),
        );
        Self::new(state, config)
    }

    pub fn submit_entry(&mut self, name: &str) -> Result<EnqueueOutcome> {
        let outcome = match self.state.enqueue(name) {
            Ok(Placement { id, line }) => {
                self.alerts.warning = None;
                EnqueueOutcome::Accepted { id, line }
            }
            Err(DomainError::EmptyName) => {
                self.alerts.warning = Some(InputWarning::EmptyName);
                EnqueueOutcome::RejectedEmpty
            }
            Err(DomainError::DuplicateName(name)) => {
                self.alerts.warning = Some(InputWarning::DuplicateName(name.clone()));
                EnqueueOutcome::RejectedDuplicate { name }
            }
            Err(fault) => return Err(fault.into()),
        };
        Ok(outcome)
    }

    pub fn complete_service(&mut self, line: LineIndex) -> Result<DequeueOutcome> {
        let outcome = self.state.complete_service(line)?;

        self.alerts.warning = None;
        if let DequeueOutcome::NoticeEmptyLine { line } = outcome {
            self.alerts.notice = Some(EmptyLineNotice { line });
        }
        Ok(outcome)
    }

    pub fn display_window(&self, line: LineIndex, capacity: usize) -> Result<DisplayWindow> {
        Ok(WindowProjector::project(self.state.line(line)?, capacity))
    }

    /// Window using the configured capacity for `line`
    pub fn configured_window(&self, line: LineIndex) -> Result<DisplayWindow> {
        self.display_window(line, self.config.capacity(line))
    }

    pub fn board(&self) -> Board {
        let lines = self
            .state
            .lines()
            .iter()
            .enumerate()
            .map(|(index, line)| LineView {
                line: index,
                waiting: line.len(),
                window: WindowProjector::project(line, self.config.capacity(index)),
            })
            .collect();
        Board { lines }
    }

    /// Clear the pending empty-line notice, returning it if there was one
    pub fn dismiss_notice(&mut self) -> Option<EmptyLineNotice> {
        self.alerts.notice.take()
    }

    pub fn clear_warning(&mut self) {
        self.alerts.warning = None;
    }

    pub fn notice(&self) -> Option<EmptyLineNotice> {
        self.alerts.notice
    }

    pub fn warning(&self) -> Option<&InputWarning> {
        self.alerts.warning.as_ref()
    }

    pub fn alerts(&self) -> &Alerts {
        &self.alerts
    }

    pub fn state(&self) -> &QueueState {
        &self.state
    }

    pub fn config(&self) -> &DeskConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_WINDOW_CAPACITY;
    use crate::port::line_selector::mocks::ScriptedLineSelector;
    use crate::AppError;

    fn desk(script: &[LineIndex]) -> LineDesk {
        let state = QueueState::with_selector(Arc::new(ScriptedLineSelector::new(script.to_vec())));
        LineDesk::new(state, DeskConfig::default()).unwrap()
    }

    #[test]
    fn test_submit_outcomes_and_warnings() {
        let mut desk = desk(&[0]);

        assert_eq!(desk.submit_entry("  ").unwrap(), EnqueueOutcome::RejectedEmpty);
        assert_eq!(desk.warning(), Some(&InputWarning::EmptyName));

        let accepted = desk.submit_entry("Alice").unwrap();
        assert!(accepted.is_accepted());
        assert!(desk.warning().is_none());

        assert_eq!(
            desk.submit_entry("Alice").unwrap(),
            EnqueueOutcome::RejectedDuplicate {
                name: "Alice".to_string()
            }
        );
        assert_eq!(
            desk.warning(),
            Some(&InputWarning::DuplicateName("Alice".to_string()))
        );

        desk.clear_warning();
        assert!(desk.alerts().is_clear());
    }

    #[test]
    fn test_byte_order_mark_only_name_is_empty() {
        let mut desk = desk(&[0]);

        assert_eq!(desk.submit_entry("\u{FEFF}").unwrap(), EnqueueOutcome::RejectedEmpty);
        assert_eq!(desk.warning(), Some(&InputWarning::EmptyName));
        assert!(desk.state().is_empty());
    }

    #[test]
    fn test_empty_line_notice_until_dismissed() {
        let mut desk = desk(&[0]);
        desk.submit_entry("Alice").unwrap();

        let outcome = desk.complete_service(1).unwrap();
        assert_eq!(outcome, DequeueOutcome::NoticeEmptyLine { line: 1 });
        assert_eq!(desk.notice(), Some(EmptyLineNotice { line: 1 }));

        // Notice survives unrelated operations
        desk.submit_entry("Bob").unwrap();
        assert_eq!(desk.notice(), Some(EmptyLineNotice { line: 1 }));

        assert_eq!(desk.dismiss_notice(), Some(EmptyLineNotice { line: 1 }));
        assert_eq!(desk.dismiss_notice(), None);
        assert_eq!(desk.state().len(), 2);
    }

    #[test]
    fn test_service_clears_warning() {
        let mut desk = desk(&[2]);
        desk.submit_entry("").unwrap();
        assert!(desk.warning().is_some());

        desk.complete_service(0).unwrap();
        assert!(desk.warning().is_none());
    }

    #[test]
    fn test_out_of_range_line_is_an_error() {
        let mut desk = desk(&[0]);

        let err = desk.complete_service(5).unwrap_err();
        assert!(matches!(
            err,
            AppError::Domain(DomainError::LineOutOfRange { index: 5, .. })
        ));
        assert!(desk.display_window(5, 3).is_err());
        assert!(desk.alerts().is_clear());
    }

    #[test]
    fn test_board_uses_configured_capacity() {
        let mut config = DeskConfig::default();
        config.window.per_line = vec![1];
        let state = QueueState::with_selector(Arc::new(ScriptedLineSelector::new([0, 0, 0, 1])));
        let mut desk = LineDesk::new(state, config).unwrap();
        assert_eq!(desk.config().capacity(0), 1);
        assert_eq!(desk.config().capacity(2), DEFAULT_WINDOW_CAPACITY);
        for name in ["A", "B", "C", "D"] {
            desk.submit_entry(name).unwrap();
        }

        let board = desk.board();
        assert_eq!(board.lines.len(), 3);
        assert_eq!(board.total_waiting(), 4);
        assert_eq!(board.lines[0].waiting, 3);
        assert_eq!(board.lines[0].window.visible_names(), vec!["A"]);
        assert_eq!(board.lines[0].window.overflow_count, 2);
        assert_eq!(board.lines[1].window.visible_names(), vec!["D"]);
        assert!(board.lines[1].window.overflow().is_none());

        assert_eq!(desk.configured_window(0).unwrap(), board.lines[0].window);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = DeskConfig::default();
        config.window.per_line = vec![1, 1, 1, 1];

        assert!(matches!(
            LineDesk::from_config(config),
            Err(AppError::Config(_))
        ));
    }

    #[test]
    fn test_outcome_json_shape() {
        let outcome = EnqueueOutcome::Accepted {
            id: "entry-1".to_string(),
            line: 2,
        };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["outcome"], "accepted");
        assert_eq!(json["line"], 2);
    }
}
