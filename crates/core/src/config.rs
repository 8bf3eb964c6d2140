//! Desk configuration model
//!
//! Plain data with defaults. Loading (files, environment) is the front
//! end's job; the core only validates and interprets the values.

use crate::application::queue_state::LINE_COUNT;
use crate::domain::LineIndex;
use crate::error::{AppError, Result};
use crate::port::{
    IdProvider, LineSelector, RandomLineSelector, SeededLineSelector, SequentialIdProvider,
    UuidProvider,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Visible entries per line when nothing else is configured
pub const DEFAULT_WINDOW_CAPACITY: usize = 3;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeskConfig {
    pub window: WindowConfig,
    pub selector: SelectorConfig,
    pub ids: IdConfig,
}

/// Display window capacities
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub default_capacity: usize,
    /// Per-line overrides, indexed by line. Lines past the end use the default.
    pub per_line: Vec<usize>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            default_capacity: DEFAULT_WINDOW_CAPACITY,
            per_line: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    /// Fixed RNG seed; `None` draws from the thread RNG
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdConfig {
    pub scheme: IdScheme,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdScheme {
    #[default]
    Sequential,
    Uuid,
}

impl DeskConfig {
    pub fn validate(&self) -> Result<()> {
        if self.window.per_line.len() > LINE_COUNT {
            return Err(AppError::Config(format!(
                "window.per_line has {} entries but only {} lines exist",
                self.window.per_line.len(),
                LINE_COUNT
            )));
        }
        Ok(())
    }

    /// Display capacity for a line
    pub fn capacity(&self, line: LineIndex) -> usize {
        self.window
            .per_line
            .get(line)
            .copied()
            .unwrap_or(self.window.default_capacity)
    }

    pub fn line_selector(&self) -> Arc<dyn LineSelector> {
        match self.selector.seed {
            Some(seed) => Arc::new(SeededLineSelector::new(seed)),
            None => Arc::new(RandomLineSelector),
        }
    }

    pub fn id_provider(&self) -> Arc<dyn IdProvider> {
        match self.ids.scheme {
            IdScheme::Sequential => Arc::new(SequentialIdProvider::new()),
            IdScheme::Uuid => Arc::new(UuidProvider),
        }
    }
}
