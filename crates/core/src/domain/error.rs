// Domain Error Types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Name already waiting in a line: {0}")]
    DuplicateName(String),

    /// Caller or selector handed over an index outside the fixed line set
    #[error("Line index out of range: {index} (line count: {line_count})")]
    LineOutOfRange { index: usize, line_count: usize },
}

impl DomainError {
    /// Validation outcomes are expected, user-facing conditions.
    /// Anything else is a broken contract between layers.
    pub fn is_validation(&self) -> bool {
        matches!(self, DomainError::EmptyName | DomainError::DuplicateName(_))
    }
}

pub type Result<T> = std::result::Result<T, DomainError>;
