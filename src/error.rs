//! Error types for task list operations.

use thiserror::Error;

/// Errors returned by index-addressed store operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("task index {index} is out of range (list has {len} task(s))")]
    IndexOutOfRange { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, StoreError>;
