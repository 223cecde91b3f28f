//! Input checks run before any task reaches the store.
//!
//! The store itself accepts anything, including inverted ranges; these checks
//! are the only gate.

use super::task::Task;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("title must not be blank")]
    EmptyTitle,
    #[error("content must not be blank")]
    EmptyContent,
    #[error("start date is after end date")]
    InvertedRange,
}

/// Returns the first failing rule.
///
/// The range is checked first so an inverted range is reported whatever the
/// state of the text fields.
pub fn validate(task: &Task) -> Result<(), ValidationError> {
    match validation_errors(task).into_iter().next() {
        Some(error) => Err(error),
        None => Ok(()),
    }
}

/// Every failing rule, in reporting order.
pub fn validation_errors(task: &Task) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    if task.start_date > task.end_date {
        errors.push(ValidationError::InvertedRange);
    }
    if is_blank(&task.title) {
        errors.push(ValidationError::EmptyTitle);
    }
    if is_blank(&task.content) {
        errors.push(ValidationError::EmptyContent);
    }
    errors
}

fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}
