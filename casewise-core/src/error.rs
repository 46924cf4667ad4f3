//! Error types for Casewise.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`CasewiseError`] - Top-level error type
//! - [`MatchError`] - Errors from invoking a dispatcher

use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type for all Casewise operations.
#[derive(Error, Debug)]
pub enum CasewiseError {
    /// An error occurred while dispatching an input.
    #[error("match error: {0}")]
    Match(#[from] MatchError),

    /// A custom error occurred.
    #[error(transparent)]
    Custom(BoxError),
}

/// Errors returned when a dispatcher is invoked.
#[derive(Error, Debug)]
pub enum MatchError {
    /// No registered case accepted the input. No action was run.
    #[error("no case matched input of type `{input_type}`{}", describe_label(.dispatcher))]
    Unmatched {
        /// Label of the dispatcher, if it was given one.
        dispatcher: Option<String>,
        /// Declared input type of the dispatcher.
        input_type: &'static str,
    },

    /// The action of the selected case failed.
    #[error("action of case #{index} failed")]
    Action {
        /// Registration index of the case.
        index: usize,
        /// The error returned by the action.
        #[source]
        source: BoxError,
    },

    /// A case accepted the input but its action could not narrow it.
    #[error("case #{index} accepted the input but could not narrow it to `{target}`")]
    Narrowing {
        /// Registration index of the case.
        index: usize,
        /// The type the case narrows to.
        target: &'static str,
    },

    /// The fallback passed to `apply_or_else` failed.
    #[error("fallback failed")]
    Fallback(#[source] BoxError),
}

impl MatchError {
    /// Returns `true` if no case accepted the input.
    pub fn is_unmatched(&self) -> bool {
        matches!(self, MatchError::Unmatched { .. })
    }

    /// Returns the registration index of the case that produced this error.
    pub fn case_index(&self) -> Option<usize> {
        match self {
            MatchError::Action { index, .. } | MatchError::Narrowing { index, .. } => Some(*index),
            MatchError::Unmatched { .. } | MatchError::Fallback(_) => None,
        }
    }
}

fn describe_label(label: &Option<String>) -> String {
    match label {
        Some(name) => format!(" in dispatcher `{name}`"),
        None => String::new(),
    }
}

// Convenience conversions
impl From<BoxError> for CasewiseError {
    fn from(err: BoxError) -> Self {
        CasewiseError::Custom(err)
    }
}
