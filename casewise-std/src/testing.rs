//! Testing utilities for Casewise.
//!
//! This module provides actions and predicates that record how they were used,
//! to make assertions about dispatch order and guard evaluation easy.
//!
//! # Features
//!
//! - [`CallLog`]: An ordered log of which labelled actions ran
//! - [`RecordingAction`]: An action that records the narrowed values it receives
//! - [`CountingPredicate`]: A predicate that counts its evaluations
//! - [`FailingAction`]: An action that always fails

use casewise_core::{Action, BoxError, Predicate};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

// ============================================================================
// Call Log
// ============================================================================

/// An ordered log of labelled action invocations.
///
/// # Example
///
/// ```rust
/// use casewise_std::{PfBuilder, testing::CallLog};
///
/// let log = CallLog::new();
/// let pf = PfBuilder::<u8>::new()
///     .match_equals(1_u8, log.entry("one"))
///     .match_any(log.entry("other"))
///     .build();
///
/// pf.invoke(&1).unwrap();
/// pf.invoke(&9).unwrap();
/// assert_eq!(log.calls(), vec!["one", "other"]);
/// ```
#[derive(Clone, Default)]
pub struct CallLog {
    calls: Arc<Mutex<Vec<&'static str>>>,
}

impl CallLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// An action that appends `label` to this log, for any input type.
    pub fn entry(&self, label: &'static str) -> LoggedAction {
        LoggedAction {
            label,
            calls: self.calls.clone(),
        }
    }

    /// Get the labels logged so far, in order.
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    /// Get the number of times `label` was logged.
    pub fn count(&self, label: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|logged| **logged == label)
            .count()
    }

    /// Get the total number of logged calls.
    pub fn len(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Returns `true` if nothing was logged.
    pub fn is_empty(&self) -> bool {
        self.calls.lock().unwrap().is_empty()
    }

    /// Clear the log.
    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }
}

/// An action created by [`CallLog::entry`].
pub struct LoggedAction {
    label: &'static str,
    calls: Arc<Mutex<Vec<&'static str>>>,
}

impl<T: ?Sized> Action<T> for LoggedAction {
    fn apply(&self, _value: &T) -> Result<(), BoxError> {
        self.calls.lock().unwrap().push(self.label);
        Ok(())
    }
}

// ============================================================================
// Recording Action
// ============================================================================

/// An action that records every value it receives.
///
/// Clones share the same record.
pub struct RecordingAction<T> {
    values: Arc<Mutex<Vec<T>>>,
}

impl<T: Clone> RecordingAction<T> {
    /// Create a new recording action.
    pub fn new() -> Self {
        Self {
            values: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get a clone of the recorded values.
    pub fn values(&self) -> Vec<T> {
        self.values.lock().unwrap().clone()
    }

    /// Get the number of recorded values.
    pub fn count(&self) -> usize {
        self.values.lock().unwrap().len()
    }
}

impl<T: Clone> Default for RecordingAction<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for RecordingAction<T> {
    fn clone(&self) -> Self {
        Self {
            values: self.values.clone(),
        }
    }
}

impl<T> Action<T> for RecordingAction<T>
where
    T: Clone + Send + 'static,
{
    fn apply(&self, value: &T) -> Result<(), BoxError> {
        self.values.lock().unwrap().push(value.clone());
        Ok(())
    }
}

// ============================================================================
// Counting Predicate
// ============================================================================

/// A predicate with a fixed answer that counts how often it was evaluated.
///
/// Clones share the same counter.
#[derive(Clone)]
pub struct CountingPredicate {
    calls: Arc<AtomicUsize>,
    answer: bool,
}

impl CountingPredicate {
    /// A counting predicate that always holds.
    pub fn accepting() -> Self {
        Self::answering(true)
    }

    /// A counting predicate that never holds.
    pub fn rejecting() -> Self {
        Self::answering(false)
    }

    fn answering(answer: bool) -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
            answer,
        }
    }

    /// Get the number of evaluations so far.
    pub fn count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.calls.store(0, Ordering::SeqCst);
    }
}

impl<T: ?Sized> Predicate<T> for CountingPredicate {
    fn test(&self, _value: &T) -> bool {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.answer
    }
}

// ============================================================================
// Failing Action
// ============================================================================

/// An action that always fails with the given message.
#[derive(Clone)]
pub struct FailingAction {
    message: Arc<str>,
}

impl FailingAction {
    /// Create an action failing with `message`.
    pub fn new(message: impl Into<Arc<str>>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl<T: ?Sized> Action<T> for FailingAction {
    fn apply(&self, _value: &T) -> Result<(), BoxError> {
        Err(self.message.to_string().into())
    }
}
