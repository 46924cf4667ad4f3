//! # Action Capability
//!
//! An action is the side effect attached to a case. It receives the input
//! after it has been narrowed by the case's guard and produces no value.
//!
//! # Usage Patterns
//!
//! 1. **Direct closure**: `|s: &String| println!("{s}")`
//! 2. **Fallible closure**: `|n: &i32| -> Result<(), BoxError> { ... }`
//! 3. **Struct implementation**: `impl Action<MyInput> for MyAction`

use crate::error::BoxError;

/// Conversion of an action's return value into the unit result channel.
///
/// # Default Implementations
///
/// - `()` → `Ok(())`
/// - `Result<(), E>` → propagates `E` as a [`BoxError`]
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be returned from an action",
    label = "actions must return `()` or `Result<(), E>`",
    note = "Actions produce no value; only success or failure is reported."
)]
pub trait ActionResult {
    /// Convert the output into success or a boxed error.
    fn into_result(self) -> Result<(), BoxError>;
}

impl ActionResult for () {
    fn into_result(self) -> Result<(), BoxError> {
        Ok(())
    }
}

impl<E> ActionResult for Result<(), E>
where
    E: Into<BoxError>,
{
    fn into_result(self) -> Result<(), BoxError> {
        self.map_err(Into::into)
    }
}

/// A one-argument operation with no result, run when its case matches.
///
/// Actions must be `Send + Sync` so that a finalized dispatcher can be shared
/// across threads. Concurrent invocations are not serialized; an action that
/// mutates shared state must synchronize it itself.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an `Action` over `{T}`",
    label = "missing `Action<{T}>` implementation",
    note = "Closures of the form `|value: &{T}| ...` implement `Action<{T}>`."
)]
pub trait Action<T: ?Sized>: Send + Sync + 'static {
    /// Runs the action on the narrowed input.
    fn apply(&self, value: &T) -> Result<(), BoxError>;
}

// Blanket impl for closures
impl<T, F, R> Action<T> for F
where
    T: ?Sized,
    F: Fn(&T) -> R + Send + Sync + 'static,
    R: ActionResult,
{
    fn apply(&self, value: &T) -> Result<(), BoxError> {
        (self)(value).into_result()
    }
}
