//! # casewise-core
//!
//! Core traits and guard primitives for the Casewise partial-function builder.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! code that supplies actions and predicates without needing the builder
//! and dispatcher from `casewise-std`.
//!
//! # Building Blocks
//!
//! ## Capabilities ([`Action`], [`Predicate`])
//!
//! The caller-supplied parts of a case. Closures implement both traits, so
//! `|s: &String| println!("{s}")` is an action over `String` and
//! `|n: &i32| *n > 0` is a predicate over `i32`.
//!
//! ## Narrowing ([`AsAny`])
//!
//! Runtime type tests over the dispatcher input. Any `'static` type can be an
//! input; `dyn Any + Send + Sync` gives an open input domain.
//!
//! ## Guards ([`Guard`], [`GuardKind`])
//!
//! The composed acceptance test: type test, equality test, predicate, or none
//! of them (catch-all). The type or equality test short-circuits before the
//! predicate.
//!
//! ## Cases ([`Case`])
//!
//! A guard paired with a type-erased action.
//!
//! # Error Types
//!
//! - [`CasewiseError`] - Top-level error type
//! - [`MatchError`] - Dispatch errors

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod action;
mod case;
mod error;
mod guard;
mod narrow;
mod predicate;

// Re-exports
pub use action::{Action, ActionResult};
pub use case::Case;
pub use error::{BoxError, CasewiseError, MatchError};
pub use guard::{Guard, GuardKind};
pub use narrow::{AsAny, narrow};
pub use predicate::{And, Not, Or, Predicate};
