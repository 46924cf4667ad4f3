//! # casewise-std
//!
//! Standard builder and dispatcher for the Casewise partial-function builder.
//!
//! This crate provides:
//! - **Case registry**: [`PfBuilder`]
//! - **Finalized dispatch**: [`Dispatcher`], [`CaseInfo`]
//! - **Testing utilities**: [`testing`]

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use casewise_core;

// Modules
pub mod builder;
pub mod dispatcher;
pub mod testing;

pub use builder::PfBuilder;
pub use dispatcher::{CaseInfo, Dispatcher};
