//! # casewise - Ordered Partial-Function Builder
//!
//! `casewise` assembles a dispatcher from guarded cases, tested strictly in
//! registration order. Each case matches by runtime type, by equality with a
//! captured value, by either of those refined with a predicate, or matches
//! everything. The result behaves like a partial function: it is either
//! defined at an input and runs exactly one action, or undefined.
//!
//! Prefer a native `match` over an enum when the input domain is closed. This
//! crate is for open domains, where the set of input types is only known at
//! runtime.
//!
//! ## Quick Start
//!
//! ```rust
//! use casewise::prelude::*;
//! use std::any::Any;
//!
//! type Input = dyn Any + Send + Sync;
//!
//! let describe = PfBuilder::<Input>::new()
//!     .match_type::<String>(|s: &String| println!("string {s:?}"))
//!     .match_equals(0_i32, |_: &i32| println!("zero"))
//!     .match_type_if::<i32>(|n: &i32| *n < 0, |n: &i32| println!("negative {n}"))
//!     .match_any(|_: &Input| println!("something else"))
//!     .build();
//!
//! describe.invoke(&String::from("hi"))?;
//! describe.invoke(&-3_i32)?;
//! describe.invoke(&2.5_f64)?;
//!
//! // Boxed inputs dispatch on their contents only when dereferenced.
//! let boxed: Box<Input> = Box::new(String::from("boxed"));
//! describe.invoke(&*boxed)?;
//! # Ok::<(), casewise::MatchError>(())
//! ```
//!
//! Pass `&*boxed` (or `boxed.as_ref()`), not `&boxed`: a `&Box<Input>` is
//! itself a valid `&Input` whose runtime type is the `Box`, so it fails every
//! type and equality test and falls through to the catch-all, if any.
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events for registration, finalization and
//!   dispatch outcomes.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use casewise_core::{
    // Capabilities
    Action,
    ActionResult,
    // Predicate combinators
    And,
    // Narrowing
    AsAny,
    // Error types
    BoxError,
    // Cases
    Case,
    CasewiseError,
    // Guards
    Guard,
    GuardKind,
    MatchError,
    Not,
    Or,
    Predicate,
    narrow,
};

pub use casewise_std::{CaseInfo, Dispatcher, PfBuilder};

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use casewise_std::testing::*;
}

/// Prelude module - common imports for Casewise.
///
/// # Usage
///
/// ```rust
/// use casewise::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        // Capabilities
        Action,
        // Errors
        BoxError,
        // Dispatch
        Dispatcher,
        MatchError,
        PfBuilder,
        Predicate,
    };
}
