//! # Guards
//!
//! A guard is the acceptance test of a case. It is composed from zero or more
//! of a runtime type test, an equality test against a captured value, and a
//! caller-supplied predicate over the narrowed value. A guard with none of
//! these is a catch-all and accepts every input.
//!
//! The type or equality test always runs first. The predicate only sees values
//! that already passed it, so it may rely on the narrowed type's shape.

use crate::{
    narrow::{AsAny, narrow},
    predicate::Predicate,
};
use bitflags::bitflags;
use std::{
    any::{Any, type_name},
    fmt,
};

bitflags! {
    /// The tests a guard is composed of.
    ///
    /// An empty set denotes a catch-all.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct GuardKind: u8 {
        /// Runtime type test.
        const TYPE = 1;
        /// Equality test against a captured value (implies a type test).
        const EQUALITY = 1 << 1;
        /// Caller-supplied predicate over the narrowed value.
        const PREDICATE = 1 << 2;
    }
}

impl GuardKind {
    /// Returns `true` for a guard that accepts every input.
    pub fn is_catch_all(self) -> bool {
        self.is_empty()
    }
}

impl fmt::Display for GuardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_catch_all() {
            return f.write_str("any");
        }
        let base = if self.contains(GuardKind::EQUALITY) {
            "equals"
        } else {
            "type"
        };
        f.write_str(base)?;
        if self.contains(GuardKind::PREDICATE) {
            f.write_str("+predicate")?;
        }
        Ok(())
    }
}

type Test<I> = Box<dyn Fn(&I) -> bool + Send + Sync>;

/// The composed acceptance test of a case. Immutable once constructed.
pub struct Guard<I: ?Sized> {
    kind: GuardKind,
    target: &'static str,
    test: Test<I>,
}

impl<I> Guard<I>
where
    I: AsAny + ?Sized + 'static,
{
    /// A guard that accepts every input.
    pub fn any() -> Self {
        Self {
            kind: GuardKind::empty(),
            target: type_name::<I>(),
            test: Box::new(|_: &I| true),
        }
    }

    /// A guard that accepts inputs whose runtime type is `P`.
    pub fn of_type<P: Any>() -> Self {
        Self {
            kind: GuardKind::TYPE,
            target: type_name::<P>(),
            test: Box::new(|input: &I| input.as_any().is::<P>()),
        }
    }

    /// A guard that accepts inputs of type `P` that satisfy `predicate`.
    pub fn of_type_where<P, F>(predicate: F) -> Self
    where
        P: Any,
        F: Predicate<P>,
    {
        Self {
            kind: GuardKind::TYPE | GuardKind::PREDICATE,
            target: type_name::<P>(),
            test: Box::new(move |input: &I| narrow::<I, P>(input).is_some_and(|p| predicate.test(p))),
        }
    }

    /// A guard that accepts inputs equal to `value`.
    ///
    /// Equality is `PartialEq` on `P`; inputs of another runtime type are
    /// never equal.
    pub fn equal_to<P>(value: P) -> Self
    where
        P: Any + PartialEq + Send + Sync,
    {
        Self {
            kind: GuardKind::TYPE | GuardKind::EQUALITY,
            target: type_name::<P>(),
            test: Box::new(move |input: &I| narrow::<I, P>(input).is_some_and(|p| value == *p)),
        }
    }

    /// A guard that accepts inputs equal to `value` that satisfy `predicate`.
    pub fn equal_to_where<P, F>(value: P, predicate: F) -> Self
    where
        P: Any + PartialEq + Send + Sync,
        F: Predicate<P>,
    {
        Self {
            kind: GuardKind::TYPE | GuardKind::EQUALITY | GuardKind::PREDICATE,
            target: type_name::<P>(),
            test: Box::new(move |input: &I| {
                narrow::<I, P>(input).is_some_and(|p| value == *p && predicate.test(p))
            }),
        }
    }
}

impl<I: ?Sized> Guard<I> {
    /// Returns `true` if this guard accepts `input`.
    #[inline]
    pub fn accepts(&self, input: &I) -> bool {
        (self.test)(input)
    }

    /// The tests this guard is composed of.
    pub fn kind(&self) -> GuardKind {
        self.kind
    }

    /// Name of the type this guard narrows to.
    ///
    /// For a catch-all this is the declared input type.
    pub fn target(&self) -> &'static str {
        self.target
    }
}

impl<I: ?Sized> fmt::Debug for Guard<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard")
            .field("kind", &self.kind)
            .field("target", &self.target)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    type Input = dyn Any + Send + Sync;

    #[test]
    fn type_guard() {
        let guard = Guard::<Input>::of_type::<String>();
        assert!(guard.accepts(&String::from("a")));
        assert!(!guard.accepts(&1_i32));
        assert_eq!(guard.kind(), GuardKind::TYPE);
        assert_eq!(guard.kind().to_string(), "type");
    }

    #[test]
    fn predicate_never_sees_wrong_type() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = calls.clone();
        let guard = Guard::<Input>::of_type_where::<String, _>(move |s: &String| {
            seen.fetch_add(1, Ordering::SeqCst);
            s.len() > 2
        });

        assert!(!guard.accepts(&42_i32));
        assert!(!guard.accepts(&3.5_f64));
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        assert!(guard.accepts(&String::from("abc")));
        assert!(!guard.accepts(&String::from("ab")));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn equality_not_identity() {
        let guard = Guard::<Input>::equal_to(String::from("key"));
        let other = String::from("key");
        assert!(guard.accepts(&other));
        assert!(!guard.accepts(&String::from("nope")));
        assert!(!guard.accepts(&"key"));
    }

    #[test]
    fn equality_short_circuits_predicate() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = calls.clone();
        let guard = Guard::<Input>::equal_to_where(7_u32, move |_: &u32| {
            seen.fetch_add(1, Ordering::SeqCst);
            true
        });
        assert!(!guard.accepts(&8_u32));
        assert!(!guard.accepts(&7_i64));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(guard.accepts(&7_u32));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(guard.kind().to_string(), "equals+predicate");
    }

    #[test]
    fn catch_all_accepts_degenerate_values() {
        let guard = Guard::<Input>::any();
        assert!(guard.kind().is_catch_all());
        assert!(guard.accepts(&()));
        assert!(guard.accepts(&String::new()));
        assert!(guard.accepts(&Option::<i32>::None));
        assert_eq!(guard.kind().to_string(), "any");
    }
}
