//! Cases: one guard paired with one action.

use crate::{
    action::Action,
    error::BoxError,
    guard::{Guard, GuardKind},
    narrow::{AsAny, narrow},
    predicate::Predicate,
};
use std::{any::Any, fmt};

type ErasedAction<I> = Box<dyn Fn(&I) -> Option<Result<(), BoxError>> + Send + Sync>;

/// The atomic unit of a dispatch table.
///
/// The action is stored type-erased over the dispatcher input `I`; it narrows
/// the input to the type its guard tested before running.
pub struct Case<I: ?Sized> {
    guard: Guard<I>,
    action: ErasedAction<I>,
}

impl<I> Case<I>
where
    I: AsAny + ?Sized + 'static,
{
    /// A case for inputs whose runtime type is `P`.
    pub fn of_type<P, A>(action: A) -> Self
    where
        P: Any,
        A: Action<P>,
    {
        Self {
            guard: Guard::of_type::<P>(),
            action: narrowing(action),
        }
    }

    /// A case for inputs of type `P` that satisfy `predicate`.
    pub fn of_type_where<P, F, A>(predicate: F, action: A) -> Self
    where
        P: Any,
        F: Predicate<P>,
        A: Action<P>,
    {
        Self {
            guard: Guard::of_type_where::<P, F>(predicate),
            action: narrowing(action),
        }
    }

    /// A case for inputs equal to `value`.
    pub fn equal_to<P, A>(value: P, action: A) -> Self
    where
        P: Any + PartialEq + Send + Sync,
        A: Action<P>,
    {
        Self {
            guard: Guard::equal_to(value),
            action: narrowing(action),
        }
    }

    /// A case for inputs equal to `value` that satisfy `predicate`.
    pub fn equal_to_where<P, F, A>(value: P, predicate: F, action: A) -> Self
    where
        P: Any + PartialEq + Send + Sync,
        F: Predicate<P>,
        A: Action<P>,
    {
        Self {
            guard: Guard::equal_to_where(value, predicate),
            action: narrowing(action),
        }
    }

    /// A case that accepts every input. The action receives it un-narrowed.
    pub fn any<A>(action: A) -> Self
    where
        A: Action<I>,
    {
        Self {
            guard: Guard::any(),
            action: Box::new(move |input: &I| Some(action.apply(input))),
        }
    }
}

impl<I: ?Sized> Case<I> {
    /// Returns `true` if this case's guard accepts `input`. Never runs the action.
    #[inline]
    pub fn accepts(&self, input: &I) -> bool {
        self.guard.accepts(input)
    }

    /// Runs the action on `input` without consulting the guard.
    ///
    /// Returns `None` if the input cannot be narrowed to the action's type.
    pub fn run(&self, input: &I) -> Option<Result<(), BoxError>> {
        (self.action)(input)
    }

    /// The guard of this case.
    pub fn guard(&self) -> &Guard<I> {
        &self.guard
    }

    /// The tests this case's guard is composed of.
    pub fn kind(&self) -> GuardKind {
        self.guard.kind()
    }

    /// Name of the type this case narrows to.
    pub fn target(&self) -> &'static str {
        self.guard.target()
    }
}

impl<I: ?Sized> fmt::Debug for Case<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Case")
            .field("guard", &self.guard)
            .finish_non_exhaustive()
    }
}

fn narrowing<I, P, A>(action: A) -> ErasedAction<I>
where
    I: AsAny + ?Sized + 'static,
    P: Any,
    A: Action<P>,
{
    Box::new(move |input: &I| narrow::<I, P>(input).map(|p| action.apply(p)))
}
