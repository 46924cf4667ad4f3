//! Predicate capability and combinators.
//!
//! Predicates refine a case after its type or equality test passed. They are
//! evaluated on every `is_defined_at` and again on `invoke`, so they must be
//! cheap and free of side effects.

/// A boolean test over a narrowed value.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a `Predicate` over `{T}`",
    label = "missing `Predicate<{T}>` implementation",
    note = "Closures of the form `|value: &{T}| -> bool` implement `Predicate<{T}>`."
)]
pub trait Predicate<T: ?Sized>: Send + Sync + 'static {
    /// Returns `true` if the value satisfies this predicate.
    fn test(&self, value: &T) -> bool;

    /// Combines this predicate with another using AND semantics.
    ///
    /// `other` is not evaluated when `self` rejects the value.
    fn and<P>(self, other: P) -> And<Self, P>
    where
        Self: Sized,
        P: Predicate<T>,
    {
        And {
            first: self,
            second: other,
        }
    }

    /// Combines this predicate with another using OR semantics.
    ///
    /// `other` is not evaluated when `self` accepts the value.
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        Self: Sized,
        P: Predicate<T>,
    {
        Or {
            first: self,
            second: other,
        }
    }

    /// Inverts this predicate.
    fn negate(self) -> Not<Self>
    where
        Self: Sized,
    {
        Not { inner: self }
    }
}

// Blanket impl for closures
impl<T, F> Predicate<T> for F
where
    T: ?Sized,
    F: Fn(&T) -> bool + Send + Sync + 'static,
{
    #[inline]
    fn test(&self, value: &T) -> bool {
        (self)(value)
    }
}

/// A predicate that holds when both inner predicates hold.
///
/// Created by calling [`Predicate::and`].
pub struct And<A, B> {
    first: A,
    second: B,
}

impl<T, A, B> Predicate<T> for And<A, B>
where
    T: ?Sized,
    A: Predicate<T>,
    B: Predicate<T>,
{
    #[inline]
    fn test(&self, value: &T) -> bool {
        self.first.test(value) && self.second.test(value)
    }
}

/// A predicate that holds when either inner predicate holds.
///
/// Created by calling [`Predicate::or`].
pub struct Or<A, B> {
    first: A,
    second: B,
}

impl<T, A, B> Predicate<T> for Or<A, B>
where
    T: ?Sized,
    A: Predicate<T>,
    B: Predicate<T>,
{
    #[inline]
    fn test(&self, value: &T) -> bool {
        self.first.test(value) || self.second.test(value)
    }
}

/// A predicate that holds when the inner one does not.
///
/// Created by calling [`Predicate::negate`].
pub struct Not<P> {
    inner: P,
}

impl<T, P> Predicate<T> for Not<P>
where
    T: ?Sized,
    P: Predicate<T>,
{
    #[inline]
    fn test(&self, value: &T) -> bool {
        !self.inner.test(value)
    }
}
