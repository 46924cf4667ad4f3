//! Case registry for constructing a [`Dispatcher`].

use crate::dispatcher::Dispatcher;
use casewise_core::{Action, AsAny, Case, Predicate};
use std::{any::Any, fmt, sync::Arc};

/// Builder for a partial function over inputs of type `I`.
///
/// Cases are tested in registration order when the finished [`Dispatcher`] is
/// invoked; the first case whose guard accepts the input wins. A case
/// registered after [`match_any`](Self::match_any) can never be selected.
///
/// # Example
///
/// ```rust
/// use casewise_std::PfBuilder;
/// use std::any::Any;
///
/// let pf = PfBuilder::<dyn Any + Send + Sync>::new()
///     .match_type::<String>(|s: &String| println!("text {s}"))
///     .match_equals(0_i32, |_: &i32| println!("zero"))
///     .match_type_if::<i32>(|n: &i32| *n > 0, |n: &i32| println!("positive {n}"))
///     .build();
///
/// assert!(pf.is_defined_at(&5_i32));
/// assert!(!pf.is_defined_at(&-5_i32));
/// ```
pub struct PfBuilder<I: ?Sized> {
    label: Option<Arc<str>>,
    cases: Vec<Arc<Case<I>>>,
}

impl<I> Default for PfBuilder<I>
where
    I: AsAny + ?Sized + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<I: ?Sized> Clone for PfBuilder<I> {
    fn clone(&self) -> Self {
        Self {
            label: self.label.clone(),
            cases: self.cases.clone(),
        }
    }
}

impl<I> PfBuilder<I>
where
    I: AsAny + ?Sized + 'static,
{
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self {
            label: None,
            cases: Vec::new(),
        }
    }

    /// Create a new empty builder whose dispatcher carries `label` in logs,
    /// errors and `Debug` output.
    pub fn named(label: impl Into<Arc<str>>) -> Self {
        Self {
            label: Some(label.into()),
            cases: Vec::new(),
        }
    }

    /// Add a case matching inputs whose runtime type is `P`.
    pub fn match_type<P: Any>(self, action: impl Action<P>) -> Self {
        self.push(Case::of_type::<P, _>(action))
    }

    /// Add a case matching inputs of type `P` for which `predicate` holds.
    ///
    /// The predicate is only evaluated on inputs that are a `P`.
    pub fn match_type_if<P: Any>(
        self,
        predicate: impl Predicate<P>,
        action: impl Action<P>,
    ) -> Self {
        self.push(Case::of_type_where::<P, _, _>(predicate, action))
    }

    /// Add a case matching inputs equal to `value`.
    pub fn match_equals<P>(self, value: P, action: impl Action<P>) -> Self
    where
        P: Any + PartialEq + Send + Sync,
    {
        self.push(Case::equal_to(value, action))
    }

    /// Add a case matching inputs equal to `value` for which `predicate` holds.
    ///
    /// The predicate is only evaluated on inputs equal to `value`.
    pub fn match_equals_if<P>(
        self,
        value: P,
        predicate: impl Predicate<P>,
        action: impl Action<P>,
    ) -> Self
    where
        P: Any + PartialEq + Send + Sync,
    {
        self.push(Case::equal_to_where(value, predicate, action))
    }

    /// Add a case matching every input.
    pub fn match_any(self, action: impl Action<I>) -> Self {
        self.push(Case::any(action))
    }

    /// Append a prebuilt case.
    pub fn push(mut self, case: Case<I>) -> Self {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            dispatcher = self.label.as_deref(),
            index = self.cases.len(),
            kind = %case.kind(),
            target = case.target(),
            "registered case"
        );
        self.cases.push(Arc::new(case));
        self
    }

    /// Number of registered cases.
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// Returns `true` if no case has been registered.
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Finalize a frozen copy of the current cases, keeping the builder.
    ///
    /// Cases registered on the builder afterwards are not visible through
    /// the returned dispatcher.
    pub fn snapshot(&self) -> Dispatcher<I> {
        Dispatcher::from_parts(self.label.clone(), self.cases.clone())
    }

    /// Finalize the builder into a dispatcher.
    pub fn build(self) -> Dispatcher<I> {
        Dispatcher::from_parts(self.label, self.cases)
    }
}

impl<I> From<PfBuilder<I>> for Dispatcher<I>
where
    I: AsAny + ?Sized + 'static,
{
    fn from(builder: PfBuilder<I>) -> Self {
        builder.build()
    }
}

impl<I: ?Sized> fmt::Debug for PfBuilder<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PfBuilder")
            .field("label", &self.label)
            .field("cases", &self.cases.len())
            .finish()
    }
}
