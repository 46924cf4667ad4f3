//! Finalized partial functions.

use casewise_core::{Action, ActionResult, AsAny, BoxError, Case, GuardKind, MatchError, Predicate};
use std::{fmt, sync::Arc};

/// Description of one registered case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseInfo {
    /// Registration index, which is also the match priority.
    pub index: usize,
    /// The tests the case's guard is composed of.
    pub kind: GuardKind,
    /// Name of the type the case narrows to.
    pub target: &'static str,
}

impl fmt::Display for CaseInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {}<{}>", self.index, self.kind, self.target)
    }
}

/// An immutable, ordered list of cases behaving as a partial function.
///
/// A dispatcher is defined at an input if any case accepts it. Invoking it runs
/// the action of the earliest-registered accepting case and nothing else.
///
/// Dispatchers are cheap to clone and can be shared between threads, as long
/// as the actions they run tolerate concurrent calls.
pub struct Dispatcher<I: ?Sized> {
    label: Option<Arc<str>>,
    cases: Arc<[Arc<Case<I>>]>,
}

impl<I: ?Sized> Clone for Dispatcher<I> {
    fn clone(&self) -> Self {
        Self {
            label: self.label.clone(),
            cases: self.cases.clone(),
        }
    }
}

impl<I> Default for Dispatcher<I>
where
    I: AsAny + ?Sized + 'static,
{
    fn default() -> Self {
        Self::empty()
    }
}

impl<I> Dispatcher<I>
where
    I: AsAny + ?Sized + 'static,
{
    pub(crate) fn from_parts(label: Option<Arc<str>>, cases: Vec<Arc<Case<I>>>) -> Self {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            dispatcher = label.as_deref(),
            cases = cases.len(),
            "finalized dispatcher"
        );
        Self {
            label,
            cases: cases.into(),
        }
    }

    /// A dispatcher that is defined nowhere.
    pub fn empty() -> Self {
        Self {
            label: None,
            cases: Arc::new([]),
        }
    }

    /// The label given to the builder, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Number of cases.
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// Returns `true` if there are no cases.
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Describes the cases in match order.
    pub fn cases(&self) -> impl ExactSizeIterator<Item = CaseInfo> + '_ {
        self.cases.iter().enumerate().map(|(index, case)| CaseInfo {
            index,
            kind: case.kind(),
            target: case.target(),
        })
    }

    fn select(&self, input: &I) -> Option<(usize, &Case<I>)> {
        self.cases
            .iter()
            .enumerate()
            .find(|(_, case)| case.accepts(input))
            .map(|(index, case)| (index, case.as_ref()))
    }

    fn run(&self, index: usize, case: &Case<I>, input: &I) -> Result<(), MatchError> {
        #[cfg(feature = "tracing")]
        tracing::trace!(
            dispatcher = self.label(),
            index,
            kind = %case.kind(),
            "case matched"
        );
        match case.run(input) {
            Some(Ok(())) => Ok(()),
            Some(Err(source)) => Err(MatchError::Action { index, source }),
            None => Err(MatchError::Narrowing {
                index,
                target: case.target(),
            }),
        }
    }

    fn unmatched(&self, input: &I) -> MatchError {
        #[cfg(feature = "tracing")]
        tracing::trace!(dispatcher = self.label(), "no case matched");
        MatchError::Unmatched {
            dispatcher: self.label.as_deref().map(str::to_owned),
            input_type: input.declared_type(),
        }
    }

    /// Returns `true` if some case accepts `input`. Runs no action.
    ///
    /// Guards are evaluated in order and evaluation stops at the first one
    /// that accepts.
    pub fn is_defined_at(&self, input: &I) -> bool {
        self.select(input).is_some()
    }

    /// Runs the action of the first case that accepts `input`.
    ///
    /// Returns [`MatchError::Unmatched`] without running anything if no case
    /// accepts. Guards are re-evaluated; a prior
    /// [`is_defined_at`](Self::is_defined_at) result is not cached.
    pub fn invoke(&self, input: &I) -> Result<(), MatchError> {
        match self.select(input) {
            Some((index, case)) => self.run(index, case, input),
            None => Err(self.unmatched(input)),
        }
    }

    /// Runs the first accepting case, if any, and reports whether one ran.
    pub fn lift(&self, input: &I) -> Result<bool, MatchError> {
        match self.select(input) {
            Some((index, case)) => self.run(index, case, input).map(|()| true),
            None => Ok(false),
        }
    }

    /// Runs the first accepting case, or `fallback` if none accepts.
    ///
    /// Guards are evaluated once.
    pub fn apply_or_else<F, R>(&self, input: &I, fallback: F) -> Result<(), MatchError>
    where
        F: FnOnce(&I) -> R,
        R: ActionResult,
    {
        match self.select(input) {
            Some((index, case)) => self.run(index, case, input),
            None => fallback(input).into_result().map_err(MatchError::Fallback),
        }
    }

    /// A dispatcher trying this one's cases first, then `other`'s.
    ///
    /// Neither dispatcher is modified. The result keeps this dispatcher's label.
    pub fn or_else(&self, other: &Dispatcher<I>) -> Dispatcher<I> {
        let cases: Vec<_> = self.cases.iter().chain(other.cases.iter()).cloned().collect();
        Dispatcher {
            label: self.label.clone(),
            cases: cases.into(),
        }
    }
}

impl<I> Predicate<I> for Dispatcher<I>
where
    I: AsAny + ?Sized + 'static,
{
    fn test(&self, value: &I) -> bool {
        self.is_defined_at(value)
    }
}

impl<I> Action<I> for Dispatcher<I>
where
    I: AsAny + ?Sized + 'static,
{
    fn apply(&self, value: &I) -> Result<(), BoxError> {
        self.invoke(value).map_err(BoxError::from)
    }
}

impl<I: ?Sized> fmt::Debug for Dispatcher<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cases: Vec<String> = self
            .cases
            .iter()
            .enumerate()
            .map(|(index, case)| {
                CaseInfo {
                    index,
                    kind: case.kind(),
                    target: case.target(),
                }
                .to_string()
            })
            .collect();
        f.debug_struct("Dispatcher")
            .field("label", &self.label)
            .field("cases", &cases)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{builder::PfBuilder, testing::CallLog};
    use std::{
        any::Any,
        sync::{Arc, Mutex},
    };

    type Input = dyn Any + Send + Sync;

    #[test]
    fn earliest_case_wins() {
        let log = CallLog::new();
        let pf = PfBuilder::<Input>::new()
            .match_any(log.entry("first"))
            .match_any(log.entry("second"))
            .build();

        pf.invoke(&1_i32).unwrap();
        assert_eq!(log.calls(), vec!["first"]);
    }

    #[test]
    fn invoke_on_undefined_input_runs_nothing() {
        let log = CallLog::new();
        let pf = PfBuilder::<Input>::named("strings")
            .match_type::<String>(log.entry("string"))
            .build();

        let err = pf.invoke(&1_i32).unwrap_err();
        assert!(err.is_unmatched());
        assert!(err.to_string().contains("dispatcher `strings`"));
        assert!(log.is_empty());
    }

    #[test]
    fn is_defined_at_runs_no_action() {
        let log = CallLog::new();
        let pf = PfBuilder::<Input>::new()
            .match_type::<String>(log.entry("string"))
            .match_any(log.entry("any"))
            .build();

        assert!(pf.is_defined_at(&String::from("x")));
        assert!(pf.is_defined_at(&1_i32));
        assert!(log.is_empty());
    }

    #[test]
    fn lift_and_apply_or_else() {
        let pf = PfBuilder::<Input>::new()
            .match_type::<u8>(|_: &u8| {})
            .build();

        assert!(pf.lift(&1_u8).unwrap());
        assert!(!pf.lift(&1_u16).unwrap());

        let fell_back = Arc::new(Mutex::new(false));
        let flag = fell_back.clone();
        pf.apply_or_else(&1_u16, move |_: &Input| *flag.lock().unwrap() = true)
            .unwrap();
        assert!(*fell_back.lock().unwrap());

        let err = pf
            .apply_or_else(&1_u16, |_: &Input| -> Result<(), BoxError> { Err("no".into()) })
            .unwrap_err();
        assert!(matches!(err, MatchError::Fallback(_)));
    }

    #[test]
    fn action_failure_carries_case_index() {
        let pf = PfBuilder::<Input>::new()
            .match_type::<String>(|_: &String| {})
            .match_type::<i32>(|_: &i32| -> Result<(), BoxError> { Err("bad int".into()) })
            .build();
        let err = pf.invoke(&3_i32).unwrap_err();
        assert_eq!(err.case_index(), Some(1));
    }

    #[test]
    fn or_else_appends_cases() {
        let log = CallLog::new();
        let strings = PfBuilder::<Input>::new()
            .match_type::<String>(log.entry("string"))
            .build();
        let fallback = PfBuilder::<Input>::new().match_any(log.entry("other")).build();

        let total = strings.or_else(&fallback);
        assert_eq!(total.len(), 2);
        assert_eq!(strings.len(), 1);
        assert!(!strings.is_defined_at(&1_i32));
        assert!(total.is_defined_at(&1_i32));

        total.invoke(&String::from("x")).unwrap();
        total.invoke(&1_i32).unwrap();
        assert_eq!(log.calls(), vec!["string", "other"]);
    }

    #[test]
    fn nested_dispatcher_as_action() {
        let log = CallLog::new();
        let numbers = PfBuilder::<i32>::new()
            .match_equals(0_i32, log.entry("zero"))
            .match_any(log.entry("nonzero"))
            .build();
        let outer = PfBuilder::<Input>::new()
            .match_type::<i32>(numbers)
            .build();

        outer.invoke(&0_i32).unwrap();
        outer.invoke(&5_i32).unwrap();
        assert_eq!(log.calls(), vec!["zero", "nonzero"]);
    }

    #[test]
    fn debug_lists_cases() {
        let pf = PfBuilder::<u32>::named("codes")
            .match_equals(200_u32, |_: &u32| {})
            .match_any(|_: &u32| {})
            .build();
        let rendered = format!("{pf:?}");
        assert!(rendered.contains("codes"));
        assert!(rendered.contains("#0 equals<u32>"));
        assert!(rendered.contains("#1 any<u32>"));
    }
}
