//! Two-outcome computations that accumulate errors.
//!
//! [`Outcome`] is either a success value or a non-empty [`ErrorList`].
//! Sequential composition ([`Outcome::bind`]) stops at the first failure;
//! parallel composition ([`Outcome::combine`], [`Outcome::all`]) keeps going
//! and concatenates the errors of every failing operand in operand order.
//!
//! ```
//! use tessera_types::Outcome;
//!
//! let name: Outcome<&str, &str> = Outcome::failure("missing name");
//! let age: Outcome<u32, &str> = Outcome::success(42);
//! let email: Outcome<&str, &str> = Outcome::failure("bad email");
//!
//! let user = Outcome::combine3(name, age, email, |n, a, e| (n, a, e));
//! let errors: Vec<_> = user.errors().unwrap().iter().copied().collect();
//! assert_eq!(errors, vec!["missing name", "bad email"]);
//! ```

use std::fmt;
use std::ops::Deref;

use tracing::debug;

use crate::error::{AggregateError, TypeError, TypeResult};
use crate::list::PersistentList;
use crate::matcher::{Matcher, Split};
use crate::optional::Optional;

/// A [`PersistentList`] of errors that always holds at least one element.
#[derive(PartialEq, Eq, Hash)]
pub struct ErrorList<E>(PersistentList<E>);

impl<E> Clone for ErrorList<E> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<E> ErrorList<E> {
    /// A list holding exactly one error.
    pub fn single(error: E) -> Self {
        Self(PersistentList::singleton(error))
    }

    /// Wrap an existing list, rejecting the empty list.
    pub fn try_from_list(errors: PersistentList<E>) -> TypeResult<Self> {
        if errors.is_empty() {
            debug!("rejected empty error list");
            return Err(TypeError::InvalidArgument {
                reason: "error list must contain at least one error".into(),
            });
        }
        Ok(Self(errors))
    }

    /// The first error in accumulation order.
    pub fn first(&self) -> &E {
        match self.0.head() {
            Some(head) => head,
            None => unreachable!("ErrorList is never empty"),
        }
    }

    /// This list followed by `other`. The tail of `other` is shared.
    pub fn concat(&self, other: &Self) -> Self
    where
        E: Clone,
    {
        Self(self.0.append(&other.0))
    }

    /// This list with one more error at the end.
    pub fn append(&self, error: E) -> Self
    where
        E: Clone,
    {
        Self(self.0.append(&PersistentList::singleton(error)))
    }

    /// Transform every error in order.
    pub fn map<E2, F>(&self, f: F) -> ErrorList<E2>
    where
        F: FnMut(&E) -> E2,
    {
        ErrorList(self.0.map(f))
    }

    /// The underlying list.
    pub fn as_list(&self) -> &PersistentList<E> {
        &self.0
    }

    /// Consume the wrapper, returning the underlying list.
    pub fn into_list(self) -> PersistentList<E> {
        self.0
    }
}

impl<E> Deref for ErrorList<E> {
    type Target = PersistentList<E>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<E> TryFrom<PersistentList<E>> for ErrorList<E> {
    type Error = TypeError;

    fn try_from(errors: PersistentList<E>) -> TypeResult<Self> {
        Self::try_from_list(errors)
    }
}

impl<E> From<ErrorList<E>> for PersistentList<E> {
    fn from(errors: ErrorList<E>) -> Self {
        errors.0
    }
}

impl<'a, E> IntoIterator for &'a ErrorList<E> {
    type Item = &'a E;
    type IntoIter = crate::list::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<E: fmt::Debug> fmt::Debug for ErrorList<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl<E: fmt::Display> fmt::Display for ErrorList<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// The result of a computation: a success value or accumulated errors.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<S, E> {
    /// The computation produced a value.
    Success(S),
    /// The computation failed with one or more errors.
    Failure(ErrorList<E>),
}

impl<S, E> Outcome<S, E> {
    /// A successful outcome.
    pub fn success(value: S) -> Self {
        Self::Success(value)
    }

    /// A failed outcome carrying a single error.
    pub fn failure(error: E) -> Self {
        Self::Failure(ErrorList::single(error))
    }

    /// A failed outcome carrying `errors`.
    ///
    /// Fails with [`TypeError::InvalidArgument`] if `errors` is empty.
    pub fn failures(errors: PersistentList<E>) -> TypeResult<Self> {
        ErrorList::try_from_list(errors).map(Self::Failure)
    }

    /// A failed outcome from an already-validated error list.
    pub fn from_errors(errors: ErrorList<E>) -> Self {
        Self::Failure(errors)
    }

    /// Returns `true` if this is a success.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a failure.
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// The success value, if any.
    pub fn value(&self) -> Option<&S> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// The accumulated errors, if any.
    pub fn errors(&self) -> Option<&ErrorList<E>> {
        match self {
            Self::Success(_) => None,
            Self::Failure(errors) => Some(errors),
        }
    }

    /// Borrow the payloads.
    pub fn as_ref(&self) -> Outcome<&S, E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(errors) => Outcome::Failure(errors.clone()),
        }
    }

    /// Transform the success value. A failure passes through untouched and
    /// `f` is not called.
    pub fn map<S2, F>(self, f: F) -> Outcome<S2, E>
    where
        F: FnOnce(S) -> S2,
    {
        match self {
            Self::Success(value) => Outcome::Success(f(value)),
            Self::Failure(errors) => Outcome::Failure(errors),
        }
    }

    /// Chain a computation that may itself fail. A failure short-circuits.
    pub fn bind<S2, F>(self, f: F) -> Outcome<S2, E>
    where
        F: FnOnce(S) -> Outcome<S2, E>,
    {
        match self {
            Self::Success(value) => f(value),
            Self::Failure(errors) => Outcome::Failure(errors),
        }
    }

    /// Transform every accumulated error. A success passes through.
    pub fn map_errors<E2, F>(self, f: F) -> Outcome<S, E2>
    where
        F: FnMut(&E) -> E2,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(errors) => Outcome::Failure(errors.map(f)),
        }
    }

    /// Merge two outcomes.
    ///
    /// If both succeed, their values are combined with `f`. Otherwise the
    /// result fails with the errors of `a` followed by the errors of `b`.
    pub fn combine<A, B, F>(a: Outcome<A, E>, b: Outcome<B, E>, f: F) -> Self
    where
        E: Clone,
        F: FnOnce(A, B) -> S,
    {
        match (a, b) {
            (Outcome::Success(a), Outcome::Success(b)) => Self::Success(f(a, b)),
            (Outcome::Failure(x), Outcome::Failure(y)) => Self::Failure(x.concat(&y)),
            (Outcome::Failure(errors), _) | (_, Outcome::Failure(errors)) => {
                Self::Failure(errors)
            }
        }
    }

    /// Merge three outcomes, accumulating errors in operand order.
    pub fn combine3<A, B, C, F>(
        a: Outcome<A, E>,
        b: Outcome<B, E>,
        c: Outcome<C, E>,
        f: F,
    ) -> Self
    where
        E: Clone,
        F: FnOnce(A, B, C) -> S,
    {
        let ab = Outcome::combine(a, b, |a, b| (a, b));
        Outcome::combine(ab, c, |(a, b), c| f(a, b, c))
    }

    /// Extract the success value, or fail with every accumulated error.
    pub fn get_or_throw(self) -> Result<S, AggregateError<E>>
    where
        E: fmt::Display,
    {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(errors) => {
                let err = AggregateError::new(errors);
                debug!(count = err.len(), message = %err.message(), "outcome unwrapped as failure");
                Err(err)
            }
        }
    }

    /// The success value, or `default` on failure.
    pub fn get_or_else(self, default: S) -> S {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// The success value, or the result of `f` applied to the errors.
    pub fn get_or_else_with<F>(self, f: F) -> S
    where
        F: FnOnce(ErrorList<E>) -> S,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(errors) => f(errors),
        }
    }

    /// Drop the errors, keeping only the success value.
    pub fn to_optional(self) -> Optional<S> {
        match self {
            Self::Success(value) => Optional::Present(value),
            Self::Failure(_) => Optional::Absent,
        }
    }

    /// Convert into a standard [`Result`].
    pub fn into_result(self) -> Result<S, ErrorList<E>> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(errors) => Err(errors),
        }
    }

    /// Iterate over the success value: one element on success, none on
    /// failure.
    pub fn iter(&self) -> std::option::IntoIter<&S> {
        self.value().into_iter()
    }

    /// Take the outcome apart with one handler per variant.
    pub fn fold<R>(
        self,
        on_success: impl FnOnce(S) -> R,
        on_failure: impl FnOnce(ErrorList<E>) -> R,
    ) -> R {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(errors) => on_failure(errors),
        }
    }

    /// Start a matcher chain by binding the success handler.
    pub fn match_success<'a, R, H>(self, handler: H) -> Matcher<'a, R, ErrorList<E>>
    where
        S: 'a,
        H: FnOnce(S) -> R + 'a,
    {
        let source = match self {
            Self::Success(value) => Split::Hit(value),
            Self::Failure(errors) => Split::Rest(errors),
        };
        Matcher::new(source, handler)
    }

    /// Start a matcher chain by binding the failure handler.
    pub fn match_failure<'a, R, H>(self, handler: H) -> Matcher<'a, R, S>
    where
        E: 'a,
        H: FnOnce(ErrorList<E>) -> R + 'a,
    {
        let source = match self {
            Self::Failure(errors) => Split::Hit(errors),
            Self::Success(value) => Split::Rest(value),
        };
        Matcher::new(source, handler)
    }
}

impl<S, E: Clone> Outcome<S, E> {
    /// Merge any number of outcomes into one.
    ///
    /// Succeeds with every value, in order, only if every operand succeeds.
    /// Otherwise fails with the concatenated errors of all failing operands.
    pub fn all<I>(outcomes: I) -> Outcome<Vec<S>, E>
    where
        I: IntoIterator<Item = Outcome<S, E>>,
    {
        let mut values = Vec::new();
        let mut failures: Vec<ErrorList<E>> = Vec::new();
        for outcome in outcomes {
            match outcome {
                Outcome::Success(value) => values.push(value),
                Outcome::Failure(errors) => failures.push(errors),
            }
        }
        let Some(last) = failures.pop() else {
            return Outcome::Success(values);
        };
        // Build back to front so every concatenation shares the accumulated
        // tail and each error is copied once.
        let merged = failures
            .iter()
            .rev()
            .fold(last, |acc, errors| errors.concat(&acc));
        Outcome::Failure(merged)
    }
}

impl<S, E> From<Result<S, E>> for Outcome<S, E> {
    fn from(result: Result<S, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::failure(error),
        }
    }
}

impl<S, E> From<Outcome<S, E>> for Result<S, ErrorList<E>> {
    fn from(outcome: Outcome<S, E>) -> Self {
        outcome.into_result()
    }
}

impl<S: fmt::Display, E: fmt::Display> fmt::Display for Outcome<S, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => write!(f, "Success({value})"),
            Self::Failure(errors) => write!(f, "Failure({errors})"),
        }
    }
}

impl<'a, S, E> IntoIterator for &'a Outcome<S, E> {
    type Item = &'a S;
    type IntoIter = std::option::IntoIter<&'a S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use serde::de::{Deserialize, Deserializer, Error as _};
    use serde::ser::{Serialize, Serializer};

    use super::ErrorList;
    use crate::list::PersistentList;

    impl<E: Serialize> Serialize for ErrorList<E> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            self.0.serialize(serializer)
        }
    }

    impl<'de, E: Deserialize<'de>> Deserialize<'de> for ErrorList<E> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let list = PersistentList::<E>::deserialize(deserializer)?;
            ErrorList::try_from_list(list).map_err(D::Error::custom)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use proptest::prelude::*;

    use super::*;

    type Check = Outcome<i32, &'static str>;

    fn errs(items: &[&'static str]) -> ErrorList<&'static str> {
        ErrorList::try_from_list(PersistentList::from(items)).unwrap()
    }

    fn error_vec<S>(outcome: &Outcome<S, &'static str>) -> Vec<&'static str> {
        outcome
            .errors()
            .map(|e| e.iter().copied().collect())
            .unwrap_or_default()
    }

    #[test]
    fn failure_rejects_empty_list() {
        let result = Check::failures(PersistentList::empty());
        assert!(matches!(result, Err(TypeError::InvalidArgument { .. })));
    }

    #[test]
    fn failures_keeps_order() {
        let outcome = Check::failures(PersistentList::from(vec!["a", "b"])).unwrap();
        assert_eq!(error_vec(&outcome), vec!["a", "b"]);
    }

    #[test]
    fn error_list_first_and_len() {
        let list = errs(&["x", "y", "z"]);
        assert_eq!(*list.first(), "x");
        assert_eq!(list.len(), 3);
        assert_eq!(list.to_string(), "[x, y, z]");
    }

    #[test]
    fn error_list_try_from() {
        let empty: PersistentList<u8> = PersistentList::empty();
        assert!(ErrorList::try_from(empty).is_err());
        let list = ErrorList::try_from(PersistentList::singleton(1u8)).unwrap();
        assert_eq!(PersistentList::from(list), PersistentList::singleton(1u8));
    }

    #[test]
    fn map_transforms_success() {
        assert_eq!(Check::success(2).map(|x| x + 1), Outcome::success(3));
    }

    #[test]
    fn map_on_failure_never_calls_handler() {
        let calls = Cell::new(0);
        let failed = Check::failure("boom").map(|x| {
            calls.set(calls.get() + 1);
            x
        });
        assert_eq!(failed, Check::failure("boom"));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn bind_on_failure_keeps_errors() {
        let calls = Cell::new(0);
        let source = Check::from_errors(errs(&["e1", "e2"]));
        let bound: Outcome<String, &str> = source.bind(|x| {
            calls.set(calls.get() + 1);
            Outcome::success(x.to_string())
        });
        assert_eq!(calls.get(), 0);
        assert_eq!(error_vec(&bound), vec!["e1", "e2"]);
    }

    #[test]
    fn bind_flattens() {
        let halve = |x: i32| {
            if x % 2 == 0 {
                Check::success(x / 2)
            } else {
                Check::failure("odd")
            }
        };
        assert_eq!(Check::success(8).bind(halve).bind(halve), Check::success(2));
        assert_eq!(Check::success(6).bind(halve).bind(halve), Check::failure("odd"));
    }

    #[test]
    fn map_errors_transforms_every_error() {
        let outcome = Check::from_errors(errs(&["a", "bb"])).map_errors(|e| e.len());
        let lens: Vec<usize> = outcome.errors().unwrap().iter().copied().collect();
        assert_eq!(lens, vec![1, 2]);
        assert_eq!(Check::success(1).map_errors(|e| e.len()), Outcome::success(1));
    }

    #[test]
    fn combine_successes() {
        let sum = Outcome::combine(Check::success(2), Check::success(3), |a, b| a + b);
        assert_eq!(sum, Outcome::success(5));
    }

    #[test]
    fn combine_accumulates_in_operand_order() {
        let merged: Outcome<(i32, i32), &str> = Outcome::combine(
            Check::from_errors(errs(&["e1"])),
            Check::from_errors(errs(&["e2", "e3"])),
            |a, b| (a, b),
        );
        assert_eq!(error_vec(&merged), vec!["e1", "e2", "e3"]);
    }

    #[test]
    fn combine_single_failure_passes_through() {
        let left: Outcome<i32, &str> =
            Outcome::combine(Check::failure("left"), Check::success(1), |a, b| a + b);
        assert_eq!(error_vec(&left), vec!["left"]);
        let right: Outcome<i32, &str> =
            Outcome::combine(Check::success(1), Check::failure("right"), |a, b| a + b);
        assert_eq!(error_vec(&right), vec!["right"]);
    }

    #[test]
    fn success_operands_contribute_no_errors() {
        let merged = Outcome::combine3(
            Check::from_errors(errs(&["e1"])),
            Check::success(10),
            Check::from_errors(errs(&["e2", "e3"])),
            |a, b, c| a + b + c,
        );
        assert_eq!(error_vec(&merged), vec!["e1", "e2", "e3"]);
    }

    #[test]
    fn combine_does_not_call_combiner_on_failure() {
        let calls = Cell::new(0);
        let _ = Outcome::combine(Check::failure("x"), Check::success(1), |a, b| {
            calls.set(calls.get() + 1);
            a + b
        });
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn all_collects_values() {
        let outcome = Check::all(vec![Check::success(1), Check::success(2)]);
        assert_eq!(outcome, Outcome::success(vec![1, 2]));
        assert_eq!(Check::all(Vec::new()), Outcome::success(Vec::new()));
    }

    #[test]
    fn all_accumulates_every_failure() {
        let outcome = Check::all(vec![
            Check::from_errors(errs(&["e1"])),
            Check::success(5),
            Check::from_errors(errs(&["e2", "e3"])),
            Check::failure("e4"),
        ]);
        assert_eq!(error_vec(&outcome), vec!["e1", "e2", "e3", "e4"]);
    }

    #[test]
    fn get_or_throw_success() {
        assert_eq!(Check::success(9).get_or_throw().unwrap(), 9);
    }

    #[test]
    fn get_or_throw_joins_messages() {
        let err = Check::from_errors(errs(&["no name", "no age"]))
            .get_or_throw()
            .unwrap_err();
        assert_eq!(err.message(), "no name; no age");
        assert_eq!(err.errors(), &errs(&["no name", "no age"]));
        assert_eq!(err.messages().len(), 2);
    }

    #[test]
    fn get_or_else_variants() {
        assert_eq!(Check::success(1).get_or_else(0), 1);
        assert_eq!(Check::failure("x").get_or_else(0), 0);
        assert_eq!(
            Check::from_errors(errs(&["a", "b"])).get_or_else_with(|e| e.len() as i32),
            2
        );
    }

    #[test]
    fn conversions() {
        assert_eq!(Check::success(3).to_optional(), Optional::Present(3));
        assert_eq!(Check::failure("x").to_optional(), Optional::Absent);

        let from_std = Check::from(Err::<i32, &str>("bad"));
        assert_eq!(from_std, Check::failure("bad"));
        let ok = Check::from(Ok::<i32, &str>(4));
        assert_eq!(ok, Check::success(4));

        let back: Result<i32, ErrorList<&str>> = Check::failure("bad").into();
        assert_eq!(back, Err(errs(&["bad"])));
    }

    #[test]
    fn equality_is_variant_aware() {
        assert_eq!(Check::success(1), Check::success(1));
        assert_ne!(Check::success(1), Check::success(2));
        assert_ne!(Check::success(1), Check::failure("1"));
        assert_eq!(
            Check::from_errors(errs(&["a", "b"])),
            Check::from_errors(errs(&["a", "b"]))
        );
        assert_ne!(
            Check::from_errors(errs(&["a", "b"])),
            Check::from_errors(errs(&["b", "a"]))
        );
    }

    #[test]
    fn iteration_yields_success_only() {
        let ok = Check::success(7);
        assert_eq!(ok.iter().copied().collect::<Vec<_>>(), vec![7]);
        assert_eq!(ok.iter().count(), 1);
        assert_eq!(Check::failure("x").iter().count(), 0);
    }

    #[test]
    fn display_renders_variant() {
        assert_eq!(Check::success(1).to_string(), "Success(1)");
        assert_eq!(
            Check::from_errors(errs(&["a", "b"])).to_string(),
            "Failure([a, b])"
        );
    }

    #[test]
    fn match_success_then_other_case() {
        let render = |outcome: Check| {
            outcome
                .match_success(|v| format!("ok {v}"))
                .match_other_case(|errors| format!("{} errors", errors.len()))
        };
        assert_eq!(render(Check::success(1)), "ok 1");
        assert_eq!(render(Check::from_errors(errs(&["a", "b"]))), "2 errors");
    }

    #[test]
    fn match_failure_then_other_case() {
        let render = |outcome: Check| {
            outcome
                .match_failure(|errors| errors.first().to_string())
                .match_other_case(|v| v.to_string())
        };
        assert_eq!(render(Check::success(5)), "5");
        assert_eq!(render(Check::failure("nope")), "nope");
    }

    #[test]
    fn fold_calls_one_handler() {
        let success_calls = Cell::new(0);
        let result = Check::failure("x").fold(
            |v| {
                success_calls.set(success_calls.get() + 1);
                v
            },
            |errors| errors.len() as i32 * -1,
        );
        assert_eq!(result, -1);
        assert_eq!(success_calls.get(), 0);
    }

    #[test]
    fn outcome_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Outcome<String, String>>();
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_rejects_empty_error_list() {
        let parsed: Result<Outcome<i32, String>, _> = serde_json::from_str(r#"{"Failure":[]}"#);
        assert!(parsed.is_err());
        let outcome: Outcome<i32, String> = Outcome::failure("x".to_string());
        let json = serde_json::to_string(&outcome).unwrap();
        assert_eq!(json, r#"{"Failure":["x"]}"#);
        let parsed: Outcome<i32, String> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, outcome);
    }

    fn outcome_strategy() -> impl Strategy<Value = Outcome<i32, u8>> {
        prop_oneof![
            any::<i32>().prop_map(Outcome::success),
            proptest::collection::vec(any::<u8>(), 1..5).prop_map(|errors| {
                Outcome::failures(PersistentList::from(errors)).unwrap()
            }),
        ]
    }

    proptest! {
        #[test]
        fn map_identity(outcome in outcome_strategy()) {
            prop_assert_eq!(outcome.clone().map(|x| x), outcome);
        }

        #[test]
        fn map_composition(outcome in outcome_strategy()) {
            let f = |x: i32| i64::from(x) * 2;
            let g = |x: i64| x - 7;
            prop_assert_eq!(outcome.clone().map(f).map(g), outcome.map(|x| g(f(x))));
        }

        #[test]
        fn bind_left_identity(x in any::<i32>()) {
            let f = |v: i32| if v >= 0 { Outcome::success(v) } else { Outcome::failure(0u8) };
            prop_assert_eq!(Outcome::<i32, u8>::success(x).bind(f), f(x));
        }

        #[test]
        fn bind_right_identity(outcome in outcome_strategy()) {
            prop_assert_eq!(outcome.clone().bind(Outcome::success), outcome);
        }

        #[test]
        fn combine_error_count_adds(a in outcome_strategy(), b in outcome_strategy()) {
            let count = |o: &Outcome<i32, u8>| o.errors().map_or(0, |e| e.len());
            let expected = count(&a) + count(&b);
            let merged = Outcome::combine(a, b, |x, y| x.wrapping_add(y));
            prop_assert_eq!(count(&merged), expected);
        }
    }
}
