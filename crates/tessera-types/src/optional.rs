use std::fmt;

use tracing::trace;

use crate::error::{TypeError, TypeResult};
use crate::matcher::{Matcher, Split};
use crate::outcome::Outcome;

/// An immutable value that is either present or absent.
///
/// A `Present` never wraps a missing value: converting from `None` always
/// yields [`Optional::Absent`].
///
/// # Examples
///
/// ```
/// use tessera_types::Optional;
///
/// let doubled = Optional::from(Some(5)).map(|x| x * 2);
/// assert_eq!(doubled.get_or_else(0), 10);
///
/// let missing: Optional<i32> = Optional::from(None);
/// assert_eq!(missing.map(|x| x * 2).get_or_else(0), 0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Optional<T> {
    /// A value is held.
    Present(T),
    /// No value is held.
    Absent,
}

impl<T> Optional<T> {
    /// Wrap a known-present value.
    pub fn present(value: T) -> Self {
        Self::Present(value)
    }

    /// The absent value.
    pub const fn absent() -> Self {
        Self::Absent
    }

    /// Returns `true` if a value is held.
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` if no value is held.
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Borrow the held value.
    pub fn as_ref(&self) -> Optional<&T> {
        match self {
            Self::Present(value) => Optional::Present(value),
            Self::Absent => Optional::Absent,
        }
    }

    /// The held value, or `default`.
    pub fn get_or_else(self, default: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => default,
        }
    }

    /// The held value, or the result of `f`. `f` only runs when absent.
    pub fn get_or_else_with<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Present(value) => value,
            Self::Absent => f(),
        }
    }

    /// The held value, or [`TypeError::OptionAbsent`].
    pub fn get_or_throw(self) -> TypeResult<T> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Absent => {
                trace!("optional unwrapped while absent");
                Err(TypeError::OptionAbsent)
            }
        }
    }

    /// Transform the held value. `f` is not called when absent.
    pub fn map<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => Optional::Present(f(value)),
            Self::Absent => Optional::Absent,
        }
    }

    /// Chain a computation that may itself be absent.
    pub fn bind<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self {
            Self::Present(value) => f(value),
            Self::Absent => Optional::Absent,
        }
    }

    /// Keep the value only if `predicate` holds for it.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Present(value) if predicate(&value) => Self::Present(value),
            _ => Self::Absent,
        }
    }

    /// This value if present, otherwise the result of `f`.
    pub fn or_else<F>(self, f: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Present(value) => Self::Present(value),
            Self::Absent => f(),
        }
    }

    /// Run `action` on the held value, if any.
    pub fn do_if_some<F>(&self, action: F) -> &Self
    where
        F: FnOnce(&T),
    {
        if let Self::Present(value) = self {
            action(value);
        }
        self
    }

    /// Run `action` if no value is held.
    pub fn do_if_none<F>(&self, action: F) -> &Self
    where
        F: FnOnce(),
    {
        if self.is_absent() {
            action();
        }
        self
    }

    /// Convert to an [`Outcome`], failing with `error` when absent.
    pub fn to_outcome<E>(self, error: E) -> Outcome<T, E> {
        match self {
            Self::Present(value) => Outcome::Success(value),
            Self::Absent => Outcome::failure(error),
        }
    }

    /// Convert to an [`Outcome`], building the error only when absent.
    pub fn to_outcome_with<E, F>(self, factory: F) -> Outcome<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Present(value) => Outcome::Success(value),
            Self::Absent => Outcome::failure(factory()),
        }
    }

    /// Convert into a standard [`Option`].
    pub fn into_option(self) -> Option<T> {
        self.into()
    }

    /// Iterate over the held value: one element if present, none if absent.
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        match self {
            Self::Present(value) => Some(value).into_iter(),
            Self::Absent => None.into_iter(),
        }
    }

    /// Take the value apart with one handler per variant.
    pub fn fold<R>(
        self,
        on_present: impl FnOnce(T) -> R,
        on_absent: impl FnOnce() -> R,
    ) -> R {
        match self {
            Self::Present(value) => on_present(value),
            Self::Absent => on_absent(),
        }
    }

    /// Start a matcher chain by binding the present handler.
    pub fn match_present<'a, R, H>(self, handler: H) -> Matcher<'a, R, ()>
    where
        T: 'a,
        H: FnOnce(T) -> R + 'a,
    {
        let source = match self {
            Self::Present(value) => Split::Hit(value),
            Self::Absent => Split::Rest(()),
        };
        Matcher::new(source, handler)
    }

    /// Start a matcher chain by binding the absent handler.
    pub fn match_absent<'a, R, H>(self, handler: H) -> Matcher<'a, R, T>
    where
        H: FnOnce() -> R + 'a,
    {
        let source = match self {
            Self::Absent => Split::Hit(()),
            Self::Present(value) => Split::Rest(value),
        };
        Matcher::new(source, move |()| handler())
    }
}

impl<T: AsRef<str>> Optional<T> {
    /// Wrap text, treating the empty string as absent.
    ///
    /// Works for any text type (`&str`, `String`, `Box<str>`, ...); the
    /// payload keeps the caller's type.
    pub fn from_text(text: T) -> Self {
        if text.as_ref().is_empty() {
            Self::Absent
        } else {
            Self::Present(text)
        }
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Present(value),
            None => Self::Absent,
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        match value {
            Optional::Present(value) => Some(value),
            Optional::Absent => None,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present(value) => write!(f, "Present({value})"),
            Self::Absent => write!(f, "Absent"),
        }
    }
}

impl<T> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Optional<T> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> FromIterator<Optional<T>> for Optional<Vec<T>> {
    /// Present with every value if all inputs are present, absent otherwise.
    fn from_iter<I: IntoIterator<Item = Optional<T>>>(iter: I) -> Self {
        iter.into_iter()
            .map(Optional::into_option)
            .collect::<Option<Vec<T>>>()
            .into()
    }
}
