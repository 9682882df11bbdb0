//! Error types for variant operations.

use std::error::Error as StdError;
use std::fmt;

use thiserror::Error;

use crate::list::PersistentList;
use crate::outcome::ErrorList;

/// Errors produced by operations on the variant types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeError {
    /// A required argument violated its precondition.
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    /// Unconditional extraction was attempted on an absent value.
    #[error("option is absent")]
    OptionAbsent,

    /// An unseeded fold was attempted on an empty list.
    #[error("sequence contains no elements")]
    EmptySequence,
}

/// Convenience alias for fallible variant operations.
pub type TypeResult<T> = Result<T, TypeError>;

/// Separator placed between messages in [`AggregateError::message`].
pub const MESSAGE_SEPARATOR: &str = "; ";

/// Boxed form every error in an [`AggregateError`] can be converted into.
pub type BoxedError = Box<dyn StdError + Send + Sync + 'static>;

/// The error returned when a failed [`Outcome`](crate::Outcome) is
/// unwrapped unconditionally.
///
/// Carries every accumulated error in order, the rendered message of each
/// one, and a single joined message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct AggregateError<E> {
    message: String,
    errors: ErrorList<E>,
    messages: PersistentList<String>,
}

impl<E: fmt::Display> AggregateError<E> {
    /// Build an aggregate from a non-empty error list.
    pub fn new(errors: ErrorList<E>) -> Self {
        let messages: PersistentList<String> = errors.iter().map(ToString::to_string).collect();
        let message = messages
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(MESSAGE_SEPARATOR);
        Self {
            message,
            errors,
            messages,
        }
    }
}

impl<E> AggregateError<E> {
    /// The joined, human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The original errors, in accumulation order.
    pub fn errors(&self) -> &ErrorList<E> {
        &self.errors
    }

    /// The rendered message of each error, parallel to [`errors`](Self::errors).
    pub fn messages(&self) -> &PersistentList<String> {
        &self.messages
    }

    /// Number of accumulated errors. Always at least one.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Consume the aggregate, returning the original errors.
    pub fn into_errors(self) -> ErrorList<E> {
        self.errors
    }

    /// Convert every error into a common boxed error representation.
    ///
    /// Types that already implement [`std::error::Error`] are boxed as-is;
    /// plain messages such as `String` or `&str` are wrapped individually.
    pub fn boxed_errors(&self) -> Vec<BoxedError>
    where
        E: Clone + Into<BoxedError>,
    {
        self.errors.iter().cloned().map(Into::into).collect()
    }
}
