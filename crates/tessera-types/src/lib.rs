//! Immutable variant types with value semantics.
//!
//! This crate provides three closed variant families and a fluent way to
//! match over them:
//!
//! # Key Types
//!
//! - [`PersistentList`] — Singly-linked list with shared, immutable tails
//! - [`Optional`] — A value that is `Present` or `Absent`
//! - [`Outcome`] — A `Success` value or a non-empty [`ErrorList`] that
//!   accumulates when outcomes are combined
//! - [`Matcher`] — Two-stage (or N-stage) fluent match with an exhaustive
//!   terminal call
//! - [`TypeError`] / [`AggregateError`] — Failures returned by the
//!   unconditional extractors
//!
//! Every type is a plain enum (or exposes one through
//! [`PersistentList::view`]), so a native `match` is always available. The
//! matcher chain is a convenience over it:
//!
//! ```
//! use tessera_types::Optional;
//!
//! let shown = Optional::from(Some(5))
//!     .map(|x| x * 2)
//!     .to_outcome("missing")
//!     .match_success(|v| v.to_string())
//!     .match_any(|| "?".to_string());
//! assert_eq!(shown, "10");
//! ```

pub mod error;
pub mod list;
pub mod matcher;
pub mod optional;
pub mod outcome;

pub use error::{AggregateError, BoxedError, TypeError, TypeResult};
pub use list::{ListView, PersistentList};
pub use matcher::{Matcher, Split};
pub use optional::Optional;
pub use outcome::{ErrorList, Outcome};
