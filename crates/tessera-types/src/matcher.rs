//! Fluent, exhaustive matching over variant families.
//!
//! Every variant type in this crate is a plain enum, so a native `match` is
//! always available. The [`Matcher`] chain is a convenience layer on top of
//! it: the caller binds a handler for one variant, then closes the chain
//! with either
//!
//! - [`Matcher::match_other_case`], which takes the handler for the only
//!   remaining variant and is therefore exhaustive, or
//! - [`Matcher::match_any`], which takes a catch-all for every variant that
//!   was not bound.
//!
//! Nothing runs while the chain is being built. Exactly one handler runs,
//! once, when the terminal call is made.
//!
//! Families with more than two variants describe their remaining cases as
//! nested [`Split`]s and bind further stages with [`Matcher::match_case`].
//!
//! ```
//! use tessera_types::matcher::{Matcher, Split};
//!
//! enum Shape {
//!     Circle(f64),
//!     Square(f64),
//!     Point,
//! }
//!
//! fn area(shape: Shape) -> f64 {
//!     let source = match shape {
//!         Shape::Circle(r) => Split::Hit(r),
//!         Shape::Square(s) => Split::Rest(Split::Hit(s)),
//!         Shape::Point => Split::Rest(Split::Rest(())),
//!     };
//!     Matcher::new(source, |r| 3.0 * r * r)
//!         .match_case(|s| s * s)
//!         .match_other_case(|()| 0.0)
//! }
//!
//! assert_eq!(area(Shape::Square(2.0)), 4.0);
//! assert_eq!(area(Shape::Point), 0.0);
//! ```

use std::fmt;

/// A value split into "the variant being matched" and "everything else".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Split<Hit, Rest> {
    /// The source is the variant being matched at this stage.
    Hit(Hit),
    /// The source is one of the remaining variants.
    Rest(Rest),
}

enum Stage<'a, R, Rest> {
    /// A handler has been paired with its payload but not yet called.
    Bound(Box<dyn FnOnce() -> R + 'a>),
    /// No bound handler applies; the payload of the remaining cases.
    Open(Rest),
}

/// An in-progress match with at least one variant handled.
///
/// `R` is the result every handler produces; `Rest` is the payload of the
/// variants that have not been bound yet.
#[must_use = "a matcher does nothing until `match_other_case` or `match_any` is called"]
pub struct Matcher<'a, R, Rest> {
    stage: Stage<'a, R, Rest>,
}

impl<'a, R, Rest> Matcher<'a, R, Rest> {
    /// Bind `handler` to the [`Split::Hit`] side of `source`.
    ///
    /// The handler is stored with its payload and only called by a terminal
    /// operation.
    pub fn new<Hit, H>(source: Split<Hit, Rest>, handler: H) -> Self
    where
        Hit: 'a,
        H: FnOnce(Hit) -> R + 'a,
    {
        let stage = match source {
            Split::Hit(payload) => Stage::Bound(Box::new(move || handler(payload))),
            Split::Rest(rest) => Stage::Open(rest),
        };
        Self { stage }
    }

    /// Returns `true` if an already-bound handler will produce the result.
    pub fn is_resolved(&self) -> bool {
        matches!(self.stage, Stage::Bound(_))
    }

    /// Close the chain with the handler for the remaining variant.
    pub fn match_other_case<H>(self, handler: H) -> R
    where
        H: FnOnce(Rest) -> R,
    {
        match self.stage {
            Stage::Bound(bound) => bound(),
            Stage::Open(rest) => handler(rest),
        }
    }

    /// Close the chain with a catch-all for every variant not yet bound.
    pub fn match_any<H>(self, fallback: H) -> R
    where
        H: FnOnce() -> R,
    {
        match self.stage {
            Stage::Bound(bound) => bound(),
            Stage::Open(_) => fallback(),
        }
    }

    /// Like [`match_any`](Self::match_any), but the catch-all receives the
    /// unmatched payload.
    pub fn match_any_with<H>(self, fallback: H) -> R
    where
        H: FnOnce(Rest) -> R,
    {
        self.match_other_case(fallback)
    }
}

impl<'a, R, Next, Rest> Matcher<'a, R, Split<Next, Rest>> {
    /// Bind the handler for the next variant of a family with more than two
    /// variants.
    pub fn match_case<H>(self, handler: H) -> Matcher<'a, R, Rest>
    where
        Next: 'a,
        H: FnOnce(Next) -> R + 'a,
    {
        match self.stage {
            Stage::Bound(bound) => Matcher {
                stage: Stage::Bound(bound),
            },
            Stage::Open(source) => Matcher::new(source, handler),
        }
    }
}

impl<R, Rest: fmt::Debug> fmt::Debug for Matcher<'_, R, Rest> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.stage {
            Stage::Bound(_) => f.write_str("Matcher(Bound)"),
            Stage::Open(rest) => f.debug_tuple("Matcher").field(rest).finish(),
        }
    }
}
