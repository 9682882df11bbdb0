//! Function helpers for tessera.
//!
//! Small combinators that pair well with the variant types in
//! `tessera-types`: identity, constant functions, composition, argument
//! flipping, and conversion between two-argument and curried functions.
//! None of them hold state.

/// Returns its argument unchanged.
pub fn identity<T>(value: T) -> T {
    value
}

/// A function that ignores its argument and always returns `value`.
pub fn constant<A, T: Clone>(value: T) -> impl Fn(A) -> T {
    move |_| value.clone()
}

/// `g` applied to the result of `f`.
pub fn compose<A, B, C, F, G>(f: F, g: G) -> impl Fn(A) -> C
where
    F: Fn(A) -> B,
    G: Fn(B) -> C,
{
    move |a| g(f(a))
}

/// `f` with its two arguments swapped.
pub fn flip<A, B, C, F>(f: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |b, a| f(a, b)
}

/// Turn a two-argument function into one that takes its arguments one at a
/// time.
pub fn curry<A, B, C, F>(f: F) -> impl Fn(A) -> Box<dyn Fn(B) -> C>
where
    A: Clone + 'static,
    B: 'static,
    C: 'static,
    F: Fn(A, B) -> C + Clone + 'static,
{
    move |a| {
        let f = f.clone();
        let applied: Box<dyn Fn(B) -> C> = Box::new(move |b| f(a.clone(), b));
        applied
    }
}

/// Turn a curried function back into a two-argument one.
pub fn uncurry<A, B, C, F, G>(f: F) -> impl Fn(A, B) -> C
where
    F: Fn(A) -> G,
    G: Fn(B) -> C,
{
    move |a, b| f(a)(b)
}
