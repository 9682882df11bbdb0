//! Persistent singly-linked list with structural sharing.
//!
//! [`PersistentList`] is either empty or a cons cell holding a head element
//! and a shared tail. Prepending never copies the tail: every list derived
//! from another points at the same `Arc`-managed nodes, so derived lists are
//! O(1) to build and safe to read from many threads at once.
//!
//! # Invariants
//!
//! - A list never mutates after construction.
//! - Equality is element-wise and order-sensitive.
//! - The cached length of a cons cell is always `1 + tail.len()`.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;
use std::sync::Arc;

use tracing::trace;

use crate::error::{TypeError, TypeResult};
use crate::matcher::{Matcher, Split};

/// Value fed to the hasher for the empty list and at the end of every list.
const EMPTY_HASH: u64 = 0x9e37_79b9_7f4a_7c15;

struct Node<T> {
    head: T,
    tail: PersistentList<T>,
    len: usize,
}

/// An immutable singly-linked list whose tails are shared between lists.
///
/// # Examples
///
/// ```
/// use tessera_types::PersistentList;
///
/// let tail = PersistentList::from(vec![2, 3]);
/// let list = tail.prepend(1);
/// assert_eq!(list.to_string(), "[1, 2, 3]");
/// assert_eq!(tail.len(), 2);
/// ```
pub struct PersistentList<T> {
    node: Option<Arc<Node<T>>>,
}

/// Borrowed view of a list as one of its two variants.
///
/// Matching on the view is the exhaustive way to take a list apart.
#[derive(Debug)]
pub enum ListView<'a, T> {
    /// The empty list.
    Empty,
    /// A head element followed by a shared tail.
    Cons {
        head: &'a T,
        tail: &'a PersistentList<T>,
    },
}

impl<T> Clone for ListView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ListView<'_, T> {}

impl<T> PersistentList<T> {
    /// The empty list. Holds no state and allocates nothing.
    pub const fn empty() -> Self {
        Self { node: None }
    }

    /// A list holding exactly one element.
    pub fn singleton(head: T) -> Self {
        Self::cons(head, Self::empty())
    }

    /// Build a cons cell from a head and an existing tail. O(1).
    pub fn cons(head: T, tail: Self) -> Self {
        let len = tail.len() + 1;
        Self {
            node: Some(Arc::new(Node { head, tail, len })),
        }
    }

    /// A new list with `head` in front of this one. The receiver is shared,
    /// not copied.
    pub fn prepend(&self, head: T) -> Self {
        Self::cons(head, self.clone())
    }

    /// Returns `true` if the list has no elements.
    pub fn is_empty(&self) -> bool {
        self.node.is_none()
    }

    /// Number of elements. O(1).
    pub fn len(&self) -> usize {
        self.node.as_ref().map_or(0, |node| node.len)
    }

    /// The first element, if any.
    pub fn head(&self) -> Option<&T> {
        self.node.as_deref().map(|node| &node.head)
    }

    /// Everything after the first element, if the list is non-empty.
    pub fn tail(&self) -> Option<&PersistentList<T>> {
        self.node.as_deref().map(|node| &node.tail)
    }

    /// The list as an [`Empty`](ListView::Empty) or
    /// [`Cons`](ListView::Cons) variant.
    pub fn view(&self) -> ListView<'_, T> {
        match self.node.as_deref() {
            None => ListView::Empty,
            Some(node) => ListView::Cons {
                head: &node.head,
                tail: &node.tail,
            },
        }
    }

    /// Returns `true` if both lists are the same allocation (or both empty).
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (&self.node, &other.node) {
            (None, None) => true,
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Lazy front-to-back iterator. Every call starts again at the head.
    pub fn iter(&self) -> Iter<'_, T> {
        match self.node.as_deref() {
            None => Iter::EMPTY,
            Some(node) => Iter {
                next: Some(node),
                remaining: node.len,
            },
        }
    }

    /// Transform every element, preserving order and length.
    pub fn map<U, F>(&self, f: F) -> PersistentList<U>
    where
        F: FnMut(&T) -> U,
    {
        self.iter().map(f).collect()
    }

    /// Left fold starting from `seed`.
    pub fn aggregate_with<A, F>(&self, seed: A, f: F) -> A
    where
        F: FnMut(A, &T) -> A,
    {
        self.iter().fold(seed, f)
    }

    /// Left fold seeded with the head element.
    ///
    /// Fails with [`TypeError::EmptySequence`] on the empty list.
    pub fn aggregate<F>(&self, f: F) -> TypeResult<T>
    where
        T: Clone,
        F: FnMut(T, &T) -> T,
    {
        let Some(node) = self.node.as_deref() else {
            trace!("aggregate without seed on empty list");
            return Err(TypeError::EmptySequence);
        };
        Ok(node.tail.iter().fold(node.head.clone(), f))
    }

    /// This list followed by `other`. Copies the receiver's cells and shares
    /// all of `other`.
    pub fn append(&self, other: &Self) -> Self
    where
        T: Clone,
    {
        if other.is_empty() {
            return self.clone();
        }
        let front: Vec<&T> = self.iter().collect();
        front
            .into_iter()
            .rev()
            .fold(other.clone(), |acc, item| Self::cons(item.clone(), acc))
    }

    /// The elements in reverse order.
    pub fn reverse(&self) -> Self
    where
        T: Clone,
    {
        self.aggregate_with(Self::empty(), |acc, item| Self::cons(item.clone(), acc))
    }

    /// Element at `index`, counting from the head. O(index).
    pub fn get(&self, index: usize) -> Option<&T> {
        self.iter().nth(index)
    }

    /// Take the list apart with one handler per variant.
    pub fn fold<R>(
        &self,
        on_empty: impl FnOnce() -> R,
        on_cons: impl FnOnce(&T, &PersistentList<T>) -> R,
    ) -> R {
        match self.view() {
            ListView::Empty => on_empty(),
            ListView::Cons { head, tail } => on_cons(head, tail),
        }
    }

    /// Start a matcher chain by binding the handler for a non-empty list.
    pub fn match_cons<'a, R, H>(&'a self, handler: H) -> Matcher<'a, R, ()>
    where
        H: FnOnce(&'a T, &'a PersistentList<T>) -> R + 'a,
    {
        let source = match self.view() {
            ListView::Cons { head, tail } => Split::Hit((head, tail)),
            ListView::Empty => Split::Rest(()),
        };
        Matcher::new(source, move |(head, tail)| handler(head, tail))
    }

    /// Start a matcher chain by binding the handler for the empty list.
    pub fn match_empty<'a, R, H>(
        &'a self,
        handler: H,
    ) -> Matcher<'a, R, (&'a T, &'a PersistentList<T>)>
    where
        H: FnOnce() -> R + 'a,
    {
        let source = match self.view() {
            ListView::Empty => Split::Hit(()),
            ListView::Cons { head, tail } => Split::Rest((head, tail)),
        };
        Matcher::new(source, move |()| handler())
    }
}

impl<T> Clone for PersistentList<T> {
    fn clone(&self) -> Self {
        Self {
            node: self.node.clone(),
        }
    }
}

impl<T> Default for PersistentList<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Drop for PersistentList<T> {
    fn drop(&mut self) {
        // Unlink uniquely owned cells one at a time instead of recursing
        // through the nested drops of every tail.
        let mut next = self.node.take();
        while let Some(node) = next {
            match Arc::try_unwrap(node) {
                Ok(mut node) => next = node.tail.node.take(),
                Err(_) => break,
            }
        }
    }
}

impl<T: PartialEq> PartialEq for PersistentList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for PersistentList<T> {}

impl<T: Hash> Hash for PersistentList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for item in self {
            item.hash(state);
        }
        EMPTY_HASH.hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for PersistentList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for PersistentList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (index, item) in self.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "]")
    }
}

impl<T> FromIterator<T> for PersistentList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut items: Vec<T> = iter.into_iter().collect();
        let mut list = Self::empty();
        while let Some(item) = items.pop() {
            list = Self::cons(item, list);
        }
        list
    }
}

impl<T> From<Vec<T>> for PersistentList<T> {
    fn from(items: Vec<T>) -> Self {
        items.into_iter().collect()
    }
}

impl<T: Clone> From<&[T]> for PersistentList<T> {
    fn from(items: &[T]) -> Self {
        items.iter().cloned().collect()
    }
}

impl<'a, T> IntoIterator for &'a PersistentList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Clone> IntoIterator for PersistentList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

/// Borrowing iterator over a [`PersistentList`].
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
    remaining: usize,
}

impl<T> Iter<'_, T> {
    /// The cursor every empty list hands out.
    const EMPTY: Self = Self {
        next: None,
        remaining: 0,
    };
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            next: self.next,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.tail.node.as_deref();
        self.remaining -= 1;
        Some(&node.head)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("remaining", &self.remaining)
            .finish()
    }
}

/// Owning iterator over a [`PersistentList`].
///
/// Cells owned only by this iterator are moved out; shared cells are cloned.
#[derive(Debug)]
pub struct IntoIter<T> {
    list: PersistentList<T>,
}

impl<T: Clone> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.list.node.take()?;
        match Arc::try_unwrap(node) {
            Ok(mut node) => {
                self.list = std::mem::take(&mut node.tail);
                Some(node.head)
            }
            Err(shared) => {
                self.list = shared.tail.clone();
                Some(shared.head.clone())
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.list.len();
        (len, Some(len))
    }
}

impl<T: Clone> ExactSizeIterator for IntoIter<T> {}

#[cfg(feature = "serde")]
mod serde_impl {
    use serde::de::{Deserialize, Deserializer};
    use serde::ser::{Serialize, Serializer};

    use super::PersistentList;

    impl<T: Serialize> Serialize for PersistentList<T> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_seq(self.iter())
        }
    }

    impl<'de, T: Deserialize<'de>> Deserialize<'de> for PersistentList<T> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            Vec::<T>::deserialize(deserializer).map(PersistentList::from)
        }
    }
}
