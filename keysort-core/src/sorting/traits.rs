//! Core comparator trait
//!
//! A comparator answers a single question: does `a` strictly precede `b`?
//! Every other piece of the sorting module is built from that predicate.
//!
//! Any closure `Fn(&T, &T) -> bool` is a comparator, so hand-written
//! predicates mix freely with the builders in [`keys`](super::keys) and the
//! combinators in [`combinators`](super::combinators).

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use super::combinators::{Combined, Reversed, combine, reverse};

/// Strict-precedence predicate over `T`
///
/// Implementations must be irreflexive (`precedes(a, a)` is false) and
/// consistent with a weak ordering. Comparators built only from this crate
/// satisfy that whenever their key types do.
pub trait Comparator<T: ?Sized> {
    /// Returns true when `a` strictly precedes `b`.
    fn precedes(&self, a: &T, b: &T) -> bool;

    /// Three-way result derived from the strict predicate
    ///
    /// This is the shape `slice::sort_by` and friends expect.
    #[inline]
    fn ordering(&self, a: &T, b: &T) -> Ordering {
        if self.precedes(a, b) {
            Ordering::Less
        } else if self.precedes(b, a) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    /// Break ties of `self` with `next`. Same as [`combine`].
    fn then<C>(self, next: C) -> Combined<Self, C>
    where
        Self: Sized,
        C: Comparator<T>,
    {
        combine(self, next)
    }

    /// Invert the whole order. Same as [`reverse`].
    fn reversed(self) -> Reversed<Self>
    where
        Self: Sized,
    {
        reverse(self)
    }

    /// Erase the concrete type so comparators of different shapes can be
    /// stored and folded together.
    fn boxed(self) -> BoxedComparator<T>
    where
        Self: Sized + Send + Sync + 'static,
    {
        BoxedComparator::new(self)
    }
}

impl<T, F> Comparator<T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn precedes(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// Type-erased, shareable comparator
///
/// Cloning is a reference count bump. The wrapped comparator must be
/// `Send + Sync`, so a boxed comparator can be handed to parallel sorts.
pub struct BoxedComparator<T: ?Sized> {
    inner: Arc<dyn Comparator<T> + Send + Sync>,
}

impl<T: ?Sized> BoxedComparator<T> {
    /// Box any comparator
    pub fn new<C>(comparator: C) -> Self
    where
        C: Comparator<T> + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(comparator),
        }
    }
}

impl<T: ?Sized> Clone for BoxedComparator<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: ?Sized> fmt::Debug for BoxedComparator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoxedComparator")
            .field("element", &std::any::type_name::<T>())
            .finish_non_exhaustive()
    }
}

impl<T: ?Sized> Comparator<T> for BoxedComparator<T> {
    #[inline]
    fn precedes(&self, a: &T, b: &T) -> bool {
        self.inner.precedes(a, b)
    }

    fn boxed(self) -> BoxedComparator<T>
    where
        Self: Sized + Send + Sync + 'static,
    {
        self
    }
}
