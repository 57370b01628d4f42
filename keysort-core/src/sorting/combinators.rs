//! Comparator combinators
//!
//! `combine` chains a primary comparator with a fallback used only on ties,
//! `reverse` flips a whole order, and `Identity` treats everything as equal.
//! Together they form a monoid: `combine` is associative and `Identity` is
//! its neutral element on both sides, so any list of comparators can be
//! folded left to right. [`Chained`] is that fold over a runtime list of
//! same-shaped comparators, kept flat instead of nesting `Combined` values.

use std::fmt;

use super::traits::Comparator;

/// Comparator that treats all elements as equal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Identity;

impl<T: ?Sized> Comparator<T> for Identity {
    #[inline]
    fn precedes(&self, _a: &T, _b: &T) -> bool {
        false
    }
}

/// The neutral element of [`combine`]
pub fn identity() -> Identity {
    Identity
}

/// Order-reversed view of another comparator
#[derive(Clone, Copy)]
pub struct Reversed<C> {
    inner: C,
}

impl<C> Reversed<C> {
    /// Unwrap the original comparator.
    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C> fmt::Debug for Reversed<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reversed")
            .field("inner", &std::any::type_name::<C>())
            .finish()
    }
}

impl<T, C> Comparator<T> for Reversed<C>
where
    T: ?Sized,
    C: Comparator<T>,
{
    #[inline]
    fn precedes(&self, a: &T, b: &T) -> bool {
        self.inner.precedes(b, a)
    }
}

/// Reverse a comparator: `reversed(a, b) == cmp(b, a)`
///
/// Applied to a multi-key comparator this inverts the final order across all
/// keys, which is not the same as building every key descending.
pub fn reverse<C>(comparator: C) -> Reversed<C> {
    Reversed { inner: comparator }
}

/// Primary comparator with a tie-breaking fallback
#[derive(Clone, Copy)]
pub struct Combined<A, B> {
    primary: A,
    secondary: B,
}

impl<A, B> Combined<A, B> {
    /// Split back into `(primary, secondary)`.
    pub fn into_parts(self) -> (A, B) {
        (self.primary, self.secondary)
    }
}

impl<A, B> fmt::Debug for Combined<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Combined")
            .field("primary", &std::any::type_name::<A>())
            .field("secondary", &std::any::type_name::<B>())
            .finish()
    }
}

impl<T, A, B> Comparator<T> for Combined<A, B>
where
    T: ?Sized,
    A: Comparator<T>,
    B: Comparator<T>,
{
    #[inline]
    fn precedes(&self, a: &T, b: &T) -> bool {
        if self.primary.precedes(a, b) {
            return true;
        }
        if self.primary.precedes(b, a) {
            return false;
        }
        self.secondary.precedes(a, b)
    }
}

/// Chain two comparators
///
/// `primary` decides whenever it can tell `a` and `b` apart; `secondary` is
/// consulted only when `primary` sees them as equal.
pub fn combine<A, B>(primary: A, secondary: B) -> Combined<A, B> {
    Combined { primary, secondary }
}

/// Left fold of [`combine`] over a list, seeded by [`Identity`]
///
/// The first comparator that tells `a` and `b` apart decides; later ones
/// are not consulted. An empty chain treats every element as equal.
#[derive(Clone)]
pub struct Chained<C> {
    links: Vec<C>,
}

impl<C> Chained<C> {
    /// Comparators in priority order.
    pub fn links(&self) -> &[C] {
        &self.links
    }

    /// Number of chained comparators.
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// True for the all-equal chain.
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Unwrap the comparators in priority order.
    pub fn into_links(self) -> Vec<C> {
        self.links
    }
}

impl<C> Default for Chained<C> {
    fn default() -> Self {
        Self { links: Vec::new() }
    }
}

impl<C> FromIterator<C> for Chained<C> {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        Self {
            links: iter.into_iter().collect(),
        }
    }
}

impl<C> fmt::Debug for Chained<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chained")
            .field("link", &std::any::type_name::<C>())
            .field("len", &self.links.len())
            .finish()
    }
}

impl<T, C> Comparator<T> for Chained<C>
where
    T: ?Sized,
    C: Comparator<T>,
{
    fn precedes(&self, a: &T, b: &T) -> bool {
        for link in &self.links {
            if link.precedes(a, b) {
                return true;
            }
            if link.precedes(b, a) {
                return false;
            }
        }
        false
    }
}

/// Chain a list of comparators, highest priority first
///
/// Behaves exactly like folding the list with [`combine`] from
/// [`identity`], without nesting or boxing.
pub fn chain<C, I>(comparators: I) -> Chained<C>
where
    I: IntoIterator<Item = C>,
{
    comparators.into_iter().collect()
}
