//! Key-based comparator builders
//!
//! A key extractor projects an element onto something orderable; these
//! builders turn an extractor and a [`Direction`] into a comparator and fold
//! ordered lists of extractors into a single multi-key comparator.
//!
//! Extractors run once per element per comparison, so they should be cheap
//! and pure. Prefer [`compare_by_ref`] when the key is a field that can be
//! borrowed instead of cloned.

use std::fmt;
use std::marker::PhantomData;

use tracing::trace;

use super::combinators::{Chained, chain};
use super::direction::Direction;
use super::traits::Comparator;

/// Compares elements by an owned key
pub struct ByKey<F, K> {
    extractor: F,
    direction: Direction,
    _key: PhantomData<fn() -> K>,
}

impl<F, K> ByKey<F, K> {
    /// Order by `extractor(element)` in `direction`.
    pub fn new(extractor: F, direction: Direction) -> Self {
        Self {
            extractor,
            direction,
            _key: PhantomData,
        }
    }

    /// Direction the key is compared in.
    pub fn direction(&self) -> Direction {
        self.direction
    }
}

impl<F: Clone, K> Clone for ByKey<F, K> {
    fn clone(&self) -> Self {
        Self::new(self.extractor.clone(), self.direction)
    }
}

impl<F, K> fmt::Debug for ByKey<F, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByKey")
            .field("key", &std::any::type_name::<K>())
            .field("direction", &self.direction)
            .finish()
    }
}

impl<T, K, F> Comparator<T> for ByKey<F, K>
where
    T: ?Sized,
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    #[inline]
    fn precedes(&self, a: &T, b: &T) -> bool {
        let left = (self.extractor)(a);
        let right = (self.extractor)(b);
        // Strict comparisons in both directions, so equal keys never precede.
        match self.direction {
            Direction::Ascending => left < right,
            Direction::Descending => left > right,
        }
    }
}

/// Compares elements by a key borrowed from the element
pub struct ByRef<F, K: ?Sized> {
    extractor: F,
    direction: Direction,
    _key: PhantomData<fn(&K)>,
}

impl<F, K: ?Sized> ByRef<F, K> {
    /// Order by the key `extractor` borrows from each element.
    pub fn new(extractor: F, direction: Direction) -> Self {
        Self {
            extractor,
            direction,
            _key: PhantomData,
        }
    }

    /// Direction the key is compared in.
    pub fn direction(&self) -> Direction {
        self.direction
    }
}

impl<F: Clone, K: ?Sized> Clone for ByRef<F, K> {
    fn clone(&self) -> Self {
        Self::new(self.extractor.clone(), self.direction)
    }
}

impl<F, K: ?Sized> fmt::Debug for ByRef<F, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByRef")
            .field("key", &std::any::type_name::<K>())
            .field("direction", &self.direction)
            .finish()
    }
}

impl<T, K, F> Comparator<T> for ByRef<F, K>
where
    T: ?Sized,
    K: ?Sized + PartialOrd,
    F: for<'a> Fn(&'a T) -> &'a K,
{
    #[inline]
    fn precedes(&self, a: &T, b: &T) -> bool {
        let left = (self.extractor)(a);
        let right = (self.extractor)(b);
        match self.direction {
            Direction::Ascending => left < right,
            Direction::Descending => left > right,
        }
    }
}

/// Ascending comparator over `extractor(element)`
pub fn compare_by<T, K, F>(extractor: F) -> ByKey<F, K>
where
    T: ?Sized,
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    compare_by_with(Direction::Ascending, extractor)
}

/// Comparator over `extractor(element)` in the given direction
///
/// Ascending yields `f(a) < f(b)`, descending `f(a) > f(b)`.
pub fn compare_by_with<T, K, F>(
    direction: Direction,
    extractor: F,
) -> ByKey<F, K>
where
    T: ?Sized,
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    ByKey::new(extractor, direction)
}

/// Comparator over a borrowed projection such as a field reference
pub fn compare_by_ref<T, K, F>(
    direction: Direction,
    extractor: F,
) -> ByRef<F, K>
where
    T: ?Sized,
    K: ?Sized + PartialOrd,
    F: for<'a> Fn(&'a T) -> &'a K,
{
    ByRef::new(extractor, direction)
}

/// Multi-key comparator: one [`ByKey`] per extractor, highest priority first
pub type KeyChain<F, K> = Chained<ByKey<F, K>>;

/// Ascending multi-key comparator
///
/// See [`compare_by_keys_with`].
pub fn compare_by_keys<T, K, F, I>(extractors: I) -> KeyChain<F, K>
where
    T: ?Sized,
    K: PartialOrd,
    F: Fn(&T) -> K,
    I: IntoIterator<Item = F>,
{
    compare_by_keys_with(Direction::Ascending, extractors)
}

/// Multi-key comparator with one shared direction
///
/// `extractors[0]` is the primary key, `extractors[1]` breaks its ties, and
/// so on. The result behaves like folding the list left with
/// [`combine`](super::combine) starting from
/// [`identity`](super::identity); an empty list therefore treats every
/// element as equal.
///
/// The chain is `Send + Sync` exactly when the extractors are. Call
/// [`Comparator::boxed`] to erase its type.
///
/// For a different direction per key, build each leaf with
/// [`compare_by_with`] and chain them with [`Comparator::then`].
pub fn compare_by_keys_with<T, K, F, I>(
    direction: Direction,
    extractors: I,
) -> KeyChain<F, K>
where
    T: ?Sized,
    K: PartialOrd,
    F: Fn(&T) -> K,
    I: IntoIterator<Item = F>,
{
    let comparator = chain(
        extractors
            .into_iter()
            .map(|extractor| compare_by_with(direction, extractor)),
    );
    trace!(
        keys = comparator.len(),
        %direction,
        "folded key extractors into comparator"
    );
    comparator
}

/// Former name of [`compare_by`]
#[deprecated(note = "renamed to `compare_by`")]
pub fn sorting_by<T, K, F>(extractor: F) -> ByKey<F, K>
where
    T: ?Sized,
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    compare_by(extractor)
}

/// Former name of [`compare_by_with`]
#[deprecated(note = "renamed to `compare_by_with`")]
pub fn sorting_by_with<T, K, F>(
    direction: Direction,
    extractor: F,
) -> ByKey<F, K>
where
    T: ?Sized,
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    compare_by_with(direction, extractor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Debug, Clone, PartialEq)]
    struct Track {
        title: String,
        plays: u32,
        rating: f32,
    }

    fn track(title: &str, plays: u32, rating: f32) -> Track {
        Track {
            title: title.to_string(),
            plays,
            rating,
        }
    }

    #[test]
    fn test_ascending_and_descending_keys() {
        let low = track("a", 1, 0.0);
        let high = track("b", 5, 0.0);

        let asc = compare_by(|t: &Track| t.plays);
        let desc = compare_by_with(Direction::Descending, |t: &Track| t.plays);

        assert!(asc.precedes(&low, &high));
        assert!(!asc.precedes(&high, &low));
        assert!(!desc.precedes(&low, &high));
        assert!(desc.precedes(&high, &low));
    }

    #[test]
    fn test_equal_keys_never_precede() {
        let a = track("a", 3, 0.0);
        let b = track("b", 3, 0.0);
        for direction in [Direction::Ascending, Direction::Descending] {
            let cmp = compare_by_with(direction, |t: &Track| t.plays);
            assert!(!cmp.precedes(&a, &b));
            assert!(!cmp.precedes(&b, &a));
        }
    }

    #[test]
    fn test_partial_ord_keys() {
        let cmp = compare_by(|t: &Track| t.rating);
        assert!(cmp.precedes(&track("a", 0, 1.5), &track("b", 0, 2.5)));

        // NaN is unordered against everything and lands in a tie.
        let nan = track("n", 0, f32::NAN);
        assert!(!cmp.precedes(&nan, &track("b", 0, 2.5)));
        assert!(!cmp.precedes(&track("b", 0, 2.5), &nan));
    }

    #[test]
    fn test_compare_by_ref_borrows_field() {
        let cmp = compare_by_ref(Direction::Ascending, |t: &Track| {
            t.title.as_str()
        });
        assert!(cmp.precedes(&track("alpha", 0, 0.0), &track("beta", 0, 0.0)));

        let rev = compare_by_ref(Direction::Descending, |t: &Track| &t.title);
        assert!(rev.precedes(&track("beta", 0, 0.0), &track("alpha", 0, 0.0)));
    }

    #[test]
    fn test_key_priority_is_preserved() {
        let keys: [fn(&Track) -> u32; 2] =
            [|t| t.plays, |t| t.title.len() as u32];
        let cmp = compare_by_keys(keys);

        // First key decides regardless of the second.
        let first = track("long title", 1, 0.0);
        assert!(cmp.precedes(&first, &track("x", 2, 0.0)));
        // Second key only breaks ties on the first.
        assert!(cmp.precedes(&track("x", 2, 0.0), &track("xyz", 2, 0.0)));
        assert!(!cmp.precedes(&track("xyz", 2, 0.0), &track("x", 2, 0.0)));
    }

    #[test]
    fn test_shared_direction_applies_to_every_key() {
        let keys: [fn(&Track) -> u32; 2] =
            [|t| t.plays, |t| t.title.len() as u32];
        let cmp = compare_by_keys_with(Direction::Descending, keys);

        assert!(cmp.precedes(&track("x", 9, 0.0), &track("x", 1, 0.0)));
        assert!(cmp.precedes(&track("xyz", 2, 0.0), &track("x", 2, 0.0)));
    }

    #[test]
    fn test_empty_key_list_is_identity() {
        let cmp = compare_by_keys(Vec::<fn(&Track) -> u32>::new());
        let a = track("a", 1, 0.0);
        let b = track("b", 2, 0.0);
        assert!(!cmp.precedes(&a, &b));
        assert!(!cmp.precedes(&b, &a));
    }

    #[test]
    fn test_boxed_extractors_fold() {
        let keys: Vec<Box<dyn Fn(&Track) -> u32 + Send + Sync>> = vec![
            Box::new(|t| t.plays),
            Box::new(|t| t.title.len() as u32),
        ];
        let cmp = compare_by_keys(keys);
        assert!(cmp.precedes(&track("ab", 1, 0.0), &track("abc", 1, 0.0)));
    }

    #[test]
    #[allow(deprecated)]
    fn test_deprecated_aliases() {
        let asc = sorting_by(|t: &Track| t.plays);
        let desc =
            sorting_by_with(Direction::Descending, |t: &Track| t.plays);
        assert!(asc.precedes(&track("a", 1, 0.0), &track("b", 2, 0.0)));
        assert!(desc.precedes(&track("b", 2, 0.0), &track("a", 1, 0.0)));
    }

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Row<'a> {
        name: &'a str,
        rank: usize,
    }

    #[test]
    fn test_keys_over_borrowed_records() {
        let owned = String::from("kiwi fig apple fig date");
        let mut rows: Vec<Row<'_>> = owned
            .split(' ')
            .enumerate()
            .map(|(rank, name)| Row { name, rank })
            .collect();

        let keys: [fn(&Row<'_>) -> usize; 2] = [|r| r.name.len(), |r| r.rank];
        let cmp = compare_by_keys_with(Direction::Descending, keys);
        rows.sort_by(|a, b| cmp.ordering(a, b));

        let names: Vec<&str> = rows.iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["apple", "date", "kiwi", "fig", "fig"]);
        assert_eq!(rows[3].rank, 3);
    }

    #[test]
    fn test_keys_capturing_locals() {
        let calls = Cell::new(0);
        let weights = vec![5u32, 1, 3];
        let by_weight = |i: &usize| {
            calls.set(calls.get() + 1);
            weights[*i]
        };
        let cmp = compare_by_keys([by_weight]);

        let mut indices = vec![0usize, 1, 2];
        indices.sort_by(|a, b| cmp.ordering(a, b));
        assert_eq!(indices, vec![1, 2, 0]);
        assert!(calls.get() > 0);
    }
}
