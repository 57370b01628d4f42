//! Bridge between comparators and the standard slice sorts
//!
//! `slice::sort_by` wants a three-way `Ordering`; comparators give a strict
//! predicate. [`Comparator::ordering`] does the translation, and this
//! extension trait wires it into the sort calls.

use super::direction::Direction;
use super::keys::{compare_by_keys_with, compare_by_with};
use super::traits::Comparator;

/// Sort slices with comparators
pub trait SortByComparator<T> {
    /// Stable sort; elements the comparator sees as equal keep their order.
    fn sort_by_comparator<C>(&mut self, comparator: &C)
    where
        C: Comparator<T> + ?Sized;

    /// Unstable sort; equal elements may be reordered.
    fn sort_unstable_by_comparator<C>(&mut self, comparator: &C)
    where
        C: Comparator<T> + ?Sized;

    /// Stable sort by a single key.
    fn sort_by_comparing<K, F>(&mut self, extractor: F, direction: Direction)
    where
        K: PartialOrd,
        F: Fn(&T) -> K;

    /// Stable sort by several keys sharing one direction.
    fn sort_by_comparing_keys<K, F, I>(
        &mut self,
        extractors: I,
        direction: Direction,
    ) where
        K: PartialOrd,
        F: Fn(&T) -> K,
        I: IntoIterator<Item = F>;

    /// True when no element strictly precedes the one before it.
    fn is_sorted_by_comparator<C>(&self, comparator: &C) -> bool
    where
        C: Comparator<T> + ?Sized;
}

impl<T> SortByComparator<T> for [T] {
    fn sort_by_comparator<C>(&mut self, comparator: &C)
    where
        C: Comparator<T> + ?Sized,
    {
        self.sort_by(|a, b| comparator.ordering(a, b));
    }

    fn sort_unstable_by_comparator<C>(&mut self, comparator: &C)
    where
        C: Comparator<T> + ?Sized,
    {
        self.sort_unstable_by(|a, b| comparator.ordering(a, b));
    }

    fn sort_by_comparing<K, F>(&mut self, extractor: F, direction: Direction)
    where
        K: PartialOrd,
        F: Fn(&T) -> K,
    {
        let comparator = compare_by_with(direction, extractor);
        self.sort_by_comparator(&comparator);
    }

    fn sort_by_comparing_keys<K, F, I>(
        &mut self,
        extractors: I,
        direction: Direction,
    ) where
        K: PartialOrd,
        F: Fn(&T) -> K,
        I: IntoIterator<Item = F>,
    {
        let comparator = compare_by_keys_with(direction, extractors);
        self.sort_by_comparator(&comparator);
    }

    fn is_sorted_by_comparator<C>(&self, comparator: &C) -> bool
    where
        C: Comparator<T> + ?Sized,
    {
        self.windows(2)
            .all(|pair| !comparator.precedes(&pair[1], &pair[0]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sorting::{Comparator, compare_by};

    #[test]
    fn test_sort_by_comparator_is_stable() {
        let mut words = vec!["pear", "fig", "kiwi", "yam", "plum"];
        words.sort_by_comparator(&compare_by(|w: &&str| w.len()));
        assert_eq!(words, vec!["fig", "yam", "pear", "kiwi", "plum"]);
    }

    #[test]
    fn test_sort_unstable_by_comparator() {
        let mut numbers = vec![5, 3, 9, 1];
        numbers.sort_unstable_by_comparator(&|a: &i32, b: &i32| a > b);
        assert_eq!(numbers, vec![9, 5, 3, 1]);
    }

    #[test]
    fn test_sort_by_comparing_single_key() {
        let mut words = vec!["ccc", "a", "bb"];
        words.sort_by_comparing(|w| w.len(), Direction::Descending);
        assert_eq!(words, vec!["ccc", "bb", "a"]);
    }

    #[test]
    fn test_sort_by_comparing_keys() {
        let mut pairs = vec![(2, 1), (1, 2), (1, 1), (2, 0)];
        let keys: [fn(&(i32, i32)) -> i32; 2] = [|p| p.0, |p| p.1];
        pairs.sort_by_comparing_keys(keys, Direction::Ascending);
        assert_eq!(pairs, vec![(1, 1), (1, 2), (2, 0), (2, 1)]);
    }

    #[test]
    fn test_is_sorted_by_comparator() {
        let ascending = |a: &i32, b: &i32| a < b;
        assert!([1, 2, 2, 3].is_sorted_by_comparator(&ascending));
        assert!(![1, 3, 2].is_sorted_by_comparator(&ascending));
        assert!(Vec::<i32>::new().is_sorted_by_comparator(&ascending));
        assert!([3, 2, 1].is_sorted_by_comparator(&ascending.reversed()));
    }

    #[test]
    fn test_accepts_trait_objects() {
        let boxed: Box<dyn Comparator<i32>> =
            Box::new(|a: &i32, b: &i32| a < b);
        let mut numbers = vec![3, 1, 2];
        numbers.sort_by_comparator(boxed.as_ref());
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_sort_by_comparing_keys_on_borrowed_words() {
        let text = String::from("bb a ccc aa c");
        let mut words: Vec<&str> = text.split(' ').collect();
        let keys: [fn(&&str) -> usize; 2] =
            [|w| w.len(), |w| usize::from(w.as_bytes()[0])];
        words.sort_by_comparing_keys(keys, Direction::Ascending);
        assert_eq!(words, vec!["a", "c", "aa", "bb", "ccc"]);
    }
}
