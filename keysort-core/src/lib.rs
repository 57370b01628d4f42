//! # keysort core
//!
//! A small algebra for building multi-key, multi-order comparison functions
//! that plug into any sort routine.
//!
//! ## Overview
//!
//! - **Key comparators**: order elements by a projected key, ascending or
//!   descending
//! - **Combinators**: chain comparators so later ones only break ties,
//!   reverse a whole order, or start from the all-equal identity
//! - **Multi-key reduction**: fold an ordered list of key extractors into
//!   one comparator
//! - **Sort descriptors**: adapt `(field, ascending)` lists from
//!   configuration, using a host-provided per-field comparison
//!
//! Comparators never fail and hold no state. Panics raised by key
//! extractors or host comparisons reach the sort call unchanged.
//!
//! ## Examples
//!
//! ```
//! use keysort_core::{
//!     Comparator, Direction, SortByComparator, compare_by, compare_by_with,
//! };
//!
//! #[derive(Debug, PartialEq)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! let mut points = vec![
//!     Point { x: 2, y: 1 },
//!     Point { x: 1, y: 3 },
//!     Point { x: 1, y: 5 },
//! ];
//!
//! // x ascending, ties broken by y descending
//! let order = compare_by(|p: &Point| p.x)
//!     .then(compare_by_with(Direction::Descending, |p: &Point| p.y));
//! points.sort_by_comparator(&order);
//!
//! assert_eq!(
//!     points,
//!     vec![
//!         Point { x: 1, y: 5 },
//!         Point { x: 1, y: 3 },
//!         Point { x: 2, y: 1 },
//!     ]
//! );
//! ```

/// Configuration parsing errors
pub mod error;
/// Comparators, combinators, descriptors and the slice bridge
pub mod sorting;

pub use error::{Result, SortError};
pub use sorting::*;
