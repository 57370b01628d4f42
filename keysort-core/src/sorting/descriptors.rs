//! Sort descriptor adapter
//!
//! A sort descriptor is a declarative `(field key, ascending)` pair, the
//! shape sort settings usually take in config files and query strings. The
//! adapter turns an ordered list of descriptors into a comparator using a
//! host-provided three-way comparison per field, folding them exactly like
//! [`compare_by_keys_with`](super::compare_by_keys_with) does.
//!
//! The field key is opaque here: a `String` read from configuration, or an
//! enum naming the record's fields.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::combinators::{Chained, chain};
use super::direction::Direction;
use super::traits::Comparator;
use crate::error::{Result, SortError};

/// Host capability comparing two records on a named field
///
/// Comparison failures (an unknown key, a field that cannot be compared)
/// are the host's to signal, typically by panicking; the adapter passes them
/// through untouched.
pub trait FieldComparator<T: ?Sized, K: ?Sized> {
    /// Three-way comparison of `a` and `b` on the field `key`.
    fn compare(&self, a: &T, b: &T, key: &K) -> Ordering;
}

impl<T, K, F> FieldComparator<T, K> for F
where
    T: ?Sized,
    K: ?Sized,
    F: Fn(&T, &T, &K) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T, key: &K) -> Ordering {
        self(a, b, key)
    }
}

fn default_ascending() -> bool {
    true
}

/// One `(field key, direction)` entry of a sort specification
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortDescriptor<K = String> {
    /// Field the host compares on
    pub key: K,
    /// Ascending when true; defaults to true when omitted from config
    #[serde(default = "default_ascending")]
    pub ascending: bool,
}

impl<K> SortDescriptor<K> {
    /// Descriptor from a key and a legacy `ascending` flag.
    pub fn new(key: K, ascending: bool) -> Self {
        Self { key, ascending }
    }

    /// Ascending descriptor for `key`.
    pub fn ascending(key: K) -> Self {
        Self::new(key, true)
    }

    /// Descending descriptor for `key`.
    pub fn descending(key: K) -> Self {
        Self::new(key, false)
    }

    /// The ascending flag as a [`Direction`].
    pub fn direction(&self) -> Direction {
        Direction::from_ascending(self.ascending)
    }

    /// Same key, opposite direction
    pub fn reversed(self) -> Self {
        Self::new(self.key, !self.ascending)
    }
}

impl<K> From<(K, Direction)> for SortDescriptor<K> {
    fn from((key, direction): (K, Direction)) -> Self {
        Self::new(key, direction.is_ascending())
    }
}

/// Renders the compact form: `key` or `-key`
///
/// The output parses back to the same descriptor only for keys that pass
/// [`is_plain_key`]. Other keys are written as-is.
impl<K: fmt::Display> fmt::Display for SortDescriptor<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ascending {
            write!(f, "{}", self.key)
        } else {
            write!(f, "-{}", self.key)
        }
    }
}

/// True when `key` survives a `Display` / `FromStr` round trip
///
/// Plain keys are non-empty and contain no whitespace, `:` or `,`, and do
/// not start with `+` or `-`.
pub fn is_plain_key(key: &str) -> bool {
    !key.is_empty()
        && !key.starts_with(['+', '-'])
        && !key.contains(|c: char| c.is_whitespace() || c == ':' || c == ',')
}

/// Accepts `key`, `+key`, `-key`, and `key:direction`
impl FromStr for SortDescriptor<String> {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self> {
        let value = s.trim();

        let (key, direction) = match value.split_once(':') {
            Some((key, direction)) => {
                (key.trim(), direction.parse::<Direction>()?)
            }
            None => match value.strip_prefix('-') {
                Some(key) => (key, Direction::Descending),
                None => (
                    value.strip_prefix('+').unwrap_or(value),
                    Direction::Ascending,
                ),
            },
        };

        if key.is_empty() {
            return Err(SortError::EmptyKey);
        }
        if !is_plain_key(key) {
            return Err(SortError::MalformedDescriptor(value.to_string()));
        }

        Ok(SortDescriptor::from((key.to_string(), direction)))
    }
}

/// Parse a comma-separated descriptor list such as `last_name,-age`
///
/// Blank segments are skipped, so trailing commas are harmless.
pub fn parse_descriptors(list: &str) -> Result<Vec<SortDescriptor>> {
    let descriptors = list
        .split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(SortDescriptor::from_str)
        .collect::<Result<Vec<_>>>()?;
    trace!(count = descriptors.len(), "parsed sort descriptors");
    Ok(descriptors)
}

/// Comparator for a single descriptor
pub struct DescriptorComparator<H, K> {
    host: Arc<H>,
    descriptor: SortDescriptor<K>,
}

impl<H, K> DescriptorComparator<H, K> {
    /// Compare on `descriptor` through a shared host.
    pub fn new(descriptor: SortDescriptor<K>, host: Arc<H>) -> Self {
        Self { host, descriptor }
    }

    /// The descriptor this comparator applies.
    pub fn descriptor(&self) -> &SortDescriptor<K> {
        &self.descriptor
    }
}

impl<H, K: Clone> Clone for DescriptorComparator<H, K> {
    fn clone(&self) -> Self {
        Self::new(self.descriptor.clone(), Arc::clone(&self.host))
    }
}

impl<H, K: fmt::Debug> fmt::Debug for DescriptorComparator<H, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DescriptorComparator")
            .field("descriptor", &self.descriptor)
            .field("host", &std::any::type_name::<H>())
            .finish()
    }
}

impl<T, K, H> Comparator<T> for DescriptorComparator<H, K>
where
    T: ?Sized,
    H: FieldComparator<T, K>,
{
    #[inline]
    fn precedes(&self, a: &T, b: &T) -> bool {
        let ordering = self.host.compare(a, b, &self.descriptor.key);
        self.descriptor.direction().apply(ordering) == Ordering::Less
    }
}

/// Descriptor list adapted into one comparator, highest priority first
pub type DescriptorChain<H, K> = Chained<DescriptorComparator<H, K>>;

/// Fold a descriptor list into one comparator
///
/// Descriptors keep their list order as priority. An empty list yields a
/// comparator that treats all elements as equal. The result compares any
/// `T` the host implements [`FieldComparator<T, K>`] for, and is
/// `Send + Sync` exactly when the host and keys are.
pub fn adapt<K, H, I>(descriptors: I, host: H) -> DescriptorChain<H, K>
where
    I: IntoIterator<Item = SortDescriptor<K>>,
{
    let host = Arc::new(host);
    let comparator = chain(
        descriptors
            .into_iter()
            .map(|descriptor| {
                DescriptorComparator::new(descriptor, Arc::clone(&host))
            }),
    );
    debug!(
        descriptors = comparator.len(),
        "adapted sort descriptors into comparator"
    );
    comparator
}
