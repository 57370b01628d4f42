//! Sort direction
//!
//! [`Direction`] is shared by key comparators and sort descriptors, and reads
//! from config as `asc` / `ascending` / `desc` / `descending`.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SortError;

/// Ordering mode applied when building a key comparator
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Smallest key first
    #[default]
    #[serde(alias = "asc")]
    Ascending,
    /// Largest key first
    #[serde(alias = "desc")]
    Descending,
}

impl Direction {
    /// Canonical name of [`Direction::Ascending`]
    pub const ASCENDING: &'static str = "ascending";
    /// Canonical name of [`Direction::Descending`]
    pub const DESCENDING: &'static str = "descending";

    /// Canonical lowercase name, as serialized.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Ascending => Self::ASCENDING,
            Direction::Descending => Self::DESCENDING,
        }
    }

    /// Maps a legacy `ascending` flag onto a direction.
    pub fn from_ascending(ascending: bool) -> Self {
        if ascending {
            Direction::Ascending
        } else {
            Direction::Descending
        }
    }

    /// True for [`Direction::Ascending`].
    pub fn is_ascending(self) -> bool {
        self == Direction::Ascending
    }

    /// The opposite direction.
    pub fn reversed(self) -> Self {
        match self {
            Direction::Ascending => Direction::Descending,
            Direction::Descending => Direction::Ascending,
        }
    }

    /// Orient an ascending three-way result for this direction
    #[inline]
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Direction::Ascending => ordering,
            Direction::Descending => ordering.reverse(),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        if value.eq_ignore_ascii_case("asc")
            || value.eq_ignore_ascii_case(Self::ASCENDING)
        {
            Ok(Direction::Ascending)
        } else if value.eq_ignore_ascii_case("desc")
            || value.eq_ignore_ascii_case(Self::DESCENDING)
        {
            Ok(Direction::Descending)
        } else {
            Err(SortError::UnknownDirection(value.to_string()))
        }
    }
}

impl TryFrom<&str> for Direction {
    type Error = SortError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Direction::from_str(value)
    }
}
