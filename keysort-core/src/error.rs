use thiserror::Error;

/// Errors raised while reading sort configuration.
///
/// The comparator algebra itself never fails; these only come out of the
/// string and config parsers for directions and descriptors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    /// A descriptor named no field, e.g. `""` or `-`.
    #[error("Sort descriptor has an empty field key")]
    EmptyKey,

    /// A direction other than `asc`, `ascending`, `desc` or `descending`.
    #[error("Unknown sort direction: {0}")]
    UnknownDirection(String),

    /// A descriptor key that is not plain, such as `--year` or `a b`.
    #[error("Malformed sort descriptor: {0}")]
    MalformedDescriptor(String),
}

/// Result alias for configuration parsing
pub type Result<T> = std::result::Result<T, SortError>;
