//! Comparator composition for multi-key sorting
//!
//! This module provides:
//! - The [`Comparator`] trait and its type-erased form
//! - Key-based comparator builders with a sort [`Direction`]
//! - Combinators: fallback chaining, reversal, identity
//! - An adapter from declarative sort descriptors
//! - A bridge into the standard slice sorts

pub mod combinators;
pub mod descriptors;
pub mod direction;
pub mod keys;
pub mod slice;
pub mod traits;

pub use combinators::*;
pub use descriptors::*;
pub use direction::*;
pub use keys::*;
pub use slice::*;
pub use traits::*;
