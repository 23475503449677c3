//! Immutable typed sequences.
//!
//! These are the uniformly typed results of
//! [`CollectionValue`](crate::value::CollectionValue) projections and the key
//! listings of [`Map`](crate::map::Map). Each sequence exports to an
//! index-keyed [`Group`](crate::raw::Group), so it can be stored in a map and
//! is expanded by [`Map::to_array`](crate::map::Map::to_array).

mod numbers;
mod objects;
mod strings;

pub use numbers::{IntegerCollection, NumberCollection};
pub use objects::ObjectCollection;
pub use strings::StringCollection;
