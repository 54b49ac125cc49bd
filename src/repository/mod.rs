/// Super-column-family repository
///
/// [`SuperColumnFamilyRepository`] is the generic DAO over one column
/// family: save, contains_key, find, find_items, delete, and get_keys,
/// parameterized by a [`SuperRecord`](crate::codec::SuperRecord) type
/// that carries the row-key, inner-key, and item types.
mod lookup;
mod options;
mod super_cf;

pub use lookup::Lookup;
pub use options::RepositoryOptions;
pub use super_cf::{ColumnSelection, SuperColumnFamilyRepository};
