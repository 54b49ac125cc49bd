/// Record codec traits
///
/// The repository never inspects record types at runtime. Each record type
/// declares its column mapping through these traits, resolved at compile
/// time:
/// - [`ColumnRecord`] converts an inner record to and from the columns of
///   one super-column;
/// - [`SuperRecord`] assembles a whole row from its key and populated
///   items;
/// - [`RowKey`] / [`InnerKey`] encode the two key levels.
///
/// The [`json`] helpers implement the common case — one column per struct
/// field — on top of serde, so most record types only delegate.
pub mod json;
mod record;

pub use record::{ColumnRecord, InnerKey, RowKey, SuperRecord};
