/// Data model for the super-column-family layout
///
/// A column family holds rows addressed by a row key. Each row groups its
/// data into super-columns, and each super-column holds named leaf
/// columns:
///
/// ```text
/// ColumnFamily
///  └─→ SuperRow("user:42")
///       ├─→ SuperColumn("profile")
///       │    ├─→ Column("name", ...)
///       │    └─→ Column("email", ...)
///       └─→ SuperColumn("settings")
///            └─→ Column("theme", ...)
/// ```
///
/// A super-row with zero super-columns is logically absent: the store keeps
/// the tombstoned row visible to range scans until it reconciles the
/// deletion, so scan consumers must filter on [`SuperRow::is_live`].
mod column;
mod super_column;
mod super_row;

pub use column::Column;
pub use super_column::SuperColumn;
pub use super_row::SuperRow;
