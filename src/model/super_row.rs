use crate::model::SuperColumn;

/// A row read from a range scan: raw key bytes plus the super-columns the
/// slice predicate selected for it.
///
/// Rows whose super-columns were all tombstoned still appear in range
/// scans as "range ghosts" with an empty super-column list; `is_live`
/// distinguishes them from rows with data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuperRow {
    key: Vec<u8>,
    super_columns: Vec<SuperColumn>,
}

impl SuperRow {
    pub fn new(key: Vec<u8>, super_columns: Vec<SuperColumn>) -> Self {
        SuperRow { key, super_columns }
    }

    pub fn key(&self) -> &[u8] {
        &self.key
    }

    pub fn super_columns(&self) -> &[SuperColumn] {
        &self.super_columns
    }

    pub fn is_live(&self) -> bool {
        !self.super_columns.is_empty()
    }
}
