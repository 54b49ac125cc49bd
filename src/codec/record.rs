use crate::model::Column;
use crate::util::{Result, Status};

/// Top-level partition identifier of a super-row.
pub trait RowKey: Clone + Ord {
    fn encode(&self) -> Vec<u8>;
    fn decode(raw: &[u8]) -> Result<Self>;
}

impl RowKey for String {
    fn encode(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }

    fn decode(raw: &[u8]) -> Result<Self> {
        String::from_utf8(raw.to_vec())
            .map_err(|_| Status::corruption("row key is not valid UTF-8"))
    }
}

impl RowKey for Vec<u8> {
    fn encode(&self) -> Vec<u8> {
        self.clone()
    }

    fn decode(raw: &[u8]) -> Result<Self> {
        Ok(raw.to_vec())
    }
}

/// Identifier of a super-column within a row. Super-column names are
/// strings on the wire, so the inner key round-trips through one.
pub trait InnerKey: Clone + Ord {
    fn encode(&self) -> String;
    fn decode(name: &str) -> Result<Self>;
}

impl InnerKey for String {
    fn encode(&self) -> String {
        self.clone()
    }

    fn decode(name: &str) -> Result<Self> {
        Ok(name.to_string())
    }
}

/// A record that maps to the columns of a single super-column.
///
/// `to_columns` must enumerate the persisted fields deterministically.
/// Both directions report failures as mapping errors; the repository
/// propagates those instead of treating them as absence.
pub trait ColumnRecord: Default {
    fn to_columns(&self) -> Result<Vec<Column>>;
    fn populate(&mut self, columns: &[Column]) -> Result<()>;
}

/// A record that aggregates a row key and a collection of inner records,
/// one per super-column.
///
/// The repository constructs the record with `Default`, assigns the row
/// key, then calls `put_item` once per super-column read from storage.
pub trait SuperRecord: Default {
    type RowKey: RowKey;
    type InnerKey: InnerKey;
    type Item: ColumnRecord;

    fn set_row_key(&mut self, key: Self::RowKey);
    fn put_item(&mut self, key: Self::InnerKey, item: Self::Item);
}
