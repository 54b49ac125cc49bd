use crate::model::SuperColumn;

/// A single staged mutation.
#[derive(Debug, Clone)]
pub enum Mutation {
    /// Insert (or column-wise merge) one super-column under a row.
    InsertSuperColumn {
        row_key: Vec<u8>,
        super_column: SuperColumn,
    },
    /// Tombstone a whole row: all super-columns, all columns.
    DeleteRow { row_key: Vec<u8> },
}

/// Accumulates mutations for atomic execution against one column family.
///
/// The batch either fully applies or the backend rejects it as a whole;
/// there is no partial-success reporting.
#[derive(Debug, Default)]
pub struct MutationBatch {
    /// Operations in insertion order
    ops: Vec<Mutation>,
    /// Approximate memory usage in bytes
    data_size: usize,
}

impl MutationBatch {
    #[inline]
    pub fn new() -> Self {
        MutationBatch {
            ops: Vec::new(),
            data_size: 0,
        }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        MutationBatch {
            ops: Vec::with_capacity(capacity),
            data_size: 0,
        }
    }

    /// Stage a super-column insertion under `row_key`.
    pub fn insert_super_column(&mut self, row_key: Vec<u8>, super_column: SuperColumn) {
        self.data_size += row_key.len()
            + super_column.name().len()
            + super_column
                .columns()
                .iter()
                .map(|c| c.name().len() + c.value().len())
                .sum::<usize>();

        self.ops.push(Mutation::InsertSuperColumn {
            row_key,
            super_column,
        });
    }

    /// Stage a full-row delete.
    pub fn delete_row(&mut self, row_key: Vec<u8>) {
        self.data_size += row_key.len();
        self.ops.push(Mutation::DeleteRow { row_key });
    }

    #[inline]
    pub fn ops(&self) -> &[Mutation] {
        &self.ops
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Approximate memory usage in bytes
    #[inline]
    pub fn data_size(&self) -> usize {
        self.data_size
    }

    pub fn clear(&mut self) {
        self.ops.clear();
        self.data_size = 0;
    }
}
