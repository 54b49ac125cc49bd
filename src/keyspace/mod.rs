/// Keyspace access layer
///
/// [`Keyspace`] is the seam between the repository and the backing store:
/// a handle bound to a logical namespace that can run slice queries, row
/// range queries, and atomic mutation batches against named column
/// families. [`MemoryKeyspace`] implements it in process with the store
/// semantics the repository depends on (column-wise merge, tombstones
/// surfacing as range ghosts, ordered row scans).
mod memory;

pub use memory::MemoryKeyspace;

use crate::model::{SuperColumn, SuperRow};
use crate::mutation::MutationBatch;
use crate::util::Result;

/// Selects super-columns within a row, by explicit names or by a bounded
/// name range with a count cap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlicePredicate {
    Range {
        /// Inclusive lower name bound; `None` means the start of the row.
        start: Option<String>,
        /// Inclusive upper name bound; `None` means the end of the row.
        finish: Option<String>,
        reversed: bool,
        count: usize,
    },
    Names(Vec<String>),
}

impl SlicePredicate {
    /// Unbounded name range capped at `count` super-columns.
    pub fn all(count: usize) -> Self {
        SlicePredicate::Range {
            start: None,
            finish: None,
            reversed: false,
            count,
        }
    }

    pub fn names(names: Vec<String>) -> Self {
        SlicePredicate::Names(names)
    }
}

/// Opaque handle to a logical namespace of a wide-column store.
///
/// Connection management, consistency tuning, timeouts, and retries are
/// the implementation's concern; callers see synchronous request/response
/// round trips. Implementations provide per-request isolation only — the
/// sole cross-request atomicity guarantee is the single [`apply`] batch.
///
/// [`apply`]: Keyspace::apply
pub trait Keyspace: Send + Sync {
    /// Slice query against a single row. A missing row yields an empty
    /// slice; transient backend failures are reported as `Err`.
    fn super_slice(
        &self,
        column_family: &str,
        row_key: &[u8],
        predicate: &SlicePredicate,
    ) -> Result<Vec<SuperColumn>>;

    /// Ordered row range scan: up to `row_limit` rows with key greater
    /// than `start_exclusive` (or from the start of the keyspace when
    /// unset), each carrying the super-columns selected by `predicate`.
    /// Tombstoned rows are included as range ghosts with an empty
    /// super-column list.
    fn range_slice(
        &self,
        column_family: &str,
        start_exclusive: Option<&[u8]>,
        predicate: &SlicePredicate,
        row_limit: usize,
    ) -> Result<Vec<SuperRow>>;

    /// Execute a mutation batch atomically. The batch fully applies or
    /// the whole request fails.
    fn apply(&self, column_family: &str, batch: &MutationBatch) -> Result<()>;
}
