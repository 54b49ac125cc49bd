use std::collections::{BTreeMap, HashMap};
use std::ops::Bound;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use crossbeam_skiplist::SkipMap;
use parking_lot::{Mutex, RwLock};

use crate::keyspace::{Keyspace, SlicePredicate};
use crate::model::{Column, SuperColumn, SuperRow};
use crate::mutation::{Mutation, MutationBatch};
use crate::util::Result;

/// super-column name -> column name -> column
type RowData = BTreeMap<String, BTreeMap<String, Column>>;

struct FamilyData {
    /// Rows ordered by key, so range scans paginate deterministically
    rows: SkipMap<Vec<u8>, Arc<RwLock<RowData>>>,
    /// Serializes batch application; a batch is atomic with respect to
    /// other batches on the same family
    write_lock: Mutex<()>,
}

impl FamilyData {
    fn new() -> Self {
        FamilyData {
            rows: SkipMap::new(),
            write_lock: Mutex::new(()),
        }
    }
}

/// In-process `Keyspace` over ordered in-memory column families.
///
/// Reproduces the wide-column store behaviors the repository depends on:
/// inserts merge column-wise into existing super-columns, row deletes
/// clear the row but leave a range ghost visible to scans, and range
/// queries walk rows in key order. Column families are created on first
/// write; reads against unknown families yield empty results.
pub struct MemoryKeyspace {
    families: RwLock<HashMap<String, Arc<FamilyData>>>,
}

impl MemoryKeyspace {
    pub fn new() -> Self {
        MemoryKeyspace {
            families: RwLock::new(HashMap::new()),
        }
    }

    fn family(&self, name: &str) -> Option<Arc<FamilyData>> {
        self.families.read().get(name).cloned()
    }

    fn family_or_create(&self, name: &str) -> Arc<FamilyData> {
        if let Some(family) = self.family(name) {
            return family;
        }
        self.families
            .write()
            .entry(name.to_string())
            .or_insert_with(|| Arc::new(FamilyData::new()))
            .clone()
    }

    fn now_micros() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_micros() as u64
    }
}

impl Default for MemoryKeyspace {
    fn default() -> Self {
        Self::new()
    }
}

fn materialize(name: &str, columns: &BTreeMap<String, Column>) -> SuperColumn {
    SuperColumn::with_columns(name, columns.values().cloned().collect())
}

/// Apply a slice predicate to one row's data.
fn select(row: &RowData, predicate: &SlicePredicate) -> Vec<SuperColumn> {
    match predicate {
        SlicePredicate::Names(names) => names
            .iter()
            .filter_map(|name| row.get(name).map(|columns| materialize(name, columns)))
            .collect(),
        SlicePredicate::Range {
            start,
            finish,
            reversed,
            count,
        } => {
            let lower = match start {
                Some(s) => Bound::Included(s.as_str()),
                None => Bound::Unbounded,
            };
            let upper = match finish {
                Some(f) => Bound::Included(f.as_str()),
                None => Bound::Unbounded,
            };
            let range = row.range::<str, _>((lower, upper));
            if *reversed {
                range
                    .rev()
                    .take(*count)
                    .map(|(name, columns)| materialize(name, columns))
                    .collect()
            } else {
                range
                    .take(*count)
                    .map(|(name, columns)| materialize(name, columns))
                    .collect()
            }
        },
    }
}

impl Keyspace for MemoryKeyspace {
    fn super_slice(
        &self,
        column_family: &str,
        row_key: &[u8],
        predicate: &SlicePredicate,
    ) -> Result<Vec<SuperColumn>> {
        let Some(family) = self.family(column_family) else {
            return Ok(Vec::new());
        };
        let Some(entry) = family.rows.get(row_key) else {
            return Ok(Vec::new());
        };
        let row = entry.value().read();
        Ok(select(&row, predicate))
    }

    fn range_slice(
        &self,
        column_family: &str,
        start_exclusive: Option<&[u8]>,
        predicate: &SlicePredicate,
        row_limit: usize,
    ) -> Result<Vec<SuperRow>> {
        let Some(family) = self.family(column_family) else {
            return Ok(Vec::new());
        };

        let lower: Bound<&[u8]> = match start_exclusive {
            Some(start) => Bound::Excluded(start),
            None => Bound::Unbounded,
        };

        let mut rows = Vec::new();
        for entry in family
            .rows
            .range::<[u8], _>((lower, Bound::Unbounded))
            .take(row_limit)
        {
            let row = entry.value().read();
            rows.push(SuperRow::new(entry.key().clone(), select(&row, predicate)));
        }
        Ok(rows)
    }

    fn apply(&self, column_family: &str, batch: &MutationBatch) -> Result<()> {
        let family = self.family_or_create(column_family);
        let _guard = family.write_lock.lock();
        let timestamp = Self::now_micros();

        for op in batch.ops() {
            match op {
                Mutation::InsertSuperColumn {
                    row_key,
                    super_column,
                } => {
                    // An empty super-column would be indistinguishable from
                    // a tombstone; the store never materializes one.
                    if super_column.is_empty() {
                        continue;
                    }
                    let entry = family
                        .rows
                        .get_or_insert_with(row_key.clone(), || Arc::new(RwLock::new(RowData::new())));
                    let row_arc = Arc::clone(entry.value());
                    let mut row = row_arc.write();
                    let columns = row.entry(super_column.name().to_string()).or_default();
                    for column in super_column.columns() {
                        columns.insert(column.name().to_string(), column.stamped(timestamp));
                    }
                },
                Mutation::DeleteRow { row_key } => {
                    // Clearing instead of removing keeps the range ghost
                    // that real stores expose until tombstones reconcile.
                    if let Some(entry) = family.rows.get(row_key.as_slice()) {
                        entry.value().write().clear();
                    }
                },
            }
        }
        Ok(())
    }
}
