use std::collections::{BTreeMap, BTreeSet};
use std::marker::PhantomData;
use std::sync::Arc;

use crate::codec::{ColumnRecord, InnerKey, RowKey, SuperRecord};
use crate::keyspace::{Keyspace, SlicePredicate};
use crate::model::SuperColumn;
use crate::mutation::MutationBatch;
use crate::repository::{Lookup, RepositoryOptions};
use crate::statistics::Statistics;
use crate::util::Result;

/// Which super-columns a `find` should fetch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ColumnSelection {
    /// The unbounded name range, capped at the configured column limit.
    #[default]
    All,
    /// Exactly the named super-columns.
    Names(Vec<String>),
}

/// Generic DAO over one super column family.
///
/// Each method is one or more synchronous round trips against the
/// keyspace; the layer adds no locking, retries, or cross-call atomicity
/// beyond the single mutation batch of `save` and `delete`.
pub struct SuperColumnFamilyRepository<ST: SuperRecord> {
    keyspace: Arc<dyn Keyspace>,
    column_family: String,
    options: RepositoryOptions,
    statistics: Arc<Statistics>,
    _record: PhantomData<fn() -> ST>,
}

impl<ST: SuperRecord> SuperColumnFamilyRepository<ST> {
    pub fn new(keyspace: Arc<dyn Keyspace>, column_family: impl Into<String>) -> Self {
        Self::with_options(keyspace, column_family, RepositoryOptions::default())
    }

    pub fn with_options(
        keyspace: Arc<dyn Keyspace>,
        column_family: impl Into<String>,
        options: RepositoryOptions,
    ) -> Self {
        SuperColumnFamilyRepository {
            keyspace,
            column_family: column_family.into(),
            options,
            statistics: Arc::new(Statistics::new()),
            _record: PhantomData,
        }
    }

    pub fn column_family(&self) -> &str {
        &self.column_family
    }

    pub fn options(&self) -> &RepositoryOptions {
        &self.options
    }

    pub fn statistics(&self) -> &Arc<Statistics> {
        &self.statistics
    }

    /// Persist `items` under `super_key`, one super-column per inner key,
    /// as a single atomic mutation batch.
    ///
    /// Re-saving a row merges: existing super-columns keep columns not
    /// named in the new items. Mapping failures and batch rejections
    /// propagate; there is no partial-success state.
    pub fn save(
        &self,
        super_key: &ST::RowKey,
        items: &BTreeMap<ST::InnerKey, ST::Item>,
    ) -> Result<()> {
        let row_key = super_key.encode();
        let mut batch = MutationBatch::with_capacity(items.len());
        for (inner_key, item) in items {
            let columns = item.to_columns()?;
            let super_column = SuperColumn::with_columns(inner_key.encode(), columns);
            batch.insert_super_column(row_key.clone(), super_column);
        }

        self.keyspace.apply(&self.column_family, &batch)?;
        self.statistics.record_save(batch.len() as u64);
        Ok(())
    }

    /// True iff `super_key` has at least one live super-column.
    ///
    /// Any query failure collapses to `false`: a transient backend error
    /// is indistinguishable from true absence here. Callers that need to
    /// tell the two apart use [`find`](Self::find) and inspect the
    /// [`Lookup`].
    pub fn contains_key(&self, super_key: &ST::RowKey) -> bool {
        self.statistics.record_contains_check();
        // One super-column is enough to witness existence.
        let predicate = SlicePredicate::all(1);
        match self
            .keyspace
            .super_slice(&self.column_family, &super_key.encode(), &predicate)
        {
            Ok(slice) => !slice.is_empty(),
            Err(_) => false,
        }
    }

    /// Fetch the record under `super_key` with all super-columns (up to
    /// the configured column limit).
    pub fn find(&self, super_key: &ST::RowKey) -> Result<Lookup<ST>> {
        self.find_columns(super_key, &ColumnSelection::All)
    }

    /// Fetch the record under `super_key`, restricted by `selection`.
    ///
    /// Backend failures surface as `Lookup::Failed`, an empty slice as
    /// `Lookup::Absent`. Mapping or population failures are fatal and
    /// return `Err` — they are never softened into absence.
    pub fn find_columns(
        &self,
        super_key: &ST::RowKey,
        selection: &ColumnSelection,
    ) -> Result<Lookup<ST>> {
        let predicate = match selection {
            ColumnSelection::All => SlicePredicate::all(self.options.find_column_limit),
            ColumnSelection::Names(names) => SlicePredicate::names(names.clone()),
        };

        let super_columns =
            match self
                .keyspace
                .super_slice(&self.column_family, &super_key.encode(), &predicate)
            {
                Ok(slice) => slice,
                Err(status) => {
                    self.statistics.record_find_failure();
                    return Ok(Lookup::Failed(status));
                },
            };

        if super_columns.is_empty() {
            self.statistics.record_find_absent();
            return Ok(Lookup::Absent);
        }

        if matches!(selection, ColumnSelection::All)
            && super_columns.len() >= self.options.find_column_limit
        {
            // The row may hold more super-columns than the limit; make the
            // truncation observable instead of silent.
            self.statistics.record_truncated_find();
        }

        let record = self.populate(super_key, &super_columns)?;
        self.statistics.record_find_hit();
        Ok(Lookup::Found(record))
    }

    /// Batch convenience over [`find_columns`](Self::find_columns): one
    /// independent lookup per key, no entry dropped.
    pub fn find_items(
        &self,
        super_keys: &[ST::RowKey],
        selection: &ColumnSelection,
    ) -> Result<BTreeMap<ST::RowKey, Lookup<ST>>> {
        let mut results = BTreeMap::new();
        for super_key in super_keys {
            let lookup = self.find_columns(super_key, selection)?;
            results.insert(super_key.clone(), lookup);
        }
        Ok(results)
    }

    /// Tombstone the whole row under `super_key`.
    ///
    /// Physical removal is the store's concern; readers observe the key
    /// as absent once the delete is applied, and range scans may keep
    /// surfacing the row as a dead ghost until tombstones reconcile.
    pub fn delete(&self, super_key: &ST::RowKey) -> Result<()> {
        let mut batch = MutationBatch::new();
        batch.delete_row(super_key.encode());
        self.keyspace.apply(&self.column_family, &batch)?;
        self.statistics.record_delete();
        Ok(())
    }

    /// Enumerate the keys of every live row in the column family.
    ///
    /// Pages through the keyspace `scan_page_size` rows at a time,
    /// probing `scan_probe_columns` super-columns per row to test
    /// liveness. The cursor advances to the last row of each page — live
    /// or tombstoned — so the scan neither repeats nor skips rows, and it
    /// terminates on the first short page even when the keyspace size is
    /// an exact multiple of the page size.
    ///
    /// Offers no snapshot isolation: rows inserted or removed during the
    /// scan may be seen zero or more times. Best-effort enumeration only.
    pub fn get_keys(&self) -> Result<BTreeSet<ST::RowKey>> {
        self.statistics.record_key_scan();
        let page_size = self.options.scan_page_size.max(1);
        let probe = SlicePredicate::all(self.options.scan_probe_columns.max(1));

        let mut keys = BTreeSet::new();
        let mut cursor: Option<Vec<u8>> = None;

        loop {
            let page = self.keyspace.range_slice(
                &self.column_family,
                cursor.as_deref(),
                &probe,
                page_size,
            )?;
            self.statistics.record_scan_page(page.len() as u64);

            let short_page = page.len() < page_size;
            if let Some(last) = page.last() {
                cursor = Some(last.key().to_vec());
            }
            for row in &page {
                if row.is_live() {
                    keys.insert(ST::RowKey::decode(row.key())?);
                }
            }

            if short_page {
                return Ok(keys);
            }
        }
    }

    /// Construct and populate a record from raw super-columns.
    fn populate(&self, super_key: &ST::RowKey, super_columns: &[SuperColumn]) -> Result<ST> {
        let mut record = ST::default();
        record.set_row_key(super_key.clone());
        for super_column in super_columns {
            let inner_key = ST::InnerKey::decode(super_column.name())?;
            let mut item = ST::Item::default();
            item.populate(super_column.columns())?;
            record.put_item(inner_key, item);
        }
        Ok(record)
    }
}
