use std::collections::BTreeMap;
use std::sync::Arc;

use colonnade::{
    Column, ColumnRecord, MemoryKeyspace, Result, SuperColumnFamilyRepository, SuperRecord, codec,
};
use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
struct Event {
    source: String,
    sequence: u64,
    payload: String,
}

impl ColumnRecord for Event {
    fn to_columns(&self) -> Result<Vec<Column>> {
        codec::json::columns_from_record(self)
    }

    fn populate(&mut self, columns: &[Column]) -> Result<()> {
        *self = codec::json::record_from_columns(columns)?;
        Ok(())
    }
}

#[derive(Debug, Default)]
struct EventRow {
    key: String,
    events: BTreeMap<String, Event>,
}

impl SuperRecord for EventRow {
    type RowKey = String;
    type InnerKey = String;
    type Item = Event;

    fn set_row_key(&mut self, key: String) {
        self.key = key;
    }

    fn put_item(&mut self, key: String, item: Event) {
        self.events.insert(key, item);
    }
}

fn setup_repository() -> SuperColumnFamilyRepository<EventRow> {
    SuperColumnFamilyRepository::new(Arc::new(MemoryKeyspace::new()), "Events")
}

fn event(i: u64) -> Event {
    Event {
        source: "bench".to_string(),
        sequence: i,
        payload: "x".repeat(100),
    }
}

fn items(count: u64) -> BTreeMap<String, Event> {
    (0..count).map(|i| (format!("e{i:03}"), event(i))).collect()
}

fn bench_save(c: &mut Criterion) {
    let mut group = c.benchmark_group("save");
    group.throughput(Throughput::Elements(1));

    group.bench_function("save_1_super_column", |b| {
        let repo = setup_repository();
        let items = items(1);
        let mut i = 0u64;
        b.iter(|| {
            let key = format!("row{i:010}");
            repo.save(&key, &items).unwrap();
            i += 1;
        });
    });

    group.bench_function("save_10_super_columns", |b| {
        let repo = setup_repository();
        let items = items(10);
        let mut i = 0u64;
        b.iter(|| {
            let key = format!("row{i:010}");
            repo.save(&key, &items).unwrap();
            i += 1;
        });
    });

    group.finish();
}

fn bench_find(c: &mut Criterion) {
    let mut group = c.benchmark_group("find");
    group.throughput(Throughput::Elements(1));

    group.bench_function("find_hit", |b| {
        let repo = setup_repository();
        let items = items(10);
        for i in 0..1000u64 {
            repo.save(&format!("row{i:04}"), &items).unwrap();
        }
        let mut i = 0u64;
        b.iter(|| {
            let key = format!("row{:04}", i % 1000);
            let found = repo.find(&key).unwrap();
            black_box(found.is_found());
            i += 1;
        });
    });

    group.bench_function("contains_key", |b| {
        let repo = setup_repository();
        let items = items(10);
        for i in 0..1000u64 {
            repo.save(&format!("row{i:04}"), &items).unwrap();
        }
        let mut i = 0u64;
        b.iter(|| {
            let key = format!("row{:04}", i % 1000);
            black_box(repo.contains_key(&key));
            i += 1;
        });
    });

    group.finish();
}

fn bench_get_keys(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_keys");

    for &rows in &[100u64, 1000] {
        group.throughput(Throughput::Elements(rows));
        group.bench_function(format!("scan_{rows}_rows"), |b| {
            let repo = setup_repository();
            let items = items(2);
            for i in 0..rows {
                repo.save(&format!("row{i:06}"), &items).unwrap();
            }
            b.iter(|| {
                let keys = repo.get_keys().unwrap();
                black_box(keys.len());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_save, bench_find, bench_get_keys);
criterion_main!(benches);
