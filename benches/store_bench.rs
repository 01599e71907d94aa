//! Benchmarks for the Pulseboard record stores
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use pulseboard::store::{MemoryStore, NewRecord, RecordStore, SqliteStore};
use tempfile::tempdir;
use tokio::runtime::Runtime;

const CATEGORIES: [&str; 4] = ["sales", "costs", "visits", "signups"];

fn sample(i: usize) -> NewRecord {
    NewRecord::new(CATEGORIES[i % CATEGORIES.len()], i as f64)
}

fn bench_insert(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let mut group = c.benchmark_group("insert");

    group.bench_function("memory", |b| {
        let store = MemoryStore::new();
        let mut i = 0;
        b.iter(|| {
            i += 1;
            rt.block_on(store.insert(black_box(sample(i)))).unwrap()
        });
    });

    group.bench_function("sqlite_file", |b| {
        let dir = tempdir().unwrap();
        let store = SqliteStore::open(dir.path().join("bench.db")).unwrap();
        let mut i = 0;
        b.iter(|| {
            i += 1;
            rt.block_on(store.insert(black_box(sample(i)))).unwrap()
        });
    });

    group.finish();
}

fn bench_list(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let mut group = c.benchmark_group("list");

    for size in [100, 1000, 10000] {
        let store = SqliteStore::open_in_memory().unwrap();
        rt.block_on(async {
            for i in 0..size {
                store.insert(sample(i)).await.unwrap();
            }
        });

        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(format!("sqlite_{}", size), |b| {
            b.iter(|| rt.block_on(store.list()).unwrap())
        });
    }

    group.finish();
}

fn bench_delete_all(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();

    c.bench_function("delete_all_sqlite_1000", |b| {
        let store = SqliteStore::open_in_memory().unwrap();
        b.iter(|| {
            rt.block_on(async {
                for i in 0..1000 {
                    store.insert(sample(i)).await.unwrap();
                }
                store.delete_all().await.unwrap()
            })
        });
    });
}

criterion_group!(benches, bench_insert, bench_list, bench_delete_all);
criterion_main!(benches);
