use chrono::{Duration, TimeZone, Utc};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use stockbook_core::EntityId;
use stockbook_infra::EntityStore;
use stockbook_inventory::InventoryItem;

fn populated(n: u32, path: std::path::PathBuf) -> EntityStore<InventoryItem> {
    let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    let mut store = EntityStore::new(path);
    for id in 1..=n {
        let item = InventoryItem::create_at(
            now,
            i64::from(id),
            format!("item-{id}"),
            i64::from(id % 100),
            now - Duration::days(i64::from(id % 365)),
        )
        .unwrap();
        store.add(item).unwrap();
    }
    store
}

fn bench_find_by_id(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_by_id");
    for n in [100_u32, 10_000] {
        let store = populated(n, "unused.json".into());
        let id = EntityId::new(n / 2).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(n), &id, |b, id| {
            b.iter(|| black_box(store.find_by_id(*id)))
        });
    }
    group.finish();
}

fn bench_find_first_matching(c: &mut Criterion) {
    let store = populated(10_000, "unused.json".into());
    c.bench_function("find_first_matching_10k", |b| {
        b.iter(|| black_box(store.find_first_matching(|i| i.name() == "item-9999")))
    });
}

fn bench_save_load(c: &mut Criterion) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bench.json");
    let mut store = populated(1_000, path);

    c.bench_function("save_1k", |b| b.iter(|| store.save_to_file().unwrap()));
    c.bench_function("load_1k", |b| b.iter(|| store.load_from_file().unwrap()));
}

criterion_group!(
    benches,
    bench_find_by_id,
    bench_find_first_matching,
    bench_save_load
);
criterion_main!(benches);
