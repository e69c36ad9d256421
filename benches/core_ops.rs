use byte_lru_cache::ByteLruCache;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const VALUE: &str = "xxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxx"; // 32 bytes

fn bench_get_hit(c: &mut Criterion) {
    let mut cache: ByteLruCache<String> = ByteLruCache::new(0, None);
    for i in 0..10_000 {
        cache.add(format!("key_{}", i), VALUE.to_string());
    }

    let mut i = 0usize;
    c.bench_function("get_hit", |b| {
        b.iter(|| {
            let key = format!("key_{}", i % 10_000);
            i += 1;
            black_box(cache.get(&key))
        })
    });
}

fn bench_get_miss(c: &mut Criterion) {
    let mut cache: ByteLruCache<String> = ByteLruCache::new(0, None);
    for i in 0..10_000 {
        cache.add(format!("key_{}", i), VALUE.to_string());
    }

    c.bench_function("get_miss", |b| {
        b.iter(|| black_box(cache.get("absent_key")))
    });
}

fn bench_add_with_eviction(c: &mut Criterion) {
    // Budget sized so that steady-state adds evict roughly one entry each.
    let entry_cost = "key_0000000".len() + VALUE.len();
    let mut cache: ByteLruCache<String> = ByteLruCache::new(entry_cost * 1_000, None);

    let mut i = 0usize;
    c.bench_function("add_with_eviction", |b| {
        b.iter(|| {
            let key = format!("key_{:07}", i);
            i += 1;
            cache.add(key, VALUE.to_string());
        })
    });
}

criterion_group!(
    benches,
    bench_get_hit,
    bench_get_miss,
    bench_add_with_eviction
);
criterion_main!(benches);
