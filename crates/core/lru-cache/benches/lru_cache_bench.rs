//! LRU 缓存性能基准测试
//!
//! 测量单线程命中/未命中/驱逐路径，以及多线程争用下的吞吐量。

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use lru_cache::LruCache;
use std::sync::Arc;
use std::thread;

/// 基准测试：命中路径（get 提升）
fn bench_get_hit(c: &mut Criterion) {
    let mut group = c.benchmark_group("lru_get_hit");

    for capacity in [64usize, 1024, 16_384] {
        let cache = LruCache::new(capacity);
        for i in 0..capacity {
            cache.set(i, i);
        }

        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::from_parameter(capacity), &capacity, |b, &cap| {
            let mut i = 0usize;
            b.iter(|| {
                i = (i + 1) % cap;
                black_box(cache.get(&black_box(i)))
            })
        });
    }

    group.finish();
}

/// 基准测试：未命中路径
fn bench_get_miss(c: &mut Criterion) {
    let cache = LruCache::new(1024);
    for i in 0..1024usize {
        cache.set(i, i);
    }

    c.bench_function("lru_get_miss", |b| {
        b.iter(|| black_box(cache.get(&black_box(usize::MAX))))
    });
}

/// 基准测试：缓存已满时持续插入新键（每次都驱逐）
fn bench_set_with_eviction(c: &mut Criterion) {
    let mut group = c.benchmark_group("lru_set_evict");

    for capacity in [64usize, 1024, 16_384] {
        let cache = LruCache::new(capacity);
        for i in 0..capacity {
            cache.set(i, i);
        }

        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::from_parameter(capacity), &capacity, |b, &cap| {
            let mut next = cap;
            b.iter(|| {
                next += 1;
                cache.set(black_box(next), black_box(next));
            })
        });
    }

    group.finish();
}

/// 基准测试：多线程混合读写
fn bench_contended(c: &mut Criterion) {
    let mut group = c.benchmark_group("lru_contended");

    for threads in [1usize, 2, 4, 8] {
        group.throughput(Throughput::Elements((threads * 1000) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(threads), &threads, |b, &threads| {
            let cache = Arc::new(LruCache::new(512));
            b.iter(|| {
                let handles: Vec<_> = (0..threads)
                    .map(|t| {
                        let cache = Arc::clone(&cache);
                        thread::spawn(move || {
                            for i in 0..1000usize {
                                let key = (t * 7919 + i) % 1024;
                                if i % 4 == 0 {
                                    cache.set(key, i);
                                } else {
                                    black_box(cache.get(&key));
                                }
                            }
                        })
                    })
                    .collect();
                for handle in handles {
                    handle.join().unwrap();
                }
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_get_hit,
    bench_get_miss,
    bench_set_with_eviction,
    bench_contended
);
criterion_main!(benches);
