use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ferrous_inject::*;

// ===== Micro Benchmarks =====

fn bench_singleton_hit(c: &mut Criterion) {
    let injector = Injector::new();
    injector.inject_instance(42u64);

    c.bench_function("singleton_hit_u64", |b| {
        b.iter(|| {
            let v = injector.extract::<u64>(Mode::Singleton);
            black_box(v);
        })
    });
}

fn bench_factory(c: &mut Criterion) {
    struct Service {
        data: [u8; 64],
    }

    let injector = Injector::new();
    injector.inject(Mode::Factory, |_| Service { data: [0; 64] });

    c.bench_function("factory_u8x64", |b| {
        b.iter(|| {
            let v = injector.extract::<Service>(Mode::Factory);
            black_box(v.data[0]);
        })
    });
}

fn bench_miss_policies(c: &mut Criterion) {
    struct Missing;

    let mut group = c.benchmark_group("miss");
    let injector = Injector::new();

    group.bench_function("try_extract", |b| {
        b.iter(|| black_box(injector.try_extract::<Missing>(Mode::Both).is_err()))
    });
    group.bench_function("extract_optional", |b| {
        b.iter(|| black_box(injector.extract_optional::<Missing>(Mode::Both).is_none()))
    });

    group.finish();
}

fn bench_both_fallback(c: &mut Criterion) {
    let mut group = c.benchmark_group("both_fallback");

    let with_singleton = Injector::new();
    with_singleton.inject(Mode::Both, |_| 7u32);
    group.bench_function("singleton_present", |b| {
        b.iter(|| black_box(with_singleton.extract::<u32>(Mode::Both)))
    });

    let factory_only = Injector::new();
    factory_only.inject(Mode::Factory, |_| 7u32);
    group.bench_function("factory_fallback", |b| {
        b.iter(|| black_box(factory_only.extract::<u32>(Mode::Both)))
    });

    group.finish();
}

fn bench_inject(c: &mut Criterion) {
    let injector = Injector::new();

    c.bench_function("inject_both", |b| {
        b.iter(|| injector.inject(Mode::Both, |_| black_box(1u64)))
    });
}

fn bench_contention(c: &mut Criterion) {
    let mut group = c.benchmark_group("contention");

    let injector = Injector::new();
    injector.inject_instance(42u64);

    for &thread_count in &[1, 2, 4, 8] {
        group.bench_with_input(
            BenchmarkId::new("singleton_threads", thread_count),
            &thread_count,
            |b, &threads| {
                b.iter_custom(|iters| {
                    let start = std::time::Instant::now();
                    crossbeam_utils::thread::scope(|s| {
                        for _ in 0..threads {
                            let injector_ref = &injector;
                            s.spawn(move |_| {
                                for _ in 0..iters / threads as u64 {
                                    let v = injector_ref.extract::<u64>(Mode::Both);
                                    black_box(v);
                                }
                            });
                        }
                    })
                    .unwrap();
                    start.elapsed()
                })
            },
        );
    }

    group.finish();
}

fn bench_async_extract(c: &mut Criterion) {
    let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
    let injector = AsyncInjector::new();
    runtime.block_on(injector.inject_instance(42u64));

    c.bench_function("async_singleton_hit_u64", |b| {
        b.iter(|| {
            let v = runtime.block_on(injector.extract::<u64>(Mode::Singleton));
            black_box(v);
        })
    });
}

criterion_group!(
    micro_benches,
    bench_singleton_hit,
    bench_factory,
    bench_miss_policies,
    bench_both_fallback,
    bench_inject,
    bench_contention,
    bench_async_extract
);

criterion_main!(micro_benches);
