use criterion::{Criterion, black_box, criterion_group, criterion_main};
use nexa_scheduler::{LocalScheduler, Scheduler};

fn benchmark_microtasks(c: &mut Criterion) {
    c.bench_function("schedule_microtask 1000", |b| {
        b.iter(|| {
            let scheduler = LocalScheduler::new();
            for _ in 0..1000 {
                scheduler.schedule_microtask(Box::new(|| {
                    black_box(1 + 1);
                }));
            }
            scheduler.run_microtasks();
        })
    });
}

fn benchmark_macrotasks(c: &mut Criterion) {
    c.bench_function("schedule_macrotask 1000", |b| {
        b.iter(|| {
            let scheduler = LocalScheduler::new();
            for _ in 0..1000 {
                scheduler.schedule_macrotask(Box::new(|| {
                    black_box(1 + 1);
                }));
            }
            scheduler.run_until_idle();
        })
    });
}

criterion_group!(benches, benchmark_microtasks, benchmark_macrotasks);
criterion_main!(benches);
