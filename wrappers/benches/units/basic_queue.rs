use criterion::{Criterion, criterion_group};
use nskv::Queue;
use std::sync::atomic::{AtomicUsize, Ordering};

fn push_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("** nskv::basic::queue::Queue **");
    group
        .measurement_time(std::time::Duration::from_secs(3))
        .sample_size(10);

    let i = AtomicUsize::new(0);
    let q = Queue::new("bench", super::tmp_db());

    group.bench_function(" push ", |b| {
        b.iter(|| {
            let n = i.fetch_add(1, Ordering::SeqCst);
            q.push(vec![n as u8; 128]).unwrap();
        })
    });

    group.bench_function(" pop ", |b| {
        b.iter(|| {
            if q.pop().is_err() {
                q.push([0u8; 128]).unwrap();
            }
        })
    });

    group.bench_function(" push + pop ", |b| {
        b.iter(|| {
            q.push([1u8; 128]).unwrap();
            q.pop().unwrap();
        })
    });

    group.finish();
}

criterion_group!(benches, push_pop);
