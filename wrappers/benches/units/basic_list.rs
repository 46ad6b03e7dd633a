use criterion::{Criterion, criterion_group};
use nskv::List;
use rand::Rng;

fn append_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("** nskv::basic::list::List **");
    group
        .measurement_time(std::time::Duration::from_secs(3))
        .sample_size(10);

    let l = List::new("bench", super::tmp_db());
    (0..1000u64).for_each(|n| {
        l.append(n.to_be_bytes()).unwrap();
    });

    group.bench_function(" append ", |b| {
        b.iter(|| {
            l.append([7u8; 128]).unwrap();
        })
    });

    group.bench_function(" random get ", |b| {
        b.iter(|| {
            let idx = rand::thread_rng().gen_range(0..1000u64);
            l.get(idx).unwrap();
        })
    });

    group.finish();
}

criterion_group!(benches, append_get);
