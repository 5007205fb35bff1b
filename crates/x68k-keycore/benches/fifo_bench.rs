//! Criterion benchmarks for the byte FIFO.
//!
//! Run with:
//! ```bash
//! cargo bench --package x68k-keycore --bench fifo_bench
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use x68k_keycore::ByteFifo;

fn bench_push_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("fifo");

    for capacity in [3u8, 32, 255] {
        // Fill to capacity, then drain; exercises cursor wraparound every pass.
        group.bench_with_input(
            BenchmarkId::new("fill_and_drain", capacity),
            &capacity,
            |b, &capacity| {
                let mut fifo = ByteFifo::new(capacity).expect("non-zero capacity");
                b.iter(|| {
                    for i in 0..capacity {
                        let _ = fifo.push(black_box(i));
                    }
                    while let Some(byte) = fifo.pop() {
                        black_box(byte);
                    }
                })
            },
        );
    }

    group.bench_function("push_rejected_when_full", |b| {
        let mut fifo = ByteFifo::new(1).expect("non-zero capacity");
        let _ = fifo.push(0);
        b.iter(|| fifo.push(black_box(0xAA)).is_err())
    });

    group.finish();
}

criterion_group!(benches, bench_push_pop);
criterion_main!(benches);
