//! Hit-rate and throughput benchmarks for the DIP simulator.
//!
//! Workloads are deterministic (XorShift64) so runs are comparable without
//! pulling in external RNG crates.

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use dipkit::simulator::DipSimulator;

/// Simple XorShift64 RNG for deterministic workloads.
struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    fn new(seed: u64) -> Self {
        Self { state: seed.max(1) }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }
}

fn reference_sim() -> DipSimulator {
    DipSimulator::builder()
        .total_bytes(1 << 20)
        .associativity(16)
        .line_bytes(64)
        .build()
        .expect("reference geometry is valid")
}

fn bench_linear_sweep(c: &mut Criterion) {
    // The reference driver workload: sequential sweep over a working set
    // larger than the cache, repeated.
    c.bench_function("dip_linear_sweep", |b| {
        b.iter_batched(
            reference_sim,
            |mut sim| {
                for _ in 0..4 {
                    for line in 0..32_768u64 {
                        let _ = std::hint::black_box(sim.access(line * 64));
                    }
                }
                sim
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_uniform_random(c: &mut Criterion) {
    c.bench_function("dip_uniform_random", |b| {
        b.iter_batched(
            reference_sim,
            |mut sim| {
                let mut rng = XorShift64::new(0xdead_beef);
                for _ in 0..131_072 {
                    let addr = rng.next_u64() % (1 << 26);
                    let _ = std::hint::black_box(sim.access(addr));
                }
                sim
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_hotset(c: &mut Criterion) {
    // 90% of accesses over 10% of a 2x-cache-sized universe.
    c.bench_function("dip_hotset", |b| {
        b.iter_batched(
            reference_sim,
            |mut sim| {
                let mut rng = XorShift64::new(42);
                let universe = 2 * (1u64 << 20);
                let hot = universe / 10;
                for _ in 0..131_072 {
                    let addr = if rng.next_u64() % 10 != 0 {
                        rng.next_u64() % hot
                    } else {
                        hot + rng.next_u64() % (universe - hot)
                    };
                    let _ = std::hint::black_box(sim.access(addr));
                }
                sim
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(
    benches,
    bench_linear_sweep,
    bench_uniform_random,
    bench_hotset
);
criterion_main!(benches);
