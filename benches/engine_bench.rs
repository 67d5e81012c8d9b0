//! Criterion benchmarks for the kernel hot paths.
//!
//! Benchmarks:
//! 1. Batch ingestion over a seeded random-walk tick stream
//! 2. Tick stepping with a populated open-order set (the scan cost)
//! 3. Order placement and cancellation churn

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use ticklab::{Engine, EngineConfig, Order, Side, TickEvent};

struct Walk {
    timestamps: Vec<i64>,
    price_ticks: Vec<i64>,
    qtys: Vec<f64>,
    sides: Vec<u8>,
}

fn make_walk(n: usize) -> Walk {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let mut price = 10_000i64;
    let mut walk = Walk {
        timestamps: Vec::with_capacity(n),
        price_ticks: Vec::with_capacity(n),
        qtys: Vec::with_capacity(n),
        sides: Vec::with_capacity(n),
    };
    for i in 0..n {
        price += rng.gen_range(-10..=10);
        walk.timestamps.push(1_000 + i as i64);
        walk.price_ticks.push(price);
        walk.qtys.push(rng.gen_range(0.1..2.0));
        walk.sides.push(rng.gen_range(0..2u8));
    }
    walk
}

fn bench_engine() -> Engine {
    Engine::new(EngineConfig::new(1.0, 2.0, 2.0, 100_000.0, 0.01)).unwrap()
}

fn bench_batch_ingestion(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_ingestion");

    for &tick_count in &[1_000, 10_000, 100_000] {
        let walk = make_walk(tick_count);
        group.bench_with_input(
            BenchmarkId::new("random_walk", tick_count),
            &tick_count,
            |b, _| {
                let mut engine = bench_engine();
                b.iter(|| {
                    engine.reset();
                    engine
                        .step_batch(
                            black_box(&walk.timestamps),
                            black_box(&walk.price_ticks),
                            black_box(&walk.qtys),
                            black_box(&walk.sides),
                        )
                        .unwrap();
                    black_box(engine.snapshot())
                });
            },
        );
    }

    group.finish();
}

fn bench_tick_with_resting_orders(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick_step");

    for &order_count in &[0usize, 64, 512] {
        group.bench_with_input(
            BenchmarkId::new("resting_limits", order_count),
            &order_count,
            |b, _| {
                let mut engine = bench_engine();
                // Resting buys far below the walk so the scan never fills.
                for order_id in 0..order_count as u64 {
                    engine
                        .place_order(&Order::limit_buy(order_id, 1.0, 1))
                        .unwrap();
                }
                let tick = TickEvent::new(1_000, 10_000, 1.0, Side::Buy);
                b.iter(|| engine.step_tick(black_box(&tick)).unwrap());
            },
        );
    }

    group.finish();
}

fn bench_order_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("order_churn");

    group.bench_function("place_cancel_compact_100", |b| {
        let mut engine = bench_engine();
        let tick = TickEvent::new(1_000, 10_000, 1.0, Side::Buy);
        b.iter(|| {
            for order_id in 0..100u64 {
                engine
                    .place_order(&Order::limit_buy(order_id, 1.0, 1))
                    .unwrap();
            }
            for order_id in 0..100u64 {
                engine.cancel_order(order_id).unwrap();
            }
            // Compaction happens on the next tick.
            engine.step_tick(black_box(&tick)).unwrap();
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_batch_ingestion,
    bench_tick_with_resting_orders,
    bench_order_churn,
);
criterion_main!(benches);
