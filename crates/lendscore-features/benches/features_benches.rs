//! Criterion benchmarks for feature aggregation.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use lendscore_core::constants::SECS_PER_DAY;
use lendscore_core::types::{ActionKind, TransactionRecord};
use lendscore_features::FeatureAggregator;

const ACTIONS: [&str; 6] = [
    "deposit",
    "borrow",
    "repay",
    "redeemunderlying",
    "liquidationcall",
    "stake",
];

fn synthetic_batch(records: usize, wallets: usize) -> Vec<TransactionRecord> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..records)
        .filter_map(|_| {
            let wallet = format!("0x{:040x}", rng.gen_range(0..wallets));
            let action = ACTIONS[rng.gen_range(0..ACTIONS.len())];
            let ts = 1_619_827_200 + rng.gen_range(0..180 * SECS_PER_DAY);
            TransactionRecord::new(wallet, ActionKind::parse(action), ts)
        })
        .collect()
}

fn bench_aggregate(c: &mut Criterion) {
    let batch = synthetic_batch(100_000, 3_500);
    let agg = FeatureAggregator::new();

    c.bench_function("aggregate_100k_records", |b| {
        b.iter(|| agg.aggregate(black_box(&batch)))
    });
}

fn bench_action_parse(c: &mut Criterion) {
    c.bench_function("action_parse_mixed_case", |b| {
        b.iter(|| ActionKind::parse(black_box("RedeemUnderlying")))
    });
}

criterion_group!(benches, bench_aggregate, bench_action_parse);
criterion_main!(benches);
