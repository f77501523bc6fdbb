use criterion::{BatchSize, Criterion, criterion_group, criterion_main};

use simplebank::domain::operations;
use simplebank::prelude::*;

fn bench_posting(c: &mut Criterion) {
    c.bench_function("post_1000_deposits", |b| {
        b.iter_batched(
            || Account::<FixedPoint>::new("bench", "000-0001"),
            |mut account| {
                for _ in 0..1000 {
                    operations::post(
                        &mut account,
                        Transaction::deposit(FixedPoint::from_raw(10_000)),
                    )
                    .unwrap();
                }
                account
            },
            BatchSize::SmallInput,
        )
    });

    c.bench_function("post_500_deposit_withdraw_pairs", |b| {
        b.iter_batched(
            || Account::<FixedPoint>::new("bench", "000-0001"),
            |mut account| {
                for _ in 0..500 {
                    operations::post(
                        &mut account,
                        Transaction::deposit(FixedPoint::from_raw(10_000)),
                    )
                    .unwrap();
                    operations::post(
                        &mut account,
                        Transaction::withdrawal(FixedPoint::from_raw(10_000)),
                    )
                    .unwrap();
                }
                account
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_posting);
criterion_main!(benches);
