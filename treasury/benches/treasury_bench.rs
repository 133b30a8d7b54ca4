use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use ember_reserve::{Cinder, Coin, Ember, Spark};
use ember_treasury::auth::fee_authority;
use ember_treasury::TreasuryEngine;
use ember_types::{AccountAddress, CurrencyCode};

fn compliance_account() -> AccountAddress {
    AccountAddress::new("emb_1compliance1111111111111111111111111111111111111111111111111111")
}

fn bootstrapped() -> TreasuryEngine {
    let mut engine = TreasuryEngine::new();
    engine.roles.grant_compliance(compliance_account());
    engine.caps.grant::<Spark>(compliance_account()).unwrap();
    engine.caps.grant::<Cinder>(compliance_account()).unwrap();
    engine
        .initialize(&fee_authority(), &compliance_account())
        .unwrap();
    engine.finish_bootstrap();
    engine
}

fn bench_fee_collection(c: &mut Criterion) {
    let mut group = c.benchmark_group("fee_collection");

    for deposits in [1usize, 100, 10_000] {
        group.bench_with_input(
            BenchmarkId::new("pay_fee", deposits),
            &deposits,
            |b, &count| {
                b.iter(|| {
                    let mut engine = bootstrapped();
                    for _ in 0..count {
                        engine.pay_fee(Coin::<Spark>::new(black_box(10)));
                    }
                    black_box(engine.vault_balance::<Spark>())
                });
            },
        );
    }

    group.finish();
}

fn bench_burn_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("burn_cycle");
    let compliance = compliance_account();

    group.bench_function("reserve", |b| {
        b.iter(|| {
            let mut engine = bootstrapped();
            engine.pay_fee(Coin::<Spark>::new(black_box(1_000_000)));
            black_box(engine.burn_fees(CurrencyCode::Spark, &compliance).unwrap())
        });
    });

    group.bench_function("basket", |b| {
        b.iter(|| {
            let mut engine = bootstrapped();
            engine.pay_fee(Coin::<Ember>::new(black_box(1_000_000)));
            black_box(engine.burn_fees(CurrencyCode::Ember, &compliance).unwrap())
        });
    });

    group.finish();
}

criterion_group!(benches, bench_fee_collection, bench_burn_cycle);
criterion_main!(benches);
