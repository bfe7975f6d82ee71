//! Benchmarks for xsmom-rebalance daily planning.
#![allow(missing_docs)]

use std::collections::BTreeSet;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rand::Rng;
use xsmom_rebalance::prelude::*;

fn symbol(i: usize) -> Asset {
    Asset::new(format!("A{i:05}"))
}

fn random_scores(n: usize) -> ScoreVector {
    let mut rng = rand::thread_rng();
    let date = Date::from_ymd_opt(2024, 1, 2).unwrap_or_default();
    ScoreVector::from_pairs(date, (0..n).map(|i| (symbol(i), rng.r#gen::<f64>() * 100.0)))
        .unwrap()
}

/// Yesterday's book: `held` random names at +/- `w`.
fn random_portfolio(n: usize, held: usize, w: f64) -> PortfolioState {
    let mut rng = rand::thread_rng();
    let mut portfolio = PortfolioState::new();
    for _ in 0..held {
        let sign = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
        portfolio.set_position(symbol(rng.gen_range(0..n)), sign * w);
    }
    portfolio
}

/// Roughly one asset in a hundred is halted.
fn random_tradable(n: usize) -> BTreeSet<Asset> {
    let mut rng = rand::thread_rng();
    (0..n).filter(|_| rng.gen_range(0..100) != 0).map(symbol).collect()
}

fn bench_plan(c: &mut Criterion) {
    let mut group = c.benchmark_group("plan");
    group.sample_size(50);

    // Universe size, names per leg
    let scenarios = [
        (20, 3, "crypto_majors"),
        (500, 25, "sp500"),
        (3000, 100, "us_broad"),
        (10000, 250, "global"),
    ];

    for (n_assets, top_k, name) in scenarios {
        let config = RebalanceConfig { top_k, ..RebalanceConfig::default() };
        let rebalancer = Rebalancer::with_config(config).unwrap();

        group.throughput(Throughput::Elements(n_assets as u64));
        group.bench_with_input(BenchmarkId::new("all_tradable", name), &n_assets, |b, &n| {
            let scores = random_scores(n);
            let portfolio = random_portfolio(n, 2 * top_k, rebalancer.leg_weight());
            b.iter(|| {
                rebalancer
                    .plan(black_box(&scores), black_box(&portfolio), &AllTradable)
                    .unwrap()
            });
        });
        group.bench_with_input(BenchmarkId::new("halted", name), &n_assets, |b, &n| {
            let scores = random_scores(n);
            let portfolio = random_portfolio(n, 2 * top_k, rebalancer.leg_weight());
            let tradable = random_tradable(n);
            b.iter(|| {
                rebalancer.plan(black_box(&scores), black_box(&portfolio), &tradable).unwrap()
            });
        });
    }

    group.finish();
}

fn bench_screened(c: &mut Criterion) {
    let mut group = c.benchmark_group("plan_screened");

    let config = RebalanceConfig { screen_untradable: true, ..RebalanceConfig::default() };
    let rebalancer = Rebalancer::with_config(config).unwrap();

    for n_assets in [500, 3000] {
        group.bench_with_input(BenchmarkId::new("universe", n_assets), &n_assets, |b, &n| {
            let scores = random_scores(n);
            let portfolio = random_portfolio(n, 6, rebalancer.leg_weight());
            let tradable = random_tradable(n);
            b.iter(|| {
                rebalancer.plan(black_box(&scores), black_box(&portfolio), &tradable).unwrap()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_plan, bench_screened);
criterion_main!(benches);
