use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use cinder_chainparams::{
    networks, BlockMeta, TreasuryFundSchedule, TreasuryFundSettings,
};

fn make_schedule_with_entries(n: usize) -> TreasuryFundSchedule {
    let mut schedule = TreasuryFundSchedule::new();
    for i in 0..n {
        let settings = TreasuryFundSettings::new(format!("addr{i}"), 10, 100).unwrap();
        schedule.push(i as i64 * 1_000, settings).unwrap();
    }
    schedule
}

fn bench_treasury_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("treasury_lookup");

    for entry_count in [1, 10, 100, 1000] {
        let schedule = make_schedule_with_entries(entry_count);
        let time = entry_count as i64 * 1_000 - 500;

        group.bench_with_input(
            BenchmarkId::new("settings_at", entry_count),
            &entry_count,
            |b, _| {
                b.iter(|| black_box(schedule.settings_at(black_box(time))));
            },
        );
    }

    group.finish();
}

fn bench_pos_reward(c: &mut Criterion) {
    let params = networks::main_params().unwrap();
    let genesis = params.genesis_block().time();
    let prev = BlockMeta {
        height: 5_039,
        time: genesis + 600_000,
    };

    c.bench_function("pos_reward_split", |b| {
        b.iter(|| black_box(params.pos_reward_split(black_box(&prev), black_box(25_000))));
    });
    c.bench_function("coin_year_reward", |b| {
        b.iter(|| black_box(params.coin_year_reward(black_box(genesis + 90_000_000))));
    });
}

fn bench_prefix_match(c: &mut Criterion) {
    let params = networks::main_params().unwrap();
    let mut group = c.benchmark_group("prefix_match");

    for (name, candidate) in [
        ("legacy_hit", vec![0x2e]),
        ("bech32_hit", b"ccs".to_vec()),
        ("miss", vec![0xff; 4]),
    ] {
        group.bench_with_input(BenchmarkId::new("match_prefix", name), &candidate, |b, candidate| {
            b.iter(|| black_box(params.match_prefix(black_box(candidate))));
        });
    }

    group.bench_function("match_bech32_leading", |b| {
        b.iter(|| black_box(params.match_bech32_leading(black_box(b"cep1qqqqqqqqqq"))));
    });

    group.finish();
}

criterion_group!(benches, bench_treasury_lookup, bench_pos_reward, bench_prefix_match);
criterion_main!(benches);
