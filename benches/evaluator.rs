use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use holdem_odds::cards::parse_cards;
use holdem_odds::evaluator::{best_hand, classify_five};
use holdem_odds::range::HandRange;
use holdem_odds::simulate::Simulation;

fn bench_classify_five(c: &mut Criterion) {
    let hi = parse_cards("Ah Kd 7s 5c 2d").unwrap();
    let hi: [_; 5] = hi.try_into().unwrap();
    let sf = parse_cards("As Ks Qs Js Ts").unwrap();
    let sf: [_; 5] = sf.try_into().unwrap();

    let mut g = c.benchmark_group("classify_five");
    g.bench_with_input(BenchmarkId::new("high_card", "A,K,7,5,2"), &hi, |b, input| {
        b.iter(|| classify_five(black_box(input)))
    });
    g.bench_with_input(BenchmarkId::new("straight_flush", "royal"), &sf, |b, input| {
        b.iter(|| classify_five(black_box(input)))
    });
    g.finish();
}

fn bench_best_hand_seven(c: &mut Criterion) {
    let seven = parse_cards("As Ah Ks Qs Js Ts 9s").unwrap();
    c.bench_function("best_hand_seven", |b| b.iter(|| best_hand(black_box(&seven))));
}

fn bench_simulation(c: &mut Criterion) {
    c.bench_function("simulate_1000_aa_vs_kk", |b| {
        b.iter(|| {
            let ranges = HandRange::parse_list("AsAd,KsKd", &[]).unwrap();
            let mut sim = Simulation::new(ranges, vec![], vec![], 1000).unwrap();
            sim.run_seeded(black_box(7)).unwrap()
        })
    });
}

criterion_group!(benches, bench_classify_five, bench_best_hand_seven, bench_simulation);
criterion_main!(benches);
