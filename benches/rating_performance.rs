//! Performance benchmarks for the rating engine and the full pass

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use elo_ledger::config::{AppConfig, RatingSettings};
use elo_ledger::processor::StreamProcessor;
use elo_ledger::rating::{EloCalculator, MatchOutcome};
use std::io::Cursor;

fn synthetic_dataset(rows: usize) -> String {
    let mut input = String::from("event_id,r_fighter,b_fighter,winner\n");
    for i in 0..rows {
        let first = i % 64;
        let second = (i * 7 + 1) % 64;
        let token = match i % 3 {
            0 => "Red",
            1 => "Blue",
            _ => "Draw",
        };
        input.push_str(&format!("{},fighter_{},fighter_{},{}\n", i, first, second, token));
    }
    input
}

fn bench_rating_engine(c: &mut Criterion) {
    let calculator = EloCalculator::from_settings(&RatingSettings::default()).unwrap();

    c.bench_function("expected_score", |b| {
        b.iter(|| calculator.expected_score(black_box(1516.0), black_box(1484.0)))
    });

    c.bench_function("rate_pair", |b| {
        b.iter(|| {
            calculator.rate_pair(
                black_box(1516.0),
                black_box(1484.0),
                black_box(MatchOutcome::FirstWin),
            )
        })
    });
}

fn bench_full_pass(c: &mut Criterion) {
    let input = synthetic_dataset(10_000);
    let processor = StreamProcessor::new(AppConfig::default()).unwrap();

    c.bench_function("augment_10k_rows", |b| {
        b.iter(|| {
            let mut output = Vec::with_capacity(input.len() * 2);
            processor
                .process(Cursor::new(input.as_bytes()), &mut output)
                .unwrap();
            black_box(output.len())
        })
    });
}

criterion_group!(benches, bench_rating_engine, bench_full_pass);
criterion_main!(benches);
