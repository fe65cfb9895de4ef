//! Benchmark for the hint engine's candidate scan.
//!
//! Every call re-scores the whole dictionary against the whole history, so the
//! cost grows with the number of turns played.

use std::collections::HashSet;
use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use wordle_ru::{bundled_dictionary, evaluate, Suggester, TurnResult, Word};

fn history_for(secret: Word, guesses: &[Word]) -> Vec<TurnResult> {
    guesses
        .iter()
        .map(|&guess| TurnResult {
            guess,
            pattern: evaluate(&guess, &secret),
        })
        .collect()
}

fn benchmark_candidates(criterion: &mut Criterion) {
    let words = bundled_dictionary().expect("bundled dictionary");
    let suggester = Suggester::new(&words);
    let secret = words.words()[0];
    let used = HashSet::new();

    let mut group = criterion.benchmark_group("candidates");

    for turns in [0usize, 1, 3, 5] {
        let guesses: Vec<Word> = words.words().iter().rev().take(turns).copied().collect();
        let history = history_for(secret, &guesses);

        group.bench_with_input(BenchmarkId::from_parameter(turns), &history, |bencher, history| {
            bencher.iter(|| black_box(suggester.candidates(black_box(history), &used)));
        });
    }

    group.finish();
}

fn benchmark_evaluate(criterion: &mut Criterion) {
    let words = bundled_dictionary().expect("bundled dictionary");
    let guess = words.words()[1];

    criterion.bench_function("evaluate_dictionary", |bencher| {
        bencher.iter(|| {
            for secret in words.words() {
                black_box(evaluate(black_box(&guess), secret));
            }
        });
    });
}

criterion_group!(benches, benchmark_candidates, benchmark_evaluate);
criterion_main!(benches);
