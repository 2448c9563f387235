use std::hint::black_box;

use asl_fingerspell_classifier::{
    decide, ClassifierParams, GestureClassifier, HandFacts, Letter, LETTER_RULES,
};
use criterion::{criterion_group, criterion_main, Criterion};

#[path = "../tests/common/mod.rs"]
mod common;

fn bench_classify(c: &mut Criterion) {
    let params = ClassifierParams::default();
    let hands: Vec<_> = Letter::ALL.iter().map(|&l| common::canonical(l)).collect();

    c.bench_function("hand_facts_evaluate", |b| {
        let hand = common::canonical(Letter::K);
        b.iter(|| HandFacts::evaluate(black_box(&hand), &params))
    });

    c.bench_function("decide_alphabet", |b| {
        let facts: Vec<_> = hands
            .iter()
            .map(|h| HandFacts::evaluate(h, &params))
            .collect();
        b.iter(|| {
            for f in &facts {
                black_box(decide(black_box(f), &LETTER_RULES));
            }
        })
    });

    c.bench_function("process_points_set_alphabet", |b| {
        let mut classifier = GestureClassifier::new(params.clone()).expect("valid params");
        b.iter(|| {
            for hand in &hands {
                black_box(classifier.process_points_set(black_box(hand)));
            }
        })
    });
}

criterion_group!(benches, bench_classify);
criterion_main!(benches);
