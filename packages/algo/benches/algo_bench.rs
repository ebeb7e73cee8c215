//! Benchmark suite for leitner-algo
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use leitner_algo::{
    compute_progress, due_cards, update, BucketAssignment, Card, Difficulty, PracticeEvent,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const DECK_SIZE: usize = 2_000;

fn random_deck(rng: &mut ChaCha8Rng) -> BucketAssignment {
    BucketAssignment::from_buckets((0..DECK_SIZE).map(|i| {
        let bucket = rng.gen_range(0..8u32);
        (bucket, vec![Card::new(format!("front-{i}"), format!("back-{i}"))])
    }))
}

fn random_history(rng: &mut ChaCha8Rng, len: usize) -> Vec<PracticeEvent> {
    (0..len)
        .map(|i| {
            let card = Card::new(format!("front-{}", rng.gen_range(0..DECK_SIZE)), "back");
            let difficulty = Difficulty::ALL[rng.gen_range(0..Difficulty::ALL.len())];
            PracticeEvent::new(&card, i as i64, difficulty, Some(0), 1)
        })
        .collect()
}

fn bench_due_cards(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let view = random_deck(&mut rng).to_array_view();
    c.bench_function("due_cards/day_8", |b| {
        b.iter(|| due_cards(black_box(&view), black_box(8)))
    });
}

fn bench_update(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let buckets = random_deck(&mut rng);
    let card = Card::new("front-1000", "back-1000");
    c.bench_function("update/easy", |b| {
        b.iter(|| update(black_box(&buckets), black_box(&card), Difficulty::Easy))
    });
}

fn bench_compute_progress(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(13);
    let buckets = random_deck(&mut rng);
    let history = random_history(&mut rng, 10_000);
    c.bench_function("compute_progress/10k_events", |b| {
        b.iter(|| compute_progress(black_box(&buckets), black_box(&history)))
    });
}

criterion_group!(benches, bench_due_cards, bench_update, bench_compute_progress);
criterion_main!(benches);
