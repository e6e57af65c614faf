//! Benchmarks for question selection and full simulated games.

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use stem_guess::catalog::{Catalog, QuestionId};
use stem_guess::core::EngineConfig;
use stem_guess::engine::{find_best_question, GuessingEngine};
use stem_guess::play::evaluate_all;

fn bench_first_question(c: &mut Criterion) {
    let catalog = Catalog::builtin().unwrap();
    let remaining: Vec<_> = catalog.character_ids().cloned().collect();

    c.bench_function("find_best_question_builtin", |bench| {
        bench.iter(|| {
            black_box(find_best_question(&catalog, remaining.iter(), |_: &QuestionId| false))
        })
    });
}

fn bench_answer(c: &mut Criterion) {
    let catalog = Arc::new(Catalog::builtin().unwrap());
    let mut engine = GuessingEngine::new(catalog);

    c.bench_function("start_and_answer_builtin", |bench| {
        bench.iter(|| {
            engine.start_game();
            black_box(engine.answer_question(true))
        })
    });
}

fn bench_evaluate_all(c: &mut Criterion) {
    let catalog = Arc::new(Catalog::builtin().unwrap());
    let config = EngineConfig::default();

    c.bench_function("evaluate_all_builtin", |bench| {
        bench.iter(|| black_box(evaluate_all(&catalog, &config)))
    });
}

criterion_group!(benches, bench_first_question, bench_answer, bench_evaluate_all);
criterion_main!(benches);
