use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_wordsearch::core::{
    generate_grid, validate_selection, GameSession, SessionSetup, SimpleRng, Theme,
};
use tui_wordsearch::types::Difficulty;

fn bench_generate_expert(c: &mut Criterion) {
    let config = Difficulty::Expert.config();
    let words = Theme::Nature.words();
    let bonus = tui_wordsearch::core::themes::bonus_dictionary();
    let mut rng = SimpleRng::new(12345);

    c.bench_function("generate_grid_expert", |b| {
        b.iter(|| generate_grid(black_box(words), &config, &bonus, &mut rng))
    });
}

fn bench_validate_selection(c: &mut Criterion) {
    let config = Difficulty::Expert.config();
    let mut rng = SimpleRng::new(12345);
    let grid = generate_grid(Theme::Animals.words(), &config, tui_wordsearch::core::NO_BONUS_WORDS, &mut rng);
    let mut path = grid.words()[grid.words().len() - 1].path();
    path.reverse();

    c.bench_function("validate_selection_reversed", |b| {
        b.iter(|| validate_selection(black_box(&path), grid.words()))
    });
}

fn bench_bonus_lookup(c: &mut Criterion) {
    let setup = SessionSetup::new(Difficulty::Expert, Theme::Food, 99);
    let size = GameSession::new(setup.clone())
        .grid()
        .map(|g| g.size())
        .unwrap_or(0) as i8;

    c.bench_function("bonus_miss_full_row", |b| {
        b.iter_batched(
            || GameSession::new(setup.clone()),
            |mut s| {
                let row: Vec<_> = (0..size)
                    .map(|col| tui_wordsearch::types::Position::new(3, col))
                    .collect();
                s.handle_selection_complete(black_box(&row))
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_tick(c: &mut Criterion) {
    let setup = SessionSetup::new(Difficulty::Medium, Theme::Love, 7);
    let mut session = GameSession::new(setup);
    session.time_freeze();
    session.highlight_first_letters();

    c.bench_function("session_tick", |b| {
        b.iter(|| {
            if !session.is_active() {
                session.restart();
            }
            session.tick()
        })
    });
}

criterion_group!(
    benches,
    bench_generate_expert,
    bench_validate_selection,
    bench_bonus_lookup,
    bench_tick
);
criterion_main!(benches);
