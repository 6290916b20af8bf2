use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use uno_engine::{GameConfig, UnoGame};

const MAX_TURNS: usize = 2000;

fn play_out(player_count: usize, seed: u64) -> usize {
    let mut game = UnoGame::with_config(GameConfig::new(player_count).with_seed(seed))
        .expect("valid config");
    game.initialize();

    let mut turns = 0;
    while !game.is_game_over() && turns < MAX_TURNS {
        game.play_turn().expect("initialized");
        turns += 1;
    }
    turns
}

fn bench_full_game(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_game");
    for player_count in [2usize, 4, 10] {
        group.bench_with_input(
            BenchmarkId::from_parameter(player_count),
            &player_count,
            |b, &n| b.iter(|| play_out(black_box(n), black_box(1234))),
        );
    }
    group.finish();
}

fn bench_initialize(c: &mut Criterion) {
    let mut game = UnoGame::new(4).expect("valid config");
    c.bench_function("initialize", |b| b.iter(|| game.initialize()));
}

criterion_group!(benches, bench_full_game, bench_initialize);
criterion_main!(benches);
