//! Move generation benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use backgammon_engine::board::Board;
use backgammon_engine::core::{Color, Dice, GameId, Players, Roll};
use backgammon_engine::game::Game;
use backgammon_engine::play::Play;
use backgammon_engine::sim::{EngineRunner, SimulationConfig};

fn bench_possible_moves(c: &mut Criterion) {
    let board = Board::standard();
    let white = Players::standard()[Color::White].clone();
    c.bench_function("possible_moves_opening", |b| {
        b.iter(|| {
            for die in 1..=6 {
                black_box(board.possible_moves(&white, black_box(die)));
            }
        })
    });
}

fn bench_play_initialize(c: &mut Criterion) {
    let board = Board::standard();
    let player = Players::standard()[Color::White]
        .clone()
        .with_dice(Dice::rolled(Roll::new(4, 4).unwrap()));
    c.bench_function("play_initialize_doubles", |b| {
        b.iter(|| black_box(Play::initialize(&board, &player)))
    });
}

fn bench_position_id(c: &mut Criterion) {
    let game = Game::new(GameId::new(1));
    c.bench_function("position_id_export", |b| b.iter(|| black_box(game.position_id())));
}

fn bench_random_game(c: &mut Criterion) {
    let runner = EngineRunner::random(SimulationConfig::new().with_seed(1));
    let mut index = 0;
    c.bench_function("random_game", |b| {
        b.iter(|| {
            index += 1;
            black_box(runner.run_game(index))
        })
    });
}

criterion_group!(
    benches,
    bench_possible_moves,
    bench_play_initialize,
    bench_position_id,
    bench_random_game
);
criterion_main!(benches);
