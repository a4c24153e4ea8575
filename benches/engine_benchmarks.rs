//! Benchmarks for move generation and legality checks.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chess_rules::game::STARTING_FEN;
use chess_rules::{Colour, Coord, Game};

const MIDDLEGAME: &str = "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w - - 4 4";
const OPEN_QUEENS: &str = "3qk3/8/8/3Q4/8/8/8/4K3 w - - 0 1";

fn positions() -> [(&'static str, Game); 3] {
    [
        ("startpos", Game::from_fen_or_new(STARTING_FEN)),
        ("middlegame", Game::from_fen_or_new(MIDDLEGAME)),
        ("open_queens", Game::from_fen_or_new(OPEN_QUEENS)),
    ]
}

fn bench_views(c: &mut Criterion) {
    let mut group = c.benchmark_group("views");

    for (name, game) in positions() {
        let board = game.board();
        group.bench_function(name, |b| {
            b.iter(|| {
                board
                    .pieces()
                    .map(|(id, _)| board.view(black_box(id)).len())
                    .sum::<usize>()
            })
        });
    }

    group.finish();
}

fn bench_legal_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("legal_moves");

    for (name, game) in positions() {
        group.bench_with_input(BenchmarkId::new(name, "white"), &game, |b, game| {
            b.iter(|| black_box(game.legal_moves(Colour::White)))
        });
    }

    group.finish();
}

fn bench_status(c: &mut Criterion) {
    let mut group = c.benchmark_group("status");

    for (name, game) in positions() {
        group.bench_function(name, |b| b.iter(|| black_box(game.status())));
    }

    // Mated side has to try every move before giving up
    let mated = Game::from_fen_or_new("7k/6Q1/6K1/8/8/8/8/8 b - - 0 1");
    group.bench_function("checkmate", |b| b.iter(|| black_box(mated.status())));

    group.finish();
}

fn bench_validate_move(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate_move");
    let game = Game::new();
    let from = "E2".parse::<Coord>().ok();
    let to = "E4".parse::<Coord>().ok();

    group.bench_function("pawn_push", |b| {
        b.iter(|| game.validate_move(black_box(from), black_box(to), Colour::White))
    });
    group.bench_function("clone_position", |b| {
        b.iter(|| black_box(game.clone_position()))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_views,
    bench_legal_moves,
    bench_status,
    bench_validate_move
);
criterion_main!(benches);
