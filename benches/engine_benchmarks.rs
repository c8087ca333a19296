//! Benchmarks for rules and search performance.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chess_env::board::attack_tables::{self, sliding_attacks, Slider};
use chess_env::board::{
    codec, AlphaBetaSearch, Bitboard, CastleSide, Color, SearchParams, Square, State, StateBuilder,
};

/// Kiwipete, with all castling rights
fn kiwipete() -> State {
    let text = [
        "♜   ♚  ♜",
        "♟ ♟♟♛♟♝ ",
        "♝♞  ♟♞♟ ",
        "   ♙♘   ",
        " ♟  ♙   ",
        "  ♘  ♕ ♟",
        "♙♙♙♗♗♙♙♙",
        "♖   ♔  ♖",
    ]
    .concat();
    let board = codec::decode(&text).expect("valid board text");
    let mut builder = StateBuilder::from_state(&board);
    for color in Color::BOTH {
        for side in CastleSide::BOTH {
            builder = builder.castle(color, side);
        }
    }
    builder.build().expect("both kings present")
}

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");

    let start = State::new();
    for depth in 1..=3 {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| start.perft(black_box(depth)))
        });
    }

    let kiwipete = kiwipete();
    for depth in 1..=2 {
        group.bench_with_input(BenchmarkId::new("kiwipete", depth), &depth, |b, &depth| {
            b.iter(|| kiwipete.perft(black_box(depth)))
        });
    }

    group.finish();
}

fn bench_legal_actions(c: &mut Criterion) {
    let mut group = c.benchmark_group("legal_actions");

    let start = State::new();
    group.bench_function("startpos", |b| b.iter(|| black_box(start.legal_actions())));

    let kiwipete = kiwipete();
    group.bench_function("kiwipete", |b| {
        b.iter(|| black_box(kiwipete.legal_actions()))
    });

    let first = start.legal_actions().expect("valid position")[0];
    group.bench_function("step", |b| b.iter(|| black_box(start.step(&first))));

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(10);

    let start = State::new();
    let kiwipete = kiwipete();
    for depth in 1..=3 {
        let search = AlphaBetaSearch::new(SearchParams::with_depth(depth));
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, _| {
            b.iter(|| search.search(black_box(&start)))
        });
        group.bench_with_input(BenchmarkId::new("kiwipete", depth), &depth, |b, _| {
            b.iter(|| search.search(black_box(&kiwipete)))
        });
    }

    let parallel = AlphaBetaSearch::new(SearchParams::with_depth(3).threads(4));
    group.bench_function("kiwipete_threads_4", |b| {
        b.iter(|| parallel.search(black_box(&kiwipete)))
    });

    group.finish();
}

fn bench_attack_tables(c: &mut Criterion) {
    attack_tables::init();
    let mut group = c.benchmark_group("attack_tables");

    let blockers = Bitboard(0x0042_0010_2400_8100);
    let origin = Square(3, 3);
    group.bench_function("rook", |b| {
        b.iter(|| sliding_attacks(Slider::Rook, black_box(origin), black_box(blockers)))
    });
    group.bench_function("bishop", |b| {
        b.iter(|| sliding_attacks(Slider::Bishop, black_box(origin), black_box(blockers)))
    });
    group.bench_function("rook_reference", |b| {
        b.iter(|| {
            attack_tables::sliding_attacks_slow(Slider::Rook, black_box(origin), black_box(blockers))
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_perft,
    bench_legal_actions,
    bench_search,
    bench_attack_tables
);
criterion_main!(benches);
