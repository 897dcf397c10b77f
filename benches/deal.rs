//! Deal and play throughput.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use freecell_engine::{Board, Command, Deck};

fn bench_shuffle(c: &mut Criterion) {
    let deck = Deck::new();
    c.bench_function("shuffle", |b| b.iter(|| deck.shuffled(black_box(617))));
}

fn bench_deal(c: &mut Criterion) {
    let mut board = Board::new(1);
    let mut seed = 0u32;
    c.bench_function("deal", |b| {
        b.iter(|| {
            seed = seed % 32000 + 1;
            board.deal(black_box(seed));
        })
    });
}

fn bench_select_undo(c: &mut Criterion) {
    // Game 1: the 6♠ on cascade 0 goes to freecell 0 and back.
    let mut board = Board::new(1);
    c.bench_function("select_undo", |b| {
        b.iter(|| {
            board.apply(Command::Select);
            for _ in 0..7 {
                board.apply(Command::Up);
            }
            for _ in 0..4 {
                board.apply(Command::Right);
            }
            board.apply(Command::Select);
            board.apply(Command::Undo);
            for _ in 0..7 {
                board.apply(Command::Down);
            }
            for _ in 0..4 {
                board.apply(Command::Left);
            }
            black_box(board.cursor())
        })
    });
}

criterion_group!(benches, bench_shuffle, bench_deal, bench_select_undo);
criterion_main!(benches);
