use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gomoku_core::{Board, Player, Pos, Searcher};

fn midgame_board() -> Board {
    let mut board = Board::default();
    let moves = [
        (7, 7, Player::Black),
        (8, 8, Player::White),
        (6, 6, Player::Black),
        (8, 6, Player::White),
        (7, 5, Player::Black),
        (7, 8, Player::White),
        (5, 7, Player::Black),
        (9, 7, Player::White),
    ];
    for (row, col, color) in moves {
        board.place(Pos::new(row, col), color).unwrap();
    }
    board
}

fn search_benchmark(c: &mut Criterion) {
    let mut board = midgame_board();

    let mut depth2 = Searcher::new(2).unwrap();
    c.bench_function("alpha-beta depth 2", |b| {
        b.iter(|| black_box(depth2.select_move(&mut board, Player::Black)))
    });

    let mut depth3 = Searcher::new(3).unwrap();
    c.bench_function("alpha-beta depth 3", |b| {
        b.iter(|| black_box(depth3.select_move(&mut board, Player::Black)))
    });
}

criterion_group!(benches, search_benchmark);
criterion_main!(benches);
