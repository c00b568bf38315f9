use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gomoku_core::eval::evaluate;
use gomoku_core::{Board, Player, Pos};

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
        (6, 8, Player::Black),
        (8, 7, Player::White),
    ];
    for (row, col, color) in moves {
        board.place(Pos::new(row, col), color).unwrap();
    }
    board
}

fn eval_benchmark(c: &mut Criterion) {
    let board = midgame_board();

    c.bench_function("position evaluation", |b| {
        b.iter(|| evaluate(black_box(&board), Player::Black))
    });
}

criterion_group!(benches, eval_benchmark);
criterion_main!(benches);
