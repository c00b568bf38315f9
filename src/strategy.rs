//! Bot opponents at three difficulty levels.
//!
//! The difficulty set is closed, so the strategies live behind one tagged
//! enum rather than an open trait: every caller that can ask a bot for a
//! move matches the same three variants.

use rand::prelude::*;
use rand::rngs::StdRng;
use tracing::debug;

use crate::board::{Board, Player, Pos};
use crate::eval::threat_score;
use crate::movegen::MoveGenerator;
use crate::search::Searcher;

/// Bot difficulty levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    /// Uniform random over all legal moves.
    Easy,
    /// Greedy win/block heuristic.
    Medium,
    /// Alpha-beta search.
    Hard,
}

/// Easy bot: a uniformly random legal move.
///
/// The only strategy that enumerates the full board; everything stronger
/// works from the restricted candidate set.
#[derive(Debug)]
pub struct RandomBot {
    rng: StdRng,
}

impl RandomBot {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Fixed-seed variant for reproducible games.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn select_move(&mut self, board: &Board) -> Option<Pos> {
        board.legal_moves().choose(&mut self.rng).copied()
    }
}

impl Default for RandomBot {
    fn default() -> Self {
        Self::new()
    }
}

/// Medium bot: picks the single placement with the highest threat score.
///
/// The threat-score ladder makes this a win-first, block-second player: it
/// always completes its own five when one is available, otherwise always
/// blocks an opponent five, otherwise builds toward the center.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicBot {
    movegen: MoveGenerator,
}

impl HeuristicBot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_move(&self, board: &Board, player: Player) -> Option<Pos> {
        let mut best: Option<(Pos, i32)> = None;
        for pos in self.movegen.candidates(board) {
            let score = threat_score(board, pos, player);
            // Strictly greater: ties resolve to the first candidate in
            // row-major order, keeping the bot deterministic.
            if best.is_none_or(|(_, b)| score > b) {
                best = Some((pos, score));
            }
        }
        best.map(|(pos, _)| pos)
    }
}

/// A bot opponent: one of the closed set of difficulty strategies.
#[derive(Debug)]
pub enum BotStrategy {
    Random(RandomBot),
    HeuristicBlocker(HeuristicBot),
    Minimax(Searcher),
}

impl BotStrategy {
    /// Build the standard strategy for a difficulty level.
    #[must_use]
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Easy => BotStrategy::Random(RandomBot::new()),
            Difficulty::Medium => BotStrategy::HeuristicBlocker(HeuristicBot::new()),
            Difficulty::Hard => BotStrategy::Minimax(Searcher::default()),
        }
    }

    /// Choose a move for `player`.
    ///
    /// Search strategies mutate the board while thinking but restore it
    /// before returning. The chosen move always targets an empty cell;
    /// `None` only on a board with no legal moves left.
    pub fn select_move(&mut self, board: &mut Board, player: Player) -> Option<Pos> {
        let mov = match self {
            BotStrategy::Random(bot) => bot.select_move(board),
            BotStrategy::HeuristicBlocker(bot) => bot.select_move(board, player),
            BotStrategy::Minimax(searcher) => searcher.select_move(board, player).best_move,
        };
        debug!(?player, ?mov, "bot selected move");
        mov
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_of(board: &mut Board, row: usize, cols: std::ops::Range<usize>, color: Player) {
        for col in cols {
            board.place(Pos::new(row, col), color).unwrap();
        }
    }

    #[test]
    fn random_bot_plays_a_legal_move() {
        let mut board = Board::new(5).unwrap();
        board.place(Pos::new(2, 2), Player::Black).unwrap();

        let mut bot = RandomBot::seeded(7);
        for _ in 0..20 {
            let mov = bot.select_move(&board).unwrap();
            assert!(board.is_empty_cell(mov));
        }
    }

    #[test]
    fn random_bot_is_reproducible_with_a_seed() {
        let board = Board::default();
        let mut a = RandomBot::seeded(42);
        let mut b = RandomBot::seeded(42);
        for _ in 0..10 {
            assert_eq!(a.select_move(&board), b.select_move(&board));
        }
    }

    #[test]
    fn blocker_takes_the_immediate_win() {
        let mut board = Board::default();
        // White could block, but Black has its own four: winning beats blocking.
        row_of(&mut board, 7, 4..8, Player::Black);
        row_of(&mut board, 9, 4..8, Player::White);

        let bot = HeuristicBot::new();
        let mov = bot.select_move(&board, Player::Black).unwrap();
        assert!([Pos::new(7, 3), Pos::new(7, 8)].contains(&mov));
    }

    #[test]
    fn blocker_blocks_the_opponent_four() {
        let mut board = Board::default();
        // Black four open only at (7, 8); White to move must block there.
        board.place(Pos::new(7, 3), Player::White).unwrap();
        row_of(&mut board, 7, 4..8, Player::Black);

        let bot = HeuristicBot::new();
        let mov = bot.select_move(&board, Player::White).unwrap();
        assert_eq!(mov, Pos::new(7, 8));
    }

    #[test]
    fn blocker_prefers_center_on_quiet_boards() {
        let mut board = Board::default();
        board.place(Pos::new(3, 3), Player::Black).unwrap();
        board.place(Pos::new(11, 11), Player::White).unwrap();

        let bot = HeuristicBot::new();
        let mov = bot.select_move(&board, Player::White).unwrap();

        // The chosen cell should sit on the center side of its options.
        let dist = mov.row.abs_diff(7) + mov.col.abs_diff(7);
        assert!(dist <= 6, "expected a centered move, got {mov:?}");
    }

    #[test]
    fn every_difficulty_produces_a_legal_move() {
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            let mut board = Board::default();
            board.place(Pos::new(7, 7), Player::Black).unwrap();

            let mut bot = BotStrategy::for_difficulty(difficulty);
            let mov = bot.select_move(&mut board, Player::White).unwrap();
            assert!(board.is_empty_cell(mov), "{difficulty:?}");
        }
    }
}
