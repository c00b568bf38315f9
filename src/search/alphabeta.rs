//! Negamax search with alpha-beta pruning.
//!
//! Full-width, unlimited-depth minimax is intractable beyond toy boards, so
//! two deliberate approximations make the search practical:
//!
//! - candidates are restricted to a radius around existing stones
//!   ([`MoveGenerator`]), and
//! - depth is capped at a configurable ply limit, with [`evaluate`] as the
//!   static estimate at the cutoff.
//!
//! Candidates are ordered by [`threat_score`] before recursing so strong
//! moves are searched first and weak siblings are cut off early. Pruning
//! never changes the returned value, only the work done to find it.
//!
//! Each candidate is applied to the board, searched, and undone before the
//! next sibling — on every path, including cutoffs — so the caller's board
//! is bit-identical after a search returns.

use tracing::debug;

use crate::board::{Board, GameResult, Player, Pos};
use crate::error::InvalidConfiguration;
use crate::eval::{evaluate, threat_score, PatternScore};
use crate::movegen::MoveGenerator;

/// Search depth used when none is configured.
pub const DEFAULT_SEARCH_DEPTH: u32 = 3;

/// Sentinel for a won position. Depth-adjusted so the search prefers the
/// fastest win and the slowest loss.
const WIN_SCORE: i32 = PatternScore::FIVE;

/// Infinity for alpha-beta bounds; above any reachable score.
const INF: i32 = 2 * PatternScore::FIVE;

/// Outcome of a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found; `None` only when the position is already terminal.
    pub best_move: Option<Pos>,
    /// Negamax score of the best move from the searching player's view.
    pub score: i32,
    /// Depth limit the search ran with.
    pub depth: u32,
    /// Nodes visited.
    pub nodes: u64,
}

/// Alpha-beta searcher for the Hard difficulty.
#[derive(Debug, Clone)]
pub struct Searcher {
    movegen: MoveGenerator,
    max_depth: u32,
    nodes: u64,
}

impl Searcher {
    /// Create a searcher with the given depth limit in plies.
    ///
    /// A zero depth is rejected with [`InvalidConfiguration::SearchDepth`].
    pub fn new(max_depth: u32) -> Result<Self, InvalidConfiguration> {
        Self::with_movegen(max_depth, MoveGenerator::default())
    }

    /// Create a searcher with a custom candidate generator.
    pub fn with_movegen(
        max_depth: u32,
        movegen: MoveGenerator,
    ) -> Result<Self, InvalidConfiguration> {
        if max_depth == 0 {
            return Err(InvalidConfiguration::SearchDepth);
        }
        Ok(Self {
            movegen,
            max_depth,
            nodes: 0,
        })
    }

    #[inline]
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// Pick the best move for `player`.
    ///
    /// The board is mutated during the search but restored before this
    /// returns. Returns `best_move: None` if the game is already over.
    ///
    /// Tie-breaking is deterministic: among equally scored moves the first
    /// in candidate order wins, and candidate order is threat score
    /// descending with row-major position as the stable tie-break.
    pub fn select_move(&mut self, board: &mut Board, player: Player) -> SearchResult {
        self.nodes = 0;

        if board.check_result().is_over() {
            return SearchResult {
                best_move: None,
                score: 0,
                depth: self.max_depth,
                nodes: 0,
            };
        }

        let mut best_move = None;
        let mut best_score = -INF;
        let mut alpha = -INF;

        for mov in self.ordered_candidates(board, player) {
            board.place(mov, player).expect("candidate cells are empty");
            let score =
                -self.negamax(board, player.opponent(), self.max_depth - 1, -INF, -alpha, 1);
            board.undo(mov).expect("undo of the move just placed");

            if score > best_score {
                best_score = score;
                best_move = Some(mov);
            }
            alpha = alpha.max(score);
        }

        debug!(
            ?best_move,
            score = best_score,
            nodes = self.nodes,
            depth = self.max_depth,
            "search complete"
        );

        SearchResult {
            best_move,
            score: best_score,
            depth: self.max_depth,
            nodes: self.nodes,
        }
    }

    /// Recursive negamax with alpha-beta bounds.
    ///
    /// Terminal positions return depth-adjusted sentinels; the depth cutoff
    /// returns the static evaluation. Terminal detection is a normal return
    /// value, never an unwound error.
    fn negamax(
        &mut self,
        board: &mut Board,
        to_move: Player,
        depth: u32,
        mut alpha: i32,
        beta: i32,
        ply: i32,
    ) -> i32 {
        self.nodes += 1;

        match board.check_result() {
            GameResult::Win(winner) => {
                // A finished five belongs to the previous mover, so from
                // the side to move this is normally a loss.
                return if winner == to_move {
                    WIN_SCORE - ply
                } else {
                    ply - WIN_SCORE
                };
            }
            GameResult::Draw => return 0,
            GameResult::InProgress => {}
        }

        if depth == 0 {
            return evaluate(board, to_move);
        }

        let mut best = -INF;
        for mov in self.ordered_candidates(board, to_move) {
            board.place(mov, to_move).expect("candidate cells are empty");
            let score = -self.negamax(board, to_move.opponent(), depth - 1, -beta, -alpha, ply + 1);
            board.undo(mov).expect("undo of the move just placed");

            best = best.max(score);
            alpha = alpha.max(score);
            if alpha >= beta {
                // Beta cutoff. The move above is already undone, so the
                // board leaves this frame untouched.
                break;
            }
        }
        best
    }

    /// Candidates sorted by threat score, strongest first.
    ///
    /// The sort is stable, so equal scores keep the generator's row-major
    /// order and the search stays reproducible.
    fn ordered_candidates(&self, board: &Board, player: Player) -> Vec<Pos> {
        let mut scored: Vec<(Pos, i32)> = self
            .movegen
            .candidates(board)
            .into_iter()
            .map(|pos| (pos, threat_score(board, pos, player)))
            .collect();
        scored.sort_by(|a, b| b.1.cmp(&a.1));
        scored.into_iter().map(|(pos, _)| pos).collect()
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self {
            movegen: MoveGenerator::default(),
            max_depth: DEFAULT_SEARCH_DEPTH,
            nodes: 0,
        }
    }
}
