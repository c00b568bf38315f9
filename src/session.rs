//! Game session orchestration: seats, turn order, terminal detection.
//!
//! A session owns the board and drives the turn state machine
//! `Setup -> BlackTurn <-> WhiteTurn -> Finished`. It performs no I/O:
//! human moves arrive through [`GameSession::play`] from whatever front end
//! is driving the game, bots are asked through [`GameSession::play_bot`],
//! and renderers read the board through [`GameSession::board`].

use tracing::{debug, info, warn};

use crate::board::{Board, GameResult, Player, Pos};
use crate::error::{IllegalMove, InvalidConfiguration};
use crate::strategy::{BotStrategy, Difficulty};

/// Who controls a color.
#[derive(Debug)]
pub enum Seat {
    /// Moves are supplied externally via [`GameSession::play`].
    Human,
    /// Moves are chosen by the bot via [`GameSession::play_bot`].
    Bot(BotStrategy),
}

impl Seat {
    #[inline]
    fn is_bot(&self) -> bool {
        matches!(self, Seat::Bot(_))
    }
}

/// A single game between two seats.
pub struct GameSession {
    board: Board,
    black: Seat,
    white: Seat,
    to_move: Player,
    result: GameResult,
}

impl GameSession {
    /// Start a session on a fresh board.
    ///
    /// `starting_player` lets a series alternate who opens each game.
    /// Fails fast on an invalid board size.
    pub fn new(
        size: usize,
        black: Seat,
        white: Seat,
        starting_player: Player,
    ) -> Result<Self, InvalidConfiguration> {
        let board = Board::new(size)?;
        info!(size, ?starting_player, "session started");
        Ok(Self {
            board,
            black,
            white,
            to_move: starting_player,
            result: GameResult::InProgress,
        })
    }

    /// Two humans sharing the board.
    pub fn human_vs_human(size: usize) -> Result<Self, InvalidConfiguration> {
        Self::new(size, Seat::Human, Seat::Human, Player::Black)
    }

    /// A human (playing `human_color`) against a bot of the given difficulty.
    pub fn human_vs_bot(
        size: usize,
        difficulty: Difficulty,
        human_color: Player,
        starting_player: Player,
    ) -> Result<Self, InvalidConfiguration> {
        let bot = Seat::Bot(BotStrategy::for_difficulty(difficulty));
        let (black, white) = match human_color {
            Player::Black => (Seat::Human, bot),
            Player::White => (bot, Seat::Human),
        };
        Self::new(size, black, white, starting_player)
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side to move. Meaningless once the game is over.
    #[inline]
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    #[inline]
    pub fn result(&self) -> GameResult {
        self.result
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.result.is_over()
    }

    /// Whether the side to move is bot-controlled.
    pub fn is_bot_turn(&self) -> bool {
        !self.is_over() && self.seat(self.to_move).is_bot()
    }

    fn seat(&self, player: Player) -> &Seat {
        match player {
            Player::Black => &self.black,
            Player::White => &self.white,
        }
    }

    /// Apply a move for the side to move.
    ///
    /// This is the external input boundary: out-of-range or occupied
    /// positions come back as [`IllegalMove`] for the caller to re-prompt
    /// on, leaving the session unchanged. On success the turn passes to the
    /// opponent unless the move ended the game.
    pub fn play(&mut self, pos: Pos) -> Result<GameResult, IllegalMove> {
        if self.is_over() {
            warn!(?pos, "move after game over ignored");
            return Ok(self.result);
        }

        self.board.place(pos, self.to_move)?;
        self.result = self.board.check_result();
        debug!(?pos, player = ?self.to_move, result = ?self.result, "move applied");

        if self.result.is_over() {
            info!(result = ?self.result, moves = self.board.move_count(), "game finished");
        } else {
            self.to_move = self.to_move.opponent();
        }
        Ok(self.result)
    }

    /// Let the bot seat of the side to move choose and apply its move.
    ///
    /// Returns `None` when the side to move is not a bot or the game is
    /// over. Bot moves are always legal; a rejected one would be a bug in
    /// move generation, so it is asserted rather than surfaced.
    pub fn play_bot(&mut self) -> Option<GameResult> {
        if self.is_over() {
            return None;
        }
        let player = self.to_move;
        let seat = match player {
            Player::Black => &mut self.black,
            Player::White => &mut self.white,
        };
        let Seat::Bot(strategy) = seat else {
            return None;
        };

        let mov = strategy
            .select_move(&mut self.board, player)
            .expect("bot found no move on an unfinished board");
        let result = self
            .play(mov)
            .expect("bot produced an illegal move");
        Some(result)
    }
}

/// Running tally across a series of games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    black_wins: u32,
    white_wins: u32,
    draws: u32,
}

impl Scoreboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finished game. In-progress results are ignored.
    pub fn record(&mut self, result: GameResult) {
        match result {
            GameResult::Win(Player::Black) => self.black_wins += 1,
            GameResult::Win(Player::White) => self.white_wins += 1,
            GameResult::Draw => self.draws += 1,
            GameResult::InProgress => {}
        }
    }

    #[inline]
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::Black => self.black_wins,
            Player::White => self.white_wins,
        }
    }

    #[inline]
    pub fn draws(&self) -> u32 {
        self.draws
    }
}
