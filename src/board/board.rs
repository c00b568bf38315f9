//! Board state with single-entry-point mutation and last-move win detection.

use super::{GameResult, Player, Pos, DEFAULT_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::error::{IllegalMove, InvalidConfiguration};
use crate::rules::winner_through;

/// Game board.
///
/// The grid is mutated only through [`Board::place`] and [`Board::undo`].
/// The placement history drives the move counter and the last-move pointer,
/// so a place/undo pair restores the board bit-identically — the property
/// search backtracking relies on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Option<Player>>,
    /// Occupied cells in placement order.
    history: Vec<Pos>,
}

impl Board {
    /// Create an empty board of the given side length.
    ///
    /// Sizes below [`MIN_BOARD_SIZE`] are rejected with
    /// [`InvalidConfiguration::BoardSize`] rather than clamped.
    pub fn new(size: usize) -> Result<Self, InvalidConfiguration> {
        if size < MIN_BOARD_SIZE {
            return Err(InvalidConfiguration::BoardSize(size));
        }
        Ok(Self {
            size,
            cells: vec![None; size * size],
            history: Vec::with_capacity(size * size),
        })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn index(&self, pos: Pos) -> usize {
        pos.row * self.size + pos.col
    }

    /// Check that a position lies on the board.
    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    /// Get the stone at a position, `None` for an empty cell.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `pos` is out of bounds.
    #[inline]
    pub fn get(&self, pos: Pos) -> Option<Player> {
        debug_assert!(self.contains(pos));
        self.cells[self.index(pos)]
    }

    #[inline]
    pub fn is_empty_cell(&self, pos: Pos) -> bool {
        self.get(pos).is_none()
    }

    /// Place a stone.
    ///
    /// Fails with [`IllegalMove`] on an out-of-bounds position or an occupied
    /// cell; otherwise sets the cell and records the move. No other side
    /// effects.
    pub fn place(&mut self, pos: Pos, player: Player) -> Result<(), IllegalMove> {
        if !self.contains(pos) {
            return Err(IllegalMove::OutOfBounds {
                pos,
                size: self.size,
            });
        }
        let idx = self.index(pos);
        if self.cells[idx].is_some() {
            return Err(IllegalMove::Occupied { pos });
        }
        self.cells[idx] = Some(player);
        self.history.push(pos);
        Ok(())
    }

    /// Remove the stone at a position.
    ///
    /// Fails with [`IllegalMove::UndoEmpty`] if the cell holds no stone.
    /// Undoing the most recent move restores the previous last-move pointer;
    /// search always undoes in reverse placement order.
    pub fn undo(&mut self, pos: Pos) -> Result<(), IllegalMove> {
        if !self.contains(pos) {
            return Err(IllegalMove::OutOfBounds {
                pos,
                size: self.size,
            });
        }
        let idx = self.index(pos);
        if self.cells[idx].is_none() {
            return Err(IllegalMove::UndoEmpty { pos });
        }
        self.cells[idx] = None;
        // Occupied cells appear exactly once in the history; scan from the
        // back since undo targets are almost always the latest placement.
        if let Some(i) = self.history.iter().rposition(|&p| p == pos) {
            self.history.remove(i);
        }
        Ok(())
    }

    /// Stones placed and not undone; equals turns elapsed during play.
    #[inline]
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Most recently placed stone still on the board.
    #[inline]
    pub fn last_move(&self) -> Option<Pos> {
        self.history.last().copied()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.history.len() == self.cells.len()
    }

    /// Positions of all stones on the board, in placement order.
    #[inline]
    pub fn occupied(&self) -> impl Iterator<Item = Pos> + '_ {
        self.history.iter().copied()
    }

    /// All empty cells in row-major order.
    ///
    /// Only the naive strategies enumerate the full board; search restricts
    /// itself to candidates near existing stones.
    pub fn legal_moves(&self) -> Vec<Pos> {
        let mut moves = Vec::with_capacity(self.cells.len() - self.history.len());
        for row in 0..self.size {
            for col in 0..self.size {
                let pos = Pos::new(row, col);
                if self.is_empty_cell(pos) {
                    moves.push(pos);
                }
            }
        }
        moves
    }

    /// Read-only row view for external renderers.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<Player>]> {
        self.cells.chunks(self.size)
    }

    /// Game outcome after the latest move.
    ///
    /// Only the 4 axis directions through the last placed stone are scanned,
    /// which bounds win detection to constant work per move. A run of five or
    /// more wins; a full board with no five is a draw.
    pub fn check_result(&self) -> GameResult {
        let Some(last) = self.last_move() else {
            return GameResult::InProgress;
        };
        if let Some(winner) = winner_through(self, last) {
            return GameResult::Win(winner);
        }
        if self.is_full() {
            return GameResult::Draw;
        }
        GameResult::InProgress
    }
}

impl Default for Board {
    fn default() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
            cells: vec![None; DEFAULT_BOARD_SIZE * DEFAULT_BOARD_SIZE],
            history: Vec::with_capacity(DEFAULT_BOARD_SIZE * DEFAULT_BOARD_SIZE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_tiny_board() {
        assert_eq!(
            Board::new(4).unwrap_err(),
            InvalidConfiguration::BoardSize(4)
        );
        assert!(Board::new(5).is_ok());
    }

    #[test]
    fn place_rejects_out_of_bounds_and_occupied() {
        let mut board = Board::default();
        let oob = Pos::new(15, 0);
        assert_eq!(
            board.place(oob, Player::Black),
            Err(IllegalMove::OutOfBounds { pos: oob, size: 15 })
        );

        let pos = Pos::new(7, 7);
        board.place(pos, Player::Black).unwrap();
        assert_eq!(
            board.place(pos, Player::White),
            Err(IllegalMove::Occupied { pos })
        );
    }

    #[test]
    fn undo_rejects_empty_cell() {
        let mut board = Board::default();
        assert_eq!(
            board.undo(Pos::new(3, 3)),
            Err(IllegalMove::UndoEmpty { pos: Pos::new(3, 3) })
        );
    }

    #[test]
    fn place_then_undo_restores_bit_identical_state() {
        let mut board = Board::default();
        board.place(Pos::new(7, 7), Player::Black).unwrap();
        board.place(Pos::new(8, 8), Player::White).unwrap();

        let snapshot = board.clone();
        board.place(Pos::new(9, 9), Player::Black).unwrap();
        board.undo(Pos::new(9, 9)).unwrap();

        assert_eq!(board, snapshot);
        assert_eq!(board.move_count(), 2);
        assert_eq!(board.last_move(), Some(Pos::new(8, 8)));
    }

    #[test]
    fn move_counter_tracks_turns() {
        let mut board = Board::default();
        assert_eq!(board.move_count(), 0);
        board.place(Pos::new(0, 0), Player::Black).unwrap();
        board.place(Pos::new(0, 1), Player::White).unwrap();
        assert_eq!(board.move_count(), 2);
        board.undo(Pos::new(0, 1)).unwrap();
        assert_eq!(board.move_count(), 1);
    }

    #[test]
    fn legal_moves_shrink_as_stones_land() {
        let mut board = Board::new(5).unwrap();
        assert_eq!(board.legal_moves().len(), 25);
        board.place(Pos::new(2, 2), Player::Black).unwrap();
        let moves = board.legal_moves();
        assert_eq!(moves.len(), 24);
        assert!(!moves.contains(&Pos::new(2, 2)));
    }

    #[test]
    fn empty_board_is_in_progress() {
        let board = Board::default();
        assert_eq!(board.check_result(), GameResult::InProgress);
    }
}
