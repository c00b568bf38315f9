//! Pattern scores for board evaluation.
//!
//! Run length is weighted super-linearly: an open four is an order of
//! magnitude above an open three, which is an order of magnitude above an
//! open two. A pattern blocked on one end is worth far less than the same
//! run with both ends open.

/// Scoring weights for line patterns.
pub struct PatternScore;

impl PatternScore {
    /// Five in a row - immediate win
    pub const FIVE: i32 = 1_000_000;

    /// Open four: _OOOO_ (two ways to complete, unstoppable)
    pub const OPEN_FOUR: i32 = 100_000;
    /// Closed four: XOOOO_ or _OOOOX (one way to complete)
    pub const CLOSED_FOUR: i32 = 50_000;

    /// Open three: _OOO_ (becomes an open four if not blocked)
    pub const OPEN_THREE: i32 = 10_000;
    /// Closed three: XOOO_ or _OOOX (one side blocked)
    pub const CLOSED_THREE: i32 = 1_500;

    /// Open two: _OO_ (room to grow)
    pub const OPEN_TWO: i32 = 1_000;
    /// Closed two: XOO_ or _OOX
    pub const CLOSED_TWO: i32 = 200;
}
