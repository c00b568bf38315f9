//! Game rules: win detection along board lines.

pub mod win;

// Re-exports
pub use win::{winner_through, DIRECTIONS, WIN_LENGTH};
