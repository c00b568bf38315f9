//! Position evaluation and move scoring.

pub mod heuristic;
pub mod patterns;

// Re-exports
pub use heuristic::{evaluate, threat_score};
pub use patterns::PatternScore;
