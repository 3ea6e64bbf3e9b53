//! Game rules: the match engine and end-of-game results.
//!
//! `MatchEngine` owns one game's state and applies the reveal/resolve rules
//! for one or two players. It reports outcomes as events and asks for
//! timers, but never schedules, sleeps or renders by itself.

mod engine;
mod summary;

pub use engine::{MatchEngine, Transition};
pub use summary::{GameResult, GameSummary};
