//! Observable game events.
//!
//! Every state change a renderer cares about is reported as a `GameEvent`.
//! Events carry tile indices and opaque image ids only; turning them into
//! pictures, sounds or labels is the front end's business.

use serde::{Deserialize, Serialize};

use crate::core::{ImageId, PlayerId, TileIndex};
use crate::rules::GameSummary;

/// Something that happened during a game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A tile was turned face up.
    Revealed { tile: TileIndex, image: ImageId },

    /// Two revealed tiles matched and leave play.
    Matched(TileIndex, TileIndex),

    /// Two revealed tiles differed and were turned face down.
    Mismatched(TileIndex, TileIndex),

    /// The turn passed to another seat.
    TurnChanged(PlayerId),

    /// A seat's totals after a resolved round.
    ScoreUpdated {
        player: PlayerId,
        steps: u32,
        score: u32,
    },

    /// All pairs found; final totals.
    Won(GameSummary),
}

impl GameEvent {
    /// Short event name, for logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            GameEvent::Revealed { .. } => "revealed",
            GameEvent::Matched(..) => "matched",
            GameEvent::Mismatched(..) => "mismatched",
            GameEvent::TurnChanged(_) => "turn_changed",
            GameEvent::ScoreUpdated { .. } => "score_updated",
            GameEvent::Won(_) => "won",
        }
    }

    /// Whether this event ends the game.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameEvent::Won(_))
    }
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEvent::Revealed { tile, image } => write!(f, "{tile} revealed {image}"),
            GameEvent::Matched(a, b) => write!(f, "{a} and {b} matched"),
            GameEvent::Mismatched(a, b) => write!(f, "{a} and {b} mismatched"),
            GameEvent::TurnChanged(player) => write!(f, "turn passes to {player}"),
            GameEvent::ScoreUpdated {
                player,
                steps,
                score,
            } => write!(f, "{player}: {score} pairs in {steps} steps"),
            GameEvent::Won(summary) => write!(f, "game won: {}", summary.result),
        }
    }
}
