//! Final results of a finished game.

use serde::{Deserialize, Serialize};

use crate::core::{GameState, GridSize, PlayerId, PlayerMode, PlayerStats};

/// Outcome of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single-player game cleared; nobody to beat.
    Completed,
    /// Two-player game with a higher score on one side.
    Winner(PlayerId),
    /// Two-player game with equal scores. Friendship wins.
    Draw,
}

impl GameResult {
    /// Decide the result from final seat statistics.
    #[must_use]
    pub fn from_players(players: &[(PlayerId, PlayerStats)]) -> Self {
        match players {
            [(p1, s1), (p2, s2)] => match s1.score.cmp(&s2.score) {
                std::cmp::Ordering::Greater => GameResult::Winner(*p1),
                std::cmp::Ordering::Less => GameResult::Winner(*p2),
                std::cmp::Ordering::Equal => GameResult::Draw,
            },
            _ => GameResult::Completed,
        }
    }

    /// Check if a player won outright.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Completed => write!(f, "all pairs found"),
            GameResult::Winner(player) => write!(f, "{player} wins"),
            GameResult::Draw => write!(f, "friendship wins"),
        }
    }
}

/// Per-seat totals and the result, reported with `Won`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSummary {
    pub grid: GridSize,
    pub player_mode: PlayerMode,
    /// Final statistics per seat, in seat order.
    pub players: Vec<(PlayerId, PlayerStats)>,
    /// Resolved rounds across all seats.
    pub rounds: usize,
    pub result: GameResult,
}

impl GameSummary {
    /// Summarize a game state.
    #[must_use]
    pub fn from_state(state: &GameState, player_mode: PlayerMode) -> Self {
        let players: Vec<_> = state.roster.iter().map(|(p, s)| (p, *s)).collect();
        let result = GameResult::from_players(&players);
        Self {
            grid: state.grid,
            player_mode,
            players,
            rounds: state.rounds(),
            result,
        }
    }

    /// Final statistics for a seat.
    #[must_use]
    pub fn stats(&self, player: PlayerId) -> Option<&PlayerStats> {
        self.players
            .iter()
            .find(|(p, _)| *p == player)
            .map(|(_, s)| s)
    }

    /// The winning seat, if the game had one.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self.result {
            GameResult::Winner(player) => Some(player),
            _ => None,
        }
    }

    /// Whether a two-player game ended level.
    #[must_use]
    pub fn is_tie(&self) -> bool {
        self.result == GameResult::Draw
    }
}
