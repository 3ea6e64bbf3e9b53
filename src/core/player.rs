//! Player identification, per-player statistics and the seat roster.
//!
//! ## PlayerId
//!
//! Type-safe seat identifier. Indices are 0-based internally; the
//! human-facing number (`number()`, `Display`) is 1-based, so the first
//! player reads as "Player 1".
//!
//! ## Roster
//!
//! A game has either one seat or two. Rather than a single/two-player type
//! hierarchy, the roster is a small tagged variant: the single-player case
//! carries one `PlayerStats`, the two-player case carries both plus whose
//! turn it is.

use serde::{Deserialize, Serialize};

/// Seat identifier (0-based).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// The first seat. Always the starting player.
    pub const FIRST: PlayerId = PlayerId(0);

    /// The second seat in a two-player game.
    pub const SECOND: PlayerId = PlayerId(1);

    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Human-facing seat number (1-based).
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0 + 1
    }

    /// The seat that plays after this one in a game with `player_count` seats.
    ///
    /// With a single seat this is the seat itself.
    #[must_use]
    pub fn next(self, player_count: usize) -> PlayerId {
        debug_assert!(player_count > 0);
        PlayerId(((self.index() + 1) % player_count) as u8)
    }

    /// Iterate over all player IDs for a game with `player_count` seats.
    ///
    /// ```
    /// use rust_memo::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(2).collect();
    /// assert_eq!(players, vec![PlayerId::FIRST, PlayerId::SECOND]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// Attempts and matches for one seat.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    /// Resolved attempts (one per revealed pair, match or not).
    pub steps: u32,
    /// Pairs matched.
    pub score: u32,
}

impl PlayerStats {
    /// Fraction of attempts that found a pair, `0.0` before the first attempt.
    #[must_use]
    pub fn success_ratio(&self) -> f64 {
        if self.steps == 0 {
            0.0
        } else {
            f64::from(self.score) / f64::from(self.steps)
        }
    }
}

/// Per-game seat state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Roster {
    /// One seat; the turn never changes.
    Single(PlayerStats),
    /// Two seats alternating on every mismatch.
    Two {
        players: [PlayerStats; 2],
        active: PlayerId,
    },
}

impl Roster {
    /// Number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        match self {
            Roster::Single(_) => 1,
            Roster::Two { .. } => 2,
        }
    }

    /// Whose turn it is.
    #[must_use]
    pub fn active(&self) -> PlayerId {
        match self {
            Roster::Single(_) => PlayerId::FIRST,
            Roster::Two { active, .. } => *active,
        }
    }

    /// Statistics for a seat, `None` if the seat does not exist.
    #[must_use]
    pub fn stats(&self, player: PlayerId) -> Option<&PlayerStats> {
        match self {
            Roster::Single(stats) => (player == PlayerId::FIRST).then_some(stats),
            Roster::Two { players, .. } => players.get(player.index()),
        }
    }

    /// Statistics for the active seat.
    #[must_use]
    pub fn active_stats(&self) -> &PlayerStats {
        match self {
            Roster::Single(stats) => stats,
            Roster::Two { players, active } => &players[active.index()],
        }
    }

    pub(crate) fn active_stats_mut(&mut self) -> &mut PlayerStats {
        match self {
            Roster::Single(stats) => stats,
            Roster::Two { players, active } => &mut players[active.index()],
        }
    }

    /// Hand the turn to the next seat. Returns the new active seat.
    ///
    /// Computed in both modes; with one seat the result is unchanged.
    pub(crate) fn pass_turn(&mut self) -> PlayerId {
        let count = self.player_count();
        match self {
            Roster::Single(_) => PlayerId::FIRST.next(count),
            Roster::Two { active, .. } => {
                *active = active.next(count);
                *active
            }
        }
    }

    /// Iterate over (PlayerId, &PlayerStats) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &PlayerStats)> {
        let slice: &[PlayerStats] = match self {
            Roster::Single(stats) => std::slice::from_ref(stats),
            Roster::Two { players, .. } => players,
        };
        slice
            .iter()
            .enumerate()
            .map(|(i, stats)| (PlayerId(i as u8), stats))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        assert_eq!(PlayerId::FIRST.index(), 0);
        assert_eq!(PlayerId::SECOND.number(), 2);
        assert_eq!(format!("{}", PlayerId::FIRST), "Player 1");
    }

    #[test]
    fn test_next_wraps() {
        assert_eq!(PlayerId::FIRST.next(2), PlayerId::SECOND);
        assert_eq!(PlayerId::SECOND.next(2), PlayerId::FIRST);
        assert_eq!(PlayerId::FIRST.next(1), PlayerId::FIRST);
    }

    #[test]
    fn test_success_ratio() {
        assert_eq!(PlayerStats::default().success_ratio(), 0.0);

        let stats = PlayerStats { steps: 4, score: 3 };
        assert!((stats.success_ratio() - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn test_single_roster_never_changes_turn() {
        let mut roster = Roster::Single(PlayerStats::default());

        assert_eq!(roster.pass_turn(), PlayerId::FIRST);
        assert_eq!(roster.active(), PlayerId::FIRST);
        assert!(roster.stats(PlayerId::SECOND).is_none());
    }

    #[test]
    fn test_two_roster_alternates() {
        let mut roster = Roster::Two {
            players: [PlayerStats::default(); 2],
            active: PlayerId::FIRST,
        };

        assert_eq!(roster.pass_turn(), PlayerId::SECOND);
        roster.active_stats_mut().score += 1;
        assert_eq!(roster.pass_turn(), PlayerId::FIRST);

        assert_eq!(roster.stats(PlayerId::SECOND).map(|s| s.score), Some(1));
        assert_eq!(roster.active_stats().score, 0);
    }

    #[test]
    fn test_roster_iter() {
        let roster = Roster::Two {
            players: [PlayerStats { steps: 1, score: 0 }, PlayerStats { steps: 2, score: 2 }],
            active: PlayerId::SECOND,
        };

        let pairs: Vec<_> = roster.iter().map(|(p, s)| (p, s.score)).collect();
        assert_eq!(pairs, vec![(PlayerId::FIRST, 0), (PlayerId::SECOND, 2)]);
    }

    #[test]
    fn test_roster_serialization() {
        let roster = Roster::Two {
            players: [PlayerStats { steps: 3, score: 1 }, PlayerStats::default()],
            active: PlayerId::SECOND,
        };
        let json = serde_json::to_string(&roster).unwrap();
        let deserialized: Roster = serde_json::from_str(&json).unwrap();
        assert_eq!(roster, deserialized);
    }
}
