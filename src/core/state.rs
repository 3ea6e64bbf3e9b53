//! Game state: deck, reveal buffer, seats and phase.
//!
//! ## Phase
//!
//! A round goes `AwaitingFirst` → `AwaitingSecond` → `Resolving` and back,
//! until the last pair is matched and the game stops in `Finished`.
//!
//! ## GameState
//!
//! Everything one game owns. Mutated only by the match engine; front ends
//! read it to render the board and scores. The round history uses an `im`
//! persistent vector so snapshots clone in O(1).

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::config::GridSize;
use super::deck::Deck;
use super::player::{PlayerId, Roster};
use super::tile::TileIndex;

/// Step of the reveal/resolve round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// No tile revealed this round.
    #[default]
    AwaitingFirst,
    /// One tile revealed.
    AwaitingSecond,
    /// Two tiles revealed, waiting for the conceal timer.
    Resolving,
    /// Every tile matched. Terminal.
    Finished,
}

impl Phase {
    /// Whether a `reveal` can be accepted in this phase.
    #[must_use]
    pub fn accepts_reveal(self) -> bool {
        matches!(self, Phase::AwaitingFirst | Phase::AwaitingSecond)
    }
}

/// Tiles revealed this round, at most two.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealBuffer {
    tiles: SmallVec<[TileIndex; 2]>,
}

impl RevealBuffer {
    /// Number of tiles awaiting resolution.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.tiles.len() == 2
    }

    #[must_use]
    pub fn contains(&self, tile: TileIndex) -> bool {
        self.tiles.contains(&tile)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[TileIndex] {
        &self.tiles
    }

    /// The two buffered tiles, if the buffer is full.
    #[must_use]
    pub fn pair(&self) -> Option<(TileIndex, TileIndex)> {
        match self.tiles.as_slice() {
            &[a, b] => Some((a, b)),
            _ => None,
        }
    }

    pub(crate) fn push(&mut self, tile: TileIndex) {
        debug_assert!(!self.is_full(), "reveal buffer holds at most two tiles");
        self.tiles.push(tile);
    }

    pub(crate) fn clear(&mut self) {
        self.tiles.clear();
    }
}

/// One resolved round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Seat that revealed the pair.
    pub player: PlayerId,
    /// The two tiles, in reveal order.
    pub tiles: (TileIndex, TileIndex),
    /// Whether the pair matched.
    pub matched: bool,
}

/// Complete state of one game.
#[derive(Clone, Debug)]
pub struct GameState {
    /// Board dimensions.
    pub grid: GridSize,

    /// The dealt tiles.
    pub deck: Deck,

    /// Tiles revealed this round.
    pub revealed: RevealBuffer,

    /// Seat statistics and whose turn it is.
    pub roster: Roster,

    /// Tiles matched so far (always even).
    pub matched_count: usize,

    /// Current round step.
    pub phase: Phase,

    /// Every resolved round, oldest first.
    pub history: Vector<TurnRecord>,

    /// Set once `Won` has been emitted.
    pub victory_announced: bool,
}

impl GameState {
    /// Fresh state for a dealt deck.
    #[must_use]
    pub fn new(grid: GridSize, deck: Deck, roster: Roster) -> Self {
        Self {
            grid,
            deck,
            revealed: RevealBuffer::default(),
            roster,
            matched_count: 0,
            phase: Phase::AwaitingFirst,
            history: Vector::new(),
            victory_announced: false,
        }
    }

    /// Whose turn it is.
    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.roster.active()
    }

    /// Whether every tile has been matched.
    #[must_use]
    pub fn all_matched(&self) -> bool {
        self.matched_count == self.deck.len()
    }

    /// Pairs still on the board.
    #[must_use]
    pub fn pairs_remaining(&self) -> usize {
        (self.deck.len() - self.matched_count) / 2
    }

    /// Number of resolved rounds.
    #[must_use]
    pub fn rounds(&self) -> usize {
        self.history.len()
    }
}
