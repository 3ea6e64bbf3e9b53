//! Tile identity, symbol identity and per-tile state.

use serde::{Deserialize, Serialize};

/// Position of a tile on the grid, row-major: `row * cols + col`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TileIndex(pub u16);

impl TileIndex {
    /// Create a new tile index.
    #[must_use]
    pub const fn new(index: u16) -> Self {
        Self(index)
    }

    /// Get the index as a `usize` for slice access.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for TileIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile({})", self.0)
    }
}

/// Opaque symbol identifier.
///
/// The engine only compares image ids for equality. Mapping an id to a
/// picture is up to whoever renders the board; ids are indices into the
/// configured theme's symbol pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ImageId(pub u32);

impl ImageId {
    /// Create a new image ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ImageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Image({})", self.0)
    }
}

/// Face state of a tile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileState {
    /// Face down, may be revealed.
    #[default]
    Hidden,
    /// Face up, waiting for the round to resolve.
    Revealed,
    /// Pair found; out of play for the rest of the game.
    Matched,
}

/// One grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub image: ImageId,
    pub state: TileState,
}

impl Tile {
    /// A face-down tile showing `image` once revealed.
    #[must_use]
    pub const fn new(image: ImageId) -> Self {
        Self {
            image,
            state: TileState::Hidden,
        }
    }

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.state == TileState::Hidden
    }
}
