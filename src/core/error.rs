//! Construction errors and rejected calls.
//!
//! Two kinds of failure exist. `ConfigError` is raised once, when a game is
//! set up with settings that cannot produce a valid deck. `Rejected` is the
//! non-fatal answer to a `reveal`/`timeout` that does not fit the current
//! phase or tile state; the state is left untouched and play continues.

use super::tile::{ImageId, TileIndex, TileState};

/// Invalid game configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Rows or columns is zero.
    EmptyGrid,
    /// `rows * cols` is odd, so tiles cannot be paired.
    OddTileCount { rows: u16, cols: u16 },
    /// The grid has more tiles than a `TileIndex` can address.
    GridTooLarge { rows: u16, cols: u16 },
    /// Only one or two players are supported.
    UnsupportedPlayerCount(usize),
    /// No theme with this id is registered.
    UnknownTheme(u16),
    /// A theme with this id is already registered.
    DuplicateTheme(u16),
    /// The theme cannot supply one distinct symbol per pair.
    NotEnoughSymbols {
        theme: String,
        needed: usize,
        available: usize,
    },
    /// A prepared deck does not have the configured number of tiles.
    DeckMismatch { expected: usize, actual: usize },
    /// A prepared deck holds an image other than exactly twice.
    UnpairedImage(ImageId),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::EmptyGrid => write!(f, "grid must have at least one row and one column"),
            ConfigError::OddTileCount { rows, cols } => {
                write!(f, "{rows}x{cols} grid has an odd number of tiles")
            }
            ConfigError::GridTooLarge { rows, cols } => {
                write!(f, "{rows}x{cols} grid has too many tiles")
            }
            ConfigError::UnsupportedPlayerCount(n) => {
                write!(f, "unsupported player count {n} (expected 1 or 2)")
            }
            ConfigError::UnknownTheme(id) => write!(f, "unknown theme {id}"),
            ConfigError::DuplicateTheme(id) => write!(f, "theme {id} is already registered"),
            ConfigError::NotEnoughSymbols {
                theme,
                needed,
                available,
            } => write!(
                f,
                "theme '{theme}' has {available} symbols but the grid needs {needed}"
            ),
            ConfigError::DeckMismatch { expected, actual } => {
                write!(f, "deck has {actual} tiles, grid needs {expected}")
            }
            ConfigError::UnpairedImage(image) => {
                write!(f, "{image} does not appear exactly twice in the deck")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Why a `reveal`, `timeout` or victory announcement was ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejected {
    /// The index is past the end of the deck.
    TileOutOfRange(TileIndex),
    /// The tile is already face up or already matched.
    TileNotHidden(TileIndex, TileState),
    /// Two tiles are face up and waiting for the conceal timer.
    Resolving,
    /// Every pair has been found.
    Finished,
    /// `timeout` arrived with fewer than two tiles face up.
    NotResolving,
    /// Victory was requested before the last pair was found.
    NotFinished,
    /// Victory has already been announced for this game.
    AlreadyAnnounced,
    /// The session has no game in progress.
    NoGame,
    /// The timer belongs to a game that has since been replaced.
    StaleTimer,
}

impl std::fmt::Display for Rejected {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rejected::TileOutOfRange(tile) => write!(f, "{tile} is out of range"),
            Rejected::TileNotHidden(tile, state) => write!(f, "{tile} is {state:?}"),
            Rejected::Resolving => write!(f, "two tiles are already revealed"),
            Rejected::Finished => write!(f, "the game is over"),
            Rejected::NotResolving => write!(f, "no pair is waiting to be resolved"),
            Rejected::NotFinished => write!(f, "pairs remain on the board"),
            Rejected::AlreadyAnnounced => write!(f, "victory was already announced"),
            Rejected::NoGame => write!(f, "no game in progress"),
            Rejected::StaleTimer => write!(f, "timer belongs to a previous game"),
        }
    }
}

impl std::error::Error for Rejected {}
