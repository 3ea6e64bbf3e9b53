//! Core engine types: tiles, deck, players, state, RNG, configuration, errors.
//!
//! These are the building blocks the match engine mutates and the session
//! exposes. Nothing here knows about timers or event delivery.

pub mod config;
pub mod deck;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;
pub mod tile;

pub use config::{
    GameConfig, GameConfigBuilder, GridSize, PlayerMode, DEFAULT_REVEAL_DELAY, DEFAULT_WIN_DELAY,
};
pub use deck::Deck;
pub use error::{ConfigError, Rejected};
pub use player::{PlayerId, PlayerStats, Roster};
pub use rng::GameRng;
pub use state::{GameState, Phase, RevealBuffer, TurnRecord};
pub use tile::{ImageId, Tile, TileIndex, TileState};
