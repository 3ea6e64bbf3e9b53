//! # rust-memo
//!
//! Engine for the pairs ("memory") card game: a grid of face-down tiles,
//! every image appearing on exactly two of them. Players turn two tiles per
//! round; a match stays face up and scores, a mismatch is concealed again
//! after a short delay and, with two players, passes the turn.
//!
//! ## Design Principles
//!
//! 1. **Pure rules**: `MatchEngine` never sleeps or renders. Each input
//!    returns the events it produced and the timer it needs.
//!
//! 2. **One session per game window**: `GameSession` owns the engine, the
//!    timers and the event sink. There is no global state.
//!
//! 3. **Rejected, not fatal**: input that does not fit the current state
//!    comes back as `Rejected` and changes nothing.
//!
//! ## Modules
//!
//! - `core`: Tiles, deck, players, game state, RNG, configuration, errors
//! - `themes`: Symbol pools decks are dealt from
//! - `rules`: The match engine and end-of-game results
//! - `events`: Events reported to front ends
//! - `timing`: Reveal and victory timers
//! - `session`: Ties an engine to a scheduler and an event sink

pub mod core;
pub mod events;
pub mod rules;
pub mod session;
pub mod themes;
pub mod timing;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, Deck, GameConfig, GameConfigBuilder, GameRng, GameState, GridSize, ImageId,
    Phase, PlayerId, PlayerMode, PlayerStats, Rejected, Roster, Tile, TileIndex, TileState,
};

pub use crate::events::{EventLog, EventSink, GameEvent};

pub use crate::rules::{GameResult, GameSummary, MatchEngine, Transition};

pub use crate::session::GameSession;

pub use crate::themes::{Theme, ThemeCatalog, ThemeId, ANIMALS, FLOWERS};

pub use crate::timing::{DelayQueue, Scheduler, Signal, Timer, TimerId, TimerRequest};
