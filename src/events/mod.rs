//! Event reporting for front ends.
//!
//! The engine never renders anything. Instead it reports what happened as
//! [`GameEvent`]s, and a session hands each one to an [`EventSink`]
//! implemented by whatever draws the board.
//!
//! ## Example Usage
//!
//! ```
//! use rust_memo::core::{PlayerId, TileIndex};
//! use rust_memo::events::{EventLog, EventSink, GameEvent};
//!
//! let mut log = EventLog::new();
//! log.dispatch(&GameEvent::Mismatched(TileIndex::new(0), TileIndex::new(1)));
//! log.dispatch(&GameEvent::TurnChanged(PlayerId::SECOND));
//!
//! assert_eq!(log.len(), 2);
//! ```

mod event;
mod sink;

pub use event::GameEvent;
pub use sink::{EventLog, EventSink};
