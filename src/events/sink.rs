//! Event delivery to the presentation layer.

use crate::core::{ImageId, PlayerId, TileIndex};
use crate::rules::GameSummary;

use super::event::GameEvent;

/// Callbacks a front end implements to follow a game.
///
/// Every method defaults to doing nothing, so implementors only override
/// what they render. `dispatch` routes a `GameEvent` to the matching
/// callback; override it instead to receive events whole.
pub trait EventSink {
    fn on_revealed(&mut self, _tile: TileIndex, _image: ImageId) {}

    fn on_matched(&mut self, _first: TileIndex, _second: TileIndex) {}

    fn on_mismatched(&mut self, _first: TileIndex, _second: TileIndex) {}

    fn on_turn_changed(&mut self, _player: PlayerId) {}

    fn on_score_updated(&mut self, _player: PlayerId, _steps: u32, _score: u32) {}

    fn on_won(&mut self, _summary: &GameSummary) {}

    /// Route an event to its callback.
    fn dispatch(&mut self, event: &GameEvent) {
        match event {
            GameEvent::Revealed { tile, image } => self.on_revealed(*tile, *image),
            GameEvent::Matched(a, b) => self.on_matched(*a, *b),
            GameEvent::Mismatched(a, b) => self.on_mismatched(*a, *b),
            GameEvent::TurnChanged(player) => self.on_turn_changed(*player),
            GameEvent::ScoreUpdated {
                player,
                steps,
                score,
            } => self.on_score_updated(*player, *steps, *score),
            GameEvent::Won(summary) => self.on_won(summary),
        }
    }
}

/// Discards every event.
impl EventSink for () {}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn dispatch(&mut self, event: &GameEvent) {
        (**self).dispatch(event);
    }
}

impl<S: EventSink + ?Sized> EventSink for Box<S> {
    fn dispatch(&mut self, event: &GameEvent) {
        (**self).dispatch(event);
    }
}

/// Records every event in order.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded events, oldest first.
    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// The most recent event.
    #[must_use]
    pub fn last(&self) -> Option<&GameEvent> {
        self.events.last()
    }

    /// Take the recorded events, leaving the log empty.
    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// The `Won` summary, once the game has been won.
    #[must_use]
    pub fn summary(&self) -> Option<&GameSummary> {
        self.events.iter().rev().find_map(|e| match e {
            GameEvent::Won(summary) => Some(summary),
            _ => None,
        })
    }
}

impl EventSink for EventLog {
    fn dispatch(&mut self, event: &GameEvent) {
        self.events.push(event.clone());
    }
}
