//! Game sessions: one engine, its timers and its front end.
//!
//! A `GameSession` is what a front end holds while a game window is open.
//! It owns the theme catalog, the current `MatchEngine`, a `Scheduler` for
//! the engine's timers and the `EventSink` events are delivered to. There is
//! no global game state; dropping the session ends the game.
//!
//! ## Driving a session
//!
//! ```
//! use std::time::Duration;
//! use rust_memo::core::{GameConfig, GridSize, TileIndex};
//! use rust_memo::events::EventLog;
//! use rust_memo::session::GameSession;
//! use rust_memo::themes::ThemeCatalog;
//!
//! let mut session = GameSession::new(ThemeCatalog::builtin(), EventLog::new());
//! session
//!     .configure(GameConfig::builder().grid_size(GridSize::SMALL).seed(1).build())
//!     .unwrap();
//!
//! session.reveal(TileIndex::new(0)).unwrap();
//! session.reveal(TileIndex::new(1)).unwrap();
//!
//! // Both tiles stay face up until the reveal delay has passed.
//! session.advance(Duration::from_millis(1000));
//! assert_eq!(session.state().unwrap().rounds(), 1);
//! ```

use std::time::Duration;

use crate::core::{ConfigError, Deck, GameConfig, GameState, Phase, Rejected, TileIndex};
use crate::events::{EventSink, GameEvent};
use crate::rules::{MatchEngine, Transition};
use crate::themes::ThemeCatalog;
use crate::timing::{DelayQueue, Scheduler, Signal, Timer};

/// An open game and everything needed to drive it.
pub struct GameSession<S: EventSink, Q: Scheduler = DelayQueue> {
    catalog: ThemeCatalog,
    sink: S,
    scheduler: Q,
    engine: Option<MatchEngine>,
    generation: u64,
}

impl<S: EventSink> GameSession<S, DelayQueue> {
    /// Session with the built-in virtual-clock timer queue.
    #[must_use]
    pub fn new(catalog: ThemeCatalog, sink: S) -> Self {
        Self::with_scheduler(catalog, sink, DelayQueue::new())
    }

    /// Advance the clock by `elapsed`, firing every timer that comes due.
    ///
    /// Timers fire one at a time in deadline order, so a `Victory` timer
    /// scheduled by a `Conceal` firing inside this window fires too when
    /// its own deadline falls within it. Returns the number handled.
    pub fn advance(&mut self, elapsed: Duration) -> usize {
        let until = self.scheduler.now() + elapsed;
        let mut handled = 0;
        while let Some((_, timer)) = self.scheduler.pop_due(until) {
            if self.fire(timer).is_ok() {
                handled += 1;
            }
        }
        self.scheduler.set_now(until);
        handled
    }

    /// Fire pending timers immediately, without waiting for their delays.
    ///
    /// Returns the number handled.
    pub fn flush_timers(&mut self) -> usize {
        let mut handled = 0;
        while let Some((_, timer)) = self.scheduler.fire_next() {
            if self.fire(timer).is_ok() {
                handled += 1;
            }
        }
        handled
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }
}

impl<S: EventSink, Q: Scheduler> GameSession<S, Q> {
    /// Session with an external scheduler.
    ///
    /// The owner of `scheduler` must hand every fired `Timer` back through
    /// [`fire`](GameSession::fire).
    #[must_use]
    pub fn with_scheduler(catalog: ThemeCatalog, sink: S, scheduler: Q) -> Self {
        Self {
            catalog,
            sink,
            scheduler,
            engine: None,
            generation: 0,
        }
    }

    /// Start a new game, replacing any game in progress.
    ///
    /// On error the current game, if any, is left running.
    pub fn configure(&mut self, config: GameConfig) -> Result<(), ConfigError> {
        let engine = MatchEngine::new(config, &self.catalog)?;
        self.install(engine);
        Ok(())
    }

    /// Start a new game on a prepared deck.
    pub fn configure_with_deck(&mut self, config: GameConfig, deck: Deck) -> Result<(), ConfigError> {
        let engine = MatchEngine::with_deck(config, deck)?;
        self.install(engine);
        Ok(())
    }

    /// Deal a fresh deck with the current settings.
    ///
    /// A fixed seed is dropped so the new deck differs. Does nothing when no
    /// game has been configured.
    pub fn restart(&mut self) -> Result<(), ConfigError> {
        let Some(engine) = &self.engine else {
            log::debug!("restart ignored: no game configured");
            return Ok(());
        };
        let mut config = engine.config().clone();
        config.seed = None;
        self.configure(config)
    }

    /// End the current game and drop its pending timers.
    pub fn close(&mut self) {
        if self.engine.take().is_some() {
            log::debug!("game {} closed", self.generation);
        }
        self.scheduler.cancel_all();
    }

    /// Turn a tile face up.
    pub fn reveal(&mut self, tile: TileIndex) -> Result<(), Rejected> {
        let engine = self.engine.as_mut().ok_or(Rejected::NoGame)?;
        let transition = engine.reveal(tile)?;
        self.apply(transition);
        Ok(())
    }

    /// Handle a fired timer.
    ///
    /// Timers from a replaced game are rejected as stale.
    pub fn fire(&mut self, timer: Timer) -> Result<(), Rejected> {
        if timer.generation != self.generation {
            log::trace!(
                "dropping {:?} timer from game {} (current {})",
                timer.signal,
                timer.generation,
                self.generation
            );
            return Err(Rejected::StaleTimer);
        }
        let engine = self.engine.as_mut().ok_or(Rejected::NoGame)?;
        log::trace!("{:?} timer fired", timer.signal);
        let transition = match timer.signal {
            Signal::Conceal => engine.timeout()?,
            Signal::Victory => engine.announce_victory()?,
        };
        self.apply(transition);
        Ok(())
    }

    fn install(&mut self, engine: MatchEngine) {
        self.scheduler.cancel_all();
        self.generation += 1;
        self.engine = Some(engine);
    }

    fn apply(&mut self, transition: Transition) {
        for event in &transition.events {
            log::trace!("event {}: {event}", event.name());
            self.sink.dispatch(event);
        }
        if let Some(request) = transition.timer {
            let timer = Timer {
                signal: request.signal,
                generation: self.generation,
            };
            self.scheduler.schedule(request.delay, timer);
        }
    }

    /// The current game's engine.
    #[must_use]
    pub fn engine(&self) -> Option<&MatchEngine> {
        self.engine.as_ref()
    }

    /// The current game's state, for rendering.
    #[must_use]
    pub fn state(&self) -> Option<&GameState> {
        self.engine.as_ref().map(MatchEngine::state)
    }

    /// Current phase, `None` without a game.
    #[must_use]
    pub fn phase(&self) -> Option<Phase> {
        self.engine.as_ref().map(MatchEngine::phase)
    }

    /// Whether the current game has found every pair.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase() == Some(Phase::Finished)
    }

    /// Games started so far; stamps every timer.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn catalog(&self) -> &ThemeCatalog {
        &self.catalog
    }

    /// Register extra themes before configuring.
    pub fn catalog_mut(&mut self) -> &mut ThemeCatalog {
        &mut self.catalog
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    #[must_use]
    pub fn scheduler(&self) -> &Q {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut Q {
        &mut self.scheduler
    }

    /// Consume the session, returning its sink.
    pub fn into_sink(self) -> S {
        self.sink
    }
}

impl<S: EventSink, Q: Scheduler> std::fmt::Debug for GameSession<S, Q> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("generation", &self.generation)
            .field("phase", &self.phase())
            .field("pending_timers", &self.scheduler.pending())
            .finish()
    }
}

/// Whether an event sequence ends with the game won.
#[must_use]
pub fn ends_in_victory(events: &[GameEvent]) -> bool {
    events.last().is_some_and(GameEvent::is_terminal)
}
