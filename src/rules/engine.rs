//! The pairs-matching state machine.
//!
//! `MatchEngine` is driven by two inputs: `reveal(tile)` from the player and
//! `timeout()` when the conceal timer fires. Each accepted input returns a
//! `Transition`: the events to report and, when the engine needs to wait,
//! the timer to schedule. Inputs that do not fit the current phase or tile
//! state come back as `Err(Rejected)` and leave the state untouched.

use smallvec::SmallVec;

use crate::core::{
    ConfigError, Deck, GameConfig, GameRng, GameState, Phase, PlayerId, PlayerMode, PlayerStats,
    Rejected, Roster, TileIndex, TileState, TurnRecord,
};
use crate::events::GameEvent;
use crate::themes::ThemeCatalog;
use crate::timing::{Signal, TimerRequest};

use super::summary::GameSummary;

/// What an accepted input produced.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Transition {
    /// Events to report, in order.
    pub events: SmallVec<[GameEvent; 4]>,
    /// Timer to schedule, if the engine now waits on one.
    pub timer: Option<TimerRequest>,
}

impl Transition {
    fn event(event: GameEvent) -> Self {
        let mut events = SmallVec::new();
        events.push(event);
        Self {
            events,
            timer: None,
        }
    }
}

/// One game of pairs.
#[derive(Clone, Debug)]
pub struct MatchEngine {
    config: GameConfig,
    state: GameState,
    deal_seed: Option<u64>,
}

impl MatchEngine {
    /// Validate `config` and deal a fresh deck from its theme.
    pub fn new(config: GameConfig, catalog: &ThemeCatalog) -> Result<Self, ConfigError> {
        let theme = config.validate(catalog)?;
        let mut rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let deck = Deck::deal(theme, config.grid.pair_count(), &mut rng)?;

        let mut engine = Self::with_deck(config, deck)?;
        engine.deal_seed = Some(rng.seed());
        log::info!(
            "new {} game, theme '{}', {:?}, seed {}",
            engine.config.grid,
            theme.name,
            engine.config.player_mode,
            rng.seed()
        );
        Ok(engine)
    }

    /// Start from a prepared deck. The deck size must match the grid.
    pub fn with_deck(config: GameConfig, deck: Deck) -> Result<Self, ConfigError> {
        config.grid.validate()?;
        let expected = config.grid.tile_count();
        if deck.len() != expected {
            return Err(ConfigError::DeckMismatch {
                expected,
                actual: deck.len(),
            });
        }

        let roster = match config.player_mode {
            PlayerMode::Single => Roster::Single(PlayerStats::default()),
            PlayerMode::Two => Roster::Two {
                players: [PlayerStats::default(); 2],
                active: PlayerId::FIRST,
            },
        };
        let state = GameState::new(config.grid, deck, roster);

        Ok(Self {
            config,
            state,
            deal_seed: None,
        })
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    /// Seed the deck was dealt with, `None` for prepared decks.
    #[must_use]
    pub fn deal_seed(&self) -> Option<u64> {
        self.deal_seed
    }

    /// Turn a hidden tile face up.
    pub fn reveal(&mut self, tile: TileIndex) -> Result<Transition, Rejected> {
        match self.state.phase {
            Phase::Finished => return reject(Rejected::Finished),
            Phase::Resolving => return reject(Rejected::Resolving),
            Phase::AwaitingFirst | Phase::AwaitingSecond => {}
        }
        let image = match self.state.deck.get(tile) {
            None => return reject(Rejected::TileOutOfRange(tile)),
            Some(t) if !t.is_hidden() => return reject(Rejected::TileNotHidden(tile, t.state)),
            Some(t) => t.image,
        };

        self.state.deck.set_state(tile, TileState::Revealed);
        self.state.revealed.push(tile);
        log::debug!("{} revealed {tile} ({image})", self.state.active_player());

        let mut transition = Transition::event(GameEvent::Revealed { tile, image });
        if self.state.revealed.is_full() {
            self.state.phase = Phase::Resolving;
            transition.timer = Some(TimerRequest {
                signal: Signal::Conceal,
                delay: self.config.reveal_delay,
            });
        } else {
            self.state.phase = Phase::AwaitingSecond;
        }
        Ok(transition)
    }

    /// Resolve the two revealed tiles.
    pub fn timeout(&mut self) -> Result<Transition, Rejected> {
        let (first, second) = match self.state.phase {
            Phase::Resolving => match self.state.revealed.pair() {
                Some(pair) => pair,
                None => return reject(Rejected::NotResolving),
            },
            Phase::Finished => return reject(Rejected::Finished),
            Phase::AwaitingFirst | Phase::AwaitingSecond => return reject(Rejected::NotResolving),
        };

        let player = self.state.active_player();
        let matched = self.state.deck.image(first) == self.state.deck.image(second);
        let mut transition = Transition::default();

        if matched {
            self.state.deck.set_state(first, TileState::Matched);
            self.state.deck.set_state(second, TileState::Matched);
            self.state.matched_count += 2;
            self.state.roster.active_stats_mut().score += 1;
            transition.events.push(GameEvent::Matched(first, second));
        } else {
            self.state.deck.set_state(first, TileState::Hidden);
            self.state.deck.set_state(second, TileState::Hidden);
            transition.events.push(GameEvent::Mismatched(first, second));
        }

        let stats = self.state.roster.active_stats_mut();
        stats.steps += 1;
        let (steps, score) = (stats.steps, stats.score);
        transition.events.push(GameEvent::ScoreUpdated {
            player,
            steps,
            score,
        });

        if !matched {
            let next = self.state.roster.pass_turn();
            if next != player {
                transition.events.push(GameEvent::TurnChanged(next));
            }
        }

        self.state.history.push_back(TurnRecord {
            player,
            tiles: (first, second),
            matched,
        });
        self.state.revealed.clear();
        log::debug!(
            "{player} {} {first} and {second} ({score} pairs in {steps} steps)",
            if matched { "matched" } else { "missed" }
        );

        if self.state.all_matched() {
            self.state.phase = Phase::Finished;
            transition.timer = Some(TimerRequest {
                signal: Signal::Victory,
                delay: self.config.win_delay,
            });
            log::debug!("all {} pairs found", self.state.deck.pair_count());
        } else {
            self.state.phase = Phase::AwaitingFirst;
        }
        Ok(transition)
    }

    /// Report the win once the victory delay has passed.
    pub fn announce_victory(&mut self) -> Result<Transition, Rejected> {
        if self.state.phase != Phase::Finished {
            return reject(Rejected::NotFinished);
        }
        if self.state.victory_announced {
            return reject(Rejected::AlreadyAnnounced);
        }
        self.state.victory_announced = true;

        let summary = self.summary();
        log::info!("game over after {} rounds: {}", summary.rounds, summary.result);
        Ok(Transition::event(GameEvent::Won(summary)))
    }

    /// Current totals, final once the game is finished.
    #[must_use]
    pub fn summary(&self) -> GameSummary {
        GameSummary::from_state(&self.state, self.config.player_mode)
    }

    /// O(1) copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }
}

fn reject(reason: Rejected) -> Result<Transition, Rejected> {
    log::debug!("rejected: {reason}");
    Err(reason)
}
