//! Property-based tests for dealing and the match rules.
//!
//! Games are played with arbitrary tile choices, including invalid ones, and
//! the engine's state is checked after every input.

use proptest::prelude::*;

use rust_memo::core::{
    GameConfig, GameState, GridSize, Phase, PlayerMode, TileIndex, TileState,
};
use rust_memo::rules::MatchEngine;
use rust_memo::themes::ThemeCatalog;

/// Strategy: a grid with an even tile count the built-in themes can fill.
fn grid_strategy() -> impl Strategy<Value = GridSize> {
    (1u16..=6, 1u16..=6)
        .prop_map(|(rows, cols)| GridSize::new(rows, cols))
        .prop_filter("even and within 15 pairs", |grid| {
            grid.tile_count() % 2 == 0 && grid.pair_count() <= 15
        })
}

fn mode_strategy() -> impl Strategy<Value = PlayerMode> {
    prop_oneof![Just(PlayerMode::Single), Just(PlayerMode::Two)]
}

fn new_engine(grid: GridSize, mode: PlayerMode, seed: u64) -> MatchEngine {
    let config = GameConfig::builder()
        .grid_size(grid)
        .player_mode(mode)
        .seed(seed)
        .build();
    MatchEngine::new(config, &ThemeCatalog::builtin()).unwrap()
}

/// Everything a rejected input must leave alone.
fn fingerprint(state: &GameState) -> impl PartialEq + std::fmt::Debug {
    (
        state.deck.tiles().to_vec(),
        state.revealed.as_slice().to_vec(),
        state.roster.clone(),
        state.matched_count,
        state.phase,
        state.history.len(),
    )
}

proptest! {
    // 1. Every image is dealt exactly twice
    #[test]
    fn deal_pairs_every_image(grid in grid_strategy(), seed in any::<u64>()) {
        let engine = new_engine(grid, PlayerMode::Single, seed);
        let deck = &engine.state().deck;

        prop_assert_eq!(deck.len(), grid.tile_count());
        let mut images: Vec<_> = deck.tiles().iter().map(|t| t.image).collect();
        images.sort();
        for pair in images.chunks(2) {
            prop_assert_eq!(pair[0], pair[1]);
        }
        images.dedup();
        prop_assert_eq!(images.len(), grid.pair_count());
        prop_assert!(deck.tiles().iter().all(|t| t.state == TileState::Hidden));
    }

    // 2. Rejected reveals never change the state
    #[test]
    fn rejected_reveal_is_inert(
        grid in grid_strategy(),
        mode in mode_strategy(),
        seed in any::<u64>(),
        picks in prop::collection::vec(0u16..40, 1..120),
    ) {
        let mut engine = new_engine(grid, mode, seed);
        for pick in picks {
            if engine.phase() == Phase::Resolving {
                engine.timeout().unwrap();
                continue;
            }
            let before = fingerprint(engine.state());
            if engine.reveal(TileIndex(pick)).is_err() {
                prop_assert_eq!(fingerprint(engine.state()), before);
            }
        }
    }

    // 3. Resolution matches or conceals both tiles
    #[test]
    fn resolution_updates_tiles(
        grid in grid_strategy(),
        mode in mode_strategy(),
        seed in any::<u64>(),
        picks in prop::collection::vec(0u16..30, 1..200),
    ) {
        let mut engine = new_engine(grid, mode, seed);
        for pick in picks {
            if engine.phase() != Phase::Resolving {
                let _ = engine.reveal(TileIndex(pick));
                continue;
            }

            let (a, b) = engine.state().revealed.pair().unwrap();
            let same = engine.state().deck.image(a) == engine.state().deck.image(b);
            let matched_before = engine.state().matched_count;
            engine.timeout().unwrap();

            let state = engine.state();
            let expected = if same { TileState::Matched } else { TileState::Hidden };
            prop_assert_eq!(state.deck.get(a).unwrap().state, expected);
            prop_assert_eq!(state.deck.get(b).unwrap().state, expected);
            let gained = if same { 2 } else { 0 };
            prop_assert_eq!(state.matched_count, matched_before + gained);
            prop_assert_eq!(state.deck.count(TileState::Matched), state.matched_count);
            prop_assert!(state.revealed.is_empty());
        }
    }

    // 4. With two players the turn passes iff the pair missed
    #[test]
    fn turn_passes_only_on_miss(
        grid in grid_strategy(),
        seed in any::<u64>(),
        picks in prop::collection::vec(0u16..30, 1..200),
    ) {
        let mut engine = new_engine(grid, PlayerMode::Two, seed);
        for pick in picks {
            if engine.phase() != Phase::Resolving {
                let _ = engine.reveal(TileIndex(pick));
                continue;
            }
            let active = engine.state().active_player();
            engine.timeout().unwrap();

            let last = engine.state().history.last().copied().unwrap();
            prop_assert_eq!(last.player, active);
            prop_assert_eq!(engine.state().active_player() != active, !last.matched);
        }
    }

    // 5. Finished exactly when every tile is matched, and it is terminal
    #[test]
    fn finished_iff_cleared(
        grid in grid_strategy(),
        mode in mode_strategy(),
        seed in any::<u64>(),
    ) {
        let mut engine = new_engine(grid, mode, seed);
        let tiles = grid.tile_count() as u16;

        // Sweep the board pair by pair, with one deliberate miss per sweep.
        let mut guard = 0;
        while engine.phase() != Phase::Finished {
            guard += 1;
            prop_assert!(guard < 4 * usize::from(tiles));

            let hidden: Vec<_> = engine.state().deck.indices_in(TileState::Hidden).collect();
            let first = hidden[0];
            let partner = engine.state().deck.partner(first).unwrap();
            let second = if guard % 2 == 0 {
                hidden.iter().copied().find(|t| *t != first && *t != partner).unwrap_or(partner)
            } else {
                partner
            };

            engine.reveal(first).unwrap();
            engine.reveal(second).unwrap();
            engine.timeout().unwrap();

            let state = engine.state();
            prop_assert_eq!(
                state.phase == Phase::Finished,
                state.matched_count == grid.tile_count()
            );
        }

        let before = fingerprint(engine.state());
        for tile in 0..tiles {
            prop_assert!(engine.reveal(TileIndex(tile)).is_err());
        }
        prop_assert!(engine.timeout().is_err());
        prop_assert_eq!(fingerprint(engine.state()), before);
    }
}
