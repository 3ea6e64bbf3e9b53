//! Full games on small boards, driven through the engine.
//!
//! Each test plays a fixed deck move by move and checks the reported events
//! and the totals after every round.

use rust_memo::core::{
    Deck, GameConfig, ImageId, Phase, PlayerId, PlayerMode, PlayerStats, TileIndex, TileState,
};
use rust_memo::events::GameEvent;
use rust_memo::rules::{GameResult, MatchEngine};
use rust_memo::timing::Signal;

const A: u32 = 0;
const B: u32 = 1;
const C: u32 = 2;
const D: u32 = 3;

fn engine_on(rows: u16, cols: u16, layout: &[u32], mode: PlayerMode) -> MatchEngine {
    let deck = Deck::from_images(layout.iter().copied().map(ImageId).collect()).unwrap();
    let config = GameConfig::builder().grid(rows, cols).player_mode(mode).build();
    MatchEngine::with_deck(config, deck).unwrap()
}

fn engine(layout: [u32; 4], mode: PlayerMode) -> MatchEngine {
    engine_on(2, 2, &layout, mode)
}

fn t(i: u16) -> TileIndex {
    TileIndex(i)
}

/// Reveal two tiles and resolve them, returning the resolution events.
fn play_round(engine: &mut MatchEngine, first: u16, second: u16) -> Vec<GameEvent> {
    engine.reveal(t(first)).unwrap();
    let transition = engine.reveal(t(second)).unwrap();
    assert_eq!(transition.timer.map(|r| r.signal), Some(Signal::Conceal));
    engine.timeout().unwrap().events.into_vec()
}

#[test]
fn test_single_player_clears_board() {
    let mut engine = engine([A, A, B, B], PlayerMode::Single);

    let events = play_round(&mut engine, 0, 1);
    assert_eq!(
        events,
        vec![
            GameEvent::Matched(t(0), t(1)),
            GameEvent::ScoreUpdated {
                player: PlayerId::FIRST,
                steps: 1,
                score: 1
            },
        ]
    );
    assert_eq!(engine.state().matched_count, 2);
    assert_eq!(engine.phase(), Phase::AwaitingFirst);

    engine.reveal(t(2)).unwrap();
    engine.reveal(t(3)).unwrap();
    let transition = engine.timeout().unwrap();
    assert_eq!(transition.events[0], GameEvent::Matched(t(2), t(3)));
    assert_eq!(transition.timer.map(|r| r.signal), Some(Signal::Victory));
    assert_eq!(engine.state().matched_count, 4);
    assert_eq!(engine.phase(), Phase::Finished);

    let won = engine.announce_victory().unwrap();
    let GameEvent::Won(summary) = &won.events[0] else {
        panic!("expected Won, got {:?}", won.events);
    };
    assert_eq!(summary.result, GameResult::Completed);
    assert_eq!(
        summary.stats(PlayerId::FIRST),
        Some(&PlayerStats { steps: 2, score: 2 })
    );
    assert!(engine
        .state()
        .deck
        .tiles()
        .iter()
        .all(|tile| tile.state == TileState::Matched));
}

#[test]
fn test_two_players_turn_passes_on_miss() {
    let mut engine = engine([A, B, A, B], PlayerMode::Two);

    // Player 1 misses.
    let events = play_round(&mut engine, 0, 1);
    assert_eq!(
        events,
        vec![
            GameEvent::Mismatched(t(0), t(1)),
            GameEvent::ScoreUpdated {
                player: PlayerId::FIRST,
                steps: 1,
                score: 0
            },
            GameEvent::TurnChanged(PlayerId::SECOND),
        ]
    );
    assert_eq!(engine.state().active_player(), PlayerId::SECOND);
    assert_eq!(engine.state().deck.count(TileState::Hidden), 4);

    // Player 2 matches and keeps the turn.
    let events = play_round(&mut engine, 0, 2);
    assert_eq!(
        events,
        vec![
            GameEvent::Matched(t(0), t(2)),
            GameEvent::ScoreUpdated {
                player: PlayerId::SECOND,
                steps: 1,
                score: 1
            },
        ]
    );
    assert_eq!(engine.state().active_player(), PlayerId::SECOND);

    // Player 2 takes the last pair.
    let events = play_round(&mut engine, 1, 3);
    assert_eq!(events[0], GameEvent::Matched(t(1), t(3)));
    assert_eq!(engine.phase(), Phase::Finished);

    let won = engine.announce_victory().unwrap();
    let GameEvent::Won(summary) = &won.events[0] else {
        panic!("expected Won, got {:?}", won.events);
    };
    assert_eq!(summary.winner(), Some(PlayerId::SECOND));
    assert_eq!(
        summary.stats(PlayerId::FIRST),
        Some(&PlayerStats { steps: 1, score: 0 })
    );
    assert_eq!(
        summary.stats(PlayerId::SECOND),
        Some(&PlayerStats { steps: 2, score: 2 })
    );
    assert_eq!(summary.rounds, 3);
}

#[test]
fn test_two_players_tie_is_draw() {
    let mut engine = engine_on(2, 4, &[A, A, B, B, C, D, C, D], PlayerMode::Two);

    play_round(&mut engine, 0, 1);
    play_round(&mut engine, 2, 3);
    play_round(&mut engine, 4, 5);
    play_round(&mut engine, 4, 6);
    play_round(&mut engine, 5, 7);

    let won = engine.announce_victory().unwrap();
    let GameEvent::Won(summary) = &won.events[0] else {
        panic!("expected Won, got {:?}", won.events);
    };
    assert!(summary.is_tie());
    assert_eq!(summary.result.to_string(), "friendship wins");
}

#[test]
fn test_finished_game_rejects_input() {
    let mut engine = engine([A, A, B, B], PlayerMode::Single);
    play_round(&mut engine, 0, 1);
    play_round(&mut engine, 2, 3);

    assert!(engine.reveal(t(0)).is_err());
    assert!(engine.timeout().is_err());
    assert!(engine.announce_victory().is_ok());
    assert!(engine.announce_victory().is_err());
    assert_eq!(engine.phase(), Phase::Finished);
}
