//! Plays pairs games with a perfect-memory bot and prints the results.
//!
//! Every seat is played by the same bot: it remembers each image it has
//! seen, takes a known pair when one is on the board and otherwise turns an
//! unseen tile. Timers run on the session's virtual clock.

use std::process::ExitCode;

use rustc_hash::FxHashMap;

use rust_memo::core::{GameConfig, GameState, GridSize, ImageId, Phase, PlayerMode, TileIndex};
use rust_memo::events::EventSink;
use rust_memo::rules::GameSummary;
use rust_memo::session::GameSession;
use rust_memo::themes::ThemeCatalog;

/// What the bot has seen so far.
#[derive(Debug, Default)]
struct Recall {
    seen: FxHashMap<TileIndex, ImageId>,
    summary: Option<GameSummary>,
}

impl EventSink for Recall {
    fn on_revealed(&mut self, tile: TileIndex, image: ImageId) {
        self.seen.insert(tile, image);
    }

    fn on_matched(&mut self, first: TileIndex, second: TileIndex) {
        self.seen.remove(&first);
        self.seen.remove(&second);
    }

    fn on_won(&mut self, summary: &GameSummary) {
        self.summary = Some(summary.clone());
    }
}

impl Recall {
    fn partner_of(&self, tile: TileIndex, state: &GameState) -> Option<TileIndex> {
        let image = self.seen.get(&tile)?;
        self.seen
            .iter()
            .filter(|(other, _)| **other != tile && is_hidden(state, **other))
            .find(|(_, other_image)| *other_image == image)
            .map(|(other, _)| *other)
    }

    fn known_pair(&self, state: &GameState) -> Option<TileIndex> {
        let mut tiles: Vec<_> = self.seen.keys().copied().collect();
        tiles.sort();
        tiles
            .into_iter()
            .find(|tile| is_hidden(state, *tile) && self.partner_of(*tile, state).is_some())
    }

    fn unseen(&self, state: &GameState, except: Option<TileIndex>) -> Option<TileIndex> {
        hidden_tiles(state).find(|tile| Some(*tile) != except && !self.seen.contains_key(tile))
    }

    /// Next tile to turn over, `None` when nothing can be revealed.
    fn choose(&self, state: &GameState) -> Option<TileIndex> {
        match state.phase {
            Phase::AwaitingFirst => self
                .known_pair(state)
                .or_else(|| self.unseen(state, None)),
            Phase::AwaitingSecond => {
                let first = *state.revealed.as_slice().first()?;
                self.partner_of(first, state)
                    .or_else(|| self.unseen(state, Some(first)))
                    .or_else(|| hidden_tiles(state).find(|tile| *tile != first))
            }
            Phase::Resolving | Phase::Finished => None,
        }
    }
}

fn is_hidden(state: &GameState, tile: TileIndex) -> bool {
    state.deck.get(tile).is_some_and(|t| t.is_hidden())
}

fn hidden_tiles(state: &GameState) -> impl Iterator<Item = TileIndex> + '_ {
    state
        .deck
        .tiles()
        .iter()
        .enumerate()
        .filter(|(_, tile)| tile.is_hidden())
        .map(|(i, _)| TileIndex(i as u16))
}

/// Play one game to the end and return its summary.
fn play(catalog: &ThemeCatalog, config: GameConfig) -> Result<GameSummary, String> {
    let mut session = GameSession::new(catalog.clone(), Recall::default());
    session.configure(config).map_err(|e| e.to_string())?;

    // Every round resolves one pair or reveals at least one unseen tile.
    let limit = session.state().map_or(0, |s| s.deck.len()) * 2 + 1;
    let mut rounds = 0;
    while !session.is_finished() {
        if rounds > limit {
            return Err(format!("no result after {rounds} rounds"));
        }
        let state = session.state().ok_or("game closed")?;
        let tile = session
            .sink()
            .choose(state)
            .ok_or("no tile left to reveal")?;
        session.reveal(tile).map_err(|e| e.to_string())?;
        if session.phase() == Some(Phase::Resolving) {
            session.flush_timers();
            rounds += 1;
        }
    }
    session.flush_timers();

    session
        .into_sink()
        .summary
        .ok_or_else(|| "victory was never announced".to_string())
}

fn report(index: usize, summary: &GameSummary) {
    println!(
        "game {index}: {} {:?}, {} rounds, {}",
        summary.grid, summary.player_mode, summary.rounds, summary.result
    );
    for (player, stats) in &summary.players {
        println!(
            "  {player}: {} pairs in {} steps ({:.0}%)",
            stats.score,
            stats.steps,
            stats.success_ratio() * 100.0
        );
    }
}

struct Args {
    games: usize,
    seed: Option<u64>,
    grid: GridSize,
    mode: PlayerMode,
    theme: String,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        games: 1,
        seed: None,
        grid: GridSize::SMALL,
        mode: PlayerMode::Single,
        theme: "flowers".to_string(),
    };

    let mut iter = std::env::args().skip(1);
    while let Some(flag) = iter.next() {
        let mut value = || iter.next().ok_or_else(|| format!("missing value for {flag}"));
        match flag.as_str() {
            "--games" => {
                args.games = value()?.parse().map_err(|_| "invalid --games value")?;
            }
            "--seed" => {
                args.seed = Some(value()?.parse().map_err(|_| "invalid --seed value")?);
            }
            "--rows" => {
                let rows: u16 = value()?.parse().map_err(|_| "invalid --rows value")?;
                args.grid = GridSize::with_extra_column(rows);
            }
            "--players" => {
                let count: usize = value()?.parse().map_err(|_| "invalid --players value")?;
                args.mode = PlayerMode::from_count(count).map_err(|e| e.to_string())?;
            }
            "--theme" => args.theme = value()?,
            "--help" | "-h" => {
                println!(
                    "Usage: memo-autoplay [--games N] [--seed S] [--rows R] [--players 1|2] [--theme NAME]"
                );
                std::process::exit(0);
            }
            other => return Err(format!("unknown argument {other}")),
        }
    }
    Ok(args)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let catalog = ThemeCatalog::builtin();
    let Some(theme) = catalog.find_by_name(&args.theme) else {
        eprintln!("unknown theme '{}'", args.theme);
        return ExitCode::FAILURE;
    };

    let mut wins = [0usize; 2];
    for game in 0..args.games {
        let mut builder = GameConfig::builder()
            .grid_size(args.grid)
            .theme(theme.id)
            .player_mode(args.mode);
        if let Some(seed) = args.seed {
            builder = builder.seed(seed.wrapping_add(game as u64));
        }

        match play(&catalog, builder.build()) {
            Ok(summary) => {
                if let Some(winner) = summary.winner() {
                    wins[winner.index()] += 1;
                }
                report(game, &summary);
            }
            Err(e) => {
                log::error!("game {game} failed: {e}");
                return ExitCode::FAILURE;
            }
        }
    }

    if args.mode == PlayerMode::Two {
        log::info!(
            "{} games: player 1 won {}, player 2 won {}",
            args.games,
            wins[0],
            wins[1]
        );
    }
    ExitCode::SUCCESS
}
