//! Game configuration types.
//!
//! A game is configured by:
//! - `GridSize`: rows and columns (the tile count must be even)
//! - `PlayerMode`: one seat or two alternating seats
//! - a `ThemeId` selecting the symbol pool
//! - the two fixed delays (conceal after a pair, victory after the last pair)
//!
//! `GameConfig::builder()` starts from the classic defaults: a 3x4 grid,
//! the first built-in theme, one player, 1 s reveal delay and 1.5 s win delay.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::themes::{Theme, ThemeCatalog, ThemeId};

/// How long a revealed pair stays face up before it resolves.
pub const DEFAULT_REVEAL_DELAY: Duration = Duration::from_millis(1000);

/// Pause between the last match and the victory announcement.
pub const DEFAULT_WIN_DELAY: Duration = Duration::from_millis(1500);

/// Grid dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridSize {
    pub rows: u16,
    pub cols: u16,
}

impl GridSize {
    /// 3 rows of 4 tiles (6 pairs).
    pub const SMALL: GridSize = GridSize::with_extra_column(3);
    /// 4 rows of 5 tiles (10 pairs).
    pub const MEDIUM: GridSize = GridSize::with_extra_column(4);
    /// 5 rows of 6 tiles (15 pairs).
    pub const LARGE: GridSize = GridSize::with_extra_column(5);

    /// Presets offered on the start screen, smallest first.
    pub const PRESETS: [GridSize; 3] = [GridSize::SMALL, GridSize::MEDIUM, GridSize::LARGE];

    #[must_use]
    pub const fn new(rows: u16, cols: u16) -> Self {
        Self { rows, cols }
    }

    /// `rows` rows of `rows + 1` tiles. Always an even tile count.
    #[must_use]
    pub const fn with_extra_column(rows: u16) -> Self {
        Self {
            rows,
            cols: rows + 1,
        }
    }

    /// Total number of tiles.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        usize::from(self.rows) * usize::from(self.cols)
    }

    /// Number of pairs on the board.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.tile_count() / 2
    }

    /// Row and column of a row-major tile position.
    #[must_use]
    pub fn position(&self, tile: usize) -> (u16, u16) {
        let cols = usize::from(self.cols.max(1));
        ((tile / cols) as u16, (tile % cols) as u16)
    }

    /// Check that the grid can be dealt as pairs.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (rows, cols) = (self.rows, self.cols);
        if rows == 0 || cols == 0 {
            return Err(ConfigError::EmptyGrid);
        }
        if self.tile_count() > usize::from(u16::MAX) {
            return Err(ConfigError::GridTooLarge { rows, cols });
        }
        if self.tile_count() % 2 != 0 {
            return Err(ConfigError::OddTileCount { rows, cols });
        }
        Ok(())
    }
}

impl std::fmt::Display for GridSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Number of seats and how turns are handled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerMode {
    /// One player; the turn never changes.
    #[default]
    Single,
    /// Two players; the turn passes on every mismatch.
    Two,
}

impl PlayerMode {
    /// Map a seat count onto a mode.
    pub fn from_count(count: usize) -> Result<Self, ConfigError> {
        match count {
            1 => Ok(PlayerMode::Single),
            2 => Ok(PlayerMode::Two),
            n => Err(ConfigError::UnsupportedPlayerCount(n)),
        }
    }

    #[must_use]
    pub fn player_count(self) -> usize {
        match self {
            PlayerMode::Single => 1,
            PlayerMode::Two => 2,
        }
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board dimensions.
    pub grid: GridSize,

    /// Symbol pool to deal from.
    pub theme: ThemeId,

    /// One or two players.
    pub player_mode: PlayerMode,

    /// Delay between the second reveal and resolution.
    pub reveal_delay: Duration,

    /// Delay between the final match and the victory announcement.
    pub win_delay: Duration,

    /// Deck seed. `None` draws a fresh seed per game.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid: GridSize::SMALL,
            theme: ThemeId::default(),
            player_mode: PlayerMode::Single,
            reveal_delay: DEFAULT_REVEAL_DELAY,
            win_delay: DEFAULT_WIN_DELAY,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Start a configuration from the classic defaults.
    #[must_use]
    pub fn builder() -> GameConfigBuilder {
        GameConfigBuilder::default()
    }

    /// Run every construction-time check and return the selected theme.
    pub fn validate<'a>(&self, catalog: &'a ThemeCatalog) -> Result<&'a Theme, ConfigError> {
        self.grid.validate()?;
        let theme = catalog
            .get(self.theme)
            .ok_or(ConfigError::UnknownTheme(self.theme.raw()))?;

        let needed = self.grid.pair_count();
        if theme.symbol_count() < needed {
            return Err(ConfigError::NotEnoughSymbols {
                theme: theme.name.clone(),
                needed,
                available: theme.symbol_count(),
            });
        }
        Ok(theme)
    }
}

/// Builder for `GameConfig`.
#[derive(Clone, Debug, Default)]
pub struct GameConfigBuilder {
    config: GameConfig,
}

impl GameConfigBuilder {
    /// Set an arbitrary grid.
    #[must_use]
    pub fn grid(mut self, rows: u16, cols: u16) -> Self {
        self.config.grid = GridSize::new(rows, cols);
        self
    }

    /// Use a preset or prepared grid size.
    #[must_use]
    pub fn grid_size(mut self, grid: GridSize) -> Self {
        self.config.grid = grid;
        self
    }

    #[must_use]
    pub fn theme(mut self, theme: ThemeId) -> Self {
        self.config.theme = theme;
        self
    }

    #[must_use]
    pub fn player_mode(mut self, mode: PlayerMode) -> Self {
        self.config.player_mode = mode;
        self
    }

    /// Set the reveal delay; the win delay follows at 1.5x.
    #[must_use]
    pub fn reveal_delay(mut self, delay: Duration) -> Self {
        self.config.reveal_delay = delay;
        self.config.win_delay = delay.mul_f64(1.5);
        self
    }

    /// Override the win delay independently.
    #[must_use]
    pub fn win_delay(mut self, delay: Duration) -> Self {
        self.config.win_delay = delay;
        self
    }

    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn build(self) -> GameConfig {
        self.config
    }
}
