//! The dealt deck: one tile per grid cell, every image exactly twice.
//!
//! The deck is laid out once per game and never reordered afterwards; only
//! per-tile state changes. An image → tile pair index makes the partner of
//! any tile a constant-time lookup.

use rustc_hash::FxHashMap;

use super::error::ConfigError;
use super::rng::GameRng;
use super::tile::{ImageId, Tile, TileIndex, TileState};
use crate::themes::Theme;

/// Ordered tiles of one game.
#[derive(Clone, Debug)]
pub struct Deck {
    tiles: Vec<Tile>,
    pairs: FxHashMap<ImageId, [TileIndex; 2]>,
}

impl Deck {
    /// Deal `pair_count` pairs from `theme`.
    ///
    /// Picks `pair_count` distinct symbols, duplicates them and shuffles the
    /// result with a uniform permutation.
    pub fn deal(theme: &Theme, pair_count: usize, rng: &mut GameRng) -> Result<Self, ConfigError> {
        if theme.symbol_count() < pair_count {
            return Err(ConfigError::NotEnoughSymbols {
                theme: theme.name.clone(),
                needed: pair_count,
                available: theme.symbol_count(),
            });
        }

        let mut images: Vec<ImageId> = rng
            .sample_distinct(theme.symbol_count(), pair_count)
            .into_iter()
            .map(|i| ImageId(i as u32))
            .flat_map(|image| [image, image])
            .collect();
        rng.shuffle(&mut images);

        Self::from_images(images)
    }

    /// Build a deck from an explicit row-major layout.
    ///
    /// Every image must appear exactly twice.
    pub fn from_images(images: Vec<ImageId>) -> Result<Self, ConfigError> {
        if images.len() > usize::from(u16::MAX) {
            return Err(ConfigError::DeckMismatch {
                expected: usize::from(u16::MAX),
                actual: images.len(),
            });
        }

        let mut seen: FxHashMap<ImageId, Vec<TileIndex>> = FxHashMap::default();
        for (i, &image) in images.iter().enumerate() {
            seen.entry(image).or_default().push(TileIndex(i as u16));
        }

        let mut pairs = FxHashMap::default();
        for (image, positions) in seen {
            match positions.as_slice() {
                &[a, b] => {
                    pairs.insert(image, [a, b]);
                }
                _ => return Err(ConfigError::UnpairedImage(image)),
            }
        }

        Ok(Self {
            tiles: images.into_iter().map(Tile::new).collect(),
            pairs,
        })
    }

    /// Number of tiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Number of pairs (distinct images).
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.pairs.len()
    }

    /// All tiles in grid order.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    #[must_use]
    pub fn get(&self, tile: TileIndex) -> Option<&Tile> {
        self.tiles.get(tile.index())
    }

    pub(crate) fn set_state(&mut self, tile: TileIndex, state: TileState) {
        if let Some(t) = self.tiles.get_mut(tile.index()) {
            t.state = state;
        }
    }

    /// Image behind a tile.
    #[must_use]
    pub fn image(&self, tile: TileIndex) -> Option<ImageId> {
        self.get(tile).map(|t| t.image)
    }

    /// The other tile holding the same image.
    #[must_use]
    pub fn partner(&self, tile: TileIndex) -> Option<TileIndex> {
        let [a, b] = *self.pairs.get(&self.image(tile)?)?;
        Some(if a == tile { b } else { a })
    }

    /// Both tiles holding an image.
    #[must_use]
    pub fn positions(&self, image: ImageId) -> Option<[TileIndex; 2]> {
        self.pairs.get(&image).copied()
    }

    /// Number of tiles currently in `state`.
    #[must_use]
    pub fn count(&self, state: TileState) -> usize {
        self.tiles.iter().filter(|t| t.state == state).count()
    }

    /// Indices of tiles currently in `state`.
    pub fn indices_in(&self, state: TileState) -> impl Iterator<Item = TileIndex> + '_ {
        self.tiles
            .iter()
            .enumerate()
            .filter(move |(_, t)| t.state == state)
            .map(|(i, _)| TileIndex(i as u16))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::themes::{ThemeCatalog, FLOWERS};

    fn images(raw: &[u32]) -> Vec<ImageId> {
        raw.iter().copied().map(ImageId).collect()
    }

    #[test]
    fn test_deal_pairs_every_image() {
        let catalog = ThemeCatalog::builtin();
        let theme = catalog.get(FLOWERS).unwrap();
        let mut rng = GameRng::new(42);

        let deck = Deck::deal(theme, 10, &mut rng).unwrap();

        assert_eq!(deck.len(), 20);
        assert_eq!(deck.pair_count(), 10);
        for tile in deck.tiles() {
            let count = deck.tiles().iter().filter(|t| t.image == tile.image).count();
            assert_eq!(count, 2);
            assert!(theme.symbol(tile.image).is_some());
        }
        assert_eq!(deck.count(TileState::Hidden), 20);
    }

    #[test]
    fn test_deal_is_deterministic() {
        let catalog = ThemeCatalog::builtin();
        let theme = catalog.get(FLOWERS).unwrap();

        let a = Deck::deal(theme, 6, &mut GameRng::new(5)).unwrap();
        let b = Deck::deal(theme, 6, &mut GameRng::new(5)).unwrap();

        assert_eq!(a.tiles(), b.tiles());
    }

    #[test]
    fn test_deal_rejects_small_theme() {
        let theme = Theme::new(crate::themes::ThemeId::new(9), "tiny", ["a", "b"]);
        let result = Deck::deal(&theme, 3, &mut GameRng::new(1));

        assert!(matches!(
            result,
            Err(ConfigError::NotEnoughSymbols { needed: 3, available: 2, .. })
        ));
    }

    #[test]
    fn test_from_images_and_partner() {
        let deck = Deck::from_images(images(&[7, 3, 3, 7])).unwrap();

        assert_eq!(deck.partner(TileIndex(0)), Some(TileIndex(3)));
        assert_eq!(deck.partner(TileIndex(2)), Some(TileIndex(1)));
        assert_eq!(deck.positions(ImageId(3)), Some([TileIndex(1), TileIndex(2)]));
        assert_eq!(deck.partner(TileIndex(9)), None);
    }

    #[test]
    fn test_from_images_rejects_unpaired() {
        assert_eq!(
            Deck::from_images(images(&[1, 1, 2])).err(),
            Some(ConfigError::UnpairedImage(ImageId(2)))
        );
        assert!(Deck::from_images(images(&[1, 1, 1, 2])).is_err());
    }

    #[test]
    fn test_state_queries() {
        let mut deck = Deck::from_images(images(&[0, 0, 1, 1])).unwrap();

        deck.set_state(TileIndex(0), TileState::Matched);
        deck.set_state(TileIndex(1), TileState::Matched);
        deck.set_state(TileIndex(2), TileState::Revealed);

        assert_eq!(deck.count(TileState::Matched), 2);
        let hidden: Vec<_> = deck.indices_in(TileState::Hidden).collect();
        assert_eq!(hidden, vec![TileIndex(3)]);
    }
}
