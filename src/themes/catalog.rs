//! Theme catalog for symbol pool lookup.
//!
//! The `ThemeCatalog` stores every theme a session can deal from.
//! `ThemeCatalog::builtin()` ships the two classic themes; front ends that
//! scan asset directories register their own with `register`.

use rustc_hash::FxHashMap;

use super::theme::{Theme, ThemeId};
use crate::core::ConfigError;

/// Built-in "flowers" theme id.
pub const FLOWERS: ThemeId = ThemeId::new(0);

/// Built-in "animals" theme id.
pub const ANIMALS: ThemeId = ThemeId::new(1);

const FLOWER_SYMBOLS: [&str; 15] = [
    "aster", "bluebell", "camellia", "daisy", "freesia", "gerbera", "iris", "lavender", "lily",
    "lotus", "orchid", "peony", "poppy", "rose", "tulip",
];

const ANIMAL_SYMBOLS: [&str; 15] = [
    "bear", "cat", "deer", "dog", "elephant", "fox", "giraffe", "hedgehog", "koala", "lion",
    "owl", "panda", "rabbit", "tiger", "zebra",
];

/// Registry of themes.
///
/// ## Example
///
/// ```
/// use rust_memo::themes::{Theme, ThemeCatalog, ThemeId};
///
/// let mut catalog = ThemeCatalog::builtin();
/// catalog.register(Theme::new(ThemeId::new(7), "planets", ["mars", "venus"])).unwrap();
///
/// let found = catalog.find_by_name("planets").unwrap();
/// assert_eq!(found.symbol_count(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ThemeCatalog {
    themes: FxHashMap<ThemeId, Theme>,
}

impl ThemeCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog holding the built-in `flowers` and `animals` themes.
    #[must_use]
    pub fn builtin() -> Self {
        let mut themes = FxHashMap::default();
        themes.insert(FLOWERS, Theme::new(FLOWERS, "flowers", FLOWER_SYMBOLS));
        themes.insert(ANIMALS, Theme::new(ANIMALS, "animals", ANIMAL_SYMBOLS));
        Self { themes }
    }

    /// Register a theme. Fails if the id is taken.
    pub fn register(&mut self, theme: Theme) -> Result<(), ConfigError> {
        if self.themes.contains_key(&theme.id) {
            return Err(ConfigError::DuplicateTheme(theme.id.raw()));
        }
        self.themes.insert(theme.id, theme);
        Ok(())
    }

    /// Get a theme by ID.
    #[must_use]
    pub fn get(&self, id: ThemeId) -> Option<&Theme> {
        self.themes.get(&id)
    }

    /// Find a theme by name.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&Theme> {
        self.themes.values().find(|t| t.name == name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.themes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    /// Iterate over all themes in id order, the order a theme picker lists them.
    pub fn iter(&self) -> impl Iterator<Item = &Theme> {
        let mut themes: Vec<_> = self.themes.values().collect();
        themes.sort_by_key(|t| t.id);
        themes.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GridSize;

    #[test]
    fn test_builtin_themes() {
        let catalog = ThemeCatalog::builtin();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(FLOWERS).map(|t| t.name.as_str()), Some("flowers"));
        assert_eq!(catalog.find_by_name("animals").map(|t| t.id), Some(ANIMALS));

        let names: Vec<_> = catalog.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["flowers", "animals"]);
    }

    #[test]
    fn test_builtin_themes_fill_largest_preset() {
        let catalog = ThemeCatalog::builtin();
        for theme in catalog.iter() {
            assert!(theme.symbol_count() >= GridSize::LARGE.pair_count());
        }
    }

    #[test]
    fn test_register_and_get() {
        let mut catalog = ThemeCatalog::new();
        assert!(catalog.is_empty());

        catalog
            .register(Theme::new(ThemeId::new(3), "fruit", ["apple", "pear"]))
            .unwrap();

        assert!(catalog.get(ThemeId::new(3)).is_some());
        assert!(catalog.get(ThemeId::new(99)).is_none());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut catalog = ThemeCatalog::builtin();

        let result = catalog.register(Theme::new(FLOWERS, "weeds", ["dandelion"]));

        assert_eq!(result, Err(ConfigError::DuplicateTheme(0)));
        assert_eq!(catalog.get(FLOWERS).map(|t| t.name.as_str()), Some("flowers"));
    }
}
