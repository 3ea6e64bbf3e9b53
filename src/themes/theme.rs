//! Theme definitions.

use serde::{Deserialize, Serialize};

use crate::core::ImageId;

/// Theme identifier.
///
/// Opaque to the engine; the catalog assigns meaning.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ThemeId(pub u16);

impl ThemeId {
    /// Create a new theme ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for ThemeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Theme({})", self.0)
    }
}

/// A named pool of symbols.
///
/// `ImageId(n)` refers to `symbols[n]`. Symbol names are asset keys for the
/// renderer (file stems, sprite names); the engine never reads them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub id: ThemeId,
    pub name: String,
    symbols: Vec<String>,
}

impl Theme {
    /// Create a theme from its symbol names.
    pub fn new<S: Into<String>>(
        id: ThemeId,
        name: impl Into<String>,
        symbols: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            symbols: symbols.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of distinct symbols, i.e. the most pairs one deck can hold.
    #[must_use]
    pub fn symbol_count(&self) -> usize {
        self.symbols.len()
    }

    /// Asset key for an image id dealt from this theme.
    #[must_use]
    pub fn symbol(&self, image: ImageId) -> Option<&str> {
        self.symbols.get(image.raw() as usize).map(String::as_str)
    }

    /// Iterate over every image id this theme can deal.
    pub fn images(&self) -> impl Iterator<Item = ImageId> {
        (0..self.symbols.len() as u32).map(ImageId)
    }
}
