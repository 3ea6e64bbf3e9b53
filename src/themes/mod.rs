//! Themes: named symbol pools a deck is dealt from.
//!
//! ## Key Types
//!
//! - `ThemeId`: Opaque theme identifier
//! - `Theme`: A name plus the symbol asset keys behind each `ImageId`
//! - `ThemeCatalog`: Theme lookup, with the built-in `flowers` and `animals`

mod catalog;
mod theme;

pub use catalog::{ThemeCatalog, ANIMALS, FLOWERS};
pub use theme::{Theme, ThemeId};
