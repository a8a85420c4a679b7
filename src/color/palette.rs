use heapless::{LinearMap, String};

use super::Hsv;
use crate::error::PaletteError;

/// Maximum number of named colors in a palette
pub const PALETTE_CAPACITY: usize = 16;

/// Longest color name, in bytes
pub const NAME_CAPACITY: usize = 16;

/// HTML color names at half value, dark variants at quarter value
const HTML_COLORS: [(&str, Hsv); 14] = [
    ("white", Hsv::new(0.0, 0.0, 0.25)),
    ("black", Hsv::new(0.0, 0.0, 0.0)),
    ("red", Hsv::new(0.0, 1.0, 0.5)),
    ("maroon", Hsv::new(0.0, 1.0, 0.25)),
    ("yellow", Hsv::new(1.0 / 6.0, 1.0, 0.5)),
    ("olive", Hsv::new(1.0 / 6.0, 1.0, 0.25)),
    ("lime", Hsv::new(1.0 / 3.0, 1.0, 0.5)),
    ("green", Hsv::new(1.0 / 3.0, 1.0, 0.25)),
    ("aqua", Hsv::new(0.5, 1.0, 0.5)),
    ("teal", Hsv::new(0.5, 1.0, 0.25)),
    ("blue", Hsv::new(2.0 / 3.0, 1.0, 0.5)),
    ("navy", Hsv::new(2.0 / 3.0, 1.0, 0.25)),
    ("fuchsia", Hsv::new(5.0 / 6.0, 1.0, 0.5)),
    ("purple", Hsv::new(5.0 / 6.0, 1.0, 0.25)),
];

/// Named colors
///
/// Colors are checked when they are shown, not when they are inserted.
#[derive(Debug, Clone)]
pub struct Palette {
    colors: LinearMap<String<NAME_CAPACITY>, Hsv, PALETTE_CAPACITY>,
}

impl Palette {
    /// Create an empty palette
    pub const fn new() -> Self {
        Self {
            colors: LinearMap::new(),
        }
    }

    /// Palette with the HTML color names
    pub fn html() -> Self {
        let mut palette = Self::new();
        for (name, color) in HTML_COLORS {
            // Fits: HTML_COLORS is smaller than the capacity
            let _ = palette.insert(name, color);
        }
        palette
    }

    /// Add or replace a named color
    ///
    /// Returns the previous color under that name.
    pub fn insert(&mut self, name: &str, color: Hsv) -> Result<Option<Hsv>, PaletteError> {
        let key = String::try_from(name).map_err(|()| PaletteError::NameTooLong(name.len()))?;
        self.colors
            .insert(key, color)
            .map_err(|_| PaletteError::Full)
    }

    /// Look up a color by name
    pub fn get(&self, name: &str) -> Option<Hsv> {
        self.colors
            .iter()
            .find(|(key, _)| key.as_str() == name)
            .map(|(_, color)| *color)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Iterate over names and colors in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Hsv)> + '_ {
        self.colors
            .iter()
            .map(|(name, color)| (name.as_str(), *color))
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::html()
    }
}
