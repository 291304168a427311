//! Palette

use crate::colors::{Color, ColorError, ColorSet};

/// Hex values offered by the color picker.
pub const DEFAULT_PALETTE: [&str; 14] = [
    "#a855f7", "#2563eb", "#84d2c5", "#13005a", "#a31acb", "#ff6e31", "#3c2a21", "#6c4ab6",
    "#cb1c8d", "#000000", "#645cbb", "#1f8a70", "#820000", "#ff0032",
];

/// The fixed set of colors a user can pick from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: ColorSet,
}

impl Palette {
    /// Create a palette from an explicit color set.
    pub fn new(colors: ColorSet) -> Self {
        Self { colors }
    }

    /// Parse a palette from hex strings.
    ///
    /// # Errors
    ///
    /// Returns a [`ColorError`] if any entry is not a valid hex color.
    pub fn from_strs(colors: &[&str]) -> Result<Self, ColorError> {
        ColorSet::from_strs(colors).map(Self::new)
    }

    /// Whether `color` can be picked.
    pub fn contains(&self, color: &Color) -> bool {
        self.colors.contains(color)
    }

    /// Iterate the palette in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Color> {
        self.colors.iter()
    }

    /// Number of colors in the palette.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the palette is empty.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        // Entries that fail to parse are skipped; the unit tests pin that none do.
        Self::new(
            DEFAULT_PALETTE
                .iter()
                .filter_map(|hex| Color::parse(hex).ok())
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn default_palette_parses_every_entry() {
        let palette = Palette::default();

        assert_eq!(palette.len(), DEFAULT_PALETTE.len());
    }

    #[test]
    fn contains_is_case_insensitive() -> TestResult {
        let palette = Palette::default();

        assert!(palette.contains(&Color::parse("#A855F7")?));
        assert!(!palette.contains(&Color::parse("#fff")?));

        Ok(())
    }

    #[test]
    fn from_strs_rejects_bad_entries() {
        assert!(Palette::from_strs(&["#fff", "nope"]).is_err());
    }
}
