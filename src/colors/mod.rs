//! Colors
//!
//! Color tags attached to products, and the ordered set used while a dialog
//! assembles them.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

pub mod palette;

/// Errors raised when parsing a color value.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    /// The value is not a `#`-prefixed hex color of 3, 4, 6 or 8 digits.
    #[error("invalid hex color: {0:?}")]
    InvalidHex(String),
}

/// A hex color value such as `#fff` or `#2563eb`.
///
/// Stored lowercase with shorthand forms expanded, so `#FFF` and `#ffffff`
/// are the same color.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(String);

impl Color {
    /// Parse a hex color.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidHex`] if the value is not `#` followed by
    /// 3, 4, 6 or 8 hex digits.
    pub fn parse(value: &str) -> Result<Self, ColorError> {
        let trimmed = value.trim();

        let digits = trimmed
            .strip_prefix('#')
            .ok_or_else(|| ColorError::InvalidHex(value.to_string()))?;

        if !matches!(digits.len(), 3 | 4 | 6 | 8)
            || !digits.chars().all(|c| c.is_ascii_hexdigit())
        {
            return Err(ColorError::InvalidHex(value.to_string()));
        }

        let digits = digits.to_ascii_lowercase();

        let expanded = if digits.len() <= 4 {
            digits.chars().flat_map(|c| [c, c]).collect()
        } else {
            digits
        };

        Ok(Self(format!("#{expanded}")))
    }

    /// The normalised hex string, including the leading `#`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.0
    }
}

/// An insertion-ordered set of colors.
///
/// Iteration follows insertion order so that chips render in the order they
/// were picked, but equality ignores order: two sets are equal when they hold
/// the same colors.
#[derive(Debug, Clone, Default)]
pub struct ColorSet {
    colors: SmallVec<[Color; 8]>,
}

impl ColorSet {
    /// Create an empty color set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a set from string slices, dropping duplicates.
    ///
    /// # Errors
    ///
    /// Returns the first [`ColorError`] encountered.
    pub fn from_strs(colors: &[&str]) -> Result<Self, ColorError> {
        colors.iter().map(|color| Color::parse(color)).collect()
    }

    /// Whether `color` is a member.
    pub fn contains(&self, color: &Color) -> bool {
        self.colors.contains(color)
    }

    /// Remove `color` if present, otherwise add it at the end.
    ///
    /// Returns `true` if the color is a member afterwards.
    pub fn toggle(&mut self, color: Color) -> bool {
        if self.remove(&color) {
            false
        } else {
            self.colors.push(color);
            true
        }
    }

    /// Add `color` at the end unless it is already present.
    ///
    /// Returns `true` if the set changed.
    pub fn append(&mut self, color: Color) -> bool {
        if self.contains(&color) {
            return false;
        }

        self.colors.push(color);

        true
    }

    /// Remove `color`, returning whether it was present.
    pub fn remove(&mut self, color: &Color) -> bool {
        let before = self.colors.len();

        self.colors.retain(|existing| existing != color);

        self.colors.len() != before
    }

    /// Iterate over the colors in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Color> {
        self.colors.iter()
    }

    /// Number of colors in the set.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// The colors as plain strings, in insertion order.
    pub fn to_strs(&self) -> Vec<&str> {
        self.colors.iter().map(Color::as_str).collect()
    }
}

impl PartialEq for ColorSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|color| other.contains(color))
    }
}

impl Eq for ColorSet {}

impl FromIterator<Color> for ColorSet {
    fn from_iter<I: IntoIterator<Item = Color>>(iter: I) -> Self {
        let mut set = Self::new();

        set.extend(iter);

        set
    }
}

impl Extend<Color> for ColorSet {
    fn extend<I: IntoIterator<Item = Color>>(&mut self, iter: I) {
        for color in iter {
            self.append(color);
        }
    }
}

impl<'a> IntoIterator for &'a ColorSet {
    type Item = &'a Color;
    type IntoIter = std::slice::Iter<'a, Color>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.iter()
    }
}

impl IntoIterator for ColorSet {
    type Item = Color;
    type IntoIter = smallvec::IntoIter<[Color; 8]>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.into_iter()
    }
}

/// Toggle `color` in a working set: remove it if present, add it otherwise.
pub fn toggle_color(mut working: ColorSet, color: Color) -> ColorSet {
    working.toggle(color);

    working
}

/// Append `color` to a product's colors; a no-op if it is already present.
pub fn append_color(mut colors: ColorSet, color: Color) -> ColorSet {
    colors.append(color);

    colors
}
