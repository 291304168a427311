//! Categories

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Categories every catalog starts with.
pub const DEFAULT_CATEGORIES: [&str; 2] = ["Clothes", "Electronics"];

/// A product category, holding a name configured in [`Categories`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    /// Category name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

/// The closed set of categories a product may belong to.
///
/// Ships with [`DEFAULT_CATEGORIES`]; callers may extend it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Categories {
    names: SmallVec<[String; 4]>,
}

impl Categories {
    /// Build a category set from names, dropping blanks and duplicates.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut categories = Self {
            names: SmallVec::new(),
        };

        categories.extend(names);

        categories
    }

    /// Add more category names.
    pub fn extend<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            let name = name.into().trim().to_string();

            if !name.is_empty() && self.resolve(&name).is_none() {
                self.names.push(name);
            }
        }
    }

    /// The category named exactly `value`, if configured.
    pub fn resolve(&self, value: &str) -> Option<Category> {
        self.names
            .iter()
            .find(|name| *name == value)
            .map(|name| Category(name.clone()))
    }

    /// Iterate category names in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether no categories are configured.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for Categories {
    fn default() -> Self {
        Self::new(DEFAULT_CATEGORIES)
    }
}

impl From<Vec<String>> for Categories {
    fn from(names: Vec<String>) -> Self {
        Self::new(names)
    }
}

impl From<Categories> for Vec<String> {
    fn from(categories: Categories) -> Self {
        categories.names.into_vec()
    }
}
