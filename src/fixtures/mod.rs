//! Fixtures
//!
//! YAML seed catalogs, validation rules and action scripts.

use std::{
    fs,
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::debug;

use crate::{
    catalog::Action,
    colors::ColorError,
    fixtures::{products::ProductsFixture, scripts::ScriptFixture},
    store::{ProductStore, StoreError},
    validation::{FieldErrors, ProductForm, ProductRules, Validator},
};

pub mod products;
pub mod scripts;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid color value
    #[error(transparent)]
    Color(#[from] ColorError),

    /// A seeded product fails validation
    #[error("Product {index} is invalid: {errors}")]
    InvalidProduct {
        /// Position of the product in the fixture
        index: usize,

        /// Rejected fields
        errors: FieldErrors,
    },

    /// Store seeding error
    #[error("Failed to seed store: {0}")]
    Store(#[from] StoreError),
}

/// Fixture loader rooted at a base directory.
///
/// Names resolve to `<base>/products/<name>.yml`, `<base>/rules/<name>.yml`
/// and `<base>/scripts/<name>.yml`.
#[derive(Debug, Clone)]
pub struct Fixture {
    /// Base path for fixture files
    base_path: PathBuf,
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

impl Fixture {
    /// Create a loader with the default base path
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a loader with a custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Load a named product catalog into a store.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or any product is invalid.
    pub fn load_store(&self, name: &str, validator: &Validator) -> Result<ProductStore, FixtureError> {
        read_store(self.path("products", name), validator)
    }

    /// Load named validation rules.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_rules(&self, name: &str) -> Result<ProductRules, FixtureError> {
        read_rules(self.path("rules", name))
    }

    /// Load a named action script.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_script(&self, name: &str) -> Result<Vec<Action>, FixtureError> {
        read_script(self.path("scripts", name))
    }

    fn path(&self, kind: &str, name: &str) -> PathBuf {
        self.base_path.join(kind).join(format!("{name}.yml"))
    }
}

/// Read a product catalog file into a store.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or any product is invalid.
pub fn read_store(path: impl AsRef<Path>, validator: &Validator) -> Result<ProductStore, FixtureError> {
    let path = path.as_ref();

    debug!(path = %path.display(), "loading products");

    parse_store(&fs::read_to_string(path)?, validator)
}

/// Parse a product catalog from YAML. Every product is validated; the first
/// invalid one fails the whole load.
///
/// # Errors
///
/// Returns an error if the YAML is malformed or any product is invalid.
pub fn parse_store(contents: &str, validator: &Validator) -> Result<ProductStore, FixtureError> {
    let fixture: ProductsFixture = serde_norway::from_str(contents)?;

    let products = fixture
        .products
        .into_iter()
        .enumerate()
        .map(|(index, product)| product.try_into_product(index, validator))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ProductStore::with_products(products)?)
}

/// Read validation rules from a YAML file. Missing keys keep their defaults.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn read_rules(path: impl AsRef<Path>) -> Result<ProductRules, FixtureError> {
    let path = path.as_ref();

    debug!(path = %path.display(), "loading rules");

    Ok(serde_norway::from_str(&fs::read_to_string(path)?)?)
}

/// Read a single product form from a YAML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn read_form(path: impl AsRef<Path>) -> Result<ProductForm, FixtureError> {
    let path = path.as_ref();

    debug!(path = %path.display(), "loading form");

    Ok(serde_norway::from_str(&fs::read_to_string(path)?)?)
}

/// Read an action script from a YAML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn read_script(path: impl AsRef<Path>) -> Result<Vec<Action>, FixtureError> {
    let path = path.as_ref();

    debug!(path = %path.display(), "loading script");

    parse_script(&fs::read_to_string(path)?)
}

/// Parse an action script from YAML.
///
/// # Errors
///
/// Returns an error if the YAML is malformed.
pub fn parse_script(contents: &str) -> Result<Vec<Action>, FixtureError> {
    let fixture: ScriptFixture = serde_norway::from_str(contents)?;

    Ok(fixture.actions)
}
