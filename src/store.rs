//! Product Store
//!
//! The ordered product list shown to the user, newest first.

use rustc_hash::FxHashSet;
use thiserror::Error;
use tracing::{error, info};

use crate::{
    colors::ColorSet,
    products::{Product, ProductFields, ProductUuid},
};

/// Errors raised by store mutations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// A position outside the list was addressed. This means the caller's
    /// selection no longer matches the store.
    #[error("index {index} is out of range for a store of {len} products")]
    IndexOutOfRange {
        /// Requested position
        index: usize,

        /// Store length at the time of the call
        len: usize,
    },

    /// A seeded product reuses an id already present in the store.
    #[error("duplicate product id {0}")]
    DuplicateId(ProductUuid),
}

/// Ordered, in-memory product list.
#[derive(Debug, Clone, Default)]
pub struct ProductStore {
    products: Vec<Product>,

    /// Every id handed out during this session, including ids of products that
    /// have since been replaced or removed.
    issued: FxHashSet<ProductUuid>,
}

impl ProductStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with products, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateId`] if two products share an id.
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Result<Self, StoreError> {
        let mut store = Self::new();

        for product in products {
            if !store.issued.insert(product.id()) {
                return Err(StoreError::DuplicateId(product.id()));
            }

            store.products.push(product);
        }

        Ok(store)
    }

    /// Build a product from validated fields and colors under a fresh id, and
    /// put it at the front of the list.
    pub fn add(&mut self, fields: ProductFields, colors: ColorSet) -> Product {
        let product = Product::new(self.next_id(), fields, colors);

        info!(id = %product.id(), title = product.title(), "product added");

        self.products.insert(0, product.clone());

        product
    }

    /// Replace the product at `index` with one built from `fields` and
    /// `colors`. The replacement gets a fresh id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::IndexOutOfRange`] if `index` is not a valid position.
    pub fn replace(
        &mut self,
        index: usize,
        fields: ProductFields,
        colors: ColorSet,
    ) -> Result<Product, StoreError> {
        let len = self.products.len();

        if index >= len {
            error!(index, len, "replace addressed a missing product");

            return Err(StoreError::IndexOutOfRange { index, len });
        }

        let product = Product::new(self.next_id(), fields, colors);
        let slot = self
            .products
            .get_mut(index)
            .ok_or(StoreError::IndexOutOfRange { index, len })?;

        info!(
            index,
            replaced = %slot.id(),
            id = %product.id(),
            "product replaced"
        );

        *slot = product.clone();

        Ok(product)
    }

    /// Remove and return the product at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::IndexOutOfRange`] if `index` is not a valid position.
    pub fn remove(&mut self, index: usize) -> Result<Product, StoreError> {
        let len = self.products.len();

        if index >= len {
            error!(index, len, "remove addressed a missing product");

            return Err(StoreError::IndexOutOfRange { index, len });
        }

        let product = self.products.remove(index);

        info!(index, id = %product.id(), "product removed");

        Ok(product)
    }

    /// The product at `index`.
    pub fn get(&self, index: usize) -> Option<&Product> {
        self.products.get(index)
    }

    /// The product at `index`, or an out-of-range error.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::IndexOutOfRange`] if `index` is not a valid position.
    pub fn try_get(&self, index: usize) -> Result<&Product, StoreError> {
        self.products.get(index).ok_or(StoreError::IndexOutOfRange {
            index,
            len: self.products.len(),
        })
    }

    /// Current position of the product with `id`.
    pub fn position(&self, id: ProductUuid) -> Option<usize> {
        self.products.iter().position(|product| product.id() == id)
    }

    /// Iterate products in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    /// Products in display order.
    pub fn as_slice(&self) -> &[Product] {
        &self.products
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the store holds no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    fn next_id(&mut self) -> ProductUuid {
        loop {
            let id = ProductUuid::new();

            if self.issued.insert(id) {
                return id;
            }
        }
    }
}

/// Add a product to `store`, returning the new product.
pub fn add_product(store: &mut ProductStore, fields: ProductFields, colors: ColorSet) -> Product {
    store.add(fields, colors)
}

/// Replace the product at `index` in `store`, returning the replacement.
///
/// # Errors
///
/// Returns [`StoreError::IndexOutOfRange`] if `index` is not a valid position.
pub fn replace_product(
    store: &mut ProductStore,
    index: usize,
    fields: ProductFields,
    colors: ColorSet,
) -> Result<Product, StoreError> {
    store.replace(index, fields, colors)
}
