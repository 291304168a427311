//! Products

use rust_decimal::Decimal;

use crate::{
    categories::Category, colors::ColorSet, uuids::TypedUuid, validation::ProductForm,
};

/// Product UUID
pub type ProductUuid = TypedUuid<Product>;

/// Form fields that passed validation.
///
/// Only the validator can build one, so holding a `ProductFields` proves the
/// values satisfy every product rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductFields {
    pub(crate) title: String,
    pub(crate) description: String,
    pub(crate) price: Decimal,
    pub(crate) img_url: String,
    pub(crate) category: Category,
}

impl ProductFields {
    /// Product title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Product description
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Product price
    pub fn price(&self) -> Decimal {
        self.price
    }

    /// Product image URL, exactly as entered.
    pub fn img_url(&self) -> &str {
        &self.img_url
    }

    /// Product category
    pub fn category(&self) -> &Category {
        &self.category
    }
}

/// Product
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    id: ProductUuid,
    fields: ProductFields,
    colors: ColorSet,
}

impl Product {
    pub(crate) fn new(id: ProductUuid, fields: ProductFields, colors: ColorSet) -> Self {
        Self { id, fields, colors }
    }

    /// Product id
    pub fn id(&self) -> ProductUuid {
        self.id
    }

    /// Validated fields
    pub fn fields(&self) -> &ProductFields {
        &self.fields
    }

    /// Product title
    pub fn title(&self) -> &str {
        self.fields.title()
    }

    /// Product description
    pub fn description(&self) -> &str {
        self.fields.description()
    }

    /// Product price
    pub fn price(&self) -> Decimal {
        self.fields.price()
    }

    /// Product image URL
    pub fn img_url(&self) -> &str {
        self.fields.img_url()
    }

    /// Product category
    pub fn category(&self) -> &Category {
        self.fields.category()
    }

    /// Color tags
    pub fn colors(&self) -> &ColorSet {
        &self.colors
    }

    /// The product's values as form input, used to pre-fill the edit form.
    pub fn to_form(&self) -> ProductForm {
        ProductForm {
            title: self.fields.title.clone(),
            description: self.fields.description.clone(),
            price: self.fields.price.to_string(),
            img_url: self.fields.img_url.clone(),
            category: self.fields.category.to_string(),
        }
    }
}
