//! Validation
//!
//! Pure checks over raw form input. Every field is checked independently so a
//! rejected form reports all of its problems at once.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use url::Url;

use crate::{
    categories::{Categories, Category},
    pricing::{PriceError, parse_price},
    products::ProductFields,
};

pub mod errors;

pub use errors::{Field, FieldError, FieldErrors};

/// Raw values as typed into the product form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductForm {
    /// Title
    pub title: String,

    /// Description
    pub description: String,

    /// Price, as typed
    #[serde(deserialize_with = "price_text")]
    pub price: String,

    /// Image URL
    #[serde(rename = "imgURL", alias = "img_url")]
    pub img_url: String,

    /// Category name
    pub category: String,
}

/// Accept prices written as YAML numbers as well as strings.
fn price_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum PriceText {
        Text(String),
        Integer(i64),
        Float(f64),
    }

    Ok(match PriceText::deserialize(deserializer)? {
        PriceText::Text(text) => text,
        PriceText::Integer(value) => value.to_string(),
        PriceText::Float(value) => value.to_string(),
    })
}

/// Limits applied to product forms.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ProductRules {
    /// Minimum title length, in characters
    pub title_min_len: usize,

    /// Minimum description length, in characters
    pub description_min_len: usize,

    /// Lowest accepted price
    pub min_price: Decimal,

    /// Accepted categories
    pub categories: Categories,
}

impl Default for ProductRules {
    fn default() -> Self {
        Self {
            title_min_len: 15,
            description_min_len: 20,
            min_price: Decimal::new(50, 0),
            categories: Categories::default(),
        }
    }
}

/// Product form validator.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    rules: ProductRules,
}

impl Validator {
    /// Create a validator with the given rules.
    pub fn new(rules: ProductRules) -> Self {
        Self { rules }
    }

    /// The rules this validator applies.
    pub fn rules(&self) -> &ProductRules {
        &self.rules
    }

    /// Check a submitted form.
    ///
    /// Fields are passed through untouched; only the price is converted to a
    /// decimal. The category must match a configured name exactly.
    ///
    /// # Errors
    ///
    /// Returns [`FieldErrors`] with one entry per rejected field.
    pub fn validate(&self, form: &ProductForm) -> Result<ProductFields, FieldErrors> {
        let mut errors = FieldErrors::default();

        let title = check_text(&form.title, self.rules.title_min_len);
        let description = check_text(&form.description, self.rules.description_min_len);
        let price = self.check_price(&form.price);
        let img_url = check_url(&form.img_url);
        let category = self.check_category(&form.category);

        if let Err(error) = &title {
            errors.push(Field::Title, error.clone());
        }

        if let Err(error) = &description {
            errors.push(Field::Description, error.clone());
        }

        if let Err(error) = &price {
            errors.push(Field::Price, error.clone());
        }

        if let Err(error) = &img_url {
            errors.push(Field::ImgUrl, error.clone());
        }

        if let Err(error) = &category {
            errors.push(Field::Category, error.clone());
        }

        match (title, description, price, img_url, category) {
            (Ok(()), Ok(()), Ok(price), Ok(()), Ok(category)) => Ok(ProductFields {
                title: form.title.clone(),
                description: form.description.clone(),
                price,
                img_url: form.img_url.clone(),
                category,
            }),
            _ => Err(errors),
        }
    }

    fn check_price(&self, value: &str) -> Result<Decimal, FieldError> {
        let price = parse_price(value).map_err(|error| match error {
            PriceError::Empty => FieldError::Required,
            PriceError::NotNumeric(_) => FieldError::NotNumeric,
        })?;

        if price < self.rules.min_price {
            return Err(FieldError::BelowMinimum {
                min: self.rules.min_price,
            });
        }

        Ok(price)
    }

    fn check_category(&self, value: &str) -> Result<Category, FieldError> {
        if value.trim().is_empty() {
            return Err(FieldError::Required);
        }

        self.rules
            .categories
            .resolve(value)
            .ok_or_else(|| FieldError::UnknownCategory {
                value: value.to_string(),
            })
    }
}

fn check_text(value: &str, min: usize) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::Required);
    }

    let actual = value.chars().count();

    if actual < min {
        return Err(FieldError::TooShort { min, actual });
    }

    Ok(())
}

fn check_url(value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::Required);
    }

    Url::parse(value)
        .map(|_url| ())
        .map_err(|error| FieldError::InvalidUrl(error.to_string()))
}

/// Validate a form against the default rules.
///
/// # Errors
///
/// Returns [`FieldErrors`] with one entry per rejected field.
pub fn validate(form: &ProductForm) -> Result<ProductFields, FieldErrors> {
    Validator::default().validate(form)
}
