//! Field errors

use std::{
    error::Error,
    fmt::{Display, Formatter, Result as FmtResult},
};

use rust_decimal::Decimal;
use smallvec::SmallVec;
use thiserror::Error;

/// A product form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    /// Title
    Title,

    /// Description
    Description,

    /// Price
    Price,

    /// Image URL
    ImgUrl,

    /// Category
    Category,
}

impl Field {
    /// Every field, in form order.
    pub const ALL: [Self; 5] = [
        Self::Title,
        Self::Description,
        Self::Price,
        Self::ImgUrl,
        Self::Category,
    ];

    /// Form input name of the field.
    pub fn name(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::Price => "price",
            Self::ImgUrl => "imgURL",
            Self::Category => "category",
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.name())
    }
}

/// Why a single field was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// The field was left blank.
    #[error("is required")]
    Required,

    /// The text is shorter than the minimum length.
    #[error("must be at least {min} characters (got {actual})")]
    TooShort {
        /// Minimum number of characters
        min: usize,

        /// Characters entered
        actual: usize,
    },

    /// The price is not a number.
    #[error("must be a number")]
    NotNumeric,

    /// The price is lower than the minimum.
    #[error("must be greater than or equal to {min}")]
    BelowMinimum {
        /// Minimum accepted price
        min: Decimal,
    },

    /// The image URL does not parse.
    #[error("must be a valid URL ({0})")]
    InvalidUrl(String),

    /// The category is not one of the configured categories.
    #[error("{value:?} is not a known category")]
    UnknownCategory {
        /// The value that was submitted
        value: String,
    },
}

/// Every rejected field of a submitted form, in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: SmallVec<[(Field, FieldError); 5]>,
}

impl FieldErrors {
    pub(crate) fn push(&mut self, field: Field, error: FieldError) {
        self.errors.push((field, error));
        self.errors.sort_by_key(|(field, _)| *field);
    }

    /// The error reported for `field`, if any.
    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.errors
            .iter()
            .find(|(candidate, _)| *candidate == field)
            .map(|(_, error)| error)
    }

    /// Whether `field` was rejected.
    pub fn contains(&self, field: Field) -> bool {
        self.get(field).is_some()
    }

    /// The rejected fields, in form order.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.errors.iter().map(|(field, _)| *field)
    }

    /// Iterate `(field, error)` pairs in form order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &FieldError)> {
        self.errors.iter().map(|(field, error)| (*field, error))
    }

    /// Number of rejected fields.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Whether no field was rejected.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Display for FieldErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for (i, (field, error)) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }

            write!(f, "{field} {error}")?;
        }

        Ok(())
    }
}

impl Error for FieldErrors {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_are_kept_in_form_order() {
        let mut errors = FieldErrors::default();

        errors.push(Field::Category, FieldError::Required);
        errors.push(Field::Title, FieldError::TooShort { min: 15, actual: 3 });

        assert_eq!(
            errors.fields().collect::<Vec<_>>(),
            [Field::Title, Field::Category]
        );
    }

    #[test]
    fn display_lists_every_field() {
        let mut errors = FieldErrors::default();

        errors.push(Field::Price, FieldError::NotNumeric);
        errors.push(Field::ImgUrl, FieldError::Required);

        assert_eq!(
            errors.to_string(),
            "price must be a number; imgURL is required"
        );
    }
}
