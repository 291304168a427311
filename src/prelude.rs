//! Vitrine prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    catalog::{Action, ActionKind, Catalog, CatalogError, Outcome},
    categories::{Categories, Category},
    colors::{Color, ColorError, ColorSet, append_color, palette::Palette, toggle_color},
    dialogs::{
        AddDialog, DestroyDialog, DialogError, DialogKind, EditDialog, Selection, SubmitOutcome,
    },
    fixtures::{Fixture, FixtureError},
    listing::ListingError,
    pricing::{PriceError, format_price, parse_price},
    products::{Product, ProductFields, ProductUuid},
    store::{ProductStore, StoreError, add_product, replace_product},
    validation::{
        Field, FieldError, FieldErrors, ProductForm, ProductRules, Validator, validate,
    },
};
