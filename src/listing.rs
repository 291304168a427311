//! Listing
//!
//! Terminal tables for the store, the palette and rejected forms.

use std::io;

use tabled::{
    builder::Builder,
    settings::{
        Alignment, Style,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{
    colors::palette::Palette,
    pricing::format_price,
    store::ProductStore,
    validation::FieldErrors,
};

/// Errors that can occur when writing a listing.
#[derive(Debug, Error)]
pub enum ListingError {
    /// Error writing to the output.
    #[error("Failed to write listing")]
    IO,
}

/// Write the store as a table, in display order.
///
/// # Errors
///
/// Returns [`ListingError::IO`] if the output cannot be written.
pub fn write_products(mut out: impl io::Write, store: &ProductStore) -> Result<(), ListingError> {
    if store.is_empty() {
        return writeln!(out, "No products").map_err(|_err| ListingError::IO);
    }

    let mut builder = Builder::default();

    builder.push_record(["#", "Title", "Category", "Price", "Colors", "Id"]);

    for (index, product) in store.iter().enumerate() {
        builder.push_record([
            index.to_string(),
            product.title().to_string(),
            product.category().to_string(),
            format_price(product.price()),
            product.colors().to_strs().join(" "),
            product.id().to_string(),
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Columns::new(3..4), Alignment::right());

    writeln!(out, "{table}").map_err(|_err| ListingError::IO)
}

/// Write each rejected field with its message.
///
/// # Errors
///
/// Returns [`ListingError::IO`] if the output cannot be written.
pub fn write_field_errors(mut out: impl io::Write, errors: &FieldErrors) -> Result<(), ListingError> {
    let mut builder = Builder::default();

    builder.push_record(["Field", "Error"]);

    for (field, error) in errors.iter() {
        builder.push_record([field.to_string(), error.to_string()]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Rows::first(), Alignment::center());

    writeln!(out, "{table}").map_err(|_err| ListingError::IO)
}

/// Write the palette, one color per row.
///
/// # Errors
///
/// Returns [`ListingError::IO`] if the output cannot be written.
pub fn write_palette(mut out: impl io::Write, palette: &Palette) -> Result<(), ListingError> {
    let mut builder = Builder::default();

    builder.push_record(["#", "Color"]);

    for (index, color) in palette.iter().enumerate() {
        builder.push_record([index.to_string(), color.to_string()]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());

    writeln!(out, "{table}").map_err(|_err| ListingError::IO)
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        colors::ColorSet,
        store::tests::fields_titled,
        validation::{ProductForm, tests::valid_form, validate},
    };

    use super::*;

    #[test]
    fn write_products_lists_every_product() -> TestResult {
        let mut store = ProductStore::new();

        store.add(fields_titled("Second product title"), ColorSet::new());
        store.add(
            fields_titled("First product title"),
            ColorSet::from_strs(&["#000"])?,
        );

        let mut out = Vec::new();
        write_products(&mut out, &store)?;
        let output = String::from_utf8(out)?;

        assert!(output.contains("First product title"));
        assert!(output.contains("Second product title"));
        assert!(output.contains("#000000"));
        assert!(output.contains("Clothes"));

        let first = output.find("First product title").ok_or("missing first")?;
        let second = output.find("Second product title").ok_or("missing second")?;
        assert!(first < second);

        Ok(())
    }

    #[test]
    fn write_products_reports_empty_store() -> TestResult {
        let mut out = Vec::new();

        write_products(&mut out, &ProductStore::new())?;

        assert_eq!(String::from_utf8(out)?, "No products\n");

        Ok(())
    }

    #[test]
    fn write_field_errors_names_each_field() -> TestResult {
        let form = ProductForm {
            price: "ten".to_string(),
            img_url: String::new(),
            ..valid_form()
        };
        let errors = validate(&form).err().ok_or("form should be rejected")?;

        let mut out = Vec::new();
        write_field_errors(&mut out, &errors)?;
        let output = String::from_utf8(out)?;

        assert!(output.contains("price"));
        assert!(output.contains("imgURL"));
        assert!(!output.contains("title"));

        Ok(())
    }

    #[test]
    fn write_palette_lists_every_color() -> TestResult {
        let palette = Palette::default();

        let mut out = Vec::new();
        write_palette(&mut out, &palette)?;
        let output = String::from_utf8(out)?;

        for color in palette.iter() {
            assert!(output.contains(color.as_str()));
        }

        Ok(())
    }
}
