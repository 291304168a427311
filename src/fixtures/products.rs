//! Product Fixtures

use serde::Deserialize;

use crate::{
    colors::{Color, ColorSet},
    fixtures::FixtureError,
    products::{Product, ProductUuid},
    validation::{ProductForm, Validator},
};

/// Wrapper for products in YAML
#[derive(Debug, Deserialize)]
pub struct ProductsFixture {
    /// Products in display order
    pub products: Vec<ProductFixture>,
}

/// Product fixture from YAML
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    /// Form values, checked like a submitted form
    #[serde(flatten)]
    pub form: ProductForm,

    /// Color tags (e.g. "#2563eb")
    #[serde(default)]
    pub colors: Vec<String>,
}

impl ProductFixture {
    /// Validate the fixture and build a product with a fresh id.
    ///
    /// `index` is the fixture's position in the file, used for error reports.
    ///
    /// # Errors
    ///
    /// - [`FixtureError::InvalidProduct`]: the form fails validation.
    /// - [`FixtureError::Color`]: a color is not a valid hex value.
    pub fn try_into_product(
        self,
        index: usize,
        validator: &Validator,
    ) -> Result<Product, FixtureError> {
        let fields = validator
            .validate(&self.form)
            .map_err(|errors| FixtureError::InvalidProduct { index, errors })?;

        let colors = self
            .colors
            .iter()
            .map(|color| Color::parse(color))
            .collect::<Result<ColorSet, _>>()?;

        Ok(Product::new(ProductUuid::new(), fields, colors))
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::validation::{Field, tests::valid_form};

    use super::*;

    #[test]
    fn valid_fixture_builds_product() -> TestResult {
        let fixture = ProductFixture {
            form: valid_form(),
            colors: vec!["#FFF".to_string(), "#000".to_string()],
        };

        let product = fixture.try_into_product(0, &Validator::default())?;

        assert_eq!(product.title(), valid_form().title);
        assert_eq!(product.colors().to_strs(), ["#ffffff", "#000000"]);

        Ok(())
    }

    #[test]
    fn invalid_fixture_reports_index_and_fields() {
        let fixture = ProductFixture {
            form: ProductForm {
                price: "10".to_string(),
                ..valid_form()
            },
            colors: Vec::new(),
        };

        let result = fixture.try_into_product(3, &Validator::default());

        assert!(matches!(
            result,
            Err(FixtureError::InvalidProduct { index: 3, errors }) if errors.contains(Field::Price)
        ));
    }

    #[test]
    fn bad_color_is_rejected() {
        let fixture = ProductFixture {
            form: valid_form(),
            colors: vec!["white".to_string()],
        };

        let result = fixture.try_into_product(0, &Validator::default());

        assert!(matches!(result, Err(FixtureError::Color(_))));
    }
}
