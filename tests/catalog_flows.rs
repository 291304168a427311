//! End-to-end flows through the catalog dialogs.

use rust_decimal::Decimal;
use testresult::TestResult;
use vitrine::prelude::*;

fn scenario_form() -> ProductForm {
    ProductForm {
        title: "This title is long enough".to_string(),
        description: "This description exceeds twenty chars".to_string(),
        price: "75".to_string(),
        img_url: "https://x.test/a.png".to_string(),
        category: "Clothes".to_string(),
    }
}

fn color(hex: &str) -> Result<Color, ColorError> {
    Color::parse(hex)
}

/// A catalog whose palette also offers white, so it can be picked in the add dialog.
fn catalog_with_white() -> Result<Catalog, ColorError> {
    Ok(Catalog::new().with_palette(Palette::from_strs(&["#fff", "#000"])?))
}

#[test]
fn adding_a_valid_product_prepends_it() -> TestResult {
    let mut catalog = catalog_with_white()?;

    catalog.dispatch(Action::OpenAdd)?;
    catalog.dispatch(Action::ToggleColor { color: color("#fff")? })?;

    let outcome = catalog.dispatch(Action::Submit {
        form: scenario_form(),
    })?;

    let Outcome::Submitted(SubmitOutcome::Committed(committed)) = &outcome else {
        return Err(format!("expected a commit, got {outcome:?}").into());
    };

    let store = catalog.store();
    let stored = store.get(0).ok_or("store should hold the product")?;

    assert_eq!(store.len(), 1);
    assert_eq!(stored, committed);
    assert_eq!(stored.title(), "This title is long enough");
    assert_eq!(stored.description(), "This description exceeds twenty chars");
    assert_eq!(stored.price(), Decimal::new(75, 0));
    assert_eq!(stored.img_url(), "https://x.test/a.png");
    assert_eq!(stored.category().as_str(), "Clothes");
    assert_eq!(stored.colors(), &ColorSet::from_strs(&["#fff"])?);
    assert_eq!(catalog.active(), None);

    Ok(())
}

#[test]
fn default_palette_refuses_off_palette_toggle() -> TestResult {
    let mut catalog = Catalog::new();

    catalog.open_add()?;

    let result = catalog.toggle_color(color("#fff")?);

    assert!(
        matches!(
            result,
            Err(CatalogError::Dialog(DialogError::UnknownColor(_)))
        ),
        "unexpected toggle result: {result:?}"
    );

    let pending = catalog
        .add_dialog()
        .session()
        .map(|session| session.colors().len());

    assert_eq!(pending, Some(0));

    Ok(())
}

#[test]
fn rejected_price_leaves_store_empty() -> TestResult {
    let mut catalog = catalog_with_white()?;

    catalog.dispatch(Action::OpenAdd)?;
    catalog.dispatch(Action::ToggleColor { color: color("#fff")? })?;

    let outcome = catalog.dispatch(Action::Submit {
        form: ProductForm {
            price: "10".to_string(),
            ..scenario_form()
        },
    })?;

    let Outcome::Submitted(SubmitOutcome::Rejected(errors)) = &outcome else {
        return Err(format!("expected a rejection, got {outcome:?}").into());
    };

    assert_eq!(errors.fields().collect::<Vec<_>>(), [Field::Price]);
    assert!(catalog.store().is_empty());
    assert_eq!(catalog.active(), Some(DialogKind::Add));

    Ok(())
}

#[test]
fn edit_merges_appended_and_toggled_colors() -> TestResult {
    let mut catalog = catalog_with_white()?;

    catalog.open_add()?;
    catalog.toggle_color(color("#fff")?)?;
    catalog.submit(&scenario_form())?;

    catalog.dispatch(Action::OpenEdit { index: 0 })?;
    catalog.dispatch(Action::AppendColor { color: color("#000")? })?;
    catalog.dispatch(Action::ToggleColor { color: color("#fff")? })?;

    let outcome = catalog.dispatch(Action::Submit {
        form: scenario_form(),
    })?;

    assert!(matches!(outcome, Outcome::Submitted(SubmitOutcome::Committed(_))));

    let colors = catalog
        .store()
        .get(0)
        .map(Product::colors)
        .ok_or("edited product missing")?;

    assert!(colors.contains(&color("#000")?));
    assert!(!colors.contains(&color("#fff")?));

    Ok(())
}

#[test]
fn toggle_after_append_removes_the_appended_color() -> TestResult {
    let mut catalog = catalog_with_white()?;

    catalog.open_add()?;
    catalog.submit(&scenario_form())?;

    catalog.open_edit(0)?;
    catalog.append_color(color("#000")?)?;
    catalog.toggle_color(color("#000")?)?;
    catalog.submit(&scenario_form())?;

    assert!(
        catalog
            .store()
            .get(0)
            .is_some_and(|product| product.colors().is_empty())
    );

    Ok(())
}

#[test]
fn edit_gives_the_replacement_a_fresh_id() -> TestResult {
    let mut catalog = Catalog::new();

    catalog.open_add()?;
    let original = catalog
        .submit(&scenario_form())?
        .committed()
        .map(Product::id)
        .ok_or("expected a commit")?;

    catalog.open_edit(0)?;
    let replacement = catalog
        .submit(&ProductForm {
            title: "A different, longer title".to_string(),
            ..scenario_form()
        })?
        .committed()
        .map(Product::id)
        .ok_or("expected a commit")?;

    assert_ne!(original, replacement);
    assert_eq!(catalog.store().len(), 1);
    assert_eq!(catalog.store().position(replacement), Some(0));

    Ok(())
}

#[test]
fn cancelled_edit_commits_nothing() -> TestResult {
    let mut catalog = Catalog::new();

    catalog.open_add()?;
    catalog.submit(&scenario_form())?;
    let before = catalog.store().get(0).cloned();

    catalog.open_edit(0)?;
    catalog.append_color(color("#000000")?)?;
    catalog.cancel()?;

    assert_eq!(catalog.store().get(0).cloned(), before);

    catalog.open_edit(0)?;
    let pending = catalog
        .edit_dialog()
        .session()
        .map(|session| session.colors().len());

    assert_eq!(pending, Some(0));

    Ok(())
}

#[test]
fn out_of_range_selection_is_refused() {
    let mut catalog = Catalog::new();

    let result = catalog.dispatch(Action::OpenEdit { index: 0 });

    assert_eq!(
        result,
        Err(CatalogError::Dialog(DialogError::Store(
            StoreError::IndexOutOfRange { index: 0, len: 0 }
        )))
    );
    assert_eq!(catalog.active(), None);
}

#[test]
fn destroy_then_reselect() -> TestResult {
    let mut catalog = Catalog::new();

    for title in ["First product in the list", "Second product in the list"] {
        catalog.open_add()?;
        catalog.submit(&ProductForm {
            title: title.to_string(),
            ..scenario_form()
        })?;
    }

    catalog.dispatch(Action::OpenDestroy { index: 0 })?;
    let removed = catalog.confirm_destroy()?;

    assert_eq!(removed.title(), "Second product in the list");
    assert_eq!(catalog.store().len(), 1);

    catalog.open_edit(0)?;
    let selected = catalog
        .edit_dialog()
        .session()
        .map(|session| session.selection().product().title().to_string());

    assert_eq!(selected.as_deref(), Some("First product in the list"));

    Ok(())
}

#[test]
fn extended_categories_are_accepted() -> TestResult {
    let mut rules = ProductRules::default();
    rules.categories.extend(["Furniture"]);

    let mut catalog = Catalog::new().with_rules(rules);

    catalog.open_add()?;
    let outcome = catalog.submit(&ProductForm {
        category: "Furniture".to_string(),
        ..scenario_form()
    })?;

    assert_eq!(
        outcome.committed().map(|product| product.category().as_str()),
        Some("Furniture")
    );

    Ok(())
}
