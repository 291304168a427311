//! Add product dialog

use tracing::{info, warn};

use crate::{
    colors::{Color, ColorSet, palette::Palette},
    dialogs::{DialogError, DialogKind, DialogState, SubmitOutcome, toggle_pending},
    store::ProductStore,
    validation::{FieldErrors, ProductForm, Validator},
};

/// State of an open add dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddSession {
    colors: ColorSet,
    errors: Option<FieldErrors>,
}

impl AddSession {
    /// Colors picked so far.
    pub fn colors(&self) -> &ColorSet {
        &self.colors
    }

    /// Errors from the last rejected submit.
    pub fn errors(&self) -> Option<&FieldErrors> {
        self.errors.as_ref()
    }
}

/// Controller for the "add a new product" dialog.
#[derive(Debug, Clone, Default)]
pub struct AddDialog {
    state: DialogState<AddSession>,
}

impl AddDialog {
    /// Create a closed dialog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the dialog with no colors picked.
    ///
    /// # Errors
    ///
    /// Returns [`DialogError::AlreadyOpen`] if the dialog is already open.
    pub fn open(&mut self) -> Result<&AddSession, DialogError> {
        self.state.begin(DialogKind::Add, AddSession::default())
    }

    /// Whether the dialog is open.
    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// The live session, if open.
    pub fn session(&self) -> Option<&AddSession> {
        self.state.session()
    }

    /// Toggle a palette color in the working set.
    ///
    /// Returns `true` if the color is selected afterwards.
    ///
    /// # Errors
    ///
    /// - [`DialogError::NotOpen`]: the dialog is closed.
    /// - [`DialogError::UnknownColor`]: the color is not in the palette.
    pub fn toggle_color(&mut self, palette: &Palette, color: Color) -> Result<bool, DialogError> {
        let session = self.state.session_mut(DialogKind::Add)?;

        toggle_pending(palette, &mut session.colors, color)
    }

    /// Validate `form` and, if it passes, add the product with the working
    /// colors and close the dialog. A rejected form leaves the dialog open.
    ///
    /// # Errors
    ///
    /// Returns [`DialogError::NotOpen`] if the dialog is closed.
    pub fn submit(
        &mut self,
        validator: &Validator,
        store: &mut ProductStore,
        form: &ProductForm,
    ) -> Result<SubmitOutcome, DialogError> {
        let session = self.state.session_mut(DialogKind::Add)?;

        let fields = match validator.validate(form) {
            Ok(fields) => fields,
            Err(errors) => {
                warn!(%errors, "add product rejected");

                session.errors = Some(errors.clone());

                return Ok(SubmitOutcome::Rejected(errors));
            }
        };

        let colors = std::mem::take(&mut session.colors);
        let product = store.add(fields, colors);

        self.state.close();

        info!(id = %product.id(), "add dialog committed");

        Ok(SubmitOutcome::Committed(product))
    }

    /// Close without committing, discarding the working colors.
    ///
    /// Returns `true` if the dialog was open.
    pub fn cancel(&mut self) -> bool {
        self.state.close().is_some()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::validation::{Field, tests::valid_form};

    use super::*;

    fn black() -> Result<Color, crate::colors::ColorError> {
        Color::parse("#000000")
    }

    #[test]
    fn open_starts_with_no_colors() -> TestResult {
        let mut dialog = AddDialog::new();

        let session = dialog.open()?;

        assert!(session.colors().is_empty());
        assert!(session.errors().is_none());

        Ok(())
    }

    #[test]
    fn submit_commits_working_colors_and_closes() -> TestResult {
        let palette = Palette::default();
        let validator = Validator::default();
        let mut store = ProductStore::new();
        let mut dialog = AddDialog::new();

        dialog.open()?;
        dialog.toggle_color(&palette, black()?)?;

        let outcome = dialog.submit(&validator, &mut store, &valid_form())?;

        let product = outcome.committed().ok_or("expected a commit")?;
        assert_eq!(product.colors(), &ColorSet::from_strs(&["#000"])?);
        assert_eq!(store.len(), 1);
        assert!(!dialog.is_open());

        Ok(())
    }

    #[test]
    fn rejected_submit_stays_open_and_keeps_colors() -> TestResult {
        let palette = Palette::default();
        let validator = Validator::default();
        let mut store = ProductStore::new();
        let mut dialog = AddDialog::new();

        dialog.open()?;
        dialog.toggle_color(&palette, black()?)?;

        let form = ProductForm {
            price: "10".to_string(),
            ..valid_form()
        };
        let outcome = dialog.submit(&validator, &mut store, &form)?;

        assert!(outcome.rejected().is_some_and(|errors| errors.contains(Field::Price)));
        assert!(store.is_empty());

        let session = dialog.session().ok_or("dialog should still be open")?;
        assert_eq!(session.colors().len(), 1);
        assert!(session.errors().is_some());

        Ok(())
    }

    #[test]
    fn reopening_after_cancel_starts_fresh() -> TestResult {
        let palette = Palette::default();
        let mut dialog = AddDialog::new();

        dialog.open()?;
        dialog.toggle_color(&palette, black()?)?;

        assert!(dialog.cancel());

        let session = dialog.open()?;
        assert!(session.colors().is_empty());

        Ok(())
    }

    #[test]
    fn submit_on_closed_dialog_fails() {
        let mut dialog = AddDialog::new();

        let result = dialog.submit(&Validator::default(), &mut ProductStore::new(), &valid_form());

        assert_eq!(result.err(), Some(DialogError::NotOpen(DialogKind::Add)));
    }
}
