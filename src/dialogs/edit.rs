//! Edit product dialog
//!
//! The dialog keeps a single pending color set, seeded from the selected
//! product. Picking a palette color (append) and clicking a chip (toggle) both
//! write to it, in the order they happen, and a commit stores exactly that set.

use tracing::{debug, error, info, warn};

use crate::{
    colors::{Color, ColorSet, palette::Palette},
    dialogs::{DialogError, DialogKind, DialogState, Selection, SubmitOutcome, toggle_pending},
    store::ProductStore,
    validation::{FieldErrors, ProductForm, Validator},
};

/// State of an open edit dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    selection: Selection,
    colors: ColorSet,
    errors: Option<FieldErrors>,
}

impl EditSession {
    /// The product being edited.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Colors the product will have once committed.
    pub fn colors(&self) -> &ColorSet {
        &self.colors
    }

    /// Initial form values, taken from the selected product.
    pub fn form(&self) -> ProductForm {
        self.selection.product().to_form()
    }

    /// Errors from the last rejected submit.
    pub fn errors(&self) -> Option<&FieldErrors> {
        self.errors.as_ref()
    }
}

/// Controller for the "edit product" dialog.
#[derive(Debug, Clone, Default)]
pub struct EditDialog {
    state: DialogState<EditSession>,
}

impl EditDialog {
    /// Create a closed dialog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the product at `index` and open the dialog on it.
    ///
    /// # Errors
    ///
    /// - [`DialogError::AlreadyOpen`]: the dialog is already open.
    /// - [`DialogError::Store`]: `index` is not a valid position.
    pub fn open(&mut self, store: &ProductStore, index: usize) -> Result<&EditSession, DialogError> {
        if self.state.is_open() {
            return Err(DialogError::AlreadyOpen(DialogKind::Edit));
        }

        let selection = Selection::from_store(store, index)?;
        let colors = selection.product().colors().clone();

        self.state.begin(
            DialogKind::Edit,
            EditSession {
                selection,
                colors,
                errors: None,
            },
        )
    }

    /// Whether the dialog is open.
    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// The live session, if open.
    pub fn session(&self) -> Option<&EditSession> {
        self.state.session()
    }

    /// Toggle a color in the pending set.
    ///
    /// Returns `true` if the color is selected afterwards.
    ///
    /// # Errors
    ///
    /// - [`DialogError::NotOpen`]: the dialog is closed.
    /// - [`DialogError::UnknownColor`]: the color is neither in the palette
    ///   nor currently pending.
    pub fn toggle_color(&mut self, palette: &Palette, color: Color) -> Result<bool, DialogError> {
        let session = self.state.session_mut(DialogKind::Edit)?;

        toggle_pending(palette, &mut session.colors, color)
    }

    /// Add a palette color to the pending set; a no-op if already present.
    ///
    /// Returns `true` if the set changed.
    ///
    /// # Errors
    ///
    /// - [`DialogError::NotOpen`]: the dialog is closed.
    /// - [`DialogError::UnknownColor`]: the color is not in the palette.
    pub fn append_color(&mut self, palette: &Palette, color: Color) -> Result<bool, DialogError> {
        let session = self.state.session_mut(DialogKind::Edit)?;

        if !palette.contains(&color) {
            return Err(DialogError::UnknownColor(color));
        }

        let appended = session.colors.append(color.clone());

        debug!(%color, appended, "color appended");

        Ok(appended)
    }

    /// Validate `form` and, if it passes, replace the selected product with
    /// the submitted fields and the pending colors, then close the dialog.
    ///
    /// A rejected form leaves the dialog open. If the store no longer holds
    /// the selected product at the selected position the session is discarded
    /// and nothing is written.
    ///
    /// # Errors
    ///
    /// - [`DialogError::NotOpen`]: the dialog is closed.
    /// - [`DialogError::StaleSelection`]: the selection no longer matches the store.
    /// - [`DialogError::Store`]: the replace itself failed.
    pub fn submit(
        &mut self,
        validator: &Validator,
        store: &mut ProductStore,
        form: &ProductForm,
    ) -> Result<SubmitOutcome, DialogError> {
        let session = self.state.session_mut(DialogKind::Edit)?;

        let fields = match validator.validate(form) {
            Ok(fields) => fields,
            Err(errors) => {
                warn!(%errors, "edit product rejected");

                session.errors = Some(errors.clone());

                return Ok(SubmitOutcome::Rejected(errors));
            }
        };

        if let Err(err) = session.selection.check(store) {
            error!(%err, "edit selection out of sync with the store");

            self.state.close();

            return Err(err);
        }

        let index = session.selection.index();
        let colors = std::mem::take(&mut session.colors);

        let product = store.replace(index, fields, colors);

        self.state.close();

        let product = product?;

        info!(index, id = %product.id(), "edit dialog committed");

        Ok(SubmitOutcome::Committed(product))
    }

    /// Close without committing, discarding pending colors and the selection.
    ///
    /// Returns `true` if the dialog was open.
    pub fn cancel(&mut self) -> bool {
        self.state.close().is_some()
    }

    /// Discard the session if its selection sits at `index` or later, which
    /// is every selection a removal at `index` invalidates.
    ///
    /// Returns `true` if the session was discarded.
    pub fn invalidate_from(&mut self, index: usize) -> bool {
        let stale = self
            .state
            .session()
            .is_some_and(|session| session.selection.index() >= index);

        if stale {
            warn!(index, "edit selection invalidated by removal");

            self.state.close();
        }

        stale
    }
}
