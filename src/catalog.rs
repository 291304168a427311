//! Catalog
//!
//! The editing session as a whole: the product store, the rules and palette it
//! is edited against, and the three dialogs. At most one dialog is open at a
//! time, and every user action goes through [`Catalog::dispatch`] in the order
//! it happened.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::{
    colors::{Color, palette::Palette},
    dialogs::{
        AddDialog, DestroyDialog, DialogError, DialogKind, EditDialog, Selection, SubmitOutcome,
    },
    products::Product,
    store::{ProductStore, StoreError},
    validation::{ProductForm, ProductRules, Validator},
};

/// Errors raised while dispatching actions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// The action needs an open dialog.
    #[error("no dialog is open")]
    NoDialogOpen,

    /// The open dialog does not handle this action.
    #[error("the {kind} dialog does not support {action}")]
    Unsupported {
        /// Action that was dispatched
        action: ActionKind,

        /// Dialog that was open
        kind: DialogKind,
    },

    /// Dialog error
    #[error(transparent)]
    Dialog(#[from] DialogError),

    /// Store error
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// A single user action against the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    /// Open the add dialog.
    OpenAdd,

    /// Open the edit dialog on the product at `index`.
    OpenEdit {
        /// Store position
        index: usize,
    },

    /// Ask to remove the product at `index`.
    OpenDestroy {
        /// Store position
        index: usize,
    },

    /// Toggle a color chip in the open dialog.
    ToggleColor {
        /// Color clicked
        color: Color,
    },

    /// Append a palette color to the product being edited.
    AppendColor {
        /// Color picked
        color: Color,
    },

    /// Submit the open add or edit form.
    Submit {
        /// Values as typed
        form: ProductForm,
    },

    /// Close the open dialog without committing.
    Cancel,

    /// Confirm the pending removal.
    ConfirmDestroy,
}

impl Action {
    /// The kind of this action, without its payload.
    pub fn kind(&self) -> ActionKind {
        match self {
            Self::OpenAdd => ActionKind::OpenAdd,
            Self::OpenEdit { .. } => ActionKind::OpenEdit,
            Self::OpenDestroy { .. } => ActionKind::OpenDestroy,
            Self::ToggleColor { .. } => ActionKind::ToggleColor,
            Self::AppendColor { .. } => ActionKind::AppendColor,
            Self::Submit { .. } => ActionKind::Submit,
            Self::Cancel => ActionKind::Cancel,
            Self::ConfirmDestroy => ActionKind::ConfirmDestroy,
        }
    }
}

/// Payload-free name of an [`Action`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    /// [`Action::OpenAdd`]
    OpenAdd,

    /// [`Action::OpenEdit`]
    OpenEdit,

    /// [`Action::OpenDestroy`]
    OpenDestroy,

    /// [`Action::ToggleColor`]
    ToggleColor,

    /// [`Action::AppendColor`]
    AppendColor,

    /// [`Action::Submit`]
    Submit,

    /// [`Action::Cancel`]
    Cancel,

    /// [`Action::ConfirmDestroy`]
    ConfirmDestroy,
}

impl Display for ActionKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(match self {
            Self::OpenAdd => "open_add",
            Self::OpenEdit => "open_edit",
            Self::OpenDestroy => "open_destroy",
            Self::ToggleColor => "toggle_color",
            Self::AppendColor => "append_color",
            Self::Submit => "submit",
            Self::Cancel => "cancel",
            Self::ConfirmDestroy => "confirm_destroy",
        })
    }
}

/// What a dispatched action did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A dialog was opened.
    Opened(DialogKind),

    /// A color was toggled; `selected` is its membership afterwards.
    ColorToggled {
        /// Color clicked
        color: Color,

        /// Whether the color is pending afterwards
        selected: bool,
    },

    /// A color was appended; `appended` is false when it was already present.
    ColorAppended {
        /// Color picked
        color: Color,

        /// Whether the pending set changed
        appended: bool,
    },

    /// A form was submitted.
    Submitted(SubmitOutcome),

    /// A product was removed.
    Removed(Product),

    /// A dialog was closed without committing.
    Cancelled(DialogKind),
}

impl Display for Outcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Opened(kind) => write!(f, "opened {kind} dialog"),
            Self::ColorToggled { color, selected } => {
                write!(f, "{color} {}", if *selected { "selected" } else { "deselected" })
            }
            Self::ColorAppended { color, appended } => {
                write!(f, "{color} {}", if *appended { "appended" } else { "already present" })
            }
            Self::Submitted(SubmitOutcome::Committed(product)) => {
                write!(f, "committed {:?} as {}", product.title(), product.id())
            }
            Self::Submitted(SubmitOutcome::Rejected(errors)) => write!(f, "rejected: {errors}"),
            Self::Removed(product) => write!(f, "removed {:?}", product.title()),
            Self::Cancelled(kind) => write!(f, "cancelled {kind} dialog"),
        }
    }
}

/// The product store plus the dialogs that edit it.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    store: ProductStore,
    validator: Validator,
    palette: Palette,
    add: AddDialog,
    edit: EditDialog,
    destroy: DestroyDialog,
}

impl Catalog {
    /// Create an empty catalog with the default rules and palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog over an existing store.
    pub fn with_store(store: ProductStore) -> Self {
        Self {
            store,
            ..Self::default()
        }
    }

    /// Replace the validation rules.
    #[must_use]
    pub fn with_rules(mut self, rules: ProductRules) -> Self {
        self.validator = Validator::new(rules);
        self
    }

    /// Replace the palette.
    #[must_use]
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// The product store.
    pub fn store(&self) -> &ProductStore {
        &self.store
    }

    /// The validator submits run through.
    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    /// The selectable colors.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// The add dialog.
    pub fn add_dialog(&self) -> &AddDialog {
        &self.add
    }

    /// The edit dialog.
    pub fn edit_dialog(&self) -> &EditDialog {
        &self.edit
    }

    /// The destroy confirmation.
    pub fn destroy_dialog(&self) -> &DestroyDialog {
        &self.destroy
    }

    /// Which dialog is open, if any.
    pub fn active(&self) -> Option<DialogKind> {
        if self.add.is_open() {
            Some(DialogKind::Add)
        } else if self.edit.is_open() {
            Some(DialogKind::Edit)
        } else if self.destroy.is_open() {
            Some(DialogKind::Destroy)
        } else {
            None
        }
    }

    /// Apply one action.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::NoDialogOpen`]: the action needs an open dialog.
    /// - [`CatalogError::Unsupported`]: the open dialog does not take the action.
    /// - [`CatalogError::Dialog`]: the dialog refused the action.
    pub fn dispatch(&mut self, action: Action) -> Result<Outcome, CatalogError> {
        debug!(action = %action.kind(), "dispatch");

        match action {
            Action::OpenAdd => self.open_add(),
            Action::OpenEdit { index } => self.open_edit(index),
            Action::OpenDestroy { index } => self.open_destroy(index),
            Action::ToggleColor { color } => self.toggle_color(color),
            Action::AppendColor { color } => self.append_color(color),
            Action::Submit { form } => self.submit(&form).map(Outcome::Submitted),
            Action::Cancel => self.cancel(),
            Action::ConfirmDestroy => self.confirm_destroy().map(Outcome::Removed),
        }
    }

    /// Open the add dialog.
    ///
    /// # Errors
    ///
    /// Returns [`DialogError::AlreadyOpen`] if any dialog is open.
    pub fn open_add(&mut self) -> Result<Outcome, CatalogError> {
        self.ensure_closed()?;
        self.add.open()?;

        Ok(Outcome::Opened(DialogKind::Add))
    }

    /// Select the product at `index` and open the edit dialog on it.
    ///
    /// # Errors
    ///
    /// - [`DialogError::AlreadyOpen`]: a dialog is open.
    /// - [`DialogError::Store`]: `index` is not a valid position.
    pub fn open_edit(&mut self, index: usize) -> Result<Outcome, CatalogError> {
        self.ensure_closed()?;
        self.edit.open(&self.store, index)?;

        Ok(Outcome::Opened(DialogKind::Edit))
    }

    /// Ask for confirmation before removing the product at `index`.
    ///
    /// # Errors
    ///
    /// - [`DialogError::AlreadyOpen`]: a dialog is open.
    /// - [`DialogError::Store`]: `index` is not a valid position.
    pub fn open_destroy(&mut self, index: usize) -> Result<Outcome, CatalogError> {
        self.ensure_closed()?;
        self.destroy.open(&self.store, index)?;

        Ok(Outcome::Opened(DialogKind::Destroy))
    }

    /// Toggle a color in the open add or edit dialog.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::NoDialogOpen`]: no dialog is open.
    /// - [`CatalogError::Unsupported`]: the destroy dialog is open.
    /// - [`DialogError::UnknownColor`]: the color is neither in the catalog's
    ///   palette nor already pending. A fresh [`Catalog`] uses the default
    ///   palette, which has no white.
    pub fn toggle_color(&mut self, color: Color) -> Result<Outcome, CatalogError> {
        let selected = match self.require_active(ActionKind::ToggleColor)? {
            DialogKind::Add => self.add.toggle_color(&self.palette, color.clone())?,
            DialogKind::Edit => self.edit.toggle_color(&self.palette, color.clone())?,
            DialogKind::Destroy => return Err(unsupported(ActionKind::ToggleColor, DialogKind::Destroy)),
        };

        Ok(Outcome::ColorToggled { color, selected })
    }

    /// Append a palette color to the product being edited.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::NoDialogOpen`]: no dialog is open.
    /// - [`CatalogError::Unsupported`]: the open dialog is not the edit dialog.
    /// - [`DialogError::UnknownColor`]: the color is not in the palette.
    pub fn append_color(&mut self, color: Color) -> Result<Outcome, CatalogError> {
        let appended = match self.require_active(ActionKind::AppendColor)? {
            DialogKind::Edit => self.edit.append_color(&self.palette, color.clone())?,
            kind => return Err(unsupported(ActionKind::AppendColor, kind)),
        };

        Ok(Outcome::ColorAppended { color, appended })
    }

    /// Submit the open add or edit form.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::NoDialogOpen`]: no dialog is open.
    /// - [`CatalogError::Unsupported`]: the destroy dialog is open.
    /// - [`DialogError::StaleSelection`]: the edit selection no longer matches the store.
    pub fn submit(&mut self, form: &ProductForm) -> Result<SubmitOutcome, CatalogError> {
        let outcome = match self.require_active(ActionKind::Submit)? {
            DialogKind::Add => self.add.submit(&self.validator, &mut self.store, form)?,
            DialogKind::Edit => self.edit.submit(&self.validator, &mut self.store, form)?,
            DialogKind::Destroy => return Err(unsupported(ActionKind::Submit, DialogKind::Destroy)),
        };

        Ok(outcome)
    }

    /// Close the open dialog without committing.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NoDialogOpen`] if no dialog is open.
    pub fn cancel(&mut self) -> Result<Outcome, CatalogError> {
        let kind = self.require_active(ActionKind::Cancel)?;

        match kind {
            DialogKind::Add => self.add.cancel(),
            DialogKind::Edit => self.edit.cancel(),
            DialogKind::Destroy => self.destroy.cancel(),
        };

        info!(dialog = %kind, "dialog cancelled");

        Ok(Outcome::Cancelled(kind))
    }

    /// Remove the product awaiting confirmation.
    ///
    /// Any edit selection at or after the removed position is discarded.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::NoDialogOpen`]: no dialog is open.
    /// - [`CatalogError::Unsupported`]: the open dialog is not the destroy dialog.
    /// - [`DialogError::StaleSelection`]: the selection no longer matches the store.
    pub fn confirm_destroy(&mut self) -> Result<Product, CatalogError> {
        match self.require_active(ActionKind::ConfirmDestroy)? {
            DialogKind::Destroy => {}
            kind => return Err(unsupported(ActionKind::ConfirmDestroy, kind)),
        }

        let index = self
            .destroy
            .selection()
            .map(Selection::index)
            .ok_or(DialogError::NotOpen(DialogKind::Destroy))?;

        let product = self.destroy.confirm(&mut self.store)?;

        // No-op while only one dialog can be open; a removal must never leave
        // a later edit selection live.
        self.edit.invalidate_from(index);

        Ok(product)
    }

    fn ensure_closed(&self) -> Result<(), DialogError> {
        match self.active() {
            Some(kind) => Err(DialogError::AlreadyOpen(kind)),
            None => Ok(()),
        }
    }

    fn require_active(&self, action: ActionKind) -> Result<DialogKind, CatalogError> {
        self.active().ok_or_else(|| {
            debug!(%action, "no dialog open");

            CatalogError::NoDialogOpen
        })
    }
}

fn unsupported(action: ActionKind, kind: DialogKind) -> CatalogError {
    CatalogError::Unsupported { action, kind }
}
