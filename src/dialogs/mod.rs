//! Dialogs
//!
//! Controllers behind the add, edit and destroy dialogs. Each one is either
//! closed or holds a live session; a session only touches the store when it
//! is committed.

use std::fmt::{Display, Formatter, Result as FmtResult};

use thiserror::Error;
use tracing::debug;

use crate::{
    colors::{Color, ColorSet, palette::Palette},
    products::{Product, ProductUuid},
    store::{ProductStore, StoreError},
    validation::FieldErrors,
};

pub mod add;
pub mod destroy;
pub mod edit;

pub use add::AddDialog;
pub use destroy::DestroyDialog;
pub use edit::EditDialog;

/// Which dialog an error or outcome refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    /// Add product
    Add,

    /// Edit product
    Edit,

    /// Destroy confirmation
    Destroy,
}

impl Display for DialogKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(match self {
            Self::Add => "add",
            Self::Edit => "edit",
            Self::Destroy => "destroy",
        })
    }
}

/// Errors raised by dialog controllers.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DialogError {
    /// The dialog has no live session.
    #[error("the {0} dialog is not open")]
    NotOpen(DialogKind),

    /// A dialog is already open.
    #[error("the {0} dialog is already open")]
    AlreadyOpen(DialogKind),

    /// The color is neither in the palette nor already selected.
    #[error("color {0} is not in the palette")]
    UnknownColor(Color),

    /// The selected product is no longer at the selected position.
    #[error("selection at index {index} no longer points at product {expected}")]
    StaleSelection {
        /// Selected position
        index: usize,

        /// Id of the product that was selected
        expected: ProductUuid,
    },

    /// Store error
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Open or closed state of a dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogState<S> {
    /// No live session.
    Closed,

    /// A session is in progress.
    Editing(S),
}

impl<S> Default for DialogState<S> {
    fn default() -> Self {
        Self::Closed
    }
}

impl<S> DialogState<S> {
    /// Whether a session is in progress.
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Editing(_))
    }

    /// The live session, if any.
    pub fn session(&self) -> Option<&S> {
        match self {
            Self::Closed => None,
            Self::Editing(session) => Some(session),
        }
    }

    pub(crate) fn session_mut(&mut self, kind: DialogKind) -> Result<&mut S, DialogError> {
        match self {
            Self::Closed => Err(DialogError::NotOpen(kind)),
            Self::Editing(session) => Ok(session),
        }
    }

    pub(crate) fn begin(&mut self, kind: DialogKind, session: S) -> Result<&S, DialogError> {
        if self.is_open() {
            return Err(DialogError::AlreadyOpen(kind));
        }

        *self = Self::Editing(session);

        self.session().ok_or(DialogError::NotOpen(kind))
    }

    /// Close the dialog, handing back the session it held.
    pub(crate) fn close(&mut self) -> Option<S> {
        match std::mem::take(self) {
            Self::Closed => None,
            Self::Editing(session) => Some(session),
        }
    }
}

/// Result of submitting a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The form was valid and the store now holds this product.
    Committed(Product),

    /// The form was rejected; the dialog stays open.
    Rejected(FieldErrors),
}

impl SubmitOutcome {
    /// The committed product, if the submit went through.
    pub fn committed(&self) -> Option<&Product> {
        match self {
            Self::Committed(product) => Some(product),
            Self::Rejected(_) => None,
        }
    }

    /// The field errors, if the submit was rejected.
    pub fn rejected(&self) -> Option<&FieldErrors> {
        match self {
            Self::Committed(_) => None,
            Self::Rejected(errors) => Some(errors),
        }
    }
}

/// A stored product picked for editing or removal, and where it sits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    product: Product,
    index: usize,
}

impl Selection {
    /// Copy the product at `index` out of `store`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::IndexOutOfRange`] if `index` is not a valid position.
    pub fn from_store(store: &ProductStore, index: usize) -> Result<Self, StoreError> {
        let product = store.try_get(index)?.clone();

        Ok(Self { product, index })
    }

    /// The product as it was when selected.
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Position of the product in the store.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Confirm the store still holds the selected product at the selected
    /// position.
    pub(crate) fn check(&self, store: &ProductStore) -> Result<(), DialogError> {
        let current = store.get(self.index).map(Product::id);

        if current == Some(self.product.id()) {
            Ok(())
        } else {
            Err(DialogError::StaleSelection {
                index: self.index,
                expected: self.product.id(),
            })
        }
    }
}

/// Toggle a color in a dialog's pending set. Palette colors can always be
/// toggled; other colors only when already pending, so they can be removed.
///
/// Unlike the bare [`ColorSet::toggle`], this fails with
/// [`DialogError::UnknownColor`] for a color the picker could not have offered.
pub(crate) fn toggle_pending(
    palette: &Palette,
    pending: &mut ColorSet,
    color: Color,
) -> Result<bool, DialogError> {
    if !palette.contains(&color) && !pending.contains(&color) {
        return Err(DialogError::UnknownColor(color));
    }

    let selected = pending.toggle(color.clone());

    debug!(%color, selected, "color toggled");

    Ok(selected)
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn begin_refuses_a_second_session() -> TestResult {
        let mut state = DialogState::default();

        state.begin(DialogKind::Add, 1)?;

        assert_eq!(
            state.begin(DialogKind::Add, 2).err(),
            Some(DialogError::AlreadyOpen(DialogKind::Add))
        );
        assert_eq!(state.session(), Some(&1));

        Ok(())
    }

    #[test]
    fn close_returns_session_once() -> TestResult {
        let mut state = DialogState::default();

        state.begin(DialogKind::Edit, "session")?;

        assert_eq!(state.close(), Some("session"));
        assert_eq!(state.close(), None);
        assert!(!state.is_open());

        Ok(())
    }

    #[test]
    fn toggle_pending_rejects_unknown_colors() -> TestResult {
        let palette = Palette::default();
        let mut pending = ColorSet::new();

        let result = toggle_pending(&palette, &mut pending, Color::parse("#fff")?);

        assert!(matches!(result, Err(DialogError::UnknownColor(_))));
        assert!(pending.is_empty());

        Ok(())
    }

    #[test]
    fn toggle_pending_removes_off_palette_colors_already_selected() -> TestResult {
        let palette = Palette::default();
        let mut pending = ColorSet::from_strs(&["#fff"])?;

        let selected = toggle_pending(&palette, &mut pending, Color::parse("#fff")?)?;

        assert!(!selected);
        assert!(pending.is_empty());

        Ok(())
    }
}
