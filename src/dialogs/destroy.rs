//! Destroy confirmation dialog

use tracing::{error, info};

use crate::{
    dialogs::{DialogError, DialogKind, DialogState, Selection},
    products::Product,
    store::ProductStore,
};

/// Controller for the "remove this product?" confirmation.
#[derive(Debug, Clone, Default)]
pub struct DestroyDialog {
    state: DialogState<Selection>,
}

impl DestroyDialog {
    /// Create a closed dialog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask for confirmation before removing the product at `index`.
    ///
    /// # Errors
    ///
    /// - [`DialogError::AlreadyOpen`]: the dialog is already open.
    /// - [`DialogError::Store`]: `index` is not a valid position.
    pub fn open(&mut self, store: &ProductStore, index: usize) -> Result<&Selection, DialogError> {
        if self.state.is_open() {
            return Err(DialogError::AlreadyOpen(DialogKind::Destroy));
        }

        let selection = Selection::from_store(store, index)?;

        self.state.begin(DialogKind::Destroy, selection)
    }

    /// Whether the dialog is open.
    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// The product awaiting confirmation.
    pub fn selection(&self) -> Option<&Selection> {
        self.state.session()
    }

    /// Remove the selected product and close the dialog.
    ///
    /// # Errors
    ///
    /// - [`DialogError::NotOpen`]: the dialog is closed.
    /// - [`DialogError::StaleSelection`]: the selection no longer matches the store.
    /// - [`DialogError::Store`]: the removal itself failed.
    pub fn confirm(&mut self, store: &mut ProductStore) -> Result<Product, DialogError> {
        let selection = self
            .state
            .close()
            .ok_or(DialogError::NotOpen(DialogKind::Destroy))?;

        if let Err(err) = selection.check(store) {
            error!(%err, "destroy selection out of sync with the store");

            return Err(err);
        }

        let product = store.remove(selection.index())?;

        info!(index = selection.index(), id = %product.id(), "destroy dialog confirmed");

        Ok(product)
    }

    /// Close without removing anything.
    ///
    /// Returns `true` if the dialog was open.
    pub fn cancel(&mut self) -> bool {
        self.state.close().is_some()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{colors::ColorSet, store::tests::fields_titled};

    use super::*;

    fn two_products() -> ProductStore {
        let mut store = ProductStore::new();

        store.add(fields_titled("Second product title"), ColorSet::new());
        store.add(fields_titled("First product title"), ColorSet::new());

        store
    }

    #[test]
    fn confirm_removes_selected_product() -> TestResult {
        let mut store = two_products();
        let mut dialog = DestroyDialog::new();

        dialog.open(&store, 0)?;
        let removed = dialog.confirm(&mut store)?;

        assert_eq!(removed.title(), "First product title");
        assert_eq!(store.len(), 1);
        assert!(!dialog.is_open());

        Ok(())
    }

    #[test]
    fn cancel_leaves_store_untouched() -> TestResult {
        let mut store = two_products();
        let mut dialog = DestroyDialog::new();

        dialog.open(&store, 1)?;

        assert!(dialog.cancel());
        assert_eq!(store.len(), 2);
        assert_eq!(
            dialog.confirm(&mut store).err(),
            Some(DialogError::NotOpen(DialogKind::Destroy))
        );

        Ok(())
    }

    #[test]
    fn confirm_refuses_stale_selection() -> TestResult {
        let mut store = two_products();
        let mut dialog = DestroyDialog::new();

        dialog.open(&store, 1)?;
        store.remove(1)?;

        let result = dialog.confirm(&mut store);

        assert!(matches!(result, Err(DialogError::StaleSelection { index: 1, .. })));
        assert_eq!(store.len(), 1);

        Ok(())
    }
}
