//! Vitrine
//!
//! Vitrine is the editing core of a product catalog: form validation, an ordered in-memory
//! product store and the add, edit and destroy dialogs that mutate it.

pub mod catalog;
pub mod categories;
pub mod colors;
pub mod dialogs;
pub mod fixtures;
pub mod listing;
pub mod prelude;
pub mod pricing;
pub mod products;
pub mod store;
pub mod uuids;
pub mod validation;
