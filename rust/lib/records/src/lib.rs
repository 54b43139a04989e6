//! Generic record manager: the store / filter / form-session trio behind
//! every list page, parametrized by a record kind instead of duplicated
//! per page.
//!
//! A kind impls [`RecordModel`] (and [`HasLineItems`] for document kinds)
//! to declare its configuration; [`RecordManager`] provides the CRUD,
//! filtering and modal-session machinery.

pub mod filter;
pub mod items;
pub mod manager;
pub mod model;
pub mod session;
pub mod store;

#[cfg(test)]
pub(crate) mod testmodel;

pub use filter::FilterSet;
pub use items::{LineItem, TotalFormula, subtotal};
pub use manager::RecordManager;
pub use model::{HasLineItems, RecordModel};
pub use session::Session;
pub use store::RecordStore;
