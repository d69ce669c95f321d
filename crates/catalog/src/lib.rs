//! `sweetshop-catalog` — the item service.
//!
//! `Sweet` carries the stock-mutation rules; `CatalogStore` is the injected
//! persistence capability; `CatalogService` composes the two into the CRUD +
//! purchase/restock operations. Authorization is enforced by the caller (the
//! API layer) before these operations run.

pub mod service;
pub mod store;
pub mod sweet;

pub use service::CatalogService;
pub use store::CatalogStore;
pub use sweet::{NewSweet, Sweet, SweetPatch};
