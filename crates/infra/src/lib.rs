//! `sweetshop-infra` — store implementations.
//!
//! The spec treats durable persistence as an external collaborator; these
//! in-memory stores are the dev/test wiring behind the capability traits
//! defined next to their consumers (`CatalogStore`, `UserStore`).

pub mod in_memory;

pub use in_memory::{InMemoryCatalogStore, InMemoryUserStore};
