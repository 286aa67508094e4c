//! Infrastructure layer: storage adapters behind the domain contracts.

pub mod store;

pub use store::{demo_catalog, InMemoryCatalogStore, InMemoryIdentityStore};
