//! Catalog domain module.
//!
//! Product records and the catalog query pipeline, implemented purely as
//! deterministic domain logic (no IO, no HTTP, no storage).

pub mod filter;
pub mod page;
pub mod pipeline;
pub mod product;
pub mod query;
pub mod search;
pub mod sort;
pub mod store;
pub mod view;

#[cfg(test)]
mod test_support;

pub use page::{Page, PageMetadata, PAGE_SIZE};
pub use product::{Price, Product, ProductDetail, ProductDraft, ProductSummary};
pub use query::{CatalogQuery, SortOrder};
pub use search::{search, SearchOutcome, SearchResponse};
pub use store::{CatalogStore, ProductRepository};
pub use view::{CatalogResponse, FilterOption, FilterState, SortState};
