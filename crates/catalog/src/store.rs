//! Catalog store contracts.
//!
//! The catalog pipeline only ever reads through [`CatalogStore`]; the
//! administrative flows additionally write through [`ProductRepository`].

use std::sync::Arc;

use webshop_core::{DomainResult, ExpectedVersion, ProductId};

use crate::product::{Product, ProductDraft};

/// Read-only view of the product catalog.
pub trait CatalogStore: Send + Sync {
    /// Full, consistent snapshot in natural (insertion) order.
    fn get_all(&self) -> Vec<Product>;

    /// Records whose searchable fields (name, description) match `text`.
    fn get_all_filtered(&self, text: &str) -> Vec<Product>;

    fn get_by_id(&self, id: ProductId) -> Option<Product>;
}

/// Writable catalog used by product administration.
pub trait ProductRepository: CatalogStore {
    /// Insert a new record; the store assigns the id.
    fn create(&self, draft: ProductDraft) -> DomainResult<Product>;

    /// Replace the allowlisted fields of an existing record.
    ///
    /// Missing record → `NotFound`; version mismatch → `Conflict`.
    fn update(&self, id: ProductId, expected: ExpectedVersion, draft: ProductDraft) -> DomainResult<Product>;

    /// Remove a record. Same outcomes as [`ProductRepository::update`].
    fn delete(&self, id: ProductId, expected: ExpectedVersion) -> DomainResult<()>;

    fn exists(&self, id: ProductId) -> bool {
        self.get_by_id(id).is_some()
    }
}

impl<S> CatalogStore for Arc<S>
where
    S: CatalogStore + ?Sized,
{
    fn get_all(&self) -> Vec<Product> {
        (**self).get_all()
    }

    fn get_all_filtered(&self, text: &str) -> Vec<Product> {
        (**self).get_all_filtered(text)
    }

    fn get_by_id(&self, id: ProductId) -> Option<Product> {
        (**self).get_by_id(id)
    }
}

impl<S> ProductRepository for Arc<S>
where
    S: ProductRepository + ?Sized,
{
    fn create(&self, draft: ProductDraft) -> DomainResult<Product> {
        (**self).create(draft)
    }

    fn update(&self, id: ProductId, expected: ExpectedVersion, draft: ProductDraft) -> DomainResult<Product> {
        (**self).update(id, expected, draft)
    }

    fn delete(&self, id: ProductId, expected: ExpectedVersion) -> DomainResult<()> {
        (**self).delete(id, expected)
    }
}
