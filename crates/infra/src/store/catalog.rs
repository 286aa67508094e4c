use std::collections::BTreeMap;
use std::sync::RwLock;

use webshop_catalog::{CatalogStore, Product, ProductDraft, ProductRepository};
use webshop_core::{DomainError, DomainResult, ExpectedVersion, ProductId, Versioned};

use super::{read, write};

#[derive(Debug, Default)]
struct CatalogState {
    records: BTreeMap<ProductId, Product>,
    /// Highest id ever assigned. Ids of deleted records are not reused.
    last_id: Option<ProductId>,
}

impl CatalogState {
    fn allocate_id(&mut self) -> ProductId {
        let id = self.last_id.map_or_else(ProductId::first, ProductId::next);
        self.last_id = Some(id);
        id
    }
}

/// In-memory catalog with versioned records.
///
/// Natural order is ascending id, which is also insertion order.
#[derive(Debug, Default)]
pub struct InMemoryCatalogStore {
    inner: RwLock<CatalogState>,
}

impl InMemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with `drafts`, assigned ids 1, 2, ...
    pub fn with_products(drafts: impl IntoIterator<Item = ProductDraft>) -> Self {
        let store = Self::new();
        {
            let mut state = write(&store.inner);
            for draft in drafts {
                let id = state.allocate_id();
                state.records.insert(id, Product::create(id, draft));
            }
        }
        store
    }

    pub fn len(&self) -> usize {
        read(&self.inner).records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn matches_text(product: &Product, needle: &str) -> bool {
    product.name().to_lowercase().contains(needle)
        || product
            .description()
            .is_some_and(|d| d.to_lowercase().contains(needle))
}

impl CatalogStore for InMemoryCatalogStore {
    fn get_all(&self) -> Vec<Product> {
        read(&self.inner).records.values().cloned().collect()
    }

    fn get_all_filtered(&self, text: &str) -> Vec<Product> {
        let needle = text.trim().to_lowercase();
        read(&self.inner)
            .records
            .values()
            .filter(|p| matches_text(p, &needle))
            .cloned()
            .collect()
    }

    fn get_by_id(&self, id: ProductId) -> Option<Product> {
        read(&self.inner).records.get(&id).cloned()
    }
}

impl ProductRepository for InMemoryCatalogStore {
    fn create(&self, draft: ProductDraft) -> DomainResult<Product> {
        let mut state = write(&self.inner);
        let id = state.allocate_id();
        let product = Product::create(id, draft);
        state.records.insert(id, product.clone());

        tracing::info!(product_id = %id, name = product.name(), "product created");
        Ok(product)
    }

    fn update(&self, id: ProductId, expected: ExpectedVersion, draft: ProductDraft) -> DomainResult<Product> {
        let mut state = write(&self.inner);
        let product = state.records.get_mut(&id).ok_or_else(DomainError::not_found)?;

        if let Err(e) = expected.check(product.version()) {
            tracing::warn!(product_id = %id, actual = product.version(), ?expected, "stale product update");
            return Err(e);
        }

        product.apply(draft);
        tracing::info!(product_id = %id, version = product.version(), "product updated");
        Ok(product.clone())
    }

    fn delete(&self, id: ProductId, expected: ExpectedVersion) -> DomainResult<()> {
        let mut state = write(&self.inner);
        let product = state.records.get(&id).ok_or_else(DomainError::not_found)?;

        if let Err(e) = expected.check(product.version()) {
            tracing::warn!(product_id = %id, actual = product.version(), ?expected, "stale product delete");
            return Err(e);
        }

        state.records.remove(&id);
        tracing::info!(product_id = %id, "product deleted");
        Ok(())
    }
}
