use rust_decimal::Decimal;

use webshop_core::ProductId;

use crate::product::{Product, ProductDraft, ProductSummary};
use crate::store::CatalogStore;

pub fn product(id: u64, name: &str, cents: i64) -> Product {
    let draft = ProductDraft::new(name, None, None, Decimal::new(cents, 2)).unwrap();
    Product::create(ProductId::new(id).unwrap(), draft)
}

pub fn summary(id: u64, name: &str, cents: i64) -> ProductSummary {
    ProductSummary::from(&product(id, name, cents))
}

/// Immutable store over a fixed product list.
pub struct FixedStore(pub Vec<Product>);

impl FixedStore {
    pub fn named(names: &[&str]) -> Self {
        Self(
            names
                .iter()
                .enumerate()
                .map(|(i, n)| product(i as u64 + 1, n, 100))
                .collect(),
        )
    }
}

impl CatalogStore for FixedStore {
    fn get_all(&self) -> Vec<Product> {
        self.0.clone()
    }

    fn get_all_filtered(&self, text: &str) -> Vec<Product> {
        let needle = text.to_lowercase();
        self.0
            .iter()
            .filter(|p| p.name().to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    fn get_by_id(&self, id: ProductId) -> Option<Product> {
        self.0.iter().find(|p| p.id_typed() == id).cloned()
    }
}
