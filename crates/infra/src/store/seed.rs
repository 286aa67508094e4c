use rust_decimal::Decimal;

use webshop_catalog::ProductDraft;
use webshop_core::DomainResult;

const DEMO: &[(&str, &str, i64)] = &[
    ("Kayak", "A boat for one person", 27_500),
    ("Lifejacket", "Protective and fashionable", 4_895),
    ("Soccer Ball", "FIFA-approved size and weight", 1_950),
    ("Corner Flags", "Give your playing field a professional touch", 3_450),
    ("Stadium", "Flat-packed 35,000-seat stadium", 7_950_000),
    ("Thinking Cap", "Improve brain efficiency by 75%", 1_600),
    ("Unsteady Chair", "Secretly give your opponent a disadvantage", 2_995),
    ("Human Chess Board", "A fun game for the family", 7_500),
    ("Bling-Bling King", "Gold-plated, diamond-studded King", 120_000),
];

/// Small demonstration catalog spanning two pages.
pub fn demo_catalog() -> DomainResult<Vec<ProductDraft>> {
    DEMO.iter()
        .map(|(name, description, cents)| {
            ProductDraft::new(*name, Some(description.to_string()), None, Decimal::new(*cents, 2))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use webshop_catalog::PAGE_SIZE;

    use super::*;

    #[test]
    fn demo_catalog_is_valid_and_spans_pages() {
        let drafts = demo_catalog().unwrap();
        assert_eq!(drafts.len(), DEMO.len());
        assert!(drafts.len() > PAGE_SIZE);
    }
}
