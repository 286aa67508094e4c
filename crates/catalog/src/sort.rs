//! Sort stage.

use crate::product::ProductSummary;
use crate::query::SortOrder;

/// Order `items` in place.
///
/// `sort_by` is stable, so equal keys keep the store's natural order and the
/// same request always pages the same way.
pub fn apply(items: &mut [ProductSummary], order: SortOrder) {
    match order {
        SortOrder::NameAsc => items.sort_by(|a, b| a.name.cmp(&b.name)),
        SortOrder::NameDesc => items.sort_by(|a, b| b.name.cmp(&a.name)),
        SortOrder::PriceAsc => items.sort_by(|a, b| a.price.cmp(&b.price)),
        SortOrder::PriceDesc => items.sort_by(|a, b| b.price.cmp(&a.price)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::summary;

    fn ids(items: &[ProductSummary]) -> Vec<u64> {
        items.iter().map(|p| p.id.get()).collect()
    }

    fn items() -> Vec<ProductSummary> {
        vec![
            summary(1, "Banana", 300),
            summary(2, "apple", 100),
            summary(3, "Apple", 300),
            summary(4, "Cherry", 100),
        ]
    }

    #[test]
    fn name_orders_are_ordinal() {
        let mut v = items();
        apply(&mut v, SortOrder::NameAsc);
        assert_eq!(ids(&v), vec![3, 1, 4, 2]);

        apply(&mut v, SortOrder::NameDesc);
        assert_eq!(ids(&v), vec![2, 4, 1, 3]);
    }

    #[test]
    fn price_ties_keep_input_order() {
        let mut v = items();
        apply(&mut v, SortOrder::PriceAsc);
        assert_eq!(ids(&v), vec![2, 4, 1, 3]);

        let mut v = items();
        apply(&mut v, SortOrder::PriceDesc);
        assert_eq!(ids(&v), vec![1, 3, 2, 4]);
    }
}
