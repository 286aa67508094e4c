//! Filter stage: exact id match and/or case-sensitive name substring.

use crate::product::ProductSummary;
use crate::query::CatalogQuery;

/// The id filter that actually applies. `Some(0)` means "All" and is ignored.
pub fn effective_id(id: Option<u64>) -> Option<u64> {
    id.filter(|&id| id != 0)
}

/// Keep the candidates that satisfy every active filter, in input order.
///
/// An empty name filter is still a filter, but every name contains `""`.
pub fn apply(candidates: Vec<ProductSummary>, query: &CatalogQuery) -> Vec<ProductSummary> {
    let id = effective_id(query.id);
    let name = query.name.as_deref();

    candidates
        .into_iter()
        .filter(|p| id.is_none_or(|id| p.id.get() == id))
        .filter(|p| name.is_none_or(|needle| p.name.contains(needle)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::summary;

    fn names(items: &[ProductSummary]) -> Vec<&str> {
        items.iter().map(|p| p.name.as_str()).collect()
    }

    fn candidates() -> Vec<ProductSummary> {
        vec![
            summary(1, "Red Mug", 500),
            summary(2, "Blue Mug", 600),
            summary(3, "Red Plate", 900),
        ]
    }

    #[test]
    fn zero_id_is_no_filter() {
        let out = apply(candidates(), &CatalogQuery::new().with_id(0));
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn id_filter_keeps_exact_match_only() {
        let out = apply(candidates(), &CatalogQuery::new().with_id(2));
        assert_eq!(names(&out), vec!["Blue Mug"]);

        let none = apply(candidates(), &CatalogQuery::new().with_id(99));
        assert!(none.is_empty());
    }

    #[test]
    fn name_filter_is_case_sensitive_substring() {
        let out = apply(candidates(), &CatalogQuery::new().with_name("Red"));
        assert_eq!(names(&out), vec!["Red Mug", "Red Plate"]);

        let lower = apply(candidates(), &CatalogQuery::new().with_name("red"));
        assert!(lower.is_empty());
    }

    #[test]
    fn empty_name_matches_everything() {
        let out = apply(candidates(), &CatalogQuery::new().with_name(""));
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn filters_compose_by_conjunction() {
        let out = apply(candidates(), &CatalogQuery::new().with_id(3).with_name("Mug"));
        assert!(out.is_empty());

        let out = apply(candidates(), &CatalogQuery::new().with_id(3).with_name("Plate"));
        assert_eq!(names(&out), vec!["Red Plate"]);
    }
}
